use std::rc::Rc;

use gpui::{prelude::*, *};
use gpui_component::{WindowExt as _, dialog::DialogButtonProps};
use tracing::debug;

use crate::hsba::format_hexa;
use crate::picker::{ColorPickerPanel, Selection};

/// Dialog title mirroring the live-picked color: the hex string, tinted with
/// the color itself. Driven by the panel's selection callback.
pub struct PickedColorTitle {
    color: Hsla,
}

impl PickedColorTitle {
    fn new(color: Hsla) -> Self {
        Self { color }
    }
}

impl Render for PickedColorTitle {
    fn render(&mut self, _: &mut Window, _: &mut Context<Self>) -> impl IntoElement {
        div()
            .text_color(self.color)
            .child(format_hexa(self.color))
    }
}

/// Extension methods for opening a color picker inside a modal dialog.
pub trait WindowColorPickerExt {
    /// Open a confirm dialog around a [`ColorPickerPanel`] seeded with
    /// `initial`.
    ///
    /// The dialog title mirrors the live color as the user drags. "Select"
    /// (always enabled) forwards the panel's current color to `on_select`
    /// exactly once; cancelling or dismissing invokes nothing.
    fn open_color_picker(
        &mut self,
        initial: Hsla,
        cx: &mut App,
        on_select: impl Fn(Hsla, &mut Window, &mut App) + 'static,
    );
}

impl WindowColorPickerExt for Window {
    fn open_color_picker(
        &mut self,
        initial: Hsla,
        cx: &mut App,
        on_select: impl Fn(Hsla, &mut Window, &mut App) + 'static,
    ) {
        let panel = ColorPickerPanel::new("color-picker", initial, cx);
        let title = cx.new(|_| PickedColorTitle::new(initial));

        // The picker-level callback is the live-preview channel: it keeps the
        // title in step with every intermediate change. The caller's callback
        // only ever hears the confirmed color.
        let selection: Selection = Rc::new({
            let title = title.clone();
            move |color, cx: &mut App| {
                title.update(cx, |title, cx| {
                    title.color = color;
                    cx.notify();
                });
            }
        });
        panel.update(cx, |panel, cx| {
            panel.set_color(initial, Some(selection), cx)
        });

        let on_select = Rc::new(on_select);
        self.open_dialog(cx, move |dialog, _, _| {
            let panel = panel.clone();
            let on_select = on_select.clone();

            dialog
                .w(px(360.0))
                .title(title.clone())
                .child(panel.clone())
                .confirm()
                .button_props(
                    DialogButtonProps::default()
                        .ok_text("Select")
                        .cancel_text("Cancel"),
                )
                .on_ok(move |_, window, cx| {
                    let color = panel.read(cx).color();
                    debug!(hex = %format_hexa(color), "color selected");
                    on_select(color, window, cx);
                    true
                })
        });
    }
}
