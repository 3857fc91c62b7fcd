use std::rc::Rc;

use gpui::{prelude::*, *};
use gpui_component::{ActiveTheme as _, h_flex, v_flex};
use tracing::trace;

use crate::hsba::{ColorSpace as _, Hsba, format_hexa};
use crate::slider::{GradientSliderEvent, GradientSliderState};
use crate::track::ChannelTrack;

/// Invoked with the composed color on every change, including the seeding
/// update performed by [`ColorPickerPanel::set_color`].
pub type Selection = Rc<dyn Fn(Hsla, &mut App)>;

const SWATCH_SIZE: f32 = 72.0;

fn saturation_track(base: Hsba) -> ChannelTrack<Hsba> {
    ChannelTrack::new(base, Hsba::SATURATION).expect("saturation is a declared channel")
}

fn brightness_track(base: Hsba) -> ChannelTrack<Hsba> {
    ChannelTrack::new(base, Hsba::BRIGHTNESS).expect("brightness is a declared channel")
}

/// Three gradient sliders (hue, saturation, brightness) and a preview swatch
/// over a single HSBA state record.
///
/// The hue track is the fixed spectrum; the saturation and brightness tracks
/// are re-seeded with the pure hue on every hue move, so their far endpoints
/// always show where the slider would take the current color. Alpha rides
/// along in the state but has no slider of its own.
pub struct ColorPickerPanel {
    hsba: Hsba,
    selection: Option<Selection>,
    slider_h: Entity<GradientSliderState>,
    slider_s: Entity<GradientSliderState>,
    slider_b: Entity<GradientSliderState>,
    _subscriptions: Vec<Subscription>,
}

impl ColorPickerPanel {
    pub fn new(id_prefix: &str, initial: impl Into<Hsla>, cx: &mut App) -> Entity<Self> {
        let hsba = Hsba::from_hsla(initial.into());
        let pure = hsba.pure_hue();

        let slider_h =
            cx.new(|cx| GradientSliderState::hue(format!("{id_prefix}-hue"), hsba.h, cx));
        let slider_s = cx.new(|cx| {
            GradientSliderState::channel(
                format!("{id_prefix}-saturation"),
                hsba.s,
                saturation_track(pure),
                cx,
            )
        });
        let slider_b = cx.new(|cx| {
            GradientSliderState::channel(
                format!("{id_prefix}-brightness"),
                hsba.b,
                brightness_track(pure),
                cx,
            )
        });

        cx.new(|cx| {
            let mut _subscriptions = vec![];

            _subscriptions.push(cx.subscribe(
                &slider_h,
                |this: &mut Self, _, event, cx| match event {
                    GradientSliderEvent::Change(value) => this.apply_hue(*value, cx),
                    GradientSliderEvent::Release(_) => {}
                },
            ));

            _subscriptions.push(cx.subscribe(
                &slider_s,
                |this: &mut Self, _, event, cx| match event {
                    GradientSliderEvent::Change(value) => this.apply_saturation(*value, cx),
                    GradientSliderEvent::Release(_) => {}
                },
            ));

            _subscriptions.push(cx.subscribe(
                &slider_b,
                |this: &mut Self, _, event, cx| match event {
                    GradientSliderEvent::Change(value) => this.apply_brightness(*value, cx),
                    GradientSliderEvent::Release(_) => {}
                },
            ));

            Self {
                hsba,
                selection: None,
                slider_h,
                slider_s,
                slider_b,
                _subscriptions,
            }
        })
    }

    /// Seed the picker from `color` and store the live-change callback.
    ///
    /// The callback fires once with the seeded color, then again on every
    /// slider move until the panel is dropped.
    pub fn set_color(
        &mut self,
        color: impl Into<Hsla>,
        selection: Option<Selection>,
        cx: &mut Context<Self>,
    ) {
        self.selection = selection;
        self.hsba = Hsba::from_hsla(color.into());

        let hsba = self.hsba;
        self.slider_h
            .update(cx, |slider, cx| slider.set_value(hsba.h, cx));
        self.slider_s
            .update(cx, |slider, cx| slider.set_value(hsba.s, cx));
        self.slider_b
            .update(cx, |slider, cx| slider.set_value(hsba.b, cx));

        self.reseed_channel_tracks(cx);
        self.notify_selection(cx);
    }

    /// The composed color of the current state, derived on demand.
    pub fn color(&self) -> Hsla {
        self.hsba.to_hsla()
    }

    pub fn hsba(&self) -> Hsba {
        self.hsba
    }

    fn apply_hue(&mut self, value: f32, cx: &mut Context<Self>) {
        self.hsba.set_value(Hsba::HUE, value);
        self.reseed_channel_tracks(cx);
        self.notify_selection(cx);
    }

    fn apply_saturation(&mut self, value: f32, cx: &mut Context<Self>) {
        self.hsba.set_value(Hsba::SATURATION, value);
        self.notify_selection(cx);
    }

    fn apply_brightness(&mut self, value: f32, cx: &mut Context<Self>) {
        self.hsba.set_value(Hsba::BRIGHTNESS, value);
        self.notify_selection(cx);
    }

    /// Point the saturation and brightness tracks at the current pure hue so
    /// their gradients end where the hue slider now sits.
    fn reseed_channel_tracks(&mut self, cx: &mut Context<Self>) {
        let pure = self.hsba.pure_hue();
        self.slider_s.update(cx, |slider, cx| {
            slider.set_delegate(Box::new(saturation_track(pure)), cx)
        });
        self.slider_b.update(cx, |slider, cx| {
            slider.set_delegate(Box::new(brightness_track(pure)), cx)
        });
    }

    fn notify_selection(&mut self, cx: &mut Context<Self>) {
        let color = self.color();
        trace!(hex = %format_hexa(color), "picked color changed");
        if let Some(selection) = &self.selection {
            (selection)(color, cx);
        }
        cx.notify();
    }
}

fn labeled_slider(
    label: &'static str,
    slider: Entity<GradientSliderState>,
    mono_font_family: SharedString,
) -> impl IntoElement {
    h_flex()
        .w_full()
        .items_center()
        .gap_2()
        .child(
            div()
                .w(px(14.0))
                .text_size(px(10.0))
                .font_family(mono_font_family)
                .child(label),
        )
        .child(slider)
}

impl Render for ColorPickerPanel {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let color = self.color();
        let mono_font_family = cx.theme().mono_font_family.clone();

        v_flex()
            .w_full()
            .gap_3()
            .child(
                h_flex().w_full().justify_center().child(
                    div()
                        .size(px(SWATCH_SIZE))
                        .rounded_full()
                        .bg(color)
                        .border_1()
                        .border_color(cx.theme().border),
                ),
            )
            .child(
                v_flex()
                    .w_full()
                    .gap_1()
                    .child(labeled_slider(
                        "H",
                        self.slider_h.clone(),
                        mono_font_family.clone(),
                    ))
                    .child(labeled_slider(
                        "S",
                        self.slider_s.clone(),
                        mono_font_family.clone(),
                    ))
                    .child(labeled_slider("B", self.slider_b.clone(), mono_font_family)),
            )
    }
}
