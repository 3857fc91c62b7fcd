use anyhow::Result;
use gpui::{prelude::*, *};
use gpui_component::{
    ActiveTheme as _, Root, h_flex, v_flex,
    button::{Button, ButtonVariants as _},
};
use gpui_color_picker::{WindowColorPickerExt as _, format_hexa, parse_hex};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

pub struct Example {
    starting_color: Hsla,
    picked: Option<Hsla>,
}

impl Example {
    pub fn new(starting_color: Hsla, _: &mut Window, _: &mut Context<Self>) -> Self {
        Self {
            starting_color,
            picked: None,
        }
    }

    fn view(starting_color: Hsla, window: &mut Window, cx: &mut App) -> Entity<Self> {
        cx.new(|cx| Self::new(starting_color, window, cx))
    }

    fn open_picker(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let initial = self.picked.unwrap_or(self.starting_color);
        let example = cx.entity().clone();

        window.open_color_picker(initial, cx, move |color, _, cx| {
            example.update(cx, |this, cx| {
                this.picked = Some(color);
                cx.notify();
            });
        });
    }
}

impl Render for Example {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let label = match self.picked {
            Some(color) => format_hexa(color),
            None => "No color selected".into(),
        };

        v_flex()
            .m_4()
            .gap_4()
            .child(
                Button::new("open-picker")
                    .primary()
                    .label("Pick a color…")
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.open_picker(window, cx);
                    })),
            )
            .child(
                h_flex()
                    .gap_2()
                    .items_center()
                    .child(
                        div()
                            .size_12()
                            .rounded_md()
                            .border_1()
                            .border_color(cx.theme().border)
                            .when_some(self.picked, |this, color| this.bg(color)),
                    )
                    .child(label),
            )
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("gpui_color_picker=debug".parse().unwrap()),
        )
        .init();

    // `cargo run --example picker_alert -- "#336699"` starts from that color.
    let starting_color = match std::env::args().nth(1) {
        Some(arg) => parse_hex(&arg).map_err(|message| anyhow::anyhow!("{message}: {arg:?}"))?,
        None => gpui::black(),
    };

    let app = Application::new();

    app.run(move |cx| {
        gpui_component::init(cx);
        cx.activate(true);

        let bounds = Bounds::centered(None, size(px(640.0), px(480.0)), cx);
        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            },
            move |window, cx| {
                let view = Example::view(starting_color, window, cx);
                cx.new(|cx| Root::new(view, window, cx))
            },
        )
        .expect("failed to open window");
    });

    Ok(())
}
