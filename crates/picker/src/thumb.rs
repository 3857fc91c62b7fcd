use gpui::{prelude::*, *};

/// The slider handle: a color-filled circle with a dark outer ring and a
/// light inner ring so it stays visible on any track color.
#[derive(IntoElement)]
pub struct SliderThumb {
    size: Pixels,
    color: Option<Hsla>,
}

impl SliderThumb {
    pub fn new(size: impl Into<Pixels>) -> Self {
        Self {
            size: size.into(),
            color: None,
        }
    }

    /// Tint the thumb with the color currently under it.
    pub fn color(mut self, color: impl Into<Hsla>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl RenderOnce for SliderThumb {
    fn render(self, _: &mut Window, _cx: &mut App) -> impl IntoElement {
        let inner_size = self.size - px(2.0);

        div()
            .size(self.size)
            .rounded_full()
            .border_1()
            .border_color(black())
            .when_some(self.color, |this, color| this.bg(color))
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .size(inner_size)
                    .rounded_full()
                    .border_1()
                    .border_color(white())
                    .when_some(self.color, |this, color| this.bg(color)),
            )
    }
}
