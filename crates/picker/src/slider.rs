use gpui::{prelude::*, *};
use gpui_component::{ActiveTheme as _, Sizable, Size};

use crate::hsba::ColorSpace;
use crate::thumb::SliderThumb;
use crate::track::{ChannelTrack, HueTrack, TrackDelegate};

pub mod sizing {
    pub const TRACK_THICKNESS_XSMALL: f32 = 4.0;
    pub const TRACK_THICKNESS_SMALL: f32 = 14.0;
    pub const TRACK_THICKNESS_MEDIUM: f32 = 24.0;
    pub const TRACK_THICKNESS_LARGE: f32 = 34.0;

    pub const THUMB_SIZE_XSMALL: f32 = 10.0;
    pub const THUMB_SIZE_SMALL: f32 = 18.0;
    pub const THUMB_SIZE_MEDIUM: f32 = 28.0;
    pub const THUMB_SIZE_LARGE: f32 = 38.0;
}

#[derive(Clone, Debug, PartialEq)]
pub enum GradientSliderEvent {
    /// The value moved, either by pointer or keyboard.
    Change(f32),
    /// The interaction finished on the given value.
    Release(f32),
}

#[derive(Clone)]
struct DragThumb(EntityId);

impl Render for DragThumb {
    fn render(&mut self, _: &mut Window, _: &mut Context<Self>) -> impl IntoElement {
        Empty
    }
}

fn normalized_value_percent(value: f32, start: f32, end: f32) -> f32 {
    let span = end - start;
    if span.abs() <= f32::EPSILON {
        return 0.0;
    }

    ((value - start) / span).clamp(0.0, 1.0)
}

/// Snap `value` onto the step grid, anchored at the range start.
fn snap_to_step(value: f32, range_start: f32, step: Option<f32>) -> f32 {
    let Some(step) = step else {
        return value;
    };
    let step = step.abs();
    if step <= f32::EPSILON {
        return value;
    }
    range_start + ((value - range_start) / step).round() * step
}

/// A horizontal slider whose track is painted by a [`TrackDelegate`] and
/// whose thumb carries the color currently under it.
pub struct GradientSliderState {
    id: SharedString,
    value: f32,
    range: std::ops::Range<f32>,
    step: Option<f32>,
    size: Size,
    bounds: Bounds<Pixels>,
    delegate: Box<dyn TrackDelegate>,
    focus_handle: FocusHandle,
}

impl GradientSliderState {
    pub fn new(
        id: impl Into<SharedString>,
        value: f32,
        delegate: Box<dyn TrackDelegate>,
        cx: &mut App,
    ) -> Self {
        Self {
            id: id.into(),
            value,
            range: 0.0..1.0,
            step: None,
            size: Size::Medium,
            bounds: Bounds::default(),
            delegate,
            focus_handle: cx.focus_handle(),
        }
    }

    /// A slider over the full hue spectrum.
    pub fn hue(id: impl Into<SharedString>, value: f32, cx: &mut App) -> Self {
        Self::new(id, value, Box::new(HueTrack), cx)
    }

    /// A slider over one channel of a base color.
    pub fn channel<S: ColorSpace>(
        id: impl Into<SharedString>,
        value: f32,
        track: ChannelTrack<S>,
        cx: &mut App,
    ) -> Self {
        Self::new(id, value, Box::new(track), cx)
    }

    /// Set the minimum value of the slider, default: 0.0
    pub fn min(mut self, min: f32) -> Self {
        self.range.start = min;
        self
    }

    /// Set the maximum value of the slider, default: 1.0
    pub fn max(mut self, max: f32) -> Self {
        self.range.end = max;
        self
    }

    /// Snap values onto a step grid, default: continuous.
    pub fn step(mut self, step: f32) -> Self {
        self.step = Some(step);
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set_value(&mut self, value: f32, cx: &mut Context<Self>) {
        let clamped = self.clamp_to_range(value);
        if self.value != clamped {
            self.value = clamped;
            cx.notify();
        }
    }

    /// Replace the track delegate, e.g. to re-seed a channel track after the
    /// base color changed.
    pub fn set_delegate(&mut self, delegate: Box<dyn TrackDelegate>, cx: &mut Context<Self>) {
        self.delegate = delegate;
        cx.notify();
    }

    fn clamp_to_range(&self, value: f32) -> f32 {
        value.clamp(
            self.range.start.min(self.range.end),
            self.range.end.max(self.range.start),
        )
    }

    fn track_thickness(&self) -> f32 {
        match self.size {
            Size::XSmall => sizing::TRACK_THICKNESS_XSMALL,
            Size::Small => sizing::TRACK_THICKNESS_SMALL,
            Size::Medium => sizing::TRACK_THICKNESS_MEDIUM,
            Size::Large => sizing::TRACK_THICKNESS_LARGE,
            Size::Size(base) => f32::from(base),
        }
    }

    fn thumb_size(&self) -> f32 {
        match self.size {
            Size::XSmall => sizing::THUMB_SIZE_XSMALL,
            Size::Small => sizing::THUMB_SIZE_SMALL,
            Size::Medium => sizing::THUMB_SIZE_MEDIUM,
            Size::Large => sizing::THUMB_SIZE_LARGE,
            Size::Size(base) => f32::from(base) + 4.0,
        }
    }

    fn update_from_mouse(&mut self, position: Point<Pixels>, cx: &mut Context<Self>) {
        let width = self.bounds.size.width;
        if width <= px(0.0) {
            return;
        }

        let local = position.x - self.bounds.origin.x;
        let percentage = (local / width).clamp(0.0, 1.0);

        let value = self.range.start + (self.range.end - self.range.start) * percentage;
        let value = snap_to_step(value, self.range.start, self.step);

        self.value = self.clamp_to_range(value);
        cx.emit(GradientSliderEvent::Change(self.value));
        cx.notify();
    }

    fn value_from_key(&self, event: &KeyDownEvent) -> Option<f32> {
        let base_step = self
            .step
            .unwrap_or((self.range.end - self.range.start).abs() / 100.0);
        let multiplier = if event.keystroke.modifiers.shift {
            10.0
        } else if event.keystroke.modifiers.alt {
            0.1
        } else {
            1.0
        };
        let step = base_step * multiplier;

        match event.keystroke.key.as_str() {
            "left" => Some(self.value - step),
            "right" => Some(self.value + step),
            "home" => Some(self.range.start),
            "end" => Some(self.range.end),
            _ => None,
        }
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _: &mut Window, cx: &mut Context<Self>) {
        let Some(value) = self.value_from_key(event) else {
            return;
        };

        let value = self.clamp_to_range(value);
        if value != self.value {
            self.value = value;
            cx.emit(GradientSliderEvent::Change(value));
            cx.emit(GradientSliderEvent::Release(value));
            cx.notify();
        }
        cx.stop_propagation();
    }

    fn on_mouse_down(&mut self, event: &MouseDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        window.focus(&self.focus_handle);
        self.update_from_mouse(event.position, cx);
    }

    fn on_mouse_up(&mut self, _: &MouseUpEvent, _: &mut Window, cx: &mut Context<Self>) {
        cx.emit(GradientSliderEvent::Release(self.value));
    }
}

impl Sizable for GradientSliderState {
    fn with_size(mut self, size: impl Into<Size>) -> Self {
        self.size = size.into();
        self
    }
}

impl EventEmitter<GradientSliderEvent> for GradientSliderState {}

impl Render for GradientSliderState {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let entity_id = cx.entity_id();

        let track_thickness = self.track_thickness();
        let thumb_size = self.thumb_size();
        let hitsize = track_thickness.max(thumb_size);
        let pct = normalized_value_percent(self.value, self.range.start, self.range.end);
        let thumb_color = self.delegate.color_at(pct);

        let track = self.delegate.paint_track(
            div()
                .absolute()
                .h(px(track_thickness))
                .top(px((hitsize - track_thickness) / 2.0))
                .left_0()
                .right_0()
                .rounded(px(track_thickness / 2.0))
                .overflow_hidden()
                .border_1()
                .border_color(cx.theme().border),
        );

        // The thumb travels edge to edge but stays inside the track bounds.
        let thumb = div()
            .absolute()
            .top(px((hitsize - thumb_size) / 2.0))
            .left(relative(pct))
            .ml(-px(thumb_size * pct))
            .child(SliderThumb::new(px(thumb_size)).color(thumb_color));

        div()
            .id(self.id.clone())
            .h(px(hitsize))
            .w_full()
            .relative()
            .flex_shrink_0()
            .child(track)
            .child(thumb)
            .child({
                let state = cx.entity().clone();
                canvas(
                    move |bounds, _, cx| state.update(cx, |state, _| state.bounds = bounds),
                    |_, _, _, _| {},
                )
                .absolute()
                .size_full()
            })
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .on_mouse_down(MouseButton::Left, cx.listener(Self::on_mouse_down))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::on_mouse_up))
            .on_drag(DragThumb(entity_id), |drag, _, _, cx| {
                cx.stop_propagation();
                cx.new(|_| drag.clone())
            })
            .on_drag_move(cx.listener(
                move |state, event: &DragMoveEvent<DragThumb>, _, cx| {
                    if event.drag(cx).0 != entity_id {
                        return;
                    }
                    state.update_from_mouse(event.event.position, cx);
                },
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::{normalized_value_percent, snap_to_step};

    fn approx_eq(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-6, "expected {a} ~= {b}");
    }

    #[test]
    fn normalized_value_percent_handles_regular_and_degenerate_ranges() {
        approx_eq(normalized_value_percent(0.25, 0.0, 1.0), 0.25);
        approx_eq(normalized_value_percent(-0.1, 0.0, 1.0), 0.0);
        approx_eq(normalized_value_percent(1.5, 0.0, 1.0), 1.0);
        approx_eq(normalized_value_percent(0.5, 0.5, 0.5), 0.0);
    }

    #[test]
    fn snap_to_step_anchors_at_range_start() {
        approx_eq(snap_to_step(0.24, 0.0, Some(0.1)), 0.2);
        approx_eq(snap_to_step(0.26, 0.0, Some(0.1)), 0.3);
        // Snapping is relative to the configured range start, not zero.
        approx_eq(snap_to_step(0.62, 0.05, Some(0.25)), 0.55);
        approx_eq(snap_to_step(0.4, 0.0, None), 0.4);
        approx_eq(snap_to_step(0.4, 0.0, Some(0.0)), 0.4);
    }
}
