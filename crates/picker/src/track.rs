use gpui::{prelude::*, *};

use crate::hsba::ColorSpace;

/// Paints a slider's track and reports the color under any point of it.
///
/// Positions are normalized: `0.0` is the left end of the track, `1.0` the
/// right end, mapped against the driven channel's declared bounds.
pub trait TrackDelegate: 'static {
    fn paint_track(&self, container: Div) -> Div;

    /// The color shown at `position` (`0.0..=1.0`) along the track. Used to
    /// tint the thumb with the color currently under it.
    fn color_at(&self, position: f32) -> Hsla;
}

/// Start offset and width of a track segment, overlapped by 2px to hide the
/// sub-pixel seams that anti-aliasing leaves between adjacent gradient quads.
fn overlapping_segment(index: usize, count: usize, item_width: Pixels, total_width: Pixels) -> (Pixels, Pixels) {
    let start = index as f32 * item_width;
    let end = if index == count - 1 {
        total_width
    } else {
        (index + 1) as f32 * item_width + px(2.0)
    };
    (start, end - start)
}

fn segment_bounds(bounds: Bounds<Pixels>, start_offset: Pixels, width: Pixels) -> Bounds<Pixels> {
    Bounds {
        origin: point(bounds.origin.x + start_offset, bounds.origin.y),
        size: size(width, bounds.size.height),
    }
}

/// The full hue spectrum: Red → Yellow → Green → Cyan → Blue → Magenta → Red.
///
/// A single linear gradient cannot express the wheel, so the track is painted
/// as six abutting gradient bands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HueTrack;

const HUE_BANDS: usize = 6;

impl TrackDelegate for HueTrack {
    fn paint_track(&self, container: Div) -> Div {
        container.child(
            canvas(
                move |_, _, _| (),
                move |bounds, _, window, _| {
                    let total_width = bounds.size.width;
                    let band_width = total_width / HUE_BANDS as f32;
                    let radius = bounds.size.height / 2.0;

                    for i in 0..HUE_BANDS {
                        let start_color = hsla(i as f32 / HUE_BANDS as f32, 1.0, 0.5, 1.0);
                        let end_color = hsla((i + 1) as f32 / HUE_BANDS as f32, 1.0, 0.5, 1.0);

                        let (start_offset, width) =
                            overlapping_segment(i, HUE_BANDS, band_width, total_width);

                        // Pill endcaps on the outermost bands only.
                        let mut corner_radii = Corners::default();
                        if i == 0 {
                            corner_radii.top_left = radius;
                            corner_radii.bottom_left = radius;
                        }
                        if i == HUE_BANDS - 1 {
                            corner_radii.top_right = radius;
                            corner_radii.bottom_right = radius;
                        }

                        window.paint_quad(PaintQuad {
                            bounds: segment_bounds(bounds, start_offset, width),
                            corner_radii,
                            background: linear_gradient(
                                90.0,
                                linear_color_stop(start_color, 0.0),
                                linear_color_stop(end_color, 1.0),
                            )
                            .into(),
                            border_widths: Edges::default(),
                            border_color: transparent_black(),
                            border_style: BorderStyle::default(),
                        });
                    }
                },
            )
            .size_full(),
        )
    }

    fn color_at(&self, position: f32) -> Hsla {
        hsla(position.clamp(0.0, 1.0), 1.0, 0.5, 1.0)
    }
}

/// Sweeps one channel of a base color from its minimum to its maximum.
///
/// Seeding the track with a new base color is how sibling sliders keep their
/// gradient endpoints in step: a saturation track based on the pure hue runs
/// white → pure hue, a brightness track runs black → pure hue, and both move
/// the moment the hue slider hands the picker a new base.
pub struct ChannelTrack<S: ColorSpace> {
    base: S,
    channel: SharedString,
}

impl<S: ColorSpace> ChannelTrack<S> {
    pub fn new(base: S, channel: impl Into<SharedString>) -> Result<Self, String> {
        let channel = channel.into();
        if !base.channels().iter().any(|c| c.name == channel.as_ref()) {
            return Err(format!(
                "channel '{}' does not exist in the color space",
                channel
            ));
        }
        Ok(Self { base, channel })
    }

    fn endpoint(&self, t: f32) -> Hsla {
        let (min, max) = self.base.channel_bounds(self.channel.as_ref());
        let mut spec = self.base;
        spec.set_value(self.channel.as_ref(), min + (max - min) * t.clamp(0.0, 1.0));
        spec.to_hsla()
    }
}

impl<S: ColorSpace> TrackDelegate for ChannelTrack<S> {
    fn paint_track(&self, container: Div) -> Div {
        container.bg(linear_gradient(
            90.0,
            linear_color_stop(self.endpoint(0.0), 0.0),
            linear_color_stop(self.endpoint(1.0), 1.0),
        ))
    }

    fn color_at(&self, position: f32) -> Hsla {
        self.endpoint(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hsba::Hsba;

    fn assert_color_approx_eq(a: Hsla, b: Hsla) {
        let a = a.to_rgb();
        let b = b.to_rgb();
        for (left, right) in [(a.r, b.r), (a.g, b.g), (a.b, b.b), (a.a, b.a)] {
            assert!(
                (left - right).abs() < 1e-4,
                "expected {left} ~= {right} (lhs {a:?}, rhs {b:?})"
            );
        }
    }

    #[test]
    fn overlapping_segment_adds_overlap_except_last_segment() {
        let (start0, width0) = overlapping_segment(0, 3, px(10.0), px(30.0));
        let (start1, width1) = overlapping_segment(1, 3, px(10.0), px(30.0));
        let (start2, width2) = overlapping_segment(2, 3, px(10.0), px(30.0));

        assert_eq!((f32::from(start0), f32::from(width0)), (0.0, 12.0));
        assert_eq!((f32::from(start1), f32::from(width1)), (10.0, 12.0));
        assert_eq!((f32::from(start2), f32::from(width2)), (20.0, 10.0));
    }

    #[test]
    fn overlapping_segment_uses_total_width_for_single_segment() {
        let (start, width) = overlapping_segment(0, 1, px(40.0), px(33.0));
        assert_eq!((f32::from(start), f32::from(width)), (0.0, 33.0));
    }

    #[test]
    fn channel_track_new_validates_channel_name() {
        let base = Hsba::new(0.0, 0.5, 0.5, 1.0);

        assert!(ChannelTrack::new(base, Hsba::SATURATION).is_ok());

        let err = ChannelTrack::new(base, "value");
        assert!(err.is_err());
        assert!(
            err.err()
                .is_some_and(|message| message.contains("channel 'value' does not exist"))
        );
    }

    #[test]
    fn saturation_track_runs_white_to_pure_hue() {
        let hue = 1.0 / 3.0;
        let base = Hsba::new(hue, 0.2, 0.4, 0.5).pure_hue();
        let track = ChannelTrack::new(base, Hsba::SATURATION).unwrap();

        assert_color_approx_eq(track.color_at(0.0), gpui::white());
        assert_color_approx_eq(track.color_at(1.0), hsla(hue, 1.0, 0.5, 1.0));
    }

    #[test]
    fn brightness_track_runs_black_to_pure_hue() {
        let hue = 2.0 / 3.0;
        let base = Hsba::new(hue, 0.9, 0.1, 1.0).pure_hue();
        let track = ChannelTrack::new(base, Hsba::BRIGHTNESS).unwrap();

        assert_color_approx_eq(track.color_at(0.0), gpui::black());
        assert_color_approx_eq(track.color_at(1.0), hsla(hue, 1.0, 0.5, 1.0));
    }

    #[test]
    fn channel_track_endpoints_follow_a_new_base_hue() {
        let first = ChannelTrack::new(Hsba::new(0.0, 1.0, 1.0, 1.0), Hsba::SATURATION).unwrap();
        assert_color_approx_eq(first.color_at(1.0), hsla(0.0, 1.0, 0.5, 1.0));

        // Re-seeding with the pure hue of the new state moves the endpoint.
        let moved = Hsba::new(0.5, 0.3, 0.7, 1.0);
        let second = ChannelTrack::new(moved.pure_hue(), Hsba::SATURATION).unwrap();
        assert_color_approx_eq(second.color_at(1.0), hsla(0.5, 1.0, 0.5, 1.0));
    }

    #[test]
    fn hue_track_sweeps_the_wheel_and_wraps_to_red() {
        let track = HueTrack;
        assert_color_approx_eq(track.color_at(0.0), hsla(0.0, 1.0, 0.5, 1.0));
        assert_color_approx_eq(track.color_at(0.5), hsla(0.5, 1.0, 0.5, 1.0));
        assert_color_approx_eq(track.color_at(1.0), hsla(0.0, 1.0, 0.5, 1.0));
    }
}
