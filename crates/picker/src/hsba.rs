use gpui::{Hsla, Rgba, SharedString};

#[cfg(test)]
mod tests;

/// Metadata for one editable channel of a color space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorChannel {
    pub name: &'static str,
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: Option<f32>,
}

/// A color space whose channels can be edited one slider at a time.
///
/// Channel mutators clamp into the channel's declared bounds, so a slider can
/// hand any proposed value to [`ColorSpace::set_value`] without pre-checking.
pub trait ColorSpace: 'static + Clone + Copy + Send + Sync {
    fn channels(&self) -> &[ColorChannel];
    fn get_value(&self, channel: &str) -> f32;
    fn set_value(&mut self, channel: &str, value: f32);
    fn to_hsla(&self) -> Hsla;
    fn from_hsla(hsla: Hsla) -> Self;

    fn channel_bounds(&self, channel: &str) -> (f32, f32) {
        let channel = self
            .channels()
            .iter()
            .find(|c| c.name == channel)
            .expect("unknown channel name");
        (channel.min, channel.max)
    }
}

/// Hue, saturation, brightness and alpha, each in `0.0..=1.0`.
///
/// The composed color is always derived from these four fields, never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsba {
    pub h: f32,
    pub s: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Hsba {
    fn default() -> Self {
        Self {
            h: 0.5,
            s: 0.5,
            b: 0.5,
            a: 1.0,
        }
    }
}

impl Hsba {
    pub const HUE: &'static str = "hue";
    pub const SATURATION: &'static str = "saturation";
    pub const BRIGHTNESS: &'static str = "brightness";
    pub const ALPHA: &'static str = "alpha";

    const CHANNELS: [ColorChannel; 4] = [
        ColorChannel {
            name: Self::HUE,
            label: "Hue",
            min: 0.0,
            max: 1.0,
            step: None,
        },
        ColorChannel {
            name: Self::SATURATION,
            label: "Saturation",
            min: 0.0,
            max: 1.0,
            step: None,
        },
        ColorChannel {
            name: Self::BRIGHTNESS,
            label: "Brightness",
            min: 0.0,
            max: 1.0,
            step: None,
        },
        ColorChannel {
            name: Self::ALPHA,
            label: "Alpha",
            min: 0.0,
            max: 1.0,
            step: None,
        },
    ];

    pub fn new(h: f32, s: f32, b: f32, a: f32) -> Self {
        Self {
            h: h.clamp(0.0, 1.0),
            s: s.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// The fully saturated, fully bright, opaque color at the current hue.
    ///
    /// This is the color the hue thumb carries, and the far endpoint of the
    /// saturation and brightness tracks.
    pub fn pure_hue(&self) -> Self {
        Self {
            h: self.h,
            s: 1.0,
            b: 1.0,
            a: 1.0,
        }
    }

    pub fn from_rgba(rgba: Rgba) -> Self {
        let r = rgba.r;
        let g = rgba.g;
        let b = rgba.b;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let d = max - min;

        let s = if max == 0.0 { 0.0 } else { d / max };

        let mut h = 0.0;
        if max != min {
            if max == r {
                h = (g - b) / d + (if g < b { 6.0 } else { 0.0 });
            } else if max == g {
                h = (b - r) / d + 2.0;
            } else {
                h = (r - g) / d + 4.0;
            }
            h /= 6.0;
        }

        Self {
            h,
            s,
            b: max,
            a: rgba.a,
        }
    }

    pub fn to_rgba(self) -> Rgba {
        let hp = self.h * 6.0;
        let c = self.b * self.s;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let m = self.b - c;

        let (r, g, b) = if hp < 1.0 {
            (c, x, 0.0)
        } else if hp < 2.0 {
            (x, c, 0.0)
        } else if hp < 3.0 {
            (0.0, c, x)
        } else if hp < 4.0 {
            (0.0, x, c)
        } else if hp < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Rgba {
            r: r + m,
            g: g + m,
            b: b + m,
            a: self.a,
        }
    }
}

impl ColorSpace for Hsba {
    fn channels(&self) -> &[ColorChannel] {
        &Self::CHANNELS
    }

    fn get_value(&self, channel: &str) -> f32 {
        match channel {
            Self::HUE => self.h,
            Self::SATURATION => self.s,
            Self::BRIGHTNESS => self.b,
            Self::ALPHA => self.a,
            _ => 0.0,
        }
    }

    fn set_value(&mut self, channel: &str, value: f32) {
        match channel {
            Self::HUE => self.h = value.clamp(0.0, 1.0),
            Self::SATURATION => self.s = value.clamp(0.0, 1.0),
            Self::BRIGHTNESS => self.b = value.clamp(0.0, 1.0),
            Self::ALPHA => self.a = value.clamp(0.0, 1.0),
            _ => {}
        }
    }

    fn to_hsla(&self) -> Hsla {
        self.to_rgba().into()
    }

    fn from_hsla(hsla: Hsla) -> Self {
        Self::from_rgba(hsla.to_rgb())
    }
}

/// Format a color as `#RRGGBBAA`, uppercase.
pub fn format_hexa(color: Hsla) -> SharedString {
    let rgba = color.to_rgb();
    let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02X}{:02X}{:02X}{:02X}",
        channel(rgba.r),
        channel(rgba.g),
        channel(rgba.b),
        channel(rgba.a),
    )
    .into()
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into a color.
pub fn parse_hex(input: &str) -> Result<Hsla, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Enter #RRGGBB or #RRGGBBAA");
    }

    let Some(value) = trimmed.strip_prefix('#') else {
        return Err("Color must start with #");
    };

    if value.len() != 6 && value.len() != 8 {
        return Err("Expected 6 or 8 hex digits");
    }

    let parse = |range: std::ops::Range<usize>| -> Result<u8, &'static str> {
        u8::from_str_radix(&value[range], 16).map_err(|_| "Invalid hex channel")
    };
    let red = parse(0..2)?;
    let green = parse(2..4)?;
    let blue = parse(4..6)?;
    let alpha = if value.len() == 8 { parse(6..8)? } else { 255 };

    Ok(Rgba {
        r: red as f32 / 255.0,
        g: green as f32 / 255.0,
        b: blue as f32 / 255.0,
        a: alpha as f32 / 255.0,
    }
    .into())
}
