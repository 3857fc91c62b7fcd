#![recursion_limit = "1024"]
//! An HSBA color picker for GPUI: three gradient sliders (hue, saturation,
//! brightness) over a single color state record, a live preview swatch, and a
//! confirm-dialog wrapper with a Select action.
//!
//! ```ignore
//! use gpui_color_picker::WindowColorPickerExt as _;
//!
//! window.open_color_picker(gpui::black(), cx, |color, _, _| {
//!     println!("picked {color:?}");
//! });
//! ```

mod alert;
mod hsba;
mod picker;
mod slider;
mod thumb;
mod track;

pub use alert::{PickedColorTitle, WindowColorPickerExt};
pub use hsba::{ColorChannel, ColorSpace, Hsba, format_hexa, parse_hex};
pub use picker::{ColorPickerPanel, Selection};
pub use slider::{GradientSliderEvent, GradientSliderState, sizing};
pub use thumb::SliderThumb;
pub use track::{ChannelTrack, HueTrack, TrackDelegate};
