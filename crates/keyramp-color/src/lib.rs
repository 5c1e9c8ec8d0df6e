//! # Keyramp Color - Color Space Codec
//!
//! `keyramp-color` converts colors between the spaces a palette designer
//! works in and the text notations they are written in. It is the
//! foundation of the `keyramp` scale builder, but has no opinion about
//! palettes itself.
//!
//! ## Core Concepts
//!
//! - [`Color`]: an immutable sRGB value with `f64` channels (0–255)
//! - [`ColorSpace`]: RGB, HSL, HSV, HSLuv, LAB, LCH, CAM02 (Jab), CAM02p (Jch), HEX
//! - [`to_space`] / [`from_space`]: exact, reversible channel conversion
//! - [`parse`] / [`format`] / [`format_object`]: text and structured notation
//! - [`project`]: chart-ready channel series for a batch of colors
//! - [`color_difference`]: CIEDE2000 ΔE between two colors
//!
//! ## Quick Start
//!
//! ```rust
//! use keyramp_color::{format, from_space, parse, to_space, ColorSpace};
//!
//! let teal = parse("#008080").unwrap();
//!
//! let lch = to_space(&teal, ColorSpace::Lch);
//! let back = from_space(lch, ColorSpace::Lch);
//! assert!(back.approx_eq(&teal, 1e-6));
//!
//! assert_eq!(format(&teal, ColorSpace::Rgb), "rgb(0, 128, 128)");
//! assert_eq!(format(&teal, ColorSpace::Hex), "#008080");
//! ```
//!
//! ## Undefined Hues
//!
//! Greys have no hue. Raw channel math reports it as `NaN` (see
//! [`Color::channels_raw`]) so interpolation can tell "no hue" from "red";
//! every public conversion coerces it to `0` before handing values out.

pub mod codec;
pub mod color;
pub mod delta_e;
pub mod error;
mod model;
mod named;
pub mod projector;
pub mod space;
pub mod util;

pub use codec::{
    bulk_convert, channel_values, convert_color_value, format, format_object, from_space, parse,
    to_space, ChannelObject, ConvertedValue,
};
pub use color::Color;
pub use delta_e::{ciede2000, color_difference};
pub use error::{ParseError, Result};
pub use model::hsluv::{lightness_from_luminance, luminance_from_lightness};
pub use projector::{
    channel_layout, convert_to_cartesian, project, ChannelLayout, ChannelSeries, Point,
};
pub use space::{ChannelUnit, ColorSpace};
pub use util::{filter_nan, lerp, round};
