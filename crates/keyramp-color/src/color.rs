//! The canonical [`Color`] value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;
use crate::model::{self, hsluv, srgb};
use crate::space::ColorSpace;
use crate::util::round;

/// An opaque sRGB color.
///
/// Channels are stored as `f64` in 0–255, clamped on construction with
/// non-finite input coerced to `0`. Keeping fractional channels (rather than
/// bytes) lets a color go through any space and come back without drift.
///
/// Colors print and serialize as `#rrggbb` and parse from any notation
/// [`crate::parse`] accepts.
///
/// ```rust
/// use keyramp_color::Color;
///
/// let c: Color = "rebeccapurple".parse().unwrap();
/// assert_eq!(c.to_hex(), "#663399");
/// assert_eq!(Color::from_rgb(300.0, f64::NAN, -4.0).to_hex(), "#ff0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    rgb: [f64; 3],
}

fn clamp_channel(c: f64) -> f64 {
    if c.is_nan() {
        0.0
    } else {
        c.clamp(0.0, 255.0)
    }
}

impl Color {
    pub const BLACK: Color = Color { rgb: [0.0; 3] };
    pub const WHITE: Color = Color { rgb: [255.0; 3] };

    pub fn from_rgb(r: f64, g: f64, b: f64) -> Self {
        Color {
            rgb: [r, g, b].map(clamp_channel),
        }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Color {
            rgb: [r as f64, g as f64, b as f64],
        }
    }

    pub(crate) fn from_array(rgb: [f64; 3]) -> Self {
        Color::from_rgb(rgb[0], rgb[1], rgb[2])
    }

    /// Device RGB channels, 0–255.
    pub fn rgb(&self) -> [f64; 3] {
        self.rgb
    }

    /// Device RGB channels rounded to bytes.
    pub fn rgb8(&self) -> [u8; 3] {
        self.rgb.map(|c| round(c, 0) as u8)
    }

    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Channels in `space` as computed, `NaN` hues included.
    ///
    /// Use [`crate::to_space`] for NaN-free values.
    pub fn channels_raw(&self, space: ColorSpace) -> [f64; 3] {
        model::to_channels(self.rgb, space)
    }

    /// HSLuv lightness (0–100), the value palettes are laid out by.
    pub fn luminosity(&self) -> f64 {
        model::to_channels(self.rgb, ColorSpace::Hsluv)[2]
    }

    /// WCAG 2 relative luminance (0.0–1.0).
    pub fn relative_luminance(&self) -> f64 {
        srgb::relative_luminance(self.rgb)
    }

    /// Color with the given HSLuv lightness and this color's hue and saturation.
    pub fn with_luminosity(&self, lightness: f64) -> Color {
        let [h, s, _] = self.channels_raw(ColorSpace::Hsluv);
        Color::from_array(hsluv::hsluv_to_rgb([h, s, lightness]))
    }

    /// Channel-wise comparison within `tolerance` (in 0–255 units).
    pub fn approx_eq(&self, other: &Color, tolerance: f64) -> bool {
        self.rgb
            .iter()
            .zip(other.rgb.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::codec::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
