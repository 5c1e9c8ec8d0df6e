//! The color spaces a palette can be expressed and interpolated in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A color space tag.
///
/// Tags read and print exactly as `RGB`, `HSL`, `HSV`, `HSLuv`, `LAB`, `LCH`,
/// `CAM02`, `CAM02p` and `HEX`, which is also their serde representation.
///
/// ```rust
/// use keyramp_color::ColorSpace;
///
/// let space: ColorSpace = "CAM02p".parse().unwrap();
/// assert_eq!(space, ColorSpace::Cam02p);
/// assert!(space.is_polar());
/// assert_eq!(space.channel_names(), ["J", "C", "h"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColorSpace {
    #[serde(rename = "RGB")]
    Rgb,
    #[serde(rename = "HSL")]
    Hsl,
    #[serde(rename = "HSV")]
    Hsv,
    #[serde(rename = "HSLuv")]
    Hsluv,
    #[serde(rename = "LAB")]
    Lab,
    #[serde(rename = "LCH")]
    Lch,
    /// CAM02-UCS, cartesian (`J`, `a`, `b`).
    #[default]
    #[serde(rename = "CAM02")]
    Cam02,
    /// CAM02-UCS, polar (`J`, `C`, `h`).
    #[serde(rename = "CAM02p")]
    Cam02p,
    /// Hex notation; channels are those of RGB.
    #[serde(rename = "HEX")]
    Hex,
}

/// How a channel value is displayed in text notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelUnit {
    Plain,
    /// Printed with a `%` suffix.
    Percent,
    /// Printed with a `deg` suffix.
    Degrees,
}

impl ColorSpace {
    /// Every space, in menu order.
    pub const ALL: [ColorSpace; 9] = [
        ColorSpace::Cam02,
        ColorSpace::Cam02p,
        ColorSpace::Lch,
        ColorSpace::Lab,
        ColorSpace::Hsl,
        ColorSpace::Hsluv,
        ColorSpace::Hsv,
        ColorSpace::Rgb,
        ColorSpace::Hex,
    ];

    /// The tag string for this space.
    pub fn tag(&self) -> &'static str {
        match self {
            ColorSpace::Rgb => "RGB",
            ColorSpace::Hsl => "HSL",
            ColorSpace::Hsv => "HSV",
            ColorSpace::Hsluv => "HSLuv",
            ColorSpace::Lab => "LAB",
            ColorSpace::Lch => "LCH",
            ColorSpace::Cam02 => "CAM02",
            ColorSpace::Cam02p => "CAM02p",
            ColorSpace::Hex => "HEX",
        }
    }

    /// Channel names in canonical conversion order.
    ///
    /// HSLuv's `l, u, v` are hue, saturation and lightness respectively.
    pub fn channel_names(&self) -> [&'static str; 3] {
        match self {
            ColorSpace::Rgb | ColorSpace::Hex => ["r", "g", "b"],
            ColorSpace::Hsl => ["h", "s", "l"],
            ColorSpace::Hsv => ["h", "s", "v"],
            ColorSpace::Hsluv => ["l", "u", "v"],
            ColorSpace::Lab => ["l", "a", "b"],
            ColorSpace::Lch => ["l", "c", "h"],
            ColorSpace::Cam02 => ["J", "a", "b"],
            ColorSpace::Cam02p => ["J", "C", "h"],
        }
    }

    /// Whether the space carries a hue angle.
    pub fn is_polar(&self) -> bool {
        matches!(
            self,
            ColorSpace::Lch
                | ColorSpace::Cam02p
                | ColorSpace::Hsl
                | ColorSpace::Hsv
                | ColorSpace::Hsluv
        )
    }

    /// Index of the hue channel for polar spaces.
    pub fn hue_index(&self) -> Option<usize> {
        match self {
            ColorSpace::Hsl | ColorSpace::Hsv | ColorSpace::Hsluv => Some(0),
            ColorSpace::Lch | ColorSpace::Cam02p => Some(2),
            _ => None,
        }
    }

    /// Display units of each channel in text notation.
    pub fn units(&self) -> [ChannelUnit; 3] {
        use ChannelUnit::*;
        match self {
            ColorSpace::Hsl | ColorSpace::Hsv => [Degrees, Percent, Percent],
            ColorSpace::Lab | ColorSpace::Cam02 => [Percent, Plain, Plain],
            ColorSpace::Lch | ColorSpace::Cam02p => [Percent, Plain, Degrees],
            ColorSpace::Rgb | ColorSpace::Hsluv | ColorSpace::Hex => [Plain, Plain, Plain],
        }
    }

    /// Function name used in text notation (`None` for hex).
    pub fn function_name(&self) -> Option<&'static str> {
        match self {
            ColorSpace::Rgb => Some("rgb"),
            ColorSpace::Hsl => Some("hsl"),
            ColorSpace::Hsv => Some("hsv"),
            ColorSpace::Hsluv => Some("hsluv"),
            ColorSpace::Lab => Some("lab"),
            ColorSpace::Lch => Some("lch"),
            ColorSpace::Cam02 => Some("jab"),
            ColorSpace::Cam02p => Some("jch"),
            ColorSpace::Hex => None,
        }
    }

    /// Looks a space up by its text-notation function name.
    pub(crate) fn from_function_name(name: &str) -> Option<Self> {
        ColorSpace::ALL
            .into_iter()
            .find(|space| space.function_name() == Some(name))
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ColorSpace {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorSpace::ALL
            .into_iter()
            .find(|space| space.tag() == s)
            .ok_or_else(|| ParseError::UnknownSpace(s.to_string()))
    }
}
