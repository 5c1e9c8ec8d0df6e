//! Per-space conversion math.
//!
//! Everything here works on raw `[f64; 3]` triples: device RGB in 0–255 on
//! one side and the space's channels on the other. Results are not clamped
//! and may contain `NaN` (undefined hues); [`crate::Color`] and the codec
//! take care of both.

pub(crate) mod cam02;
pub(crate) mod hsl;
pub(crate) mod hsluv;
pub(crate) mod lab;
pub(crate) mod srgb;

use crate::space::ColorSpace;

/// Device RGB → channels of `space`.
pub(crate) fn to_channels(rgb: [f64; 3], space: ColorSpace) -> [f64; 3] {
    match space {
        ColorSpace::Rgb | ColorSpace::Hex => rgb,
        ColorSpace::Hsl => hsl::rgb_to_hsl(rgb),
        ColorSpace::Hsv => hsl::rgb_to_hsv(rgb),
        ColorSpace::Hsluv => hsluv::rgb_to_hsluv(rgb),
        ColorSpace::Lab => lab::rgb_to_lab(rgb),
        ColorSpace::Lch => lab::rgb_to_lch(rgb),
        ColorSpace::Cam02 => cam02::rgb_to_jab(rgb),
        ColorSpace::Cam02p => lab::to_polar(cam02::rgb_to_jab(rgb)),
    }
}

/// Channels of `space` → device RGB (unclamped).
pub(crate) fn from_channels(channels: [f64; 3], space: ColorSpace) -> [f64; 3] {
    match space {
        ColorSpace::Rgb | ColorSpace::Hex => channels,
        ColorSpace::Hsl => hsl::hsl_to_rgb(channels),
        ColorSpace::Hsv => hsl::hsv_to_rgb(channels),
        ColorSpace::Hsluv => hsluv::hsluv_to_rgb(channels),
        ColorSpace::Lab => lab::lab_to_rgb(channels),
        ColorSpace::Lch => lab::lch_to_rgb(channels),
        ColorSpace::Cam02 => cam02::jab_to_rgb(channels),
        ColorSpace::Cam02p => cam02::jab_to_rgb(lab::from_polar(channels)),
    }
}
