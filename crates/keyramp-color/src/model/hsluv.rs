//! HSLuv: a human-friendly HSL built on CIE LUV, converted by `palette`.
//!
//! Saturation is expressed relative to the widest in-gamut chroma for the
//! given lightness and hue, so every `[h, s, l]` with `s <= 100` maps inside
//! sRGB. Lightness is CIE L* (0–100) and is what the rest of the workspace
//! calls *luminosity*. Greys, black and white report a `NaN` hue.

use palette::white_point::D65;
use palette::{FromColor, Hsluv, Lab, Srgb, Xyz};

use super::srgb::{from_srgb, to_srgb};

/// Largest channel spread (0–255 scale) still treated as grey.
const GREY_SPREAD: f64 = 1e-6;
/// Saturation below this carries no usable hue.
const MIN_SATURATION: f64 = 1e-8;
const MIN_LIGHTNESS: f64 = 1e-8;
const MAX_LIGHTNESS: f64 = 99.999_999_9;

/// CIE luminance `Y` (0.0–1.0) → L* lightness (0–100).
///
/// ```rust
/// use keyramp_color::lightness_from_luminance;
///
/// assert!(lightness_from_luminance(0.0).abs() < 1e-9);
/// assert!((lightness_from_luminance(1.0) - 100.0).abs() < 1e-9);
/// ```
pub fn lightness_from_luminance(y: f64) -> f64 {
    // L* depends on Y alone.
    Lab::<D65, f64>::from_color(Xyz::<D65, f64>::new(y, y, y)).l
}

/// L* lightness (0–100) → CIE luminance `Y` (0.0–1.0).
pub fn luminance_from_lightness(l: f64) -> f64 {
    Xyz::<D65, f64>::from_color(Lab::<D65, f64>::new(l, 0.0, 0.0)).y
}

fn is_grey(rgb: [f64; 3]) -> bool {
    let max = rgb[0].max(rgb[1]).max(rgb[2]);
    let min = rgb[0].min(rgb[1]).min(rgb[2]);
    max - min < GREY_SPREAD
}

pub(crate) fn rgb_to_hsluv(rgb: [f64; 3]) -> [f64; 3] {
    let hsluv = Hsluv::<D65, f64>::from_color(to_srgb(rgb));
    let l = hsluv.l;
    if l > MAX_LIGHTNESS {
        return [f64::NAN, 0.0, 100.0];
    }
    if l < MIN_LIGHTNESS {
        return [f64::NAN, 0.0, 0.0];
    }
    if is_grey(rgb) || hsluv.saturation.is_nan() || hsluv.saturation < MIN_SATURATION {
        return [f64::NAN, 0.0, l];
    }
    [hsluv.hue.into_positive_degrees(), hsluv.saturation, l]
}

pub(crate) fn hsluv_to_rgb(hsluv: [f64; 3]) -> [f64; 3] {
    let [h, s, l] = hsluv;
    let h = if h.is_nan() { 0.0 } else { h };
    if l < MIN_LIGHTNESS {
        return [0.0; 3];
    }
    if l > MAX_LIGHTNESS {
        return [255.0; 3];
    }
    from_srgb(Srgb::<f64>::from_color(Hsluv::<D65, f64>::new(h, s, l)))
}
