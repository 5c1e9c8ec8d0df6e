//! sRGB companding, the sRGB ↔ CIE XYZ (D65) matrices used by LAB and
//! CAM02, and the bridge to `palette`'s `Srgb` for the other models.
//!
//! LAB and CAM02 reach XYZ through the matrix pair below, so their reference
//! white is derived from the matrix itself: `#ffffff` lands on
//! `(XN, YN, ZN)` exactly and greys have zero chroma in LAB.

use palette::color_difference::Wcag21RelativeContrast;
use palette::Srgb;

/// Linear sRGB → XYZ (D65).
pub(crate) const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.41239079926595, 0.35758433938387, 0.18048078840183],
    [0.21263900587151, 0.71516867876775, 0.072192315360733],
    [0.019330818715591, 0.11919477979462, 0.95053215224966],
];

/// XYZ (D65) → linear sRGB.
pub(crate) const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.240969941904521, -1.537383177570093, -0.498610760293],
    [-0.96924363628087, 1.87596750150772, 0.041555057407175],
    [0.055630079696993, -0.20397695888897, 1.056971514242878],
];

/// D65 reference white, as produced by [`RGB_TO_XYZ`] for `#ffffff`.
pub(crate) const XN: f64 = RGB_TO_XYZ[0][0] + RGB_TO_XYZ[0][1] + RGB_TO_XYZ[0][2];
pub(crate) const YN: f64 = RGB_TO_XYZ[1][0] + RGB_TO_XYZ[1][1] + RGB_TO_XYZ[1][2];
pub(crate) const ZN: f64 = RGB_TO_XYZ[2][0] + RGB_TO_XYZ[2][1] + RGB_TO_XYZ[2][2];

/// Convert an sRGB component (0.0–1.0) to linear light.
pub(crate) fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear light value to an sRGB component (unclamped).
pub(crate) fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

pub(crate) fn mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Device RGB (0–255) → XYZ with `Y` in 0.0–1.0.
pub(crate) fn rgb_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    let linear = rgb.map(|c| srgb_to_linear(c / 255.0));
    mul(&RGB_TO_XYZ, linear)
}

/// XYZ → device RGB (0–255), unclamped; [`crate::Color`] clamps on construction.
pub(crate) fn xyz_to_rgb(xyz: [f64; 3]) -> [f64; 3] {
    mul(&XYZ_TO_RGB, xyz).map(|c| linear_to_srgb(c) * 255.0)
}

/// Device RGB (0–255) as a `palette` color with 0.0–1.0 components.
pub(crate) fn to_srgb(rgb: [f64; 3]) -> Srgb<f64> {
    let [r, g, b] = rgb.map(|c| c / 255.0);
    Srgb::new(r, g, b)
}

pub(crate) fn from_srgb(color: Srgb<f64>) -> [f64; 3] {
    [color.red, color.green, color.blue].map(|c| c * 255.0)
}

/// WCAG 2.1 relative luminance of a device RGB triple.
pub(crate) fn relative_luminance(rgb: [f64; 3]) -> f64 {
    to_srgb(rgb).relative_luminance().luma
}
