//! CIE LAB and its polar form LCH.
//!
//! LAB is the space ΔE-2000 is defined in, and LCH is its cylindrical view
//! (`l`, chroma, hue in degrees). Both go through XYZ with the D65 white
//! from [`super::srgb`].

use super::srgb::{rgb_to_xyz, xyz_to_rgb, XN, YN, ZN};

// ─── CIE LAB ────────────────────────────────────────────────────────────────

const T0: f64 = 4.0 / 29.0;
const T1: f64 = 6.0 / 29.0;
const T2: f64 = 3.0 * T1 * T1;
const T3: f64 = T1 * T1 * T1;

/// LAB forward transform helper.
fn lab_f(t: f64) -> f64 {
    if t > T3 {
        t.cbrt()
    } else {
        t / T2 + T0
    }
}

/// LAB inverse transform helper.
fn lab_f_inv(t: f64) -> f64 {
    if t > T1 {
        t * t * t
    } else {
        T2 * (t - T0)
    }
}

/// Device RGB (0–255) → `[l, a, b]`.
pub(crate) fn rgb_to_lab(rgb: [f64; 3]) -> [f64; 3] {
    let [x, y, z] = rgb_to_xyz(rgb);

    let fx = lab_f(x / XN);
    let fy = lab_f(y / YN);
    let fz = lab_f(z / ZN);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// `[l, a, b]` → device RGB (0–255), unclamped.
pub(crate) fn lab_to_rgb(lab: [f64; 3]) -> [f64; 3] {
    let fy = (lab[0] + 16.0) / 116.0;
    let fx = lab[1] / 500.0 + fy;
    let fz = fy - lab[2] / 200.0;

    xyz_to_rgb([XN * lab_f_inv(fx), YN * lab_f_inv(fy), ZN * lab_f_inv(fz)])
}

// ─── Polar helpers (LCH, Jch) ──────────────────────────────────────────────

/// Cartesian `[lightness, a, b]` → polar `[lightness, chroma, hue°]`.
///
/// The hue of a color with (practically) no chroma is undefined and comes
/// back as `NaN`; interpolation borrows a neighbor's hue in that case and the
/// public codec reports it as `0`.
pub(crate) fn to_polar(lab: [f64; 3]) -> [f64; 3] {
    let [l, a, b] = lab;
    let c = a.hypot(b);
    let h = if (c * 10_000.0).round() == 0.0 {
        f64::NAN
    } else {
        b.atan2(a).to_degrees().rem_euclid(360.0)
    };
    [l, c, h]
}

/// Polar `[lightness, chroma, hue°]` → cartesian `[lightness, a, b]`.
pub(crate) fn from_polar(lch: [f64; 3]) -> [f64; 3] {
    let [l, c, h] = lch;
    let h = if h.is_nan() { 0.0 } else { h.to_radians() };
    [l, c * h.cos(), c * h.sin()]
}

pub(crate) fn rgb_to_lch(rgb: [f64; 3]) -> [f64; 3] {
    to_polar(rgb_to_lab(rgb))
}

pub(crate) fn lch_to_rgb(lch: [f64; 3]) -> [f64; 3] {
    lab_to_rgb(from_polar(lch))
}

// ─── Tests ──────────────────────────────────────────────────────────────────
