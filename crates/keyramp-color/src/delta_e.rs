//! CIEDE2000 color difference, computed by `palette`.
//!
//! ΔE00 below 1 is imperceptible, around 2–10 noticeable at a glance, and
//! above 50 the colors are close to opposite.

use palette::color_difference::Ciede2000;
use palette::white_point::D65;
use palette::{FromColor, Lab};

use crate::color::Color;
use crate::model::srgb::to_srgb;

/// ΔE00 between two LAB triples `[l, a, b]`, with unit parametric factors.
pub fn ciede2000(lab1: [f64; 3], lab2: [f64; 3]) -> f64 {
    let [l1, a1, b1] = lab1;
    let [l2, a2, b2] = lab2;
    Lab::<D65, f64>::new(l1, a1, b1).difference(Lab::new(l2, a2, b2))
}

/// ΔE00 between two colors.
///
/// ```rust
/// use keyramp_color::{color_difference, Color};
///
/// let red = Color::from_rgb8(255, 0, 0);
/// assert_eq!(color_difference(&red, &red), 0.0);
/// assert!(color_difference(&red, &Color::from_rgb8(0, 0, 255)) > 50.0);
/// ```
pub fn color_difference(a: &Color, b: &Color) -> f64 {
    let lab = |c: &Color| Lab::<D65, f64>::from_color(to_srgb(c.rgb()));
    lab(a).difference(lab(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sharma, Wu & Dalal (2005) reference pairs.
    #[test]
    fn reference_pairs() {
        let cases = [
            ([50.0, 2.6772, -79.7751], [50.0, 0.0, -82.7485], 2.0425),
            ([50.0, 0.0, 0.0], [50.0, -1.0, 2.0], 2.3669),
            ([50.0, 2.49, -0.001], [50.0, -2.49, 0.0009], 7.1792),
            ([50.0, 2.49, -0.001], [50.0, -2.49, 0.0011], 7.2195),
            ([50.0, -0.001, 2.49], [50.0, 0.0009, -2.49], 4.8045),
            ([50.0, 2.5, 0.0], [73.0, 25.0, -18.0], 27.1492),
            ([50.0, 2.5, 0.0], [56.0, -27.0, -3.0], 31.9030),
            ([60.2574, -34.0099, 36.2677], [60.4626, -34.1751, 39.4387], 1.2644),
            ([22.7233, 20.0904, -46.6940], [23.0331, 14.9730, -42.5619], 2.0373),
        ];
        for (lab1, lab2, expected) in cases {
            let de = ciede2000(lab1, lab2);
            assert!(
                (de - expected).abs() < 1e-4,
                "{:?} vs {:?}: got {}, expected {}",
                lab1,
                lab2,
                de,
                expected
            );
        }
    }

    #[test]
    fn symmetric() {
        let a = [40.0, 30.0, -20.0];
        let b = [70.0, -10.0, 55.0];
        assert!((ciede2000(a, b) - ciede2000(b, a)).abs() < 1e-9);
    }

    #[test]
    fn greys_differ_by_lightness_only() {
        let mid = Color::from_rgb8(128, 128, 128);
        let light = Color::from_rgb8(192, 192, 192);
        let de = color_difference(&mid, &light);
        assert!(de > 15.0 && de < 30.0, "{}", de);
        assert_eq!(color_difference(&mid, &mid), 0.0);
    }
}
