//! Hexcone models: HSL and HSV, converted by `palette`.
//!
//! Hue is in degrees and `NaN` for greys; saturation, lightness and value are
//! fractions in 0.0–1.0.

use palette::{encoding, FromColor, Hsl, Hsv, RgbHue, Srgb};

use super::srgb::{from_srgb, to_srgb};

type SrgbHsl = Hsl<encoding::Srgb, f64>;
type SrgbHsv = Hsv<encoding::Srgb, f64>;

/// Hue in degrees (0–360), `NaN` when the color has no saturation.
fn defined_hue(hue: RgbHue<f64>, saturation: f64) -> f64 {
    if saturation == 0.0 {
        f64::NAN
    } else {
        hue.into_positive_degrees()
    }
}

/// An undefined hue is read as red; with zero saturation it has no effect.
fn known_hue(h: f64) -> f64 {
    if h.is_nan() {
        0.0
    } else {
        h
    }
}

pub(crate) fn rgb_to_hsl(rgb: [f64; 3]) -> [f64; 3] {
    let hsl = SrgbHsl::from_color(to_srgb(rgb));
    [
        defined_hue(hsl.hue, hsl.saturation),
        hsl.saturation,
        hsl.lightness,
    ]
}

pub(crate) fn hsl_to_rgb(hsl: [f64; 3]) -> [f64; 3] {
    let [h, s, l] = hsl;
    from_srgb(Srgb::<f64>::from_color(SrgbHsl::new(known_hue(h), s, l)))
}

pub(crate) fn rgb_to_hsv(rgb: [f64; 3]) -> [f64; 3] {
    let hsv = SrgbHsv::from_color(to_srgb(rgb));
    [defined_hue(hsv.hue, hsv.saturation), hsv.saturation, hsv.value]
}

pub(crate) fn hsv_to_rgb(hsv: [f64; 3]) -> [f64; 3] {
    let [h, s, v] = hsv;
    from_srgb(Srgb::<f64>::from_color(SrgbHsv::new(known_hue(h), s, v)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f64; 3], b: [f64; 3]) -> bool {
        (0..3).all(|i| (a[i] - b[i]).abs() < 1e-9)
    }

    #[test]
    fn hsl_primaries() {
        assert!(close(rgb_to_hsl([255.0, 0.0, 0.0]), [0.0, 1.0, 0.5]));
        assert!(close(rgb_to_hsl([0.0, 255.0, 0.0]), [120.0, 1.0, 0.5]));
        assert!(close(rgb_to_hsl([0.0, 0.0, 255.0]), [240.0, 1.0, 0.5]));
    }

    #[test]
    fn hsl_grey_has_nan_hue() {
        let [h, s, l] = rgb_to_hsl([51.0, 51.0, 51.0]);
        assert!(h.is_nan());
        assert_eq!(s, 0.0);
        assert!((l - 0.2).abs() < 1e-12);
        assert!(close(hsl_to_rgb([h, s, l]), [51.0, 51.0, 51.0]));
    }

    #[test]
    fn hsl_roundtrip() {
        for rgb in [[200.0, 100.0, 50.0], [10.0, 20.0, 250.0], [255.0, 0.0, 128.0]] {
            assert!(close(hsl_to_rgb(rgb_to_hsl(rgb)), rgb), "{:?}", rgb);
        }
    }

    #[test]
    fn hsv_roundtrip() {
        for rgb in [[200.0, 100.0, 50.0], [10.0, 20.0, 250.0], [255.0, 0.0, 128.0]] {
            assert!(close(hsv_to_rgb(rgb_to_hsv(rgb)), rgb), "{:?}", rgb);
        }
    }

    #[test]
    fn hsv_grey_has_nan_hue() {
        let [h, s, v] = rgb_to_hsv([0.0, 0.0, 0.0]);
        assert!(h.is_nan());
        assert_eq!((s, v), (0.0, 0.0));
        assert!(close(hsv_to_rgb([h, s, v]), [0.0, 0.0, 0.0]));
    }

    #[test]
    fn hsv_value_is_max_channel() {
        let [_, s, v] = rgb_to_hsv([255.0, 127.5, 0.0]);
        assert_eq!(v, 1.0);
        assert_eq!(s, 1.0);
    }
}
