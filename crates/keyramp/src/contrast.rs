//! Contrast measurement and contrast-driven color generation.
//!
//! A [`ContrastEngine`] answers two questions for a fixed background: how
//! much contrast a foreground has against it, and which color of a scale
//! reaches a requested contrast. [`WcagEngine`] implements WCAG 2 ratios.
//!
//! Ratios are signed. A positive ratio points the usual way (lighter text
//! on a dark background, darker text on a light one); a negative ratio
//! points the other way, so `-1.5` on white asks for a color *lighter*
//! than the background, which clamps to white itself.

use keyramp_color::{lightness_from_luminance, round, Color};

use crate::group::{order_by_luminosity, LuminosityOrder};
use crate::locate::locate;
use crate::scale::{ColorScale, Ramp, ScaleOptions};

/// Smallest and largest WCAG ratio the engine accepts, signed.
pub const RATIO_RANGE: (f64, f64) = (-10.0, 21.0);

/// Pluggable contrast model.
pub trait ContrastEngine {
    /// The color every ratio is measured against.
    fn background(&self) -> Color;

    /// Signed contrast of `foreground` against `background`.
    fn contrast(&self, foreground: &Color, background: &Color) -> f64;

    /// The color on the engine's scale that reaches `ratio` against
    /// [`background`](Self::background).
    fn generate(&self, ratio: f64) -> Color;
}

/// WCAG 2 contrast over a lightness-spanning scale.
#[derive(Debug, Clone, PartialEq)]
pub struct WcagEngine {
    background: Color,
    scale: ColorScale,
}

impl WcagEngine {
    /// Domain of the scale built by [`for_keys`](Self::for_keys).
    pub const DOMAIN: f64 = 100.0;

    /// Uses `scale` as is. It should span the luminosities that will be
    /// requested, or generated colors clamp to its ends.
    pub fn new(background: Color, scale: ColorScale) -> Self {
        Self { background, scale }
    }

    /// Builds a full-range scale through `keys`: white, the keys from
    /// lightest to darkest, then black.
    pub fn for_keys(background: Color, keys: &[Color], options: ScaleOptions) -> Self {
        let sorted = order_by_luminosity(keys, LuminosityOrder::LightestFirst);
        let full: Vec<Color> = [Color::WHITE]
            .into_iter()
            .chain(sorted)
            .chain([Color::BLACK])
            .collect();
        let scale = ColorScale::assemble(&full, options).with_domain(Self::DOMAIN);
        Self { background, scale }
    }

    pub fn scale(&self) -> &ColorScale {
        &self.scale
    }

    /// Whether the background counts as dark (HSLuv lightness below 50).
    fn dark_background(&self) -> bool {
        round(self.background.luminosity() / 100.0, 2) < 0.5
    }

    /// WCAG relative luminance a foreground needs to reach `ratio`.
    pub fn target_luminance(&self, ratio: f64) -> f64 {
        let yb = self.background.relative_luminance();
        let magnitude = ratio.abs().max(1.0);
        let lighter = self.dark_background() != (ratio < 0.0);
        let yf = if lighter {
            magnitude * (yb + 0.05) - 0.05
        } else {
            (yb + 0.05) / magnitude - 0.05
        };
        yf.clamp(0.0, 1.0)
    }
}

impl ContrastEngine for WcagEngine {
    fn background(&self) -> Color {
        self.background
    }

    fn contrast(&self, foreground: &Color, background: &Color) -> f64 {
        let yf = foreground.relative_luminance();
        let yb = background.relative_luminance();
        let forward = (yf + 0.05) / (yb + 0.05);
        let inverse = (yb + 0.05) / (yf + 0.05);

        let dark = round(background.luminosity() / 100.0, 2) < 0.5;
        if dark {
            if forward >= 1.0 {
                forward
            } else {
                -inverse
            }
        } else if forward < 1.0 {
            inverse
        } else {
            -forward
        }
    }

    fn generate(&self, ratio: f64) -> Color {
        let lightness = lightness_from_luminance(self.target_luminance(ratio));
        let found = locate(&self.scale, self.scale.domain_max(), lightness);
        self.scale.at(found.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyramp_color::{parse, ColorSpace};

    fn engine(background: &str) -> WcagEngine {
        WcagEngine::for_keys(
            parse(background).unwrap(),
            &[parse("#0055ff").unwrap()],
            ScaleOptions::new(ColorSpace::Rgb),
        )
    }

    #[test]
    fn black_on_white_is_21() {
        let e = engine("#ffffff");
        let ratio = e.contrast(&Color::BLACK, &Color::WHITE);
        assert!((ratio - 21.0).abs() < 1e-4);
    }

    #[test]
    fn white_on_black_is_21() {
        let e = engine("#000000");
        let ratio = e.contrast(&Color::WHITE, &Color::BLACK);
        assert!((ratio - 21.0).abs() < 1e-4);
    }

    #[test]
    fn wrong_direction_is_negative() {
        let e = engine("#777777");
        let bg = parse("#777777").unwrap();
        // #777777 counts as light, so a lighter foreground goes negative.
        assert!(e.contrast(&Color::WHITE, &bg) < 0.0);
        assert!(e.contrast(&Color::BLACK, &bg) > 0.0);
    }

    #[test]
    fn generated_color_meets_ratio() {
        let e = engine("#ffffff");
        for ratio in [3.0, 4.5, 7.0] {
            let color = e.generate(ratio);
            let measured = e.contrast(&color, &Color::WHITE);
            assert!((measured - ratio).abs() < 0.1, "{} -> {}", ratio, measured);
        }
    }

    #[test]
    fn generation_on_dark_background_goes_lighter() {
        let e = engine("#000000");
        let color = e.generate(4.5);
        assert!(color.luminosity() > 40.0);
        let measured = e.contrast(&color, &Color::BLACK);
        assert!((measured - 4.5).abs() < 0.1, "{}", measured);
    }

    #[test]
    fn target_luminance_is_clamped() {
        let e = engine("#ffffff");
        assert!(e.target_luminance(21.0).abs() < 1e-6);
        assert_eq!(e.target_luminance(-5.0), 1.0);
        assert!((e.target_luminance(0.5) - 1.0).abs() < 1e-6);
    }
}
