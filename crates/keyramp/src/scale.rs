//! Continuous color scales built from key colors.
//!
//! A [`ColorScale`] maps a position in `[0, domain_max]` to a color. Key
//! colors sit at evenly spaced positions (by default `0, 1, ..., N-1`) and
//! colors between them are interpolated in a chosen [`ColorSpace`]:
//!
//! - **stepped** (default): linear interpolation between adjacent keys
//! - **smooth**: a Catmull-Rom spline through every key, so the ramp has no
//!   visible kinks at the keys. Needs at least 3 keys; with fewer the scale
//!   falls back to stepped.
//!
//! Hue channels interpolate along the shorter arc. A key without a hue (a
//! grey) borrows its neighbor's, so a ramp from grey to blue does not sweep
//! through red first.
//!
//! ```rust
//! use keyramp::{ColorScale, Ramp, ScaleOptions};
//! use keyramp::color::{parse, ColorSpace};
//!
//! let keys = ["#000000", "#ffffff"].map(|c| parse(c).unwrap());
//! let scale = ColorScale::build(&keys, ScaleOptions::new(ColorSpace::Lab)).unwrap();
//!
//! assert_eq!(scale.at(0.0).to_hex(), "#000000");
//! assert_eq!(scale.at(0.5).to_hex(), "#777777");
//! assert_eq!(scale.at(1.0).to_hex(), "#ffffff");
//! ```

use keyramp_color::{from_space, lerp, to_space, Color, ColorSpace};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ScaleError;
use crate::group::{order_by_luminosity, LuminosityOrder};
use crate::keys::KeyColors;

/// Chroma of the synthetic middle key of a diverging scale.
const EQUILUMINANT_CHROMA: f64 = 8.0;

/// Anything that can be sampled by position.
pub trait Ramp {
    /// Color at `position`, clamped to `[0, domain_max]`.
    fn at(&self, position: f64) -> Color;

    /// Upper end of the domain (the lower end is always `0`).
    fn domain_max(&self) -> f64;

    /// `count` evenly spaced swatches, both ends included.
    fn colors(&self, count: usize) -> Vec<Color> {
        match count {
            0 => Vec::new(),
            1 => vec![self.at(0.0)],
            _ => {
                let max = self.domain_max();
                (0..count)
                    .map(|i| self.at(max * i as f64 / (count - 1) as f64))
                    .collect()
            }
        }
    }
}

/// How a scale interpolates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScaleOptions {
    pub space: ColorSpace,
    #[serde(default)]
    pub smooth: bool,
}

impl ScaleOptions {
    pub fn new(space: ColorSpace) -> Self {
        Self {
            space,
            smooth: false,
        }
    }

    pub fn smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }
}

/// A scale through an ordered list of key colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    keys: Vec<Color>,
    /// Key channels in `space`, hues filled in and unwrapped.
    points: Vec<[f64; 3]>,
    space: ColorSpace,
    smooth: bool,
    domain_max: f64,
}

impl ColorScale {
    /// Builds a scale over `[0, keys.len() - 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::NoKeys`] when `keys` is empty.
    pub fn build(keys: &[Color], options: ScaleOptions) -> Result<Self, ScaleError> {
        if keys.is_empty() {
            return Err(ScaleError::NoKeys);
        }
        Ok(Self::assemble(keys, options))
    }

    /// Builds a scale from a key set that is known to be non-empty.
    pub fn from_keys(keys: &KeyColors, options: ScaleOptions) -> Self {
        Self::assemble(keys.as_slice(), options)
    }

    pub(crate) fn assemble(keys: &[Color], options: ScaleOptions) -> Self {
        let smooth = if options.smooth && keys.len() < 3 {
            debug!(
                keys = keys.len(),
                "smooth scale needs at least 3 keys, falling back to stepped"
            );
            false
        } else {
            options.smooth
        };

        Self {
            keys: keys.to_vec(),
            points: prepare_points(keys, options.space),
            space: options.space,
            smooth,
            domain_max: (keys.len() - 1) as f64,
        }
    }

    /// Rescales the domain to `[0, max]`, keys staying evenly spaced.
    pub fn with_domain(mut self, max: f64) -> Self {
        self.domain_max = max;
        self
    }

    pub fn keys(&self) -> &[Color] {
        &self.keys
    }

    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Whether the scale actually interpolates with a spline.
    pub fn is_smooth(&self) -> bool {
        self.smooth
    }

    fn interpolate(&self, i: usize, f: f64) -> [f64; 3] {
        let p1 = self.points[i];
        let p2 = self.points[i + 1];
        if !self.smooth {
            return [0, 1, 2].map(|c| lerp(p1[c], p2[c], f));
        }
        let p0 = if i == 0 { p1 } else { self.points[i - 1] };
        let p3 = self.points.get(i + 2).copied().unwrap_or(p2);
        [0, 1, 2].map(|c| catmull_rom(p0[c], p1[c], p2[c], p3[c], f))
    }
}

impl Ramp for ColorScale {
    fn at(&self, position: f64) -> Color {
        let n = self.keys.len();
        if n == 1 || self.domain_max <= 0.0 || position.is_nan() {
            return self.keys[0];
        }

        let t = position.clamp(0.0, self.domain_max) * ((n - 1) as f64 / self.domain_max);
        let i = (t.floor() as usize).min(n - 2);
        let f = t - i as f64;

        // Keys come back untouched rather than through a conversion round trip.
        if f == 0.0 {
            return self.keys[i];
        }
        if f == 1.0 {
            return self.keys[i + 1];
        }

        let mut channels = self.interpolate(i, f);
        if let Some(h) = self.space.hue_index() {
            channels[h] = channels[h].rem_euclid(360.0);
        }
        from_space(channels, self.space)
    }

    fn domain_max(&self) -> f64 {
        self.domain_max
    }
}

/// Uniform Catmull-Rom segment between `p1` and `p2`.
fn catmull_rom(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * (2.0 * p1
        + (p2 - p0) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (3.0 * p1 - p0 - 3.0 * p2 + p3) * t3)
}

/// Key channels ready for interpolation.
///
/// Undefined hues take the nearest defined hue (earlier keys first), then
/// every hue is shifted by whole turns so that consecutive keys are never
/// more than 180° apart.
fn prepare_points(keys: &[Color], space: ColorSpace) -> Vec<[f64; 3]> {
    let mut points: Vec<[f64; 3]> = keys.iter().map(|k| k.channels_raw(space)).collect();

    let Some(h) = space.hue_index() else {
        return points;
    };

    for i in 0..points.len() {
        if points[i][h].is_nan() {
            let before = points[..i].iter().rev().map(|p| p[h]).find(|v| !v.is_nan());
            let after = points[i + 1..].iter().map(|p| p[h]).find(|v| !v.is_nan());
            if let Some(hue) = before.or(after) {
                points[i][h] = hue;
            }
        }
    }

    for i in 1..points.len() {
        let prev = points[i - 1][h];
        let cur = points[i][h];
        if prev.is_nan() || cur.is_nan() {
            continue;
        }
        let mut delta = (cur - prev).rem_euclid(360.0);
        if delta > 180.0 {
            delta -= 360.0;
        }
        points[i][h] = prev + delta;
    }

    points
}

/// Synthetic low-chroma middle key for a diverging scale.
///
/// Keeps the CAM02-UCS lightness of `middle`, takes the hue of the lightest
/// of `keys` and a fixed chroma of 8, so the two halves meet on a faint
/// tint rather than a hard grey.
pub fn equiluminant_key(middle: &Color, keys: &[Color]) -> Color {
    let lightness = to_space(middle, ColorSpace::Cam02p)[0];
    let lightest = order_by_luminosity(keys, LuminosityOrder::LightestFirst)
        .first()
        .copied()
        .unwrap_or(*middle);
    let hue = to_space(&lightest, ColorSpace::Cam02p)[2];
    from_space([lightness, EQUILUMINANT_CHROMA, hue], ColorSpace::Cam02p)
}

/// Two scales meeting at a middle key, over the domain `[0, 1]`.
///
/// The start half covers `[0, 0.5]` and the end half `[0.5, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DivergingColorScale {
    start: ColorScale,
    end: ColorScale,
    middle: Color,
}

impl DivergingColorScale {
    /// Builds `start + [middle]` and `[middle] + end` halves.
    ///
    /// With `equiluminant` set, `middle` is replaced by
    /// [`equiluminant_key`] of the original middle and all outer keys.
    /// Either side may be empty; each half always holds the middle key.
    pub fn build(
        start: &[Color],
        middle: Color,
        end: &[Color],
        options: ScaleOptions,
        equiluminant: bool,
    ) -> Self {
        let middle = if equiluminant {
            let outer: Vec<Color> = start.iter().chain(end).copied().collect();
            equiluminant_key(&middle, &outer)
        } else {
            middle
        };

        let start_keys: Vec<Color> = start.iter().copied().chain([middle]).collect();
        let end_keys: Vec<Color> = [middle].into_iter().chain(end.iter().copied()).collect();

        Self {
            start: ColorScale::assemble(&start_keys, options).with_domain(1.0),
            end: ColorScale::assemble(&end_keys, options).with_domain(1.0),
            middle,
        }
    }

    /// Builds from key sets; see [`build`](Self::build).
    pub fn from_keys(
        start: &KeyColors,
        middle: Color,
        end: &KeyColors,
        options: ScaleOptions,
        equiluminant: bool,
    ) -> Self {
        Self::build(start.as_slice(), middle, end.as_slice(), options, equiluminant)
    }

    /// The key both halves share.
    pub fn middle(&self) -> Color {
        self.middle
    }

    pub fn start(&self) -> &ColorScale {
        &self.start
    }

    pub fn end(&self) -> &ColorScale {
        &self.end
    }
}

impl Ramp for DivergingColorScale {
    fn at(&self, position: f64) -> Color {
        let position = if position.is_nan() { 0.0 } else { position.clamp(0.0, 1.0) };
        if position <= 0.5 {
            self.start.at(position * 2.0)
        } else {
            self.end.at((position - 0.5) * 2.0)
        }
    }

    fn domain_max(&self) -> f64 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyramp_color::parse;

    fn colors(hex: &[&str]) -> Vec<Color> {
        hex.iter().map(|h| parse(h).unwrap()).collect()
    }

    #[test]
    fn empty_keys_are_rejected() {
        assert_eq!(
            ColorScale::build(&[], ScaleOptions::default()),
            Err(ScaleError::NoKeys)
        );
    }

    #[test]
    fn single_key_is_constant() {
        let keys = colors(&["#336699"]);
        let scale = ColorScale::build(&keys, ScaleOptions::default()).unwrap();
        assert_eq!(scale.at(0.0), keys[0]);
        assert_eq!(scale.at(5.0), keys[0]);
        assert_eq!(scale.colors(3), vec![keys[0]; 3]);
    }

    #[test]
    fn keys_are_exact_at_integer_positions() {
        let keys = colors(&["#ffffcc", "#41b6c4", "#0c2c84", "#081d58"]);
        for space in ColorSpace::ALL {
            for smooth in [false, true] {
                let scale =
                    ColorScale::build(&keys, ScaleOptions::new(space).smooth(smooth)).unwrap();
                for (i, key) in keys.iter().enumerate() {
                    assert_eq!(scale.at(i as f64), *key, "{} smooth={}", space, smooth);
                }
            }
        }
    }

    #[test]
    fn smooth_needs_three_keys() {
        let two = colors(&["#000000", "#ff0000"]);
        let scale = ColorScale::build(&two, ScaleOptions::new(ColorSpace::Lab).smooth(true)).unwrap();
        assert!(!scale.is_smooth());

        let stepped = ColorScale::build(&two, ScaleOptions::new(ColorSpace::Lab)).unwrap();
        assert_eq!(scale.colors(9), stepped.colors(9));
    }

    #[test]
    fn hue_takes_the_short_way_round() {
        // 350° → 10° should pass through red, not cyan.
        let keys = [
            keyramp_color::from_space([350.0, 1.0, 0.5], ColorSpace::Hsl),
            keyramp_color::from_space([10.0, 1.0, 0.5], ColorSpace::Hsl),
        ];
        let scale = ColorScale::build(&keys, ScaleOptions::new(ColorSpace::Hsl)).unwrap();
        assert_eq!(scale.at(0.5).to_hex(), "#ff0000");
    }

    #[test]
    fn grey_borrows_neighbor_hue() {
        let keys = colors(&["#808080", "#0000ff"]);
        let scale = ColorScale::build(&keys, ScaleOptions::new(ColorSpace::Hsl)).unwrap();
        let [r, g, b] = scale.at(0.5).rgb();
        // Halfway between grey and blue in HSL is a muted blue, never red.
        assert!(b > r && b > g, "{:?}", [r, g, b]);
        assert!((r - g).abs() < 1e-6);
    }

    #[test]
    fn grey_borrows_neighbor_hue_in_hsluv() {
        let keys = colors(&["#808080", "#00aa00"]);
        let scale = ColorScale::build(&keys, ScaleOptions::new(ColorSpace::Hsluv)).unwrap();
        for position in [0.25, 0.5, 0.75] {
            let [r, g, b] = scale.at(position).rgb();
            // Grey has no HSLuv hue, so the ramp stays on green's.
            assert!(g > r && g > b, "{} -> {:?}", position, [r, g, b]);
        }
    }

    #[test]
    fn custom_domain() {
        let keys = colors(&["#000000", "#ffffff"]);
        let scale = ColorScale::build(&keys, ScaleOptions::new(ColorSpace::Rgb))
            .unwrap()
            .with_domain(100.0);
        assert_eq!(scale.domain_max(), 100.0);
        assert_eq!(scale.at(50.0).rgb(), [127.5; 3]);
        assert_eq!(scale.at(250.0), keys[1]);
    }

    #[test]
    fn colors_samples_both_ends() {
        let keys = colors(&["#000000", "#ffffff"]);
        let scale = ColorScale::build(&keys, ScaleOptions::new(ColorSpace::Rgb)).unwrap();
        let samples = scale.colors(5);
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0], keys[0]);
        assert_eq!(samples[4], keys[1]);
        assert!(scale.colors(0).is_empty());
    }

    #[test]
    fn equiluminant_key_keeps_lightness() {
        let middle = parse("#f0f0f0").unwrap();
        let keys = colors(&["#0000ff", "#ffeecc", "#880000"]);
        let key = equiluminant_key(&middle, &keys);
        let [j0, _, _] = to_space(&middle, ColorSpace::Cam02p);
        let [j1, c1, h1] = to_space(&key, ColorSpace::Cam02p);
        assert!((j0 - j1).abs() < 0.5, "{} vs {}", j0, j1);
        assert!((c1 - EQUILUMINANT_CHROMA).abs() < 0.5);

        // #ffeecc is the lightest key; its hue wins over list order.
        let lightest_hue = to_space(&keys[1], ColorSpace::Cam02p)[2];
        assert!((h1 - lightest_hue).abs() < 0.5, "{} vs {}", h1, lightest_hue);
    }

    #[test]
    fn equiluminant_middle_is_shared_by_both_halves() {
        let start = colors(&["#0000ff", "#ffeecc"]);
        let end = colors(&["#880000"]);
        let middle = parse("#f0f0f0").unwrap();
        let scale =
            DivergingColorScale::build(&start, middle, &end, ScaleOptions::new(ColorSpace::Lab), true);

        let outer: Vec<Color> = start.iter().chain(&end).copied().collect();
        assert_eq!(scale.middle(), equiluminant_key(&middle, &outer));
        assert_ne!(scale.middle(), middle);
        assert_eq!(scale.at(0.5), scale.middle());
        assert_eq!(scale.at(0.0), start[0]);
        assert_eq!(scale.at(1.0), end[0]);
    }

    #[test]
    fn diverging_halves_meet_at_middle() {
        let start = colors(&["#0000ff"]);
        let end = colors(&["#ff0000"]);
        let middle = parse("#ffffff").unwrap();
        let scale =
            DivergingColorScale::build(&start, middle, &end, ScaleOptions::new(ColorSpace::Lab), false);
        assert_eq!(scale.at(0.0), start[0]);
        assert_eq!(scale.at(0.5), middle);
        assert_eq!(scale.at(1.0), end[0]);
        assert_eq!(scale.domain_max(), 1.0);
    }
}
