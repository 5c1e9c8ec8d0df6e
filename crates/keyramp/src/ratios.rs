//! Contrast-ratio lists and their luminosity counterparts.
//!
//! Every ratio in a theme has a luminosity (the HSLuv lightness of the
//! color that reaches it) and a grey preview swatch. Editing one side
//! recomputes the other through a [`ContrastEngine`].

use keyramp_color::{from_space, lerp, round, Color, ColorSpace};
use serde::{Deserialize, Serialize};

use crate::contrast::ContrastEngine;

/// Highest WCAG contrast ratio.
pub const MAX_RATIO: f64 = 21.0;

/// A ratio, the luminosity it resolves to, and a preview swatch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioEntry {
    pub ratio: f64,
    pub luminosity: f64,
    pub swatch: Color,
}

impl RatioEntry {
    /// Entry for `ratio`, luminosity and swatch derived from `engine`.
    pub fn from_ratio(engine: &dyn ContrastEngine, ratio: f64) -> Self {
        let (luminosity, swatch) = sync_from_ratio(engine, ratio);
        Self {
            ratio,
            luminosity,
            swatch,
        }
    }

    /// Entry for `luminosity`, keeping the hue and saturation of `self.swatch`.
    pub fn with_luminosity(&self, engine: &dyn ContrastEngine, luminosity: f64) -> Self {
        let (ratio, swatch) = sync_from_luminosity(engine, &self.swatch, luminosity);
        Self {
            ratio,
            luminosity,
            swatch,
        }
    }
}

/// Ratio for a newly added entry: one above the current highest, or one
/// below when the list already reaches 21.
///
/// ```rust
/// use keyramp::next_ratio;
///
/// assert_eq!(next_ratio(&[3.0, 4.5]), 5.5);
/// assert_eq!(next_ratio(&[21.0]), 20.0);
/// assert_eq!(next_ratio(&[]), 1.0);
/// ```
pub fn next_ratio(values: &[f64]) -> f64 {
    let Some(hi) = values.iter().copied().reduce(f64::max) else {
        return 1.0;
    };
    let next = if hi >= MAX_RATIO { hi - 1.0 } else { hi + 1.0 };
    round(next.min(MAX_RATIO), 2)
}

/// Spreads values linearly between their minimum and maximum, keeping
/// the count. Results are rounded to 2 decimals.
pub fn distribute_evenly(values: &[f64]) -> Vec<f64> {
    if values.len() < 2 {
        return values.to_vec();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let last = (values.len() - 1) as f64;
    (0..values.len())
        .map(|i| round(lerp(min, max, i as f64 / last), 2))
        .collect()
}

/// Like [`distribute_evenly`], highest first: luminosity lists run from
/// light to dark as ratios rise.
pub fn distribute_luminosity(values: &[f64]) -> Vec<f64> {
    let mut spread = distribute_evenly(values);
    spread.reverse();
    spread
}

/// Stable ascending sort.
pub fn sort_by_value(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Direction of a keyboard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
}

/// `value` moved by one whole unit, rounded to 2 decimals.
pub fn step_ratio(value: f64, direction: Step) -> f64 {
    match direction {
        Step::Up => round(value + 1.0, 2),
        Step::Down => round(value - 1.0, 2),
    }
}

/// Luminosity and grey swatch for a ratio.
pub fn sync_from_ratio(engine: &dyn ContrastEngine, ratio: f64) -> (f64, Color) {
    let generated = engine.generate(ratio);
    let luminosity = round(generated.luminosity(), 2);
    (luminosity, grey(luminosity))
}

/// Ratio and swatch for a luminosity.
///
/// The swatch keeps the hue and saturation of `current` and takes the new
/// lightness; the ratio is measured from it.
pub fn sync_from_luminosity(
    engine: &dyn ContrastEngine,
    current: &Color,
    luminosity: f64,
) -> (f64, Color) {
    let swatch = current.with_luminosity(luminosity);
    let ratio = round(engine.contrast(&swatch, &engine.background()), 2);
    (ratio, swatch)
}

fn grey(luminosity: f64) -> Color {
    from_space([0.0, 0.0, luminosity], ColorSpace::Hsluv)
}
