//! Finding where on a scale a given luminosity lives.
//!
//! Scales used for contrast palettes are (close to) monotonic in HSLuv
//! lightness, so a bisection over the domain converges quickly. The search
//! never fails: if it runs out of iterations it returns its best candidate and
//! says so in [`Location::converged`].

use keyramp_color::{round, Color};
use tracing::debug;

use crate::scale::Ramp;

/// Maximum number of bisection steps.
const MAX_ITERATIONS: u32 = 100;
/// Acceptable distance, in lightness units, from the target.
const TOLERANCE: f64 = 0.01;
/// The target is nudged away from zero by this much before searching.
const TARGET_NUDGE: f64 = 0.005;

/// Result of a luminosity search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Position on the scale, rounded to 3 decimals.
    pub position: f64,
    /// Bisection steps taken.
    pub iterations: u32,
    /// Whether the final candidate was within tolerance of the target.
    pub converged: bool,
}

/// Locates the position in `[0, domain_max]` whose color has HSLuv
/// lightness `target`.
///
/// ```rust
/// use keyramp::{locate, ColorScale, Ramp, ScaleOptions};
/// use keyramp::color::{parse, ColorSpace};
///
/// let keys = ["#000000", "#ffffff"].map(|c| parse(c).unwrap());
/// let scale = ColorScale::build(&keys, ScaleOptions::new(ColorSpace::Lab))
///     .unwrap()
///     .with_domain(100.0);
///
/// let found = locate(&scale, 100.0, 25.0);
/// assert!(found.converged);
/// assert!((found.position - 25.0).abs() < 0.01);
/// ```
pub fn locate<R: Ramp + ?Sized>(scale: &R, domain_max: f64, target: f64) -> Location {
    let luminosity = |position: f64| scale.at(position).luminosity();

    let first = luminosity(0.0);
    let last = luminosity(domain_max);
    let dir = if first < last { 1.0 } else { -1.0 };

    let target = if target == 0.0 {
        target
    } else {
        target + TARGET_NUDGE * target.signum()
    };

    let mut step = domain_max / 2.0;
    let mut candidate = step;
    let mut value = luminosity(candidate);
    let mut iterations = 0;

    while (value - target).abs() > TOLERANCE && iterations < MAX_ITERATIONS {
        iterations += 1;
        step /= 2.0;
        if value < target {
            candidate += step * dir;
        } else {
            candidate -= step * dir;
        }
        value = luminosity(candidate);
    }

    let converged = (value - target).abs() <= TOLERANCE;
    if !converged {
        debug!(
            target,
            best = value,
            position = candidate,
            "luminosity search did not converge"
        );
    }

    Location {
        position: round(candidate, 3),
        iterations,
        converged,
    }
}

/// One swatch per requested luminosity, in request order.
pub fn find_matching_luminosity<R: Ramp + ?Sized>(
    scale: &R,
    domain_max: f64,
    luminosities: &[f64],
) -> Vec<Color> {
    luminosities
        .iter()
        .map(|&target| scale.at(locate(scale, domain_max, target).position))
        .collect()
}
