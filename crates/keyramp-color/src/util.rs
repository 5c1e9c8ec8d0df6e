//! Small numeric helpers shared by the codec, the projector and downstream crates.

/// Rounds `x` to `digits` decimal places, with halves rounding toward +∞.
///
/// This is the rounding the palette UI displays with (`2.5 → 3`, `-2.5 → -2`),
/// which differs from [`f64::round`] for negative halves. Negative zero is
/// normalized to `0.0` so it never prints as `-0`.
///
/// ```rust
/// use keyramp_color::round;
///
/// assert_eq!(round(4.567, 2), 4.57);
/// assert_eq!(round(-2.5, 0), -2.0);
/// assert_eq!(round(-0.2, 0).to_string(), "0");
/// ```
pub fn round(x: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (x * factor + 0.5).floor() / factor + 0.0
}

/// Replaces a non-finite value with `0.0`.
///
/// Channel math regularly produces `NaN` hues for achromatic colors; a single
/// bad channel must never poison a whole batch.
pub fn filter_nan(x: f64) -> f64 {
    if x.is_finite() {
        x
    } else {
        0.0
    }
}

/// Linear interpolation, exact at both ends (`lerp(a, b, 1.0) == b`).
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}
