//! Sinusoidal easing, built from quarter and half periods of a sine wave.

use std::f64::consts::{FRAC_PI_2, PI};

/// Sine ease-in: the first quarter period of a sine wave.
///
/// Expects `t` in `[0, 1]`; values outside that range are extrapolated by
/// the same formula, not clamped.
///
/// # Examples
///
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// use softstep::curves::ease_in_sine;
///
/// assert_approx_eq!(ease_in_sine(0.5), 0.70710678, 1e-8);
/// ```
pub fn ease_in_sine(t: f64) -> f64 {
    (FRAC_PI_2 * t).sin()
}

/// Sine ease-out: the mirror of [`ease_in_sine`] about the curve midpoint.
pub fn ease_out_sine(t: f64) -> f64 {
    1.0 + (FRAC_PI_2 * (t - 1.0)).sin()
}

/// Sine ease-in-out: a half period of a sine wave, rescaled to `[0, 1]`.
pub fn ease_inout_sine(t: f64) -> f64 {
    0.5 * (1.0 + (PI * (t - 0.5)).sin())
}
