//! Bounce easing: rectified sine under an exponential envelope.
//!
//! The absolute value of a 3.5π (7π for in-out) sine produces the bounces;
//! a base-2 exponential envelope scales their height. Constants are exact
//! literals from the classic formulation.

use std::f64::consts::PI;

/// Bounce ease-in: small bounces growing toward 1.
///
/// Expects `t` in `[0, 1]`; values outside that range are extrapolated by
/// the same formula, not clamped.
pub fn ease_in_bounce(t: f64) -> f64 {
    2.0_f64.powf(6.0 * (t - 1.0)) * (t * PI * 3.5).sin().abs()
}

/// Bounce ease-out: large first bounce decaying onto 1.
pub fn ease_out_bounce(t: f64) -> f64 {
    1.0 - 2.0_f64.powf(-6.0 * t) * (t * PI * 3.5).cos().abs()
}

/// Bounce ease-in-out.
pub fn ease_inout_bounce(t: f64) -> f64 {
    if t < 0.5 {
        8.0 * 2.0_f64.powf(8.0 * (t - 1.0)) * (t * PI * 7.0).sin().abs()
    } else {
        1.0 - 8.0 * 2.0_f64.powf(-8.0 * t) * (t * PI * 7.0).sin().abs()
    }
}
