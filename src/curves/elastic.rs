//! Elastic easing: damped oscillation curves.
//!
//! The oscillation frequencies (4.5π, 9π, 4π) and the in-out branch points
//! at 0.45 / 0.55 are exact literals from the classic formulation; the
//! quartic damping envelope keeps the endpoints anchored.

use std::f64::consts::PI;

/// Elastic ease-in: oscillates around 0 with growing amplitude, ending at 1.
///
/// Expects `t` in `[0, 1]`; values outside that range are extrapolated by
/// the same formula, not clamped. Intermediate values swing below 0.
pub fn ease_in_elastic(t: f64) -> f64 {
    let t2 = t * t;
    t2 * t2 * (t * PI * 4.5).sin()
}

/// Elastic ease-out: overshoots 1 and rings down onto it.
pub fn ease_out_elastic(t: f64) -> f64 {
    let t2 = (t - 1.0) * (t - 1.0);
    1.0 - t2 * t2 * (t * PI * 4.5).cos()
}

/// Elastic ease-in-out.
///
/// Three branches: ring-in below `t = 0.45`, a plain sine crossing through
/// the midpoint for `0.45 <= t < 0.55`, ring-out above.
pub fn ease_inout_elastic(t: f64) -> f64 {
    if t < 0.45 {
        let t2 = t * t;
        8.0 * t2 * t2 * (t * PI * 9.0).sin()
    } else if t < 0.55 {
        0.5 + 0.75 * (t * PI * 4.0).sin()
    } else {
        let t2 = (t - 1.0) * (t - 1.0);
        1.0 - 8.0 * t2 * t2 * (t * PI * 9.0).sin()
    }
}
