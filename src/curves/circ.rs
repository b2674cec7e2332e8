//! Square-root ("circular") easing.
//!
//! Unlike the polynomial families, these formulas involve a square root of
//! an expression that goes negative outside `[0, 1]`, so extrapolation past
//! the documented domain yields NaN rather than an overshoot.

/// Circular ease-in: `1 - sqrt(1 - t)`.
///
/// Expects `t` in `[0, 1]`; `t > 1` yields NaN.
pub fn ease_in_circ(t: f64) -> f64 {
    1.0 - (1.0 - t).sqrt()
}

/// Circular ease-out: `sqrt(t)`.
///
/// Expects `t` in `[0, 1]`; `t < 0` yields NaN.
pub fn ease_out_circ(t: f64) -> f64 {
    t.sqrt()
}

/// Circular ease-in-out.
pub fn ease_inout_circ(t: f64) -> f64 {
    if t < 0.5 {
        (1.0 - (1.0 - 2.0 * t).sqrt()) * 0.5
    } else {
        (1.0 + (2.0 * t - 1.0).sqrt()) * 0.5
    }
}
