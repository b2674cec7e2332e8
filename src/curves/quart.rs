//! Quartic easing.

/// Quartic ease-in: `t^4`.
///
/// Expects `t` in `[0, 1]`; values outside that range are extrapolated by
/// the same formula, not clamped.
pub fn ease_in_quart(t: f64) -> f64 {
    let t2 = t * t;
    t2 * t2
}

/// Quartic ease-out: `1 - (t - 1)^4`.
pub fn ease_out_quart(t: f64) -> f64 {
    let t1 = t - 1.0;
    let t2 = t1 * t1;
    1.0 - t2 * t2
}

/// Quartic ease-in-out.
pub fn ease_inout_quart(t: f64) -> f64 {
    if t < 0.5 {
        let t2 = t * t;
        8.0 * t2 * t2
    } else {
        let t1 = t - 1.0;
        let t2 = t1 * t1;
        1.0 - 8.0 * t2 * t2
    }
}
