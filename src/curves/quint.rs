//! Quintic easing.

/// Quintic ease-in: `t^5`.
///
/// Expects `t` in `[0, 1]`; values outside that range are extrapolated by
/// the same formula, not clamped.
pub fn ease_in_quint(t: f64) -> f64 {
    let t2 = t * t;
    t * t2 * t2
}

/// Quintic ease-out: `1 + (t - 1)^5`.
pub fn ease_out_quint(t: f64) -> f64 {
    let t1 = t - 1.0;
    let t2 = t1 * t1;
    1.0 + t1 * t2 * t2
}

/// Quintic ease-in-out.
pub fn ease_inout_quint(t: f64) -> f64 {
    if t < 0.5 {
        let t2 = t * t;
        16.0 * t * t2 * t2
    } else {
        let t1 = t - 1.0;
        let t2 = t1 * t1;
        1.0 + 16.0 * t1 * t2 * t2
    }
}
