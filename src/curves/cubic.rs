//! Cubic easing.

/// Cubic ease-in: `t^3`.
///
/// Expects `t` in `[0, 1]`; values outside that range are extrapolated by
/// the same formula, not clamped.
pub fn ease_in_cubic(t: f64) -> f64 {
    t * t * t
}

/// Cubic ease-out: `1 + (t - 1)^3`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t1 = t - 1.0;
    1.0 + t1 * t1 * t1
}

/// Cubic ease-in-out.
///
/// # Examples
///
/// ```
/// use softstep::curves::ease_inout_cubic;
///
/// assert_eq!(ease_inout_cubic(0.25), 0.0625);
/// ```
pub fn ease_inout_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let t1 = t - 1.0;
        1.0 + t1 * (2.0 * t1) * (2.0 * t1)
    }
}
