//! Back easing: overshooting cubic curves.
//!
//! The tuning constants 2.70158 / 1.70158 (and 7 / 2.5 for the in-out
//! halves) come from the classic Penner-style back ease and set the amount
//! of anticipation/overshoot. They are kept as exact literals; changing
//! them changes the curve shape perceptibly.

/// Back ease-in: pulls below 0 before accelerating toward 1.
///
/// Expects `t` in `[0, 1]`; values outside that range are extrapolated by
/// the same formula, not clamped. Intermediate values dip below 0; the
/// endpoints are anchored at exactly 0 and 1.
pub fn ease_in_back(t: f64) -> f64 {
    t * t * (2.70158 * t - 1.70158)
}

/// Back ease-out: overshoots past 1 before settling back.
pub fn ease_out_back(t: f64) -> f64 {
    let t1 = t - 1.0;
    1.0 + t1 * t1 * (2.70158 * t1 + 1.70158)
}

/// Back ease-in-out: undershoots below 0, then overshoots past 1.
pub fn ease_inout_back(t: f64) -> f64 {
    if t < 0.5 {
        t * t * (7.0 * t - 2.5) * 2.0
    } else {
        let t1 = t - 1.0;
        1.0 + t1 * t1 * 2.0 * (7.0 * t1 + 2.5)
    }
}
