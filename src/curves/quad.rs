//! Quadratic easing.

/// Quadratic ease-in: `t^2`.
///
/// Expects `t` in `[0, 1]`; values outside that range are extrapolated by
/// the same formula, not clamped.
///
/// # Examples
///
/// ```
/// use softstep::curves::ease_in_quad;
///
/// assert_eq!(ease_in_quad(0.5), 0.25);
/// ```
pub fn ease_in_quad(t: f64) -> f64 {
    t * t
}

/// Quadratic ease-out: `t * (2 - t)`.
///
/// # Examples
///
/// ```
/// use softstep::curves::ease_out_quad;
///
/// assert_eq!(ease_out_quad(0.5), 0.75);
/// ```
pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

/// Quadratic ease-in-out: ease-in below the midpoint, ease-out above it.
pub fn ease_inout_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        t * (4.0 - 2.0 * t) - 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(ease_in_quad(0.0), 0.0);
        assert_eq!(ease_in_quad(1.0), 1.0);
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
        assert_eq!(ease_inout_quad(0.0), 0.0);
        assert_eq!(ease_inout_quad(1.0), 1.0);
    }

    #[test]
    fn test_quarter_points() {
        assert_eq!(ease_in_quad(0.25), 0.0625);
        assert_eq!(ease_inout_quad(0.25), 0.125);
        assert_eq!(ease_inout_quad(0.75), 0.875);
    }

    #[test]
    fn test_midpoint_branch_join() {
        assert_eq!(ease_inout_quad(0.5), 0.5);
    }

    #[test]
    fn test_extrapolates_past_one() {
        // no internal clamping
        assert_eq!(ease_in_quad(2.0), 4.0);
    }
}
