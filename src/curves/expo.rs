//! Exponential easing, normalized base-2 power curves.
//!
//! The curves use `2^(8t)` scaled by `1/255` (and `2^(16t)` by `1/510` for
//! the in-out halves) so that the ease-in variant is anchored exactly at
//! `f(0) = 0` and `f(1) = 1`. The ease-out variant pays for the same shape
//! with an endpoint offset: `ease_out_expo(1) = 1 - 2^-8`, not exactly 1.

/// Exponential ease-in: `(2^(8t) - 1) / 255`.
///
/// Expects `t` in `[0, 1]`; values outside that range are extrapolated by
/// the same formula, not clamped.
pub fn ease_in_expo(t: f64) -> f64 {
    (2.0_f64.powf(8.0 * t) - 1.0) / 255.0
}

/// Exponential ease-out: `1 - 2^(-8t)`.
///
/// Approaches but does not reach 1: `ease_out_expo(1.0)` is `1 - 1/256`.
pub fn ease_out_expo(t: f64) -> f64 {
    1.0 - 2.0_f64.powf(-8.0 * t)
}

/// Exponential ease-in-out.
///
/// `ease_inout_expo(1.0)` is `1 - 1/512`, see [`ease_out_expo`].
pub fn ease_inout_expo(t: f64) -> f64 {
    if t < 0.5 {
        (2.0_f64.powf(16.0 * t) - 1.0) / 510.0
    } else {
        1.0 - 0.5 * 2.0_f64.powf(-16.0 * (t - 0.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_in_expo_endpoints() {
        assert!(ease_in_expo(0.0).abs() < EPSILON);
        assert!((ease_in_expo(1.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_out_expo_endpoint_offset() {
        assert!(ease_out_expo(0.0).abs() < EPSILON);
        assert!((ease_out_expo(1.0) - (1.0 - 1.0 / 256.0)).abs() < EPSILON);
    }

    #[test]
    fn test_inout_expo_endpoint_offset() {
        assert!(ease_inout_expo(0.0).abs() < EPSILON);
        assert!((ease_inout_expo(1.0) - (1.0 - 1.0 / 512.0)).abs() < EPSILON);
    }

    #[test]
    fn test_in_expo_halfway() {
        // (2^4 - 1) / 255
        assert!((ease_in_expo(0.5) - 15.0 / 255.0).abs() < EPSILON);
    }

    #[test]
    fn test_inout_expo_midpoint_branch_join() {
        assert!((ease_inout_expo(0.5) - 0.5).abs() < EPSILON);
        assert!((ease_inout_expo(0.5 - 1e-9) - 0.5).abs() < 1e-7);
    }
}
