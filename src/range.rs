//! Range utilities: clamping and linear rescaling.
//!
//! These two helpers accompany the easing curves: callers clamp a progress
//! value into a curve's documented domain, or rescale a curved output into a
//! concrete parameter range. Malformed bounds are caller contract violations
//! and are reported as an explicit error rather than propagating inf/NaN.

use std::fmt;

/// Error type for range operations called with malformed bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// `clamp` was called with `low > high`
    InvertedBounds { low: f64, high: f64 },
    /// `linear_scale` was called with an empty source range
    DegenerateRange { min: f64, max: f64 },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::InvertedBounds { low, high } => {
                write!(f, "inverted clamp bounds: low {} > high {}", low, high)
            }
            DomainError::DegenerateRange { min, max } => {
                write!(f, "degenerate source range: [{}, {}]", min, max)
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// Bounds a value to the closed interval `[low, high]`.
///
/// # Errors
///
/// Returns [`DomainError::InvertedBounds`] when `low > high`. The bounds are
/// never swapped; an inverted interval almost always means the caller mixed
/// up its arguments, and swapping would mask that bug.
///
/// # Examples
///
/// ```
/// use softstep::range::clamp;
///
/// assert_eq!(clamp(2.1, 2.5, 5.0).unwrap(), 2.5);
/// assert_eq!(clamp(3.7, 2.5, 5.0).unwrap(), 3.7);
/// assert_eq!(clamp(9.0, 2.5, 5.0).unwrap(), 5.0);
/// ```
pub fn clamp(value: f64, low: f64, high: f64) -> Result<f64, DomainError> {
    if low > high {
        return Err(DomainError::InvertedBounds { low, high });
    }
    Ok(value.min(high).max(low))
}

/// Rescales `x` from the interval `[from_min, from_max]` to
/// `[to_min, to_max]`.
///
/// The mapping is linear and is not clamped: an `x` outside the source
/// interval lands proportionally outside the target interval.
///
/// # Errors
///
/// Returns [`DomainError::DegenerateRange`] when `from_min == from_max`,
/// since the rescale would otherwise divide by zero.
///
/// # Examples
///
/// ```
/// use softstep::range::linear_scale;
///
/// assert_eq!(linear_scale(50.0, 0.0, 100.0, 0.0, 4000.0).unwrap(), 2000.0);
/// assert!(linear_scale(1.0, 0.0, 0.0, 0.0, 127.0).is_err());
/// ```
pub fn linear_scale(
    x: f64,
    from_min: f64,
    from_max: f64,
    to_min: f64,
    to_max: f64,
) -> Result<f64, DomainError> {
    if from_min == from_max {
        return Err(DomainError::DegenerateRange {
            min: from_min,
            max: from_max,
        });
    }
    Ok((to_max - to_min) * (x - from_min) / (from_max - from_min) + to_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_within_bounds() {
        assert_eq!(clamp(3.0, 2.5, 5.0).unwrap(), 3.0);
    }

    #[test]
    fn test_clamp_below_low() {
        assert_eq!(clamp(2.1, 2.5, 5.0).unwrap(), 2.5);
    }

    #[test]
    fn test_clamp_above_high() {
        assert_eq!(clamp(7.2, 2.5, 5.0).unwrap(), 5.0);
    }

    #[test]
    fn test_clamp_at_bounds() {
        assert_eq!(clamp(2.5, 2.5, 5.0).unwrap(), 2.5);
        assert_eq!(clamp(5.0, 2.5, 5.0).unwrap(), 5.0);
    }

    #[test]
    fn test_clamp_inverted_bounds() {
        let err = clamp(3.0, 5.0, 2.5).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvertedBounds {
                low: 5.0,
                high: 2.5
            }
        );
    }

    #[test]
    fn test_clamp_equal_bounds() {
        assert_eq!(clamp(100.0, 4.0, 4.0).unwrap(), 4.0);
    }

    #[test]
    fn test_linear_scale_midpoint() {
        assert_eq!(linear_scale(50.0, 0.0, 100.0, 0.0, 4000.0).unwrap(), 2000.0);
    }

    #[test]
    fn test_linear_scale_negative_source() {
        // bipolar LFO output into a 0..1 control
        assert_eq!(linear_scale(0.0, -1.0, 1.0, 0.0, 1.0).unwrap(), 0.5);
    }

    #[test]
    fn test_linear_scale_inverted_target() {
        assert_eq!(linear_scale(25.0, 0.0, 100.0, 1.0, 0.0).unwrap(), 0.75);
    }

    #[test]
    fn test_linear_scale_extrapolates() {
        assert_eq!(linear_scale(150.0, 0.0, 100.0, 0.0, 10.0).unwrap(), 15.0);
    }

    #[test]
    fn test_linear_scale_degenerate_range() {
        let err = linear_scale(1.0, 3.0, 3.0, 0.0, 10.0).unwrap_err();
        assert_eq!(err, DomainError::DegenerateRange { min: 3.0, max: 3.0 });
    }

    #[test]
    fn test_error_display() {
        let err = linear_scale(1.0, 0.0, 0.0, 0.0, 1.0).unwrap_err();
        assert_eq!(err.to_string(), "degenerate source range: [0, 0]");
    }
}
