//! Duration-scaled linear interpolation.
//!
//! This family follows the older four-argument animation-timing convention
//! (`time, start, delta, duration`) rather than the normalized `f(t)` shape
//! of the other families: `value = start + delta * time / duration`. The
//! asymmetry is deliberate; both conventions have downstream callers.
//!
//! All three profile variants compute the same straight line. A zero
//! `duration` yields the usual floating-point infinity/NaN; it is not
//! treated as an error here.

/// Linear ease-in: `start + delta * time / duration`.
///
/// # Examples
///
/// ```
/// use softstep::curves::ease_in_linear;
///
/// // halfway through a 4-beat sweep from 10 up by 20
/// assert_eq!(ease_in_linear(2.0, 10.0, 20.0, 4.0), 20.0);
/// ```
pub fn ease_in_linear(time: f64, start: f64, delta: f64, duration: f64) -> f64 {
    delta * time / duration + start
}

/// Linear ease-out. Identical to [`ease_in_linear`]; a straight line has no
/// profile.
pub fn ease_out_linear(time: f64, start: f64, delta: f64, duration: f64) -> f64 {
    delta * time / duration + start
}

/// Linear ease-in-out. Identical to [`ease_in_linear`].
pub fn ease_inout_linear(time: f64, start: f64, delta: f64, duration: f64) -> f64 {
    delta * time / duration + start
}
