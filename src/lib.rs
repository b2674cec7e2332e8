//! Softstep - easing and interpolation curves for audio parameter shaping
//!
//! This library provides a family of named easing curves (sine, quad,
//! cubic, quart, quint, expo, circ, back, elastic, bounce - each with
//! ease-in, ease-out, and ease-in-out profiles) plus the clamp and linear
//! rescale utilities that usually travel with them. Every function is pure,
//! stateless, and allocation-free, so curves can be evaluated from a
//! real-time audio callback or from any number of threads without
//! synchronization.
//!
//! Curves can be called directly as free functions, or selected at runtime
//! through the [`Curve`] identifier, which parses from configuration
//! strings and dispatches through a read-only function-pointer table.

pub mod curves;
pub mod range;

// Re-export commonly used types at the crate root
pub use curves::{Curve, Family, ParseCurveError, Profile};
pub use range::{DomainError, clamp, linear_scale};
