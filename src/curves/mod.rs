//! Named easing curves and dynamic curve selection.
//!
//! Each curve family lives in its own module as three pure free functions
//! (`ease_in_*`, `ease_out_*`, `ease_inout_*`). This module adds the
//! [`Family`] and [`Profile`] enumerations and the [`Curve`] identifier
//! pair, which dispatches through a read-only table of function pointers so
//! callers can pick a curve at runtime (for example from a configuration
//! string) without a conditional chain.
//!
//! All curve functions are pure, allocation-free, and reentrant, and safe
//! to call from a real-time audio callback. They expect `t` in `[0, 1]`
//! and never clamp: out-of-range inputs are extrapolated, so callers that
//! want saturation compose [`crate::range::clamp`] explicitly.

mod back;
mod bounce;
mod circ;
mod cubic;
mod elastic;
mod expo;
mod linear;
mod quad;
mod quart;
mod quint;
mod sine;

pub use back::{ease_in_back, ease_inout_back, ease_out_back};
pub use bounce::{ease_in_bounce, ease_inout_bounce, ease_out_bounce};
pub use circ::{ease_in_circ, ease_inout_circ, ease_out_circ};
pub use cubic::{ease_in_cubic, ease_inout_cubic, ease_out_cubic};
pub use elastic::{ease_in_elastic, ease_inout_elastic, ease_out_elastic};
pub use expo::{ease_in_expo, ease_inout_expo, ease_out_expo};
pub use linear::{ease_in_linear, ease_inout_linear, ease_out_linear};
pub use quad::{ease_in_quad, ease_inout_quad, ease_out_quad};
pub use quart::{ease_in_quart, ease_inout_quart, ease_out_quart};
pub use quint::{ease_in_quint, ease_inout_quint, ease_out_quint};
pub use sine::{ease_in_sine, ease_inout_sine, ease_out_sine};

use std::fmt;
use std::str::FromStr;

use crate::range::{DomainError, linear_scale};

/// Error type for parsing curve identifiers from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCurveError {
    /// The input string was empty
    Empty,
    /// The profile prefix was missing or unrecognized
    InvalidProfile(String),
    /// The family name was invalid or unrecognized
    InvalidFamily(String),
}

impl fmt::Display for ParseCurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCurveError::Empty => write!(f, "input string is empty"),
            ParseCurveError::InvalidProfile(s) => write!(f, "invalid curve profile: '{}'", s),
            ParseCurveError::InvalidFamily(s) => write!(f, "invalid curve family: '{}'", s),
        }
    }
}

impl std::error::Error for ParseCurveError {}

/// The ten normalized easing curve families.
///
/// A family is the underlying curve shape before a [`Profile`] variant is
/// applied. The duration-scaled linear family is not listed here because
/// its four-argument signature cannot share the `fn(f64) -> f64` dispatch
/// table; see [`ease_in_linear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Sine,
    Quad,
    Cubic,
    Quart,
    Quint,
    Expo,
    Circ,
    Back,
    Elastic,
    Bounce,
}

impl Family {
    /// Every family, in dispatch-table order.
    pub const ALL: [Family; 10] = [
        Family::Sine,
        Family::Quad,
        Family::Cubic,
        Family::Quart,
        Family::Quint,
        Family::Expo,
        Family::Circ,
        Family::Back,
        Family::Elastic,
        Family::Bounce,
    ];

    /// Returns the canonical lowercase name of this family.
    pub fn name(&self) -> &'static str {
        match self {
            Family::Sine => "sine",
            Family::Quad => "quad",
            Family::Cubic => "cubic",
            Family::Quart => "quart",
            Family::Quint => "quint",
            Family::Expo => "expo",
            Family::Circ => "circ",
            Family::Back => "back",
            Family::Elastic => "elastic",
            Family::Bounce => "bounce",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = ParseCurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sine" => Ok(Family::Sine),
            "quad" => Ok(Family::Quad),
            "cubic" => Ok(Family::Cubic),
            "quart" => Ok(Family::Quart),
            "quint" => Ok(Family::Quint),
            "expo" | "exponential" => Ok(Family::Expo),
            "circ" | "circular" => Ok(Family::Circ),
            "back" => Ok(Family::Back),
            "elastic" => Ok(Family::Elastic),
            "bounce" => Ok(Family::Bounce),
            _ => Err(ParseCurveError::InvalidFamily(s.to_string())),
        }
    }
}

/// The temporal profile of a curve: where acceleration and deceleration
/// happen along the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Profile {
    /// Shaping applied at the start of the transition
    #[default]
    In,
    /// Shaping applied at the end
    Out,
    /// Shaping applied symmetrically at both ends
    InOut,
}

impl Profile {
    /// Every profile, in dispatch-table order.
    pub const ALL: [Profile; 3] = [Profile::In, Profile::Out, Profile::InOut];

    /// Returns the canonical lowercase name of this profile.
    pub fn name(&self) -> &'static str {
        match self {
            Profile::In => "in",
            Profile::Out => "out",
            Profile::InOut => "inout",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Profile {
    type Err = ParseCurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(Profile::In),
            "out" => Ok(Profile::Out),
            "inout" | "in_out" | "in-out" => Ok(Profile::InOut),
            _ => Err(ParseCurveError::InvalidProfile(s.to_string())),
        }
    }
}

/// Dispatch table over all normalized curves, indexed by
/// `[family][profile]`. Built at compile time and read-only thereafter.
static CURVE_TABLE: [[fn(f64) -> f64; 3]; 10] = [
    [ease_in_sine, ease_out_sine, ease_inout_sine],
    [ease_in_quad, ease_out_quad, ease_inout_quad],
    [ease_in_cubic, ease_out_cubic, ease_inout_cubic],
    [ease_in_quart, ease_out_quart, ease_inout_quart],
    [ease_in_quint, ease_out_quint, ease_inout_quint],
    [ease_in_expo, ease_out_expo, ease_inout_expo],
    [ease_in_circ, ease_out_circ, ease_inout_circ],
    [ease_in_back, ease_out_back, ease_inout_back],
    [ease_in_elastic, ease_out_elastic, ease_inout_elastic],
    [ease_in_bounce, ease_out_bounce, ease_inout_bounce],
];

/// A (family, profile) pair identifying one easing curve.
///
/// # Examples
///
/// ```
/// use softstep::{Curve, Family, Profile};
///
/// let curve = Curve::new(Family::Quad, Profile::Out);
/// assert_eq!(curve.eval(0.5), 0.75);
///
/// // curves can be selected from configuration strings
/// let parsed: Curve = "ease_in_sine".parse().unwrap();
/// assert_eq!(parsed, Curve::new(Family::Sine, Profile::In));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Curve {
    pub family: Family,
    pub profile: Profile,
}

impl Curve {
    /// Creates a curve identifier from a family and profile.
    pub fn new(family: Family, profile: Profile) -> Self {
        Self { family, profile }
    }

    /// Returns the curve function as a plain function pointer.
    ///
    /// Useful for hoisting the table lookup out of a per-sample loop.
    pub fn as_fn(&self) -> fn(f64) -> f64 {
        CURVE_TABLE[self.family as usize][self.profile as usize]
    }

    /// Evaluates the curve at progress `t`.
    ///
    /// Expects `t` in `[0, 1]`; out-of-range inputs are extrapolated, not
    /// clamped.
    pub fn eval(&self, t: f64) -> f64 {
        (self.as_fn())(t)
    }

    /// Maps a value from one range to another through this curve.
    ///
    /// `x` is normalized out of `from_range`, shaped by the curve, then
    /// rescaled into `to_range`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DegenerateRange`] when `from_range` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use softstep::{Curve, Family, Profile};
    ///
    /// let curve = Curve::new(Family::Quad, Profile::In);
    /// let v = curve.map(0.5, (0.0, 1.0), (0.0, 100.0)).unwrap();
    /// assert_eq!(v, 25.0);
    /// ```
    pub fn map(
        &self,
        x: f64,
        from_range: (f64, f64),
        to_range: (f64, f64),
    ) -> Result<f64, DomainError> {
        let t = linear_scale(x, from_range.0, from_range.1, 0.0, 1.0)?;
        Ok(self.eval(t) * (to_range.1 - to_range.0) + to_range.0)
    }

    /// Fills a buffer with the curve sampled at evenly spaced `t` over
    /// `[0, 1]`, endpoints included.
    ///
    /// A one-element buffer receives `f(0)`; an empty buffer is left
    /// untouched. No allocation is performed.
    pub fn fill(&self, buffer: &mut [f64]) {
        let f = self.as_fn();
        match buffer.len() {
            0 => {}
            1 => buffer[0] = f(0.0),
            n => {
                let step = 1.0 / (n - 1) as f64;
                for (i, sample) in buffer.iter_mut().enumerate() {
                    *sample = f(step * i as f64);
                }
            }
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.profile, self.family)
    }
}

impl FromStr for Curve {
    type Err = ParseCurveError;

    /// Parses identifiers like `"in_sine"`, `"out-quad"`, `"inout_cubic"`,
    /// or `"in_out_cubic"`, with an optional `ease_` prefix. Matching is
    /// case-insensitive; `-` and `_` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCurveError::Empty);
        }
        let normalized = s.to_ascii_lowercase().replace('-', "_");
        let rest = normalized.strip_prefix("ease_").unwrap_or(&normalized);

        let (profile, family_name) = if let Some(name) = rest.strip_prefix("in_out_") {
            (Profile::InOut, name)
        } else if let Some(name) = rest.strip_prefix("inout_") {
            (Profile::InOut, name)
        } else if let Some(name) = rest.strip_prefix("out_") {
            (Profile::Out, name)
        } else if let Some(name) = rest.strip_prefix("in_") {
            (Profile::In, name)
        } else {
            return Err(ParseCurveError::InvalidProfile(s.to_string()));
        };

        let family = family_name.parse()?;
        Ok(Curve::new(family, profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_free_functions() {
        let curve = Curve::new(Family::Elastic, Profile::Out);
        for t in [0.0, 0.3, 0.77, 1.0] {
            assert_eq!(curve.eval(t), ease_out_elastic(t));
        }
    }

    #[test]
    fn test_as_fn_is_table_entry() {
        let f = Curve::new(Family::Cubic, Profile::InOut).as_fn();
        assert_eq!(f(0.25), ease_inout_cubic(0.25));
    }

    #[test]
    fn test_parse_plain() {
        let curve: Curve = "in_sine".parse().unwrap();
        assert_eq!(curve, Curve::new(Family::Sine, Profile::In));
    }

    #[test]
    fn test_parse_with_ease_prefix() {
        let curve: Curve = "ease_out_quad".parse().unwrap();
        assert_eq!(curve, Curve::new(Family::Quad, Profile::Out));
    }

    #[test]
    fn test_parse_inout_spellings() {
        let expected = Curve::new(Family::Cubic, Profile::InOut);
        for s in ["inout_cubic", "in_out_cubic", "ease-in-out-cubic", "InOut_Cubic"] {
            let curve: Curve = s.parse().unwrap();
            assert_eq!(curve, expected, "failed to parse '{}'", s);
        }
    }

    #[test]
    fn test_parse_long_aliases() {
        let curve: Curve = "in_exponential".parse().unwrap();
        assert_eq!(curve.family, Family::Expo);
        let curve: Curve = "out_circular".parse().unwrap();
        assert_eq!(curve.family, Family::Circ);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Curve>().unwrap_err(), ParseCurveError::Empty);
        assert_eq!(
            "  ".parse::<Curve>().unwrap_err(),
            ParseCurveError::Empty
        );
        assert_eq!(
            "sideways_sine".parse::<Curve>().unwrap_err(),
            ParseCurveError::InvalidProfile("sideways_sine".to_string())
        );
        assert_eq!(
            "in_banana".parse::<Curve>().unwrap_err(),
            ParseCurveError::InvalidFamily("banana".to_string())
        );
    }

    #[test]
    fn test_display_parse_round_trip() {
        for family in Family::ALL {
            for profile in Profile::ALL {
                let curve = Curve::new(family, profile);
                let parsed: Curve = curve.to_string().parse().unwrap();
                assert_eq!(parsed, curve);
            }
        }
    }

    #[test]
    fn test_map_through_curve() {
        let curve = Curve::new(Family::Quad, Profile::In);
        // MIDI-style 0..127 into 0..1 through a squared response
        let v = curve.map(63.5, (0.0, 127.0), (0.0, 1.0)).unwrap();
        assert_eq!(v, 0.25);
    }

    #[test]
    fn test_map_degenerate_range() {
        let curve = Curve::new(Family::Sine, Profile::In);
        assert!(curve.map(1.0, (2.0, 2.0), (0.0, 1.0)).is_err());
    }

    #[test]
    fn test_fill_endpoints() {
        let curve = Curve::new(Family::Quad, Profile::In);
        let mut buffer = [0.0; 5];
        curve.fill(&mut buffer);
        assert_eq!(buffer[0], 0.0);
        assert_eq!(buffer[2], 0.25);
        assert_eq!(buffer[4], 1.0);
    }

    #[test]
    fn test_fill_small_buffers() {
        let curve = Curve::new(Family::Quint, Profile::Out);
        let mut empty: [f64; 0] = [];
        curve.fill(&mut empty);
        let mut single = [9.0];
        curve.fill(&mut single);
        assert_eq!(single[0], 0.0);
    }

    #[test]
    fn test_default_profile() {
        assert_eq!(Profile::default(), Profile::In);
    }
}
