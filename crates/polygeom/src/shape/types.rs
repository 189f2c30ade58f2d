//! Tolerances and the construction error shared by all shapes.
//!
//! - `ShapeCfg`: centralizes epsilons for right angles, the Pythagorean check,
//!   and edge/angle equality.
//! - `InvalidShapeError`: the one failure kind of every shape constructor.

use std::fmt;

/// Shape configuration (tolerances).
///
/// All comparisons are absolute: `|x - target| < eps` for the right-angle and
/// Pythagorean checks, `max - min <= equal_eps` for "all equal".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeCfg {
    /// Allowed deviation of a rectangle corner from 90, in degrees.
    pub right_angle_eps: f64,
    /// Allowed `|a² + b² − c²|` for a right triangle with sorted sides.
    pub pythagorean_eps: f64,
    /// Allowed spread between edge lengths (or angles) still counted as equal.
    pub equal_eps: f64,
}

impl Default for ShapeCfg {
    fn default() -> Self {
        Self {
            right_angle_eps: 1e-9,
            pythagorean_eps: 1e-9,
            equal_eps: 1e-9,
        }
    }
}

impl ShapeCfg {
    /// Exact float equality for regularity and edge classification.
    ///
    /// Right-angle and Pythagorean checks keep their tolerances.
    pub fn strict() -> Self {
        Self {
            equal_eps: 0.0,
            ..Self::default()
        }
    }
}

/// A point list that does not describe the requested shape.
#[derive(Clone, Debug, PartialEq)]
pub enum InvalidShapeError {
    /// A polygon needs at least three vertices.
    TooFewPoints { got: usize },
    /// Fixed-arity shapes (triangle, rectangle, square) got the wrong count.
    WrongPointCount {
        shape: &'static str,
        expected: usize,
        got: usize,
    },
    /// Vertex `index` has a NaN or infinite coordinate.
    NonFinite { index: usize },
    /// Edge `index` (from vertex `index` to the next) has zero length.
    DegenerateEdge { index: usize },
    /// Edge `index` is longer than the largest finite `f64`.
    EdgeOverflow { index: usize },
    /// Some interior angle is not 90 degrees within tolerance.
    NotRectangle,
    /// Right angles hold but sides (or angles) are not all equal.
    NotSquare,
}

impl fmt::Display for InvalidShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints { got } => {
                write!(f, "a polygon must have at least 3 points (got {got})")
            }
            Self::WrongPointCount {
                shape,
                expected,
                got,
            } => write!(f, "a {shape} must have exactly {expected} points (got {got})"),
            Self::NonFinite { index } => write!(f, "point {index} has a non-finite coordinate"),
            Self::DegenerateEdge { index } => write!(
                f,
                "edge {index} has zero length (duplicate consecutive points)"
            ),
            Self::EdgeOverflow { index } => {
                write!(f, "edge {index} length overflows f64")
            }
            Self::NotRectangle => write!(f, "the points do not form a rectangle"),
            Self::NotSquare => write!(f, "a square must have 4 equal sides and right angles"),
        }
    }
}

impl std::error::Error for InvalidShapeError {}
