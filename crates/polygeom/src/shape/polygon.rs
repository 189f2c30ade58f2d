//! Generic closed polygon (`Shape`) and the `Polygonal` accessor trait.

use crate::point::{Line, Point};

use super::types::{InvalidShapeError, ShapeCfg};
use super::util::{all_equal, angle_from_sides};

/// Closed polygon over an ordered vertex list.
///
/// Invariants:
/// - At least 3 vertices, all coordinates finite.
/// - `edges.len() == points.len()`, `edges[i] = |p[i] p[(i+1) mod n]|`, every edge
///   finite and > 0.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    points: Vec<Point>,
    edges: Vec<f64>,
}

impl Shape {
    pub const MIN_POINTS: usize = 3;

    /// Validate the vertex list and derive its cyclic edge lengths.
    pub fn new(points: Vec<Point>) -> Result<Self, InvalidShapeError> {
        if points.len() < Self::MIN_POINTS {
            return Err(InvalidShapeError::TooFewPoints { got: points.len() });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(InvalidShapeError::NonFinite { index });
        }
        let n = points.len();
        let edges: Vec<f64> = (0..n)
            .map(|i| Line::new(&points[i], &points[(i + 1) % n]).length())
            .collect();
        if let Some(index) = edges.iter().position(|&e| e == 0.0) {
            return Err(InvalidShapeError::DegenerateEdge { index });
        }
        if let Some(index) = edges.iter().position(|e| !e.is_finite()) {
            return Err(InvalidShapeError::EdgeOverflow { index });
        }
        Ok(Self { points, edges })
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Number of vertices (equals the number of edges).
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed shape; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Edges as borrowed segments in cyclic order.
    pub fn lines(&self) -> impl Iterator<Item = Line<'_>> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Line::new(&self.points[i], &self.points[(i + 1) % n]))
    }

    pub fn perimeter(&self) -> f64 {
        self.edges.iter().sum()
    }

    /// Interior angle at each vertex in degrees, in vertex order.
    ///
    /// Uses the triangle (previous, current, next) and the law of cosines, so
    /// every angle lies in [0, 180]; reflex corners of concave input are not
    /// distinguished.
    pub fn angles(&self) -> Vec<f64> {
        let n = self.points.len();
        (0..n)
            .map(|i| {
                let prev = (i + n - 1) % n;
                let next = (i + 1) % n;
                let a = self.edges[prev];
                let b = self.edges[i];
                let c = self.points[prev].distance_to(&self.points[next]);
                angle_from_sides(a, b, c)
            })
            .collect()
    }

    /// Sum of `angles()`; `(n - 2) * 180` for a convex polygon.
    pub fn angle_sum(&self) -> f64 {
        self.angles().iter().sum()
    }

    /// All edges equal and all angles equal under `ShapeCfg::default()`.
    #[inline]
    pub fn is_regular(&self) -> bool {
        self.is_regular_with(&ShapeCfg::default())
    }

    /// All edges equal and all angles equal, within `cfg.equal_eps`.
    pub fn is_regular_with(&self, cfg: &ShapeCfg) -> bool {
        all_equal(&self.edges, cfg.equal_eps) && all_equal(&self.angles(), cfg.equal_eps)
    }
}

/// Anything backed by a validated `Shape`.
///
/// Default methods forward to the shape so the specialized types expose the
/// same measurements without re-implementing them.
pub trait Polygonal {
    fn shape(&self) -> &Shape;

    #[inline]
    fn points(&self) -> &[Point] {
        self.shape().points()
    }
    #[inline]
    fn edges(&self) -> &[f64] {
        self.shape().edges()
    }
    #[inline]
    fn perimeter(&self) -> f64 {
        self.shape().perimeter()
    }
    #[inline]
    fn angles(&self) -> Vec<f64> {
        self.shape().angles()
    }
    #[inline]
    fn is_regular(&self) -> bool {
        self.shape().is_regular()
    }
    #[inline]
    fn is_regular_with(&self, cfg: &ShapeCfg) -> bool {
        self.shape().is_regular_with(cfg)
    }
}

impl Polygonal for Shape {
    #[inline]
    fn shape(&self) -> &Shape {
        self
    }
}
