//! Triangles: Heron area and the edge/angle based classifier.

use std::fmt;

use crate::point::Point;

use super::polygon::{Polygonal, Shape};
use super::types::{InvalidShapeError, ShapeCfg};
use super::util::{check_arity, unit_scale};

/// A `Shape` with exactly three vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    shape: Shape,
}

impl Triangle {
    pub fn new(points: Vec<Point>) -> Result<Self, InvalidShapeError> {
        check_arity("triangle", 3, &points)?;
        Ok(Self {
            shape: Shape::new(points)?,
        })
    }

    /// Heron's formula with `s = perimeter / 2`.
    ///
    /// For (nearly) collinear vertices rounding can push the radicand below
    /// zero; it is clamped so the area is 0 rather than NaN. Sides are
    /// rescaled by a power of two so the fourth-power radicand stays in range.
    pub fn area(&self) -> f64 {
        let f = unit_scale(self.sorted_sides()[2]);
        let [a, b, c] = self.sides().map(|e| e * f);
        let s = (a + b + c) / 2.0;
        (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt() / f / f
    }

    /// Edge lengths in vertex order.
    #[inline]
    pub fn sides(&self) -> [f64; 3] {
        let e = self.shape.edges();
        [e[0], e[1], e[2]]
    }

    /// Edge lengths in ascending order.
    pub fn sorted_sides(&self) -> [f64; 3] {
        let mut s = self.sides();
        s.sort_by(f64::total_cmp);
        s
    }

    /// Classification rules, first match wins:
    /// 1. all sides equal → `Equilateral`
    /// 2. two sides equal → `Isosceles`
    /// 3. `|e0² + e1² − e2²| < pythagorean_eps` (sorted sides) → `RightTriangle`
    /// 4. otherwise → `Scalene`
    ///
    /// An isosceles right triangle is reported as `Isosceles`.
    pub fn kind(&self, cfg: &ShapeCfg) -> TriangleKind {
        let [e0, e1, e2] = self.sorted_sides();
        let eq = |x: f64, y: f64| (y - x) <= cfg.equal_eps;
        if eq(e0, e2) {
            TriangleKind::Equilateral
        } else if eq(e0, e1) || eq(e1, e2) {
            TriangleKind::Isosceles
        } else if (e0 * e0 + e1 * e1 - e2 * e2).abs() < cfg.pythagorean_eps {
            TriangleKind::RightTriangle
        } else {
            TriangleKind::Scalene
        }
    }

    pub fn classify(self, cfg: &ShapeCfg) -> ClassifiedTriangle {
        ClassifiedTriangle {
            kind: self.kind(cfg),
            triangle: self,
        }
    }
}

impl Polygonal for Triangle {
    #[inline]
    fn shape(&self) -> &Shape {
        &self.shape
    }
}

/// Classification outcome; carries no data of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriangleKind {
    Equilateral,
    Isosceles,
    Scalene,
    RightTriangle,
}

impl TriangleKind {
    pub fn name(self) -> &'static str {
        match self {
            TriangleKind::Equilateral => "Equilateral",
            TriangleKind::Isosceles => "Isosceles",
            TriangleKind::Scalene => "Scalene",
            TriangleKind::RightTriangle => "RightTriangle",
        }
    }
}

impl fmt::Display for TriangleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A triangle together with its classification tag.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassifiedTriangle {
    pub kind: TriangleKind,
    pub triangle: Triangle,
}

impl Polygonal for ClassifiedTriangle {
    #[inline]
    fn shape(&self) -> &Shape {
        self.triangle.shape()
    }
}

/// Build and classify a triangle with default tolerances.
#[inline]
pub fn classify_triangle(points: Vec<Point>) -> Result<ClassifiedTriangle, InvalidShapeError> {
    classify_triangle_with(points, &ShapeCfg::default())
}

/// Build and classify a triangle; fails like `Triangle::new`.
pub fn classify_triangle_with(
    points: Vec<Point>,
    cfg: &ShapeCfg,
) -> Result<ClassifiedTriangle, InvalidShapeError> {
    Ok(Triangle::new(points)?.classify(cfg))
}
