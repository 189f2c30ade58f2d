//! `Polygon`: the most specific shape type a point list qualifies for.

use crate::point::Point;

use super::polygon::{Polygonal, Shape};
use super::quad::{Rectangle, Square};
use super::triangle::{ClassifiedTriangle, Triangle};
use super::types::{InvalidShapeError, ShapeCfg};

#[derive(Clone, Debug, PartialEq)]
pub enum Polygon {
    Triangle(ClassifiedTriangle),
    Rectangle(Rectangle),
    Square(Square),
    Other(Shape),
}

impl Polygon {
    /// Pick a type by vertex count and validity.
    ///
    /// - 3 points: classified triangle.
    /// - 4 points: square, else rectangle, else a generic shape.
    /// - otherwise: generic shape.
    ///
    /// Only the generic `Shape` checks can fail here (count, finiteness, zero edges).
    pub fn from_points(points: Vec<Point>, cfg: &ShapeCfg) -> Result<Self, InvalidShapeError> {
        if points.len() == 3 {
            return Ok(Polygon::Triangle(Triangle::new(points)?.classify(cfg)));
        }
        let shape = Shape::new(points)?;
        if shape.len() != 4 {
            return Ok(Polygon::Other(shape));
        }
        match Rectangle::from_shape(shape.clone(), cfg) {
            Ok(rect) => match Square::from_rectangle(rect.clone(), cfg) {
                Ok(square) => Ok(Polygon::Square(square)),
                Err(_) => Ok(Polygon::Rectangle(rect)),
            },
            Err(_) => Ok(Polygon::Other(shape)),
        }
    }

    /// Type name, using the triangle kind for triangles.
    pub fn name(&self) -> &'static str {
        match self {
            Polygon::Triangle(t) => t.kind.name(),
            Polygon::Rectangle(_) => "Rectangle",
            Polygon::Square(_) => "Square",
            Polygon::Other(_) => "Polygon",
        }
    }

    /// Area for the types that define one; `None` for generic shapes.
    pub fn area(&self) -> Option<f64> {
        match self {
            Polygon::Triangle(t) => Some(t.triangle.area()),
            Polygon::Rectangle(r) => Some(r.area()),
            Polygon::Square(s) => Some(s.area()),
            Polygon::Other(_) => None,
        }
    }
}

impl Polygonal for Polygon {
    fn shape(&self) -> &Shape {
        match self {
            Polygon::Triangle(t) => t.shape(),
            Polygon::Rectangle(r) => r.shape(),
            Polygon::Square(s) => s.shape(),
            Polygon::Other(s) => s,
        }
    }
}
