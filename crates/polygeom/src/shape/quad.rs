//! Rectangles and squares.
//!
//! Both expect their four vertices in order around the boundary; `area` and
//! `width`/`height` read `edges[0]` and `edges[1]` as adjacent sides.

use crate::point::Point;

use super::polygon::{Polygonal, Shape};
use super::types::{InvalidShapeError, ShapeCfg};
use super::util::check_arity;

/// A four-vertex `Shape` whose interior angles are all 90 degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    shape: Shape,
}

impl Rectangle {
    #[inline]
    pub fn new(points: Vec<Point>) -> Result<Self, InvalidShapeError> {
        Self::new_with(points, &ShapeCfg::default())
    }

    pub fn new_with(points: Vec<Point>, cfg: &ShapeCfg) -> Result<Self, InvalidShapeError> {
        check_arity("rectangle", 4, &points)?;
        Self::from_shape(Shape::new(points)?, cfg)
    }

    /// Promote an already validated shape.
    pub fn from_shape(shape: Shape, cfg: &ShapeCfg) -> Result<Self, InvalidShapeError> {
        check_arity("rectangle", 4, shape.points())?;
        if !has_right_angles(&shape, cfg) {
            return Err(InvalidShapeError::NotRectangle);
        }
        Ok(Self { shape })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.shape.edges()[0]
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.shape.edges()[1]
    }

    /// `edges[0] * edges[1]`.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

impl Polygonal for Rectangle {
    #[inline]
    fn shape(&self) -> &Shape {
        &self.shape
    }
}

fn has_right_angles(shape: &Shape, cfg: &ShapeCfg) -> bool {
    shape
        .angles()
        .iter()
        .all(|a| (a - 90.0).abs() < cfg.right_angle_eps)
}

/// A `Rectangle` whose sides and angles are all equal.
#[derive(Clone, Debug, PartialEq)]
pub struct Square {
    rect: Rectangle,
}

impl Square {
    #[inline]
    pub fn new(points: Vec<Point>) -> Result<Self, InvalidShapeError> {
        Self::new_with(points, &ShapeCfg::default())
    }

    pub fn new_with(points: Vec<Point>, cfg: &ShapeCfg) -> Result<Self, InvalidShapeError> {
        Self::from_rectangle(Rectangle::new_with(points, cfg)?, cfg)
    }

    pub fn from_rectangle(rect: Rectangle, cfg: &ShapeCfg) -> Result<Self, InvalidShapeError> {
        if !rect.shape.is_regular_with(cfg) {
            return Err(InvalidShapeError::NotSquare);
        }
        Ok(Self { rect })
    }

    #[inline]
    pub fn side(&self) -> f64 {
        self.rect.width()
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.rect.area()
    }

    #[inline]
    pub fn as_rectangle(&self) -> &Rectangle {
        &self.rect
    }
}

impl Polygonal for Square {
    #[inline]
    fn shape(&self) -> &Shape {
        &self.rect.shape
    }
}
