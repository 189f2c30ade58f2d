//! Polygon measurements and shape classification in 2D.
//!
//! Overview
//! - `Point`/`Line`: coordinates and borrowed segments with a cached length.
//! - `Shape`: closed polygon over ordered points (edges, perimeter, angles).
//! - `Triangle`, `Rectangle`, `Square`: validated-at-construction value types.
//! - `classify_triangle`: tags a triangle as equilateral/isosceles/right/scalene.
//! - `sample`: reproducible random shapes for benches and the CLI.
//!
//! Conventions
//! - Angles are reported in degrees.
//! - Tolerances live in `ShapeCfg`; `ShapeCfg::strict()` keeps exact float
//!   equality for the regularity and classification checks.
//! - Every constructor returns `Result<_, InvalidShapeError>`. A value that
//!   exists is valid; nothing mutates it afterwards.

pub mod point;
pub mod sample;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use point::{Line, Point};
pub use shape::{
    classify_triangle, classify_triangle_with, ClassifiedTriangle, InvalidShapeError, Polygon,
    Polygonal, Rectangle, Shape, ShapeCfg, Square, Triangle, TriangleKind,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::point::{Line, Point};
    pub use crate::sample::{draw_rectangle, draw_square, draw_triangle, ReplayToken, SampleCfg};
    pub use crate::shape::{
        classify_triangle, classify_triangle_with, ClassifiedTriangle, InvalidShapeError,
        Polygon, Polygonal, Rectangle, Shape, ShapeCfg, Square, Triangle, TriangleKind,
    };
    pub use nalgebra::Vector2 as Vec2;
}
