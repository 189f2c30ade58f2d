//! Closed polygons and their validated specializations.
//!
//! Purpose
//! - `Shape` owns an ordered vertex list and derives the cyclic edge lengths
//!   once at construction: `edges[i] = |p[i] p[(i+1) mod n]|`.
//! - `Triangle`, `Rectangle`, `Square` are separate value types that wrap a
//!   `Shape` after checking their extra invariants (vertex count, right
//!   angles, equal sides). There is no per-variant triangle type; the
//!   classifier returns a `TriangleKind` tag next to the triangle.
//! - `Polygon` picks the most specific of these for a given point list.
//!
//! Numerics
//! - Tolerances come from `ShapeCfg` (right angle, Pythagorean check, edge and
//!   angle equality). `ShapeCfg::strict()` compares edges/angles exactly.
//! - Non-finite coordinates and zero-length edges are rejected up front, so
//!   the law-of-cosines step never divides by zero.
//!
//! Cross-refs: `Point`, `Line`, `sample::{draw_triangle, draw_rectangle}`

mod any;
mod polygon;
mod quad;
mod triangle;
mod types;
mod util;

pub use any::Polygon;
pub use polygon::{Polygonal, Shape};
pub use quad::{Rectangle, Square};
pub use triangle::{
    classify_triangle, classify_triangle_with, ClassifiedTriangle, Triangle, TriangleKind,
};
pub use types::{InvalidShapeError, ShapeCfg};
