//! Points and segments in the plane.

use nalgebra::Vector2;

/// A point in R² with real coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn origin() -> Self {
        Self::default()
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance `sqrt((x1-x2)^2 + (y1-y2)^2)`.
    ///
    /// Falls back to `hypot` when the squared sum overflows or underflows, so
    /// large finite coordinates stay finite and tiny distinct points stay apart.
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        let d = self.to_vector() - other.to_vector();
        let sq = d.norm_squared();
        if sq.is_normal() || (d.x == 0.0 && d.y == 0.0) {
            sq.sqrt()
        } else {
            d.x.hypot(d.y)
        }
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vector()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Segment between two borrowed points; the length is computed once.
#[derive(Clone, Copy, Debug)]
pub struct Line<'a> {
    start: &'a Point,
    end: &'a Point,
    length: f64,
}

impl<'a> Line<'a> {
    #[inline]
    pub fn new(start: &'a Point, end: &'a Point) -> Self {
        Self {
            start,
            end,
            length: start.distance_to(end),
        }
    }

    #[inline]
    pub fn start(&self) -> &'a Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> &'a Point {
        self.end
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn distance_pythagorean_triple() {
        let p = Point::new(0.0, 0.0);
        let q = Point::new(3.0, 4.0);
        assert_eq!(p.distance_to(&q), 5.0);
    }

    #[test]
    fn distance_symmetric_and_zero_on_self_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            let p = Point::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
            let q = Point::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
            assert_eq!(p.distance_to(&q), q.distance_to(&p));
            assert_eq!(p.distance_to(&p), 0.0);
        }
    }

    #[test]
    fn distance_survives_extreme_scales() {
        let p = Point::origin();
        let far = Point::new(3e200, 4e200);
        let d = p.distance_to(&far);
        assert!(d.is_finite());
        assert!((d / 5e200 - 1.0).abs() < 1e-15);
        let near = Point::new(3e-170, 4e-170);
        let d = p.distance_to(&near);
        assert!(d > 0.0);
        assert!((d / 5e-170 - 1.0).abs() < 1e-15);
        // differences past f64::MAX are still infinite
        let a = Point::new(-1e308, 0.0);
        let b = Point::new(1e308, 0.0);
        assert!(a.distance_to(&b).is_infinite());
    }

    #[test]
    fn line_caches_length_and_borrows_endpoints() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);
        let line = Line::new(&a, &b);
        assert_eq!(line.length(), 5.0);
        assert!(std::ptr::eq(line.start(), &a));
        assert!(std::ptr::eq(line.end(), &b));
    }

    #[test]
    fn vector_conversions() {
        let p = Point::from((2.5, -1.0));
        let v: Vector2<f64> = p.into();
        assert_eq!(v, Vector2::new(2.5, -1.0));
        assert_eq!(Point::from(v), p);
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
    }
}
