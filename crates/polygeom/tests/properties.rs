//! Property checks over randomly generated inputs.

use nalgebra::{Rotation2, Vector2};
use polygeom::prelude::*;
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    -100.0..100.0f64
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn distance_is_symmetric(p in point(), q in point()) {
        prop_assert_eq!(p.distance_to(&q), q.distance_to(&p));
        prop_assert_eq!(p.distance_to(&p), 0.0);
        prop_assert!(p.distance_to(&q) >= 0.0);
    }

    #[test]
    fn edges_match_vertex_order(points in prop::collection::vec(point(), 3..12)) {
        // Random points may repeat consecutively only with negligible probability;
        // skip those rather than assert on the error.
        if let Ok(shape) = Shape::new(points.clone()) {
            let n = points.len();
            prop_assert_eq!(shape.edges().len(), n);
            prop_assert_eq!(shape.points(), points.as_slice());
            for i in 0..n {
                prop_assert_eq!(shape.edges()[i], points[i].distance_to(&points[(i + 1) % n]));
            }
            let sum: f64 = shape.edges().iter().sum();
            prop_assert_eq!(shape.perimeter(), sum);
        }
    }

    #[test]
    fn angles_stay_in_range(points in prop::collection::vec(point(), 3..12)) {
        if let Ok(shape) = Shape::new(points) {
            for a in shape.angles() {
                prop_assert!(a.is_finite());
                prop_assert!((0.0..=180.0 + 1e-9).contains(&a));
            }
        }
    }

    #[test]
    fn too_few_points_always_fail(points in prop::collection::vec(point(), 0..3)) {
        let got = points.len();
        prop_assert_eq!(
            Shape::new(points).unwrap_err(),
            InvalidShapeError::TooFewPoints { got }
        );
    }

    #[test]
    fn rotated_rectangles_stay_valid(
        w in 0.5..20.0f64,
        h in 0.5..20.0f64,
        theta in 0.0..std::f64::consts::TAU,
        cx in -50.0..50.0f64,
        cy in -50.0..50.0f64,
    ) {
        let rot = Rotation2::new(theta);
        let c = Vector2::new(cx, cy);
        let pts: Vec<Point> = [(0.0, 0.0), (w, 0.0), (w, h), (0.0, h)]
            .iter()
            .map(|&(x, y)| Point::from(c + rot * Vector2::new(x, y)))
            .collect();
        let r = Rectangle::new(pts).unwrap();
        prop_assert!((r.area() - w * h).abs() < 1e-9 * (1.0 + w * h));
        prop_assert!((r.perimeter() - 2.0 * (w + h)).abs() < 1e-9 * (1.0 + w + h));
    }

    #[test]
    fn triangle_area_scales_quadratically(
        pts in prop::array::uniform3(point()),
        k in 0.5..4.0f64,
    ) {
        if let Ok(t) = Triangle::new(pts.to_vec()) {
            prop_assume!(t.area() > 1.0);
            let scaled: Vec<Point> = pts.iter().map(|p| Point::new(p.x * k, p.y * k)).collect();
            let ts = Triangle::new(scaled).unwrap();
            prop_assert!((ts.perimeter() - k * t.perimeter()).abs() < 1e-9 * ts.perimeter());
            prop_assert!((ts.area() - k * k * t.area()).abs() < 1e-6 * ts.area());
        }
    }

    #[test]
    fn classification_is_order_independent(pts in prop::array::uniform3(point())) {
        if let Ok(t) = classify_triangle(pts.to_vec()) {
            let rev = classify_triangle(vec![pts[2], pts[1], pts[0]]).unwrap();
            prop_assert_eq!(t.kind, rev.kind);
        }
    }
}
