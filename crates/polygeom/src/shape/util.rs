use crate::point::Point;

use super::types::InvalidShapeError;

/// `max - min <= eps` over a non-empty slice; `eps = 0` is exact equality.
#[inline]
pub(crate) fn all_equal(values: &[f64], eps: f64) -> bool {
    let Some(&first) = values.first() else {
        return true;
    };
    let (lo, hi) = values
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    hi - lo <= eps
}

/// Power of two `f` with `m * f` near [1, 2); 1 if `m` is zero, subnormal or non-finite.
///
/// Multiplying by `f` is exact, so scaled results match unscaled ones bit for
/// bit whenever the unscaled squares neither overflow nor underflow.
#[inline]
pub(crate) fn unit_scale(m: f64) -> f64 {
    if !m.is_normal() {
        return 1.0;
    }
    let f = 2f64.powi(-(m.log2().floor() as i32));
    if f.is_normal() {
        f
    } else {
        1.0
    }
}

/// Interior angle (degrees) at the vertex between sides `a` and `b`, with `c`
/// opposite it. Law of cosines on sides rescaled by `unit_scale`; the ratio is
/// clamped against rounding.
#[inline]
pub(crate) fn angle_from_sides(a: f64, b: f64, c: f64) -> f64 {
    let f = unit_scale(a.max(b).max(c));
    let (a, b, c) = (a * f, b * f, c * f);
    let cos = (a * a + b * b - c * c) / (2.0 * a * b);
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

pub(crate) fn check_arity(
    shape: &'static str,
    expected: usize,
    points: &[Point],
) -> Result<(), InvalidShapeError> {
    if points.len() != expected {
        return Err(InvalidShapeError::WrongPointCount {
            shape,
            expected,
            got: points.len(),
        });
    }
    Ok(())
}
