//! Reproducible random shapes (replay tokens + bounded size/rotation).
//!
//! Purpose
//! - Feed benches, property checks and the CLI `sample` command with valid
//!   triangles, rectangles and squares without hand-written coordinates.
//!
//! Model
//! - Triangle: three sorted angles on [0, 2π) with per-vertex radii in
//!   `[size_min, size_max]` around a random center; near-degenerate draws are
//!   retried up to `max_attempts`.
//! - Rectangle/Square: axis-aligned corners `(±w/2, ±h/2)` in CCW order,
//!   rotated by a random angle (optional) and translated to a random center.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::{Rotation2, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;
use crate::shape::{ClassifiedTriangle, Rectangle, ShapeCfg, Square, Triangle};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Centers are drawn from `[-center_bound, center_bound]²`.
    pub center_bound: f64,
    /// Side length (rectangles, squares) or vertex radius (triangles) range.
    pub size_min: f64,
    pub size_max: f64,
    /// Rotate rectangles/squares by a uniform angle in [0, 2π)?
    pub random_rotation: bool,
    /// Triangle draws with `area < min_area_frac * size_min²` are retried.
    pub min_area_frac: f64,
    pub max_attempts: usize,
    /// Tolerances passed to the shape constructors.
    pub shape: ShapeCfg,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            center_bound: 10.0,
            size_min: 0.5,
            size_max: 5.0,
            random_rotation: true,
            min_area_frac: 1e-3,
            max_attempts: 16,
            shape: ShapeCfg::default(),
        }
    }
}

impl SampleCfg {
    fn size<R: Rng>(&self, rng: &mut R) -> f64 {
        let lo = self.size_min.max(1e-9);
        let hi = self.size_max.max(lo);
        if hi > lo {
            rng.gen_range(lo..=hi)
        } else {
            lo
        }
    }

    fn center<R: Rng>(&self, rng: &mut R) -> Vector2<f64> {
        let b = self.center_bound.abs();
        if b > 0.0 {
            Vector2::new(rng.gen_range(-b..=b), rng.gen_range(-b..=b))
        } else {
            Vector2::zeros()
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a non-degenerate triangle and classify it with `cfg.shape`.
///
/// Returns `None` if every attempt came out thinner than `min_area_frac`.
pub fn draw_triangle(cfg: SampleCfg, tok: ReplayToken) -> Option<ClassifiedTriangle> {
    let mut rng = tok.to_std_rng();
    let min_area = cfg.min_area_frac * cfg.size_min * cfg.size_min;
    for _ in 0..cfg.max_attempts.max(1) {
        let c = cfg.center(&mut rng);
        let mut angles: [f64; 3] = [0.0; 3].map(|_| rng.gen::<f64>() * std::f64::consts::TAU);
        angles.sort_by(f64::total_cmp);
        let points: Vec<Point> = angles
            .iter()
            .map(|th| {
                let r = cfg.size(&mut rng);
                Point::from(c + Vector2::new(th.cos(), th.sin()) * r)
            })
            .collect();
        if let Ok(t) = Triangle::new(points) {
            if t.area() >= min_area {
                return Some(t.classify(&cfg.shape));
            }
        }
    }
    None
}

/// Draw a rectangle with independent width and height.
pub fn draw_rectangle(cfg: SampleCfg, tok: ReplayToken) -> Option<Rectangle> {
    let mut rng = tok.to_std_rng();
    let w = cfg.size(&mut rng);
    let h = cfg.size(&mut rng);
    let corners = placed_box(&cfg, &mut rng, w, h);
    Rectangle::new_with(corners, &cfg.shape).ok()
}

/// Draw a square; rotated squares rely on `cfg.shape.equal_eps > 0`.
pub fn draw_square(cfg: SampleCfg, tok: ReplayToken) -> Option<Square> {
    let mut rng = tok.to_std_rng();
    let s = cfg.size(&mut rng);
    let corners = placed_box(&cfg, &mut rng, s, s);
    Square::new_with(corners, &cfg.shape).ok()
}

/// Corners of a `w × h` box in CCW order, rotated then translated.
fn placed_box<R: Rng>(cfg: &SampleCfg, rng: &mut R, w: f64, h: f64) -> Vec<Point> {
    let theta = if cfg.random_rotation {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let rot = Rotation2::new(theta);
    let c = cfg.center(rng);
    let (hw, hh) = (w / 2.0, h / 2.0);
    [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)]
        .iter()
        .map(|&(x, y)| Point::from(c + rot * Vector2::new(x, y)))
        .collect()
}
