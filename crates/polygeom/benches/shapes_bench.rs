//! Criterion benchmarks for shape construction and measurements.
//! Focus sizes: n in {3, 4, 16, 64, 256} vertices for generic shapes.
//! Results: by default under target/criterion; to store elsewhere, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p polygeom

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polygeom::prelude::*;

fn regular_points(n: usize) -> Vec<Point> {
    (0..n)
        .map(|k| {
            let th = k as f64 * std::f64::consts::TAU / n as f64;
            Point::new(th.cos(), th.sin())
        })
        .collect()
}

fn bench_shape(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape");
    for &n in &[3usize, 4, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("new", n), &n, |b, &n| {
            b.iter_batched(
                || regular_points(n),
                |pts| {
                    let _s = Shape::new(pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("angles", n), &n, |b, &n| {
            let s = Shape::new(regular_points(n)).unwrap();
            b.iter(|| s.angles())
        });
        group.bench_with_input(BenchmarkId::new("is_regular", n), &n, |b, &n| {
            let s = Shape::new(regular_points(n)).unwrap();
            b.iter(|| s.is_regular())
        });
    }
    group.finish();
}

fn bench_specialized(c: &mut Criterion) {
    let mut group = c.benchmark_group("specialized");
    let cfg = SampleCfg::default();
    group.bench_function("classify_triangle", |b| {
        let mut index = 0u64;
        b.iter_batched(
            || {
                index += 1;
                draw_triangle(cfg, ReplayToken::new(43, index))
                    .unwrap()
                    .triangle
                    .points()
                    .to_vec()
            },
            |pts| {
                let _t = classify_triangle(pts).unwrap();
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("rectangle_new", |b| {
        let mut index = 0u64;
        b.iter_batched(
            || {
                index += 1;
                draw_rectangle(cfg, ReplayToken::new(44, index))
                    .unwrap()
                    .points()
                    .to_vec()
            },
            |pts| {
                let _r = Rectangle::new(pts).unwrap();
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("square_new", |b| {
        let mut index = 0u64;
        b.iter_batched(
            || {
                index += 1;
                draw_square(cfg, ReplayToken::new(45, index))
                    .unwrap()
                    .points()
                    .to_vec()
            },
            |pts| {
                let _s = Square::new(pts).unwrap();
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_shape, bench_specialized);
criterion_main!(benches);
