//! Criterion micro-benchmarks for percolation grid operations.

use criterion::{criterion_group, criterion_main, Criterion};
use percolate_bench::{reference_profile, stress_profile};
use percolate_core::Site;
use percolate_grid::PercolationGrid;
use std::hint::black_box;

/// Benchmark: random opens on a 200x200 grid until it percolates.
fn bench_threshold_200(c: &mut Criterion) {
    let run = reference_profile(42);

    c.bench_function("threshold_200x200", |b| {
        b.iter(|| black_box(run.run().unwrap()));
    });
}

/// Benchmark: random opens on a 1000x1000 grid until it percolates.
fn bench_threshold_1000(c: &mut Criterion) {
    let run = stress_profile(42);
    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("threshold_1000x1000", |b| {
        b.iter(|| black_box(run.run().unwrap()));
    });
    group.finish();
}

/// Benchmark: is_full on every site of a half-open 200x200 grid.
fn bench_is_full_sweep(c: &mut Criterion) {
    let run = reference_profile(7);
    let mut grid = PercolationGrid::new(200).unwrap();
    for &site in &run.order[..run.order.len() / 2] {
        grid.open(site).unwrap();
    }

    c.bench_function("is_full_sweep_200x200", |b| {
        b.iter(|| {
            let mut full = 0usize;
            for row in 1..=200 {
                for col in 1..=200 {
                    if grid.is_full(Site::new(row, col)).unwrap() {
                        full += 1;
                    }
                }
            }
            black_box(full)
        });
    });
}

criterion_group!(
    benches,
    bench_threshold_200,
    bench_threshold_1000,
    bench_is_full_sweep
);
criterion_main!(benches);
