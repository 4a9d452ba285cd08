//! Criterion micro-benchmarks for union-find backends.

use criterion::{criterion_group, criterion_main, Criterion};
use percolate_uf::{UnionFind, WeightedQuickUnion};
use std::hint::black_box;

/// Benchmark: 100K unions of deterministic pseudo-random pairs, then 100K finds.
fn bench_weighted_union_find_100k(c: &mut Criterion) {
    let n = 100_000usize;
    let pairs: Vec<(usize, usize)> = (0u64..n as u64)
        .map(|i| {
            let p = (i.wrapping_mul(6364136223846793007) % n as u64) as usize;
            let q = (i.wrapping_mul(1442695040888963407) % n as u64) as usize;
            (p, q)
        })
        .collect();

    c.bench_function("weighted_union_find_100k", |b| {
        b.iter(|| {
            let mut uf = WeightedQuickUnion::new(n);
            for &(p, q) in &pairs {
                uf.union(p, q);
            }
            for p in 0..n {
                black_box(uf.find(p));
            }
            black_box(uf.count())
        });
    });
}

criterion_group!(benches, bench_weighted_union_find_100k);
criterion_main!(benches);
