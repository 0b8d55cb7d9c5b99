//! Criterion benchmarks for foundation layout generation.
//!
//! The generator runs once per variant at mod load, so absolute numbers
//! hardly matter; the bench exists to catch accidental quadratic blowups
//! in the context enumeration.
//!
//! Run with: cargo bench -p foundations --bench layout_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use foundations::layout::foundation_layout;
use islands::coords::ChunkDirection;

fn bench_foundation_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("foundation_layout");

    group.bench_function("no_notches", |b| {
        b.iter(|| foundation_layout(black_box(&[])).unwrap());
    });

    let three = [
        ChunkDirection::North,
        ChunkDirection::West,
        ChunkDirection::South,
    ];
    group.bench_function("three_notches", |b| {
        b.iter(|| foundation_layout(black_box(&three)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_foundation_layout);
criterion_main!(benches);
