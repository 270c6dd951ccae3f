//! # SuperpositionSet Benchmarks
//!
//! Measures the cross product of the operator engine and the relational
//! collapse. Both are quadratic in the operand sizes; insertion dedup is
//! linear per element.
//!
//! Run: `cargo bench --bench superposition_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qubit_superposition::{BinaryOp, Relation, SuperpositionSet};

fn operand(len: i64) -> SuperpositionSet<i64> {
    SuperpositionSet::range(1, len, 1).expect("valid range")
}

/// Benchmark insertion with duplicate suppression
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [16_i64, 128, 512] {
        group.bench_with_input(BenchmarkId::new("range", size), &size, |b, &size| {
            b.iter(|| black_box(operand(size)))
        });
    }

    group.finish();
}

/// Benchmark set-set arithmetic (cartesian product)
fn bench_cross_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("cross_product");

    for size in [8_i64, 32, 64] {
        let lhs = operand(size).quantify_any();
        let rhs = operand(size).quantify_all();

        group.bench_with_input(BenchmarkId::new("add", size), &size, |b, _| {
            b.iter(|| black_box(lhs.combine(BinaryOp::Add, &rhs)))
        });

        group.bench_with_input(BenchmarkId::new("mul", size), &size, |b, _| {
            b.iter(|| black_box(lhs.combine(BinaryOp::Mul, &rhs)))
        });
    }

    group.bench_function("scalar_rem", |b| {
        let divisors = operand(256).quantify_all();
        b.iter(|| black_box(1009 % &divisors))
    });

    group.finish();
}

/// Benchmark relational collapse
fn bench_collapse(c: &mut Criterion) {
    let mut group = c.benchmark_group("collapse");

    for size in [16_i64, 64, 256] {
        let values = operand(size);
        let any = values.quantify_any();
        let all = values.quantify_all();

        group.bench_with_input(BenchmarkId::new("any_le_all", size), &size, |b, _| {
            b.iter(|| black_box(any.le(&all)))
        });

        group.bench_with_input(BenchmarkId::new("scalar_eq", size), &size, |b, &size| {
            b.iter(|| black_box(any.compare(Relation::Eq, size / 2)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_cross_product, bench_collapse);
criterion_main!(benches);
