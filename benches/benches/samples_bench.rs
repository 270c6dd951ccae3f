//! # Samples Benchmarks
//!
//! Number theory expressed through superposition: primality, factoring, gcd.
//!
//! Run: `cargo bench --bench samples_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qubit_samples::{factors, gcd, is_prime, primes_up_to};

fn bench_primes(c: &mut Criterion) {
    let mut group = c.benchmark_group("primes");

    group.bench_function("is_prime_7919", |b| b.iter(|| black_box(is_prime(7919))));

    for limit in [100_i64, 1000] {
        group.bench_with_input(BenchmarkId::new("up_to", limit), &limit, |b, &limit| {
            b.iter(|| black_box(primes_up_to(limit)))
        });
    }

    group.finish();
}

fn bench_factors(c: &mut Criterion) {
    let mut group = c.benchmark_group("factors");

    for n in [255_u64, 1024] {
        group.bench_with_input(BenchmarkId::new("factors", n), &n, |b, &n| {
            b.iter(|| black_box(factors(n)))
        });
    }

    group.bench_function("gcd_462_1071", |b| b.iter(|| black_box(gcd(462, 1071))));

    group.finish();
}

criterion_group!(benches, bench_primes, bench_factors);
criterion_main!(benches);
