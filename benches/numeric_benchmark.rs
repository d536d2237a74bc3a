// ============================================================================
// Numeric Utility Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Number Theory - trial-division primality and iterative Fibonacci
// 2. Radix Conversion - integer formatting and parsing across bases
// 3. Geometry - stable hypot against the naive square-root formula
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numkit::prelude::*;

// ============================================================================
// Number Theory Benchmarks
// ============================================================================

fn benchmark_is_prime(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_prime");

    // Worst case for trial division is a large prime
    for n in [97i64, 104_729, 1_000_000_007].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            b.iter(|| black_box(is_prime(black_box(n))));
        });
    }

    group.finish();
}

fn benchmark_fibonacci(c: &mut Criterion) {
    let mut group = c.benchmark_group("fibonacci");

    for index in [10u32, 50, 93].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(index), index, |b, &index| {
            b.iter(|| black_box(fibonacci(black_box(index))));
        });
    }

    group.finish();
}

// ============================================================================
// Radix Conversion Benchmarks
// ============================================================================

fn benchmark_radix_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("radix");

    for radix in [2u32, 16, 36].iter() {
        group.bench_with_input(
            BenchmarkId::new("format", radix),
            radix,
            |b, &radix| {
                b.iter(|| black_box(format_radix(black_box(i64::MAX), radix)));
            },
        );

        let formatted = format_radix(i64::MAX, *radix).unwrap();
        group.bench_with_input(
            BenchmarkId::new("parse", radix),
            &(&formatted, *radix),
            |b, (formatted, radix)| {
                b.iter(|| black_box(parse_integer(black_box(formatted), *radix)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Geometry Benchmarks
// ============================================================================

fn benchmark_hypotenuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("hypotenuse");

    group.bench_function("hypot", |b| {
        b.iter(|| black_box(hypotenuse(black_box(3e200), black_box(4e200))));
    });

    group.bench_function("naive_sqrt", |b| {
        b.iter(|| {
            let (a, b_leg) = (black_box(3e200), black_box(4e200));
            black_box((a * a + b_leg * b_leg).sqrt())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_is_prime,
    benchmark_fibonacci,
    benchmark_radix_conversion,
    benchmark_hypotenuse
);
criterion_main!(benches);
