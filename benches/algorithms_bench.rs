//! Benchmark for the generic algorithms.
//!
//! Compares the type-class versions against hand-written equivalents to
//! measure the overhead (if any) of going through the abstractions.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lawful::algorithms::{applicative_sum, concat_all, safe_divide_chain, square};
use lawful::data::{Optional, Sequence};
use std::hint::black_box;

// =============================================================================
// square
// =============================================================================

fn benchmark_square(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("square");

    for size in [100, 1_000, 10_000] {
        let values: Vec<i64> = (0..size).collect();
        group.throughput(Throughput::Elements(values.len() as u64));

        group.bench_with_input(BenchmarkId::new("functor_square", size), &values, |bencher, values| {
            bencher.iter(|| black_box(square(Sequence::from(values.clone()))));
        });

        group.bench_with_input(BenchmarkId::new("manual_square", size), &values, |bencher, values| {
            bencher.iter(|| {
                let squared: Vec<i64> = values.iter().map(|x| x * x).collect();
                black_box(squared)
            });
        });
    }

    group.finish();
}

// =============================================================================
// applicative_sum
// =============================================================================

fn benchmark_applicative_sum(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("applicative_sum");

    group.bench_function("optional_present", |bencher| {
        bencher.iter(|| black_box(applicative_sum(black_box(Optional::present(5)), Optional::present(7))));
    });

    group.bench_function("optional_manual", |bencher| {
        bencher.iter(|| {
            let left = black_box(Some(5));
            black_box(left.zip(Some(7)).map(|(x, y)| x + y))
        });
    });

    for size in [10, 100] {
        let values: Vec<i32> = (0..size).collect();
        group.throughput(Throughput::Elements((values.len() * values.len()) as u64));

        group.bench_with_input(BenchmarkId::new("sequence_cartesian", size), &values, |bencher, values| {
            bencher.iter(|| {
                black_box(applicative_sum(
                    Sequence::from(values.clone()),
                    Sequence::from(values.clone()),
                ))
            });
        });

        group.bench_with_input(BenchmarkId::new("manual_cartesian", size), &values, |bencher, values| {
            bencher.iter(|| {
                let sums: Vec<i32> = values
                    .iter()
                    .flat_map(|&x| values.iter().map(move |&y| x + y))
                    .collect();
                black_box(sums)
            });
        });
    }

    group.finish();
}

// =============================================================================
// concat_all / safe_divide_chain
// =============================================================================

fn benchmark_concat_all(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("concat_all");

    for parts in [10, 100, 1_000] {
        let nested: Sequence<Sequence<i32>> = (0..parts).map(|n| Sequence::from(vec![n; 8])).collect();

        group.bench_with_input(BenchmarkId::new("monoid_fold", parts), &nested, |bencher, nested| {
            bencher.iter(|| black_box(concat_all(nested.clone())));
        });
    }

    group.finish();
}

fn benchmark_safe_divide_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("safe_divide_chain");

    group.bench_function("alternating_chain", |bencher| {
        bencher.iter(|| black_box(safe_divide_chain(black_box(Optional::present(2.0)), 64)));
    });

    group.bench_function("short_circuit", |bencher| {
        bencher.iter(|| black_box(safe_divide_chain(black_box(Optional::present(0.0)), 64)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_square,
    benchmark_applicative_sum,
    benchmark_concat_all,
    benchmark_safe_divide_chain
);
criterion_main!(benches);
