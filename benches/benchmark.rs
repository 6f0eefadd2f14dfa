// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed licenses.

//! This module contains benchmarks for the `bitonic` crate.

extern crate criterion;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use std::time::Duration;

use bitonic::utils::random_vec;
use bitonic::{comparator_network, sort, sort_oblivious, Orientation};
use rand::{rngs::StdRng, SeedableRng};

const LENGTHS_TO_BENCHMARK: [usize; 4] = [1 << 10, 1 << 14, 1 << 16, 100_000];
const LENGTHS_TO_COUNT: [usize; 5] = [8, 1000, 1 << 10, 3000, 1 << 12];

criterion_group!(
    name = benches;
    config = Criterion::default().warm_up_time(Duration::new(0, 1_000_000_00)).measurement_time(Duration::new(0, 1_000_000_00)).sample_size(10);
    targets =
    benchmark_sort,
    benchmark_sort_oblivious,
    benchmark_std_sort_unstable,
    print_comparator_counts,
);
criterion_main!(benches);

fn benchmark_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("BitonicSort");
    let mut rng = StdRng::seed_from_u64(0);

    for length in LENGTHS_TO_BENCHMARK {
        let input: Vec<u64> = random_vec(length, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(length), &input, |b, input| {
            b.iter_batched_ref(
                || input.clone(),
                |items| sort(black_box(items), Orientation::Ascending),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn benchmark_sort_oblivious(c: &mut Criterion) {
    let mut group = c.benchmark_group("ObliviousBitonicSort");
    let mut rng = StdRng::seed_from_u64(0);

    for length in LENGTHS_TO_BENCHMARK {
        let input: Vec<u64> = random_vec(length, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(length), &input, |b, input| {
            b.iter_batched_ref(
                || input.clone(),
                |items| sort_oblivious(black_box(items), Orientation::Ascending),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn benchmark_std_sort_unstable(c: &mut Criterion) {
    let mut group = c.benchmark_group("StdSortUnstable");
    let mut rng = StdRng::seed_from_u64(0);

    for length in LENGTHS_TO_BENCHMARK {
        let input: Vec<u64> = random_vec(length, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(length), &input, |b, input| {
            b.iter_batched_ref(
                || input.clone(),
                |items| black_box(items).sort_unstable(),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn print_comparator_counts(_: &mut Criterion) {
    println!("Length, Comparators");
    for length in LENGTHS_TO_COUNT {
        println!(
            "{}, {}",
            length,
            comparator_network(length, Orientation::Ascending).len()
        );
    }
}
