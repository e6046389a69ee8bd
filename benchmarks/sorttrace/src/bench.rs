//! Trace recording benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (100 to 10K elements, per algorithm class)
//! - Instrumentation overhead (recording vs discarding vs plain `sort_unstable`)
//! - Input shapes (sorted, reversed, few unique, random)
//! - Replay (reconstruction and scheduling of recorded traces)
//!
//! Run with `cargo bench -p sorttrace-benchmarks`.

use core::time::Duration;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use sorttrace::prelude::*;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

const LINEARITHMIC: [Algorithm; 3] = [Merge, Quick, Heap];
const QUADRATIC: [Algorithm; 4] = [Insertion, Selection, Bubble, Cycle];

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Uniform random integers in [-1000, 1000].
fn generate_random(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(-1000..=1000)).collect()
}

/// Ascending integers.
fn generate_sorted(size: usize) -> Vec<i64> {
    (0..size as i64).collect()
}

/// Descending integers.
fn generate_reversed(size: usize) -> Vec<i64> {
    (0..size as i64).rev().collect()
}

/// Values drawn from only eight distinct keys.
fn generate_few_unique(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(0..8)).collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(30);

    for size in [1_000, 5_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        let data = generate_random(size, 42);

        for algorithm in LINEARITHMIC {
            group.bench_with_input(BenchmarkId::new(algorithm.id(), size), &size, |b, _| {
                b.iter(|| algorithm.sort(black_box(&data)))
            });
        }
    }

    for size in [100, 500, 1_000] {
        group.throughput(Throughput::Elements(size as u64));
        let data = generate_random(size, 42);

        for algorithm in QUADRATIC {
            group.bench_with_input(BenchmarkId::new(algorithm.id(), size), &size, |b, _| {
                b.iter(|| algorithm.sort(black_box(&data)))
            });
        }
    }
    group.finish();
}

fn bench_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("overhead");
    group.sample_size(50);

    let size = 10_000;
    let data = generate_random(size, 7);
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("sort_unstable", |b| {
        b.iter(|| {
            let mut working = black_box(&data).clone();
            working.sort_unstable();
            working
        })
    });

    for algorithm in LINEARITHMIC {
        group.bench_function(BenchmarkId::new("discard", algorithm.id()), |b| {
            b.iter(|| {
                let mut working = black_box(&data).clone();
                algorithm.instrument(&mut working, &mut Discard, &InstrumentOptions::default());
                working
            })
        });

        group.bench_function(BenchmarkId::new("record", algorithm.id()), |b| {
            b.iter(|| {
                let mut working = black_box(&data).clone();
                let mut recorder = Recorder::new();
                algorithm.instrument(&mut working, &mut recorder, &InstrumentOptions::default());
                recorder.into_trace()
            })
        });
    }

    let padded = Tracer::new().merge_padding(true).build().unwrap();
    group.bench_function(BenchmarkId::new("record_padded", "mergeSort"), |b| {
        b.iter(|| padded.sort(black_box(&data)).unwrap())
    });
    group.finish();
}

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes");
    group.sample_size(50);

    let size = 1_000;
    let shapes = [
        ("random", generate_random(size, 3)),
        ("sorted", generate_sorted(size)),
        ("reversed", generate_reversed(size)),
        ("few_unique", generate_few_unique(size, 3)),
    ];

    for (shape, data) in &shapes {
        for algorithm in [Quick, Insertion, Cycle] {
            group.bench_with_input(BenchmarkId::new(algorithm.id(), shape), data, |b, data| {
                b.iter(|| algorithm.sort(black_box(data)))
            });
        }
    }
    group.finish();
}

fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay");
    group.sample_size(50);

    let data = generate_random(2_000, 11);
    let scheduler = ReplayScheduler::new().delay(Duration::from_millis(2));

    for algorithm in [Merge, Bubble] {
        let result = algorithm.sort(&data);
        group.throughput(Throughput::Elements(result.trace().len() as u64));

        group.bench_function(BenchmarkId::new("reconstruct", algorithm.id()), |b| {
            b.iter(|| result.replay(black_box(&data)).unwrap())
        });

        group.bench_function(BenchmarkId::new("schedule", algorithm.id()), |b| {
            b.iter(|| scheduler.schedule(black_box(result.trace())))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_overhead,
    bench_shapes,
    bench_replay,
);

criterion_main!(benches);
