// ABOUTME: Criterion benchmarks for workout selection and recency annotation
// ABOUTME: Measures selection cost across catalog sizes and target durations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the selection pipeline.
//!
//! Measures recency annotation and session selection on catalogs from a
//! personal list up to a stress-sized timetable.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{bench_today, generate_catalog, generate_recency, CatalogSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use workout_rotation::models::DifficultyBand;
use workout_rotation::selection::recency::annotate;
use workout_rotation::selection::selector::{select, SelectionRequest};

const SIZES: [CatalogSize; 3] = [CatalogSize::Small, CatalogSize::Medium, CatalogSize::Large];

/// Benchmark joining the catalog with recency dates
fn bench_annotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("annotate");

    for size in SIZES {
        let catalog = generate_catalog(size);
        let recency = generate_recency(&catalog);
        group.throughput(Throughput::Elements(size.count() as u64));
        group.bench_with_input(
            BenchmarkId::new("annotate", size.count()),
            &(catalog, recency),
            |b, (catalog, recency)| {
                b.iter(|| annotate(black_box(catalog), black_box(recency), bench_today()));
            },
        );
    }

    group.finish();
}

/// Benchmark a full selection over the whole level band
fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");

    for size in SIZES {
        let catalog = generate_catalog(size);
        let annotated = annotate(&catalog, &generate_recency(&catalog), bench_today());
        let request = SelectionRequest::new("combat", 42, DifficultyBand::full());
        group.throughput(Throughput::Elements(size.count() as u64));
        group.bench_with_input(
            BenchmarkId::new("select_42_min", size.count()),
            &annotated,
            |b, annotated| {
                let mut rng = ChaCha8Rng::seed_from_u64(7);
                b.iter(|| select(black_box(annotated), black_box(&request), &mut rng));
            },
        );
    }

    group.finish();
}

/// Benchmark how the target duration affects the fill phases
fn bench_select_targets(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_targets");
    let catalog = generate_catalog(CatalogSize::Medium);
    let annotated = annotate(&catalog, &generate_recency(&catalog), bench_today());

    for target in [15_u32, 42, 120, 600] {
        let request = SelectionRequest::new("groove", target, DifficultyBand::full());
        group.bench_with_input(
            BenchmarkId::new("target_minutes", target),
            &request,
            |b, request| {
                let mut rng = ChaCha8Rng::seed_from_u64(11);
                b.iter(|| select(black_box(&annotated), black_box(request), &mut rng));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_annotate, bench_select, bench_select_targets);
criterion_main!(benches);
