// ABOUTME: Criterion benchmarks for risk classification and restaurant name search
// ABOUTME: Measures classifier latency and the search pipeline over growing in-memory registries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Criterion benchmarks for the registry hot paths.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use oilwatch_core::models::{classify, OilType};
use oilwatch_server::database_plugins::memory::MemoryDatabase;
use oilwatch_server::services::{SearchService, SubmissionService};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Registry sizes used for the search benchmarks
const REGISTRY_SIZES: [usize; 3] = [100, 1_000, 10_000];

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    group.throughput(Throughput::Elements(OilType::ALL.len() as u64));
    group.bench_function("catalog_labels", |b| {
        b.iter(|| {
            for oil in OilType::ALL {
                black_box(classify(black_box(oil.as_str())));
            }
        });
    });

    group.bench_function("padded_mixed_case", |b| {
        b.iter(|| black_box(classify(black_box("  mIxEd/OtHeR  "))));
    });

    group.bench_function("unknown_label", |b| {
        b.iter(|| black_box(classify(black_box("Ketchup"))));
    });

    group.finish();
}

/// Fill a fresh memory store with `size` restaurants cycling through the catalog
fn populated_store(rt: &Runtime, size: usize) -> Arc<MemoryDatabase> {
    let store = Arc::new(MemoryDatabase::new());
    let submissions = SubmissionService::new(store.clone());
    rt.block_on(async {
        for i in 0..size {
            let oil = OilType::ALL[i % OilType::ALL.len()];
            submissions
                .submit(&format!("Restaurant {i} Grill"), oil.as_str())
                .await
                .unwrap();
        }
    });
    store
}

fn bench_search(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("search");

    for size in REGISTRY_SIZES {
        let search = SearchService::new(populated_store(&rt, size));
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("all_match", size), &search, |b, search| {
            b.to_async(&rt)
                .iter(|| async { black_box(search.search(black_box("grill")).await.unwrap()) });
        });

        group.bench_with_input(BenchmarkId::new("few_matches", size), &search, |b, search| {
            b.to_async(&rt).iter(|| async {
                black_box(search.search(black_box("restaurant 42 ")).await.unwrap())
            });
        });

        group.bench_with_input(BenchmarkId::new("no_match", size), &search, |b, search| {
            b.to_async(&rt)
                .iter(|| async { black_box(search.search(black_box("pizza")).await.unwrap()) });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_search);
criterion_main!(benches);
