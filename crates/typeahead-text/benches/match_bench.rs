//! Benchmarks for the filter pass.
//!
//! Run with: `cargo bench --package typeahead-text --bench match_bench`
//!
//! # Performance Baselines
//!
//! These benchmarks establish baselines for:
//! - Strict (substring) filtering over growing datasets
//! - Fuzzy (subsequence) filtering over growing datasets
//! - Structured records whose string form is JSON text

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use typeahead_core::record::{Record, dataset};
use typeahead_text::{Query, filter};

// ============================================================================
// Test Data Generation
// ============================================================================

const MAKES: &[&str] = &[
    "Volkswagen", "Mercedes", "Daimler", "Škoda", "Citroën", "Peugeot", "Renault", "Volvo",
    "Toyota", "Honda", "Mazda", "Subaru",
];

/// Generate `n` string records cycling through the sample makes.
fn generate_strings(n: usize) -> Vec<Record> {
    dataset((0..n).map(|i| format!("{} {}", MAKES[i % MAKES.len()], i)))
}

/// Generate `n` object records.
fn generate_objects(n: usize) -> Vec<Record> {
    dataset((0..n).map(|i| {
        serde_json::json!({ "make": MAKES[i % MAKES.len()], "id": i })
    }))
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_strict(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter/strict");
    for size in [100, 1_000, 10_000] {
        let data = generate_strings(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| filter(black_box(data), black_box("vo"), &Query::Strict));
        });
    }
    group.finish();
}

fn bench_fuzzy(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter/fuzzy");
    for size in [100, 1_000, 10_000] {
        let data = generate_strings(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| filter(black_box(data), black_box("v w 9"), &Query::Fuzzy));
        });
    }
    group.finish();
}

fn bench_objects(c: &mut Criterion) {
    let data = generate_objects(1_000);
    c.bench_function("filter/strict_objects_1000", |b| {
        b.iter(|| filter(black_box(&data), black_box("daim"), &Query::Strict));
    });
}

criterion_group!(benches, bench_strict, bench_fuzzy, bench_objects);
criterion_main!(benches);
