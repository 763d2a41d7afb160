//! Benchmarks for the similarity algorithms.
//!
//! Performance targets:
//! - Short names (< 30 chars): < 5μs per pair
//! - Descriptions (~200 chars): < 100μs per pair
//! - LCS traceback on descriptions: < 500μs

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pkgq_similarity::{Algorithm, EditCosts, Scorer, TokenMetric, lcs_traceback};
use std::hint::black_box;

const SHORT_QUERY: &str = "zen theme";
const SHORT_TARGET: &str = "zen-theme-dark-mode";

const DESCRIPTION: &str = "A minimal, distraction-free syntax theme with carefully tuned \
    contrast for long editing sessions. Ships light and dark variants, supports \
    tree-sitter grammars, and highlights markdown, JSON and YAML consistently.";

fn algorithms() -> Vec<(&'static str, Algorithm)> {
    vec![
        ("levenshtein", Algorithm::Levenshtein),
        (
            "weighted-levenshtein",
            Algorithm::WeightedLevenshtein(EditCosts::default()),
        ),
        (
            "wsdm",
            Algorithm::WordSplitDoubleMean(TokenMetric::Levenshtein),
        ),
        ("lcs", Algorithm::LongestCommonSubsequence),
    ]
}

/// Benchmark scoring a query against a package name.
fn bench_score_names(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_names");

    for (name, algorithm) in algorithms() {
        let scorer = Scorer::new(algorithm);
        group.bench_with_input(BenchmarkId::from_parameter(name), &scorer, |b, scorer| {
            b.iter(|| scorer.score(black_box(SHORT_QUERY), black_box(SHORT_TARGET)))
        });
    }

    group.finish();
}

/// Benchmark scoring a query against a full description.
fn bench_score_descriptions(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_descriptions");

    for (name, algorithm) in algorithms() {
        let scorer = Scorer::new(algorithm);
        group.bench_with_input(BenchmarkId::from_parameter(name), &scorer, |b, scorer| {
            b.iter(|| scorer.score(black_box(SHORT_QUERY), black_box(DESCRIPTION)))
        });
    }

    group.finish();
}

/// Benchmark the full-table LCS traceback.
fn bench_lcs_traceback(c: &mut Criterion) {
    c.bench_function("lcs_traceback_description", |b| {
        b.iter(|| lcs_traceback(black_box("syntax theme dark"), black_box(DESCRIPTION)))
    });
}

criterion_group!(
    benches,
    bench_score_names,
    bench_score_descriptions,
    bench_lcs_traceback
);
criterion_main!(benches);
