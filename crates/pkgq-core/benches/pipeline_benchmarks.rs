//! Benchmarks for ranking, sorting and full search requests.
//!
//! Performance targets:
//! - Ranking 1,000 packages with WSDM: < 5ms
//! - Sorting 10,000 packages by downloads: < 2ms
//! - Listing page over 10,000 packages: < 3ms

use chrono::{Duration, TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pkgq_core::{
    Direction, PackageRecord, QueryParams, QueryPipeline, SortKey, rank, sort,
};
use pkgq_similarity::Scorer;
use std::collections::{BTreeMap, BTreeSet};
use std::hint::black_box;

const WORDS: [&str; 12] = [
    "zen", "theme", "git", "linter", "minimap", "icons", "dark", "mode", "tree", "view",
    "format", "markdown",
];

/// Builds a synthetic catalog with repeating download counts.
fn catalog(size: usize) -> Vec<PackageRecord> {
    let epoch = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();

    (0..size)
        .map(|i| {
            let name = format!(
                "{}-{}-{}",
                WORDS[i % WORDS.len()],
                WORDS[(i / WORDS.len()) % WORDS.len()],
                i
            );
            PackageRecord {
                description: Some(format!(
                    "A {} package for {} and {}",
                    WORDS[(i * 7) % WORDS.len()],
                    WORDS[(i * 5) % WORDS.len()],
                    WORDS[(i * 3) % WORDS.len()]
                )),
                name,
                versions: BTreeMap::new(),
                downloads: (i as u64 * 7919) % 1000,
                stargazers: (0..i % 5).map(|s| format!("user-{}", s)).collect::<BTreeSet<_>>(),
                created: epoch + Duration::days((i % 1500) as i64),
                updated: epoch + Duration::days((i % 900) as i64),
            }
        })
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let scorer = Scorer::default();

    for size in [100, 1_000] {
        let packages = catalog(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &packages, |b, packages| {
            b.iter(|| rank(&scorer, black_box("zen theme dark"), packages))
        });
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    let packages = catalog(10_000);

    for key in [SortKey::Downloads, SortKey::Stars, SortKey::Created] {
        group.bench_function(key.as_str(), |b| {
            b.iter(|| {
                let mut refs: Vec<&PackageRecord> = packages.iter().collect();
                sort(&mut refs, key, Direction::Desc);
                refs
            })
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let packages = catalog(10_000);
    let pipeline = QueryPipeline::default();

    let listing = QueryParams::default().with_page(5);
    group.bench_function("listing", |b| {
        b.iter(|| pipeline.search(black_box(&packages), &listing))
    });

    let query = QueryParams::default().with_query("minimap icons");
    group.bench_function("query", |b| {
        b.iter(|| pipeline.search(black_box(&packages), &query))
    });

    group.finish();
}

criterion_group!(benches, bench_rank, bench_sort, bench_search);
criterion_main!(benches);
