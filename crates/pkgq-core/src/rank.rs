//! Relevance ranking of a catalog snapshot against a search query.

use crate::types::{PackageRecord, ScoredPackage};
use pkgq_similarity::{Scorer, normalize};
use rayon::prelude::*;

/// Weight applied to the description score before it competes with the name score.
pub const DESCRIPTION_WEIGHT: f64 = 0.5;

/// Relevance of one package to an already-normalized query.
///
/// `max(name_score, DESCRIPTION_WEIGHT × description_score)`; a missing
/// description scores 0.
pub fn package_score(scorer: &Scorer, normalized_query: &str, package: &PackageRecord) -> f64 {
    let name_score = scorer.score_normalized(normalized_query, &normalize(&package.name));
    let description_score = package
        .description
        .as_deref()
        .map_or(0.0, |d| scorer.score_normalized(normalized_query, &normalize(d)));

    name_score.max(DESCRIPTION_WEIGHT * description_score)
}

/// Scores every package in `catalog` against `query`.
///
/// The result has one entry per package, in catalog order; nothing is
/// dropped, even at score 0. Packages are scored in parallel and collected
/// back by index, so the output does not depend on thread scheduling.
///
/// # Examples
///
/// ```
/// use pkgq_core::{PackageRecord, rank};
/// use pkgq_similarity::Scorer;
///
/// let catalog: Vec<PackageRecord> = serde_json::from_value(serde_json::json!([
///     { "name": "zen-theme", "created": "2024-01-01T00:00:00Z", "updated": "2024-01-01T00:00:00Z" },
///     { "name": "linter", "created": "2024-01-01T00:00:00Z", "updated": "2024-01-01T00:00:00Z" }
/// ]))
/// .unwrap();
///
/// let scored = rank(&Scorer::default(), "zen theme", &catalog);
/// assert_eq!(scored.len(), 2);
/// assert_eq!(scored[0].score, 1.0);
/// assert!(scored[1].score < scored[0].score);
/// ```
pub fn rank<'a>(
    scorer: &Scorer,
    query: &str,
    catalog: &'a [PackageRecord],
) -> Vec<ScoredPackage<'a>> {
    let query = normalize(query);

    catalog
        .par_iter()
        .map(|package| ScoredPackage {
            package,
            score: package_score(scorer, &query, package),
        })
        .collect()
}
