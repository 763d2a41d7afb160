//! Pruned package views handed to the serving layer.

use crate::pagination::PageDescriptor;
use crate::sort::{Direction, SortKey};
use crate::types::{PackageRecord, VersionRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Public fields of one package version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionView {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    pub tarball_url: String,
}

impl From<&VersionRecord> for VersionView {
    fn from(record: &VersionRecord) -> Self {
        Self {
            version: record.version.clone(),
            engine: record.engine.clone(),
            tarball_url: record.tarball_url.clone(),
        }
    }
}

/// Package as rendered in listings, search results and detail pages.
///
/// Stargazer identities are reduced to a count and per-version metadata is
/// dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageView {
    pub name: String,
    pub description: Option<String>,
    pub downloads: u64,
    pub stargazers_count: usize,
    /// Newest version among `versions`
    pub latest: Option<String>,
    /// Newest first
    pub versions: Vec<VersionView>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    /// Present only on search results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f64>,
}

impl PackageView {
    /// Builds a view exposing `versions` (expected newest first).
    pub fn with_versions(package: &PackageRecord, versions: &[&VersionRecord]) -> Self {
        Self {
            name: package.name.clone(),
            description: package.description.clone(),
            downloads: package.downloads,
            stargazers_count: package.star_count(),
            latest: versions.first().map(|v| v.version.clone()),
            versions: versions.iter().map(|v| VersionView::from(*v)).collect(),
            created: package.created,
            updated: package.updated,
            relevance: None,
        }
    }

    #[must_use]
    pub fn with_relevance(mut self, score: f64) -> Self {
        self.relevance = Some(score);
        self
    }
}

impl From<&PackageRecord> for PackageView {
    fn from(package: &PackageRecord) -> Self {
        Self::with_versions(package, &package.versions_newest_first())
    }
}

/// One page of a listing or search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub items: Vec<PackageView>,
    pub page: PageDescriptor,
    /// Sort key actually applied after fallbacks
    pub sort: SortKey,
    pub direction: Direction,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::BTreeSet;

    fn record() -> PackageRecord {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let versions = ["0.9.0", "1.1.0", "1.0.0"]
            .into_iter()
            .map(|v| {
                (
                    v.to_string(),
                    VersionRecord {
                        version: v.into(),
                        engine: Some(">=1.0.0".into()),
                        tarball_url: format!("https://example.com/{}.tgz", v),
                        metadata: serde_json::json!({ "main": "index.js" }),
                    },
                )
            })
            .collect();

        PackageRecord {
            name: "pigments".into(),
            description: Some("Colors in your code".into()),
            versions,
            downloads: 42,
            stargazers: BTreeSet::from(["a".to_string(), "b".to_string()]),
            created: ts,
            updated: ts,
        }
    }

    #[test]
    fn test_view_from_record() {
        let view = PackageView::from(&record());
        assert_eq!(view.name, "pigments");
        assert_eq!(view.stargazers_count, 2);
        assert_eq!(view.latest.as_deref(), Some("1.1.0"));
        let versions: Vec<&str> = view.versions.iter().map(|v| v.version.as_str()).collect();
        assert_eq!(versions, ["1.1.0", "1.0.0", "0.9.0"]);
        assert!(view.relevance.is_none());
    }

    #[test]
    fn test_view_latest_follows_exposed_versions() {
        let package = record();
        let older: Vec<&VersionRecord> = package
            .versions_newest_first()
            .into_iter()
            .skip(1)
            .collect();
        let view = PackageView::with_versions(&package, &older);
        assert_eq!(view.latest.as_deref(), Some("1.0.0"));
    }

    #[test]
    fn test_view_serialization_omits_relevance_when_unranked() {
        let value = serde_json::to_value(PackageView::from(&record())).unwrap();
        assert!(value.get("relevance").is_none());
        assert!(value.get("stargazers").is_none());
        assert_eq!(value["stargazers_count"], 2);
        assert!(value["versions"][0].get("metadata").is_none());
    }

    #[test]
    fn test_view_with_relevance() {
        let view = PackageView::from(&record()).with_relevance(0.25);
        let value = serde_json::to_value(view).unwrap();
        assert_eq!(value["relevance"], 0.25);
    }
}
