//! Catalog data model and request parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// A single published version of a package.
///
/// # Examples
///
/// ```
/// use pkgq_core::VersionRecord;
///
/// let json = r#"{
///     "version": "1.4.0",
///     "engine": "^1.60.0",
///     "tarball_url": "https://example.com/zen-theme-1.4.0.tgz"
/// }"#;
///
/// let version: VersionRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(version.engine.as_deref(), Some("^1.60.0"));
/// assert!(version.metadata.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub version: String,
    /// Declared engine compatibility range (npm semver syntax)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(default)]
    pub tarball_url: String,
    /// Free-form per-version metadata (the published manifest)
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl VersionRecord {
    fn parsed(&self) -> Option<node_semver::Version> {
        node_semver::Version::parse(&self.version).ok()
    }
}

/// A package as held in the catalog snapshot.
///
/// Owned by the catalog collaborator; the pipeline only reads it. Download
/// counts are unsigned and stargazers are a set, so negative counters and
/// duplicate stars cannot be represented.
///
/// # Examples
///
/// ```
/// use pkgq_core::PackageRecord;
///
/// let json = r#"{
///     "name": "zen-theme",
///     "description": "A calm syntax theme",
///     "downloads": 1200,
///     "stargazers": ["alice", "bob", "alice"],
///     "created": "2023-01-05T10:00:00Z",
///     "updated": "2024-03-01T08:30:00Z"
/// }"#;
///
/// let package: PackageRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(package.star_count(), 2);
/// assert!(package.versions.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Versions keyed by their semver string
    #[serde(default)]
    pub versions: BTreeMap<String, VersionRecord>,
    #[serde(default)]
    pub downloads: u64,
    /// Identifiers of the users who starred the package
    #[serde(default)]
    pub stargazers: BTreeSet<String>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl PackageRecord {
    pub fn star_count(&self) -> usize {
        self.stargazers.len()
    }

    /// Versions ordered newest first.
    ///
    /// Versions that do not parse as semver sort after all parseable ones,
    /// in key order.
    pub fn versions_newest_first(&self) -> Vec<&VersionRecord> {
        let mut versions: Vec<(&VersionRecord, Option<node_semver::Version>)> = self
            .versions
            .values()
            .map(|v| (v, v.parsed()))
            .collect();

        versions.sort_by(|(_, a), (_, b)| match (a, b) {
            (Some(a), Some(b)) => b.cmp(a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        versions.into_iter().map(|(v, _)| v).collect()
    }

    /// Highest version that parses as semver.
    pub fn latest_version(&self) -> Option<&VersionRecord> {
        self.versions
            .values()
            .filter_map(|v| v.parsed().map(|parsed| (v, parsed)))
            .max_by(|(_, a), (_, b)| a.cmp(b))
            .map(|(v, _)| v)
    }
}

/// A package paired with its relevance to the current search query.
///
/// Produced by the ranker and consumed by the sorter; lives only for the
/// duration of a request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredPackage<'a> {
    pub package: &'a PackageRecord,
    /// Relevance in `[0, 1]`
    pub score: f64,
}

/// Query parameters as supplied by the request layer.
///
/// Sort key and direction stay raw strings so the pipeline can apply its
/// documented fallbacks instead of rejecting the request.
///
/// # Examples
///
/// ```
/// use pkgq_core::QueryParams;
///
/// let params = QueryParams::default().with_query("theme").with_sort("stars").with_page(2);
/// assert_eq!(params.page, 2);
/// assert_eq!(params.sort.as_deref(), Some("stars"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueryParams {
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
    /// Free-text search query, possibly empty
    #[serde(default)]
    pub query: String,
    /// Requested engine version for detail views
    #[serde(default)]
    pub engine: Option<String>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            sort: None,
            direction: None,
            query: String::new(),
            engine: None,
        }
    }
}

impl QueryParams {
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }
}

const fn default_page() -> usize {
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn version(v: &str) -> VersionRecord {
        VersionRecord {
            version: v.into(),
            engine: None,
            tarball_url: format!("https://example.com/pkg-{}.tgz", v),
            metadata: serde_json::Value::Null,
        }
    }

    fn package_with_versions(versions: &[&str]) -> PackageRecord {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        PackageRecord {
            name: "pkg".into(),
            description: None,
            versions: versions
                .iter()
                .map(|v| ((*v).to_string(), version(v)))
                .collect(),
            downloads: 0,
            stargazers: BTreeSet::new(),
            created: ts,
            updated: ts,
        }
    }

    #[test]
    fn test_versions_newest_first_uses_semver_order() {
        let package = package_with_versions(&["1.9.0", "1.10.0", "0.2.1"]);
        let order: Vec<&str> = package
            .versions_newest_first()
            .iter()
            .map(|v| v.version.as_str())
            .collect();
        assert_eq!(order, ["1.10.0", "1.9.0", "0.2.1"]);
    }

    #[test]
    fn test_versions_newest_first_unparseable_last() {
        let package = package_with_versions(&["not-a-version", "2.0.0", "1.0.0"]);
        let order: Vec<&str> = package
            .versions_newest_first()
            .iter()
            .map(|v| v.version.as_str())
            .collect();
        assert_eq!(order, ["2.0.0", "1.0.0", "not-a-version"]);
    }

    #[test]
    fn test_latest_version() {
        let package = package_with_versions(&["1.2.0", "1.10.0", "garbage"]);
        assert_eq!(package.latest_version().unwrap().version, "1.10.0");
    }

    #[test]
    fn test_latest_version_none() {
        let package = package_with_versions(&[]);
        assert!(package.latest_version().is_none());
    }

    #[test]
    fn test_stargazers_deduplicate_on_deserialize() {
        let json = r#"{
            "name": "x",
            "stargazers": ["u1", "u1", "u2"],
            "created": "2024-01-01T00:00:00Z",
            "updated": "2024-01-01T00:00:00Z"
        }"#;
        let package: PackageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(package.star_count(), 2);
        assert_eq!(package.downloads, 0);
    }

    #[test]
    fn test_negative_downloads_rejected() {
        let json = r#"{
            "name": "x",
            "downloads": -5,
            "created": "2024-01-01T00:00:00Z",
            "updated": "2024-01-01T00:00:00Z"
        }"#;
        assert!(serde_json::from_str::<PackageRecord>(json).is_err());
    }

    #[test]
    fn test_query_params_defaults() {
        let params: QueryParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, QueryParams::default());
        assert_eq!(params.page, 1);
        assert!(params.query.is_empty());
    }
}
