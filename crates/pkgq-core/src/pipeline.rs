//! Request pipeline: rank, sort, paginate, render.
//!
//! Every request-time problem (bad sort key, bad direction, unparseable
//! engine, overlong query) resolves to a defined value here, so the serving
//! layer can always render a page.

use crate::config::Settings;
use crate::engine::compatible_versions;
use crate::pagination::Paginator;
use crate::rank::rank;
use crate::sort::{self, Direction, SortKey};
use crate::types::{PackageRecord, QueryParams};
use crate::view::{PackageView, QueryResult};
use pkgq_similarity::normalize;

/// Stateless query pipeline configured once at startup.
///
/// Holds only validated [`Settings`]; the catalog snapshot is borrowed per
/// call and never mutated. One pipeline can serve any number of threads.
///
/// # Examples
///
/// ```
/// use pkgq_core::{PackageRecord, QueryParams, QueryPipeline, Settings, SortKey};
///
/// let catalog: Vec<PackageRecord> = serde_json::from_value(serde_json::json!([
///     { "name": "zen-theme", "downloads": 10, "created": "2024-01-01T00:00:00Z", "updated": "2024-01-01T00:00:00Z" },
///     { "name": "minimap", "downloads": 90, "created": "2024-01-01T00:00:00Z", "updated": "2024-01-01T00:00:00Z" }
/// ]))
/// .unwrap();
///
/// let pipeline = QueryPipeline::new(Settings::default());
///
/// let listing = pipeline.search(&catalog, &QueryParams::default());
/// assert_eq!(listing.sort, SortKey::Downloads);
/// assert_eq!(listing.items[0].name, "minimap");
///
/// let results = pipeline.search(&catalog, &QueryParams::default().with_query("zen theme"));
/// assert_eq!(results.sort, SortKey::Relevance);
/// assert_eq!(results.items[0].name, "zen-theme");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QueryPipeline {
    settings: Settings,
}

impl QueryPipeline {
    pub const fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Lists or searches `snapshot` and returns the requested page.
    ///
    /// With a non-empty (normalized) query every package is scored and the
    /// results carry their relevance. Without one, packages pass through
    /// unscored. No package is ever dropped by relevance; the engine filter
    /// is not applied to listings.
    pub fn search(&self, snapshot: &[PackageRecord], params: &QueryParams) -> QueryResult {
        let query = self.clamp_query(&params.query);
        let has_query = !normalize(query).is_empty();
        let (key, direction) = self.resolve_sort(params, has_query);
        let paginator = Paginator::new(self.settings.page_size, self.settings.next_link);

        tracing::debug!(
            "search query='{}' sort={} direction={} page={} over {} packages",
            query,
            key,
            direction,
            params.page,
            snapshot.len()
        );

        if has_query {
            let mut scored = rank(&self.settings.scorer, query, snapshot);
            sort::sort(&mut scored, key, direction);
            let (slice, page) = paginator.paginate(&scored, params.page, direction);

            QueryResult {
                items: slice
                    .iter()
                    .map(|s| PackageView::from(s.package).with_relevance(s.score))
                    .collect(),
                page,
                sort: key,
                direction,
            }
        } else {
            let mut packages: Vec<&PackageRecord> = snapshot.iter().collect();
            sort::sort(&mut packages, key, direction);
            let (slice, page) = paginator.paginate(&packages, params.page, direction);

            QueryResult {
                items: slice.iter().map(|p| PackageView::from(*p)).collect(),
                page,
                sort: key,
                direction,
            }
        }
    }

    /// Detail view of one package, keeping only the versions compatible with
    /// `engine`.
    ///
    /// An absent or unparseable `engine` leaves every version in place.
    pub fn detail(&self, package: &PackageRecord, engine: Option<&str>) -> PackageView {
        let versions = compatible_versions(package, engine);
        PackageView::with_versions(package, &versions)
    }

    /// Looks up a package by exact name.
    pub fn find<'a>(&self, snapshot: &'a [PackageRecord], name: &str) -> Option<&'a PackageRecord> {
        snapshot.iter().find(|p| p.name == name)
    }

    /// Resolves the request's sort key and direction.
    ///
    /// - no key: relevance when there is a query, the configured default
    ///   otherwise
    /// - unknown key: downloads descending
    /// - relevance without a query: the configured default key, or downloads
    ///   when that default is relevance too
    /// - no (or unknown) direction: the key's own default
    pub fn resolve_sort(&self, params: &QueryParams, has_query: bool) -> (SortKey, Direction) {
        let requested_direction = match params.direction.as_deref().map(str::parse::<Direction>) {
            Some(Ok(direction)) => Some(direction),
            Some(Err(e)) => {
                tracing::warn!("{}, using the sort key's default", e);
                None
            }
            None => None,
        };

        let (key, direction) = match params.sort.as_deref() {
            None if has_query => (SortKey::Relevance, requested_direction),
            None => (
                self.settings.default_sort,
                requested_direction.or(self.settings.default_direction),
            ),
            Some(raw) => match raw.parse::<SortKey>() {
                Ok(key) => (key, requested_direction),
                Err(e) => {
                    tracing::warn!("{}, falling back to downloads desc", e);
                    (SortKey::Downloads, Some(Direction::Desc))
                }
            },
        };

        let (key, direction) = if key == SortKey::Relevance && !has_query {
            let fallback = self.unranked_default();
            tracing::debug!("relevance sort without a query, using {}", fallback);
            (fallback, direction)
        } else {
            (key, direction)
        };

        (key, direction.unwrap_or_else(|| key.default_direction()))
    }

    fn unranked_default(&self) -> SortKey {
        match self.settings.default_sort {
            SortKey::Relevance => SortKey::Downloads,
            key => key,
        }
    }

    fn clamp_query<'q>(&self, query: &'q str) -> &'q str {
        let limit = self.settings.max_query_length;
        match query.char_indices().nth(limit) {
            Some((cut, _)) => {
                tracing::warn!(
                    "query exceeds {} characters ({}), truncating",
                    limit,
                    query.chars().count()
                );
                &query[..cut]
            }
            None => query,
        }
    }
}

impl Default for QueryPipeline {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
