//! Stable multi-key sorting of catalog entries.
//!
//! Sorting never reverses a sequence after the fact: the direction is folded
//! into the comparator, so entries with equal keys keep their input order in
//! both directions. Pagination relies on this to return the same pages for
//! repeated identical requests.

use crate::error::{CoreError, Result};
use crate::types::{PackageRecord, ScoredPackage};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Key a listing can be ordered by.
///
/// Each key carries its own default direction; there is no global default.
///
/// | key | default |
/// |---|---|
/// | `relevance` | desc (ties by name ascending) |
/// | `downloads` | desc |
/// | `stars` | desc |
/// | `created` | asc |
/// | `updated` | asc |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Relevance,
    Downloads,
    Stars,
    Created,
    Updated,
}

impl SortKey {
    pub const ALL: [Self; 5] = [
        Self::Relevance,
        Self::Downloads,
        Self::Stars,
        Self::Created,
        Self::Updated,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Downloads => "downloads",
            Self::Stars => "stars",
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }

    pub const fn default_direction(self) -> Direction {
        match self {
            Self::Relevance | Self::Downloads | Self::Stars => Direction::Desc,
            Self::Created | Self::Updated => Direction::Asc,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    /// Parses a request sort key.
    ///
    /// Accepts the canonical names plus the `created_at` / `updated_at`
    /// spellings used by catalog clients.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relevance" => Ok(Self::Relevance),
            "downloads" => Ok(Self::Downloads),
            "stars" => Ok(Self::Stars),
            "created" | "created_at" => Ok(Self::Created),
            "updated" | "updated_at" => Ok(Self::Updated),
            _ => Err(CoreError::InvalidSortKey(s.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    /// The opposite direction. Applying it twice is the identity.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Orients an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(CoreError::InvalidDirection(s.to_string())),
        }
    }
}

/// Fields the sorter reads from a catalog entry.
pub trait Sortable {
    fn name(&self) -> &str;
    fn downloads(&self) -> u64;
    fn star_count(&self) -> usize;
    fn created(&self) -> DateTime<Utc>;
    fn updated(&self) -> DateTime<Utc>;

    /// Relevance score; `None` for entries that were not ranked.
    fn relevance(&self) -> Option<f64> {
        None
    }
}

impl Sortable for PackageRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn downloads(&self) -> u64 {
        self.downloads
    }

    fn star_count(&self) -> usize {
        self.stargazers.len()
    }

    fn created(&self) -> DateTime<Utc> {
        self.created
    }

    fn updated(&self) -> DateTime<Utc> {
        self.updated
    }
}

impl Sortable for ScoredPackage<'_> {
    fn name(&self) -> &str {
        &self.package.name
    }

    fn downloads(&self) -> u64 {
        self.package.downloads
    }

    fn star_count(&self) -> usize {
        self.package.star_count()
    }

    fn created(&self) -> DateTime<Utc> {
        self.package.created
    }

    fn updated(&self) -> DateTime<Utc> {
        self.package.updated
    }

    fn relevance(&self) -> Option<f64> {
        Some(self.score)
    }
}

impl<T: Sortable + ?Sized> Sortable for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn downloads(&self) -> u64 {
        (**self).downloads()
    }

    fn star_count(&self) -> usize {
        (**self).star_count()
    }

    fn created(&self) -> DateTime<Utc> {
        (**self).created()
    }

    fn updated(&self) -> DateTime<Utc> {
        (**self).updated()
    }

    fn relevance(&self) -> Option<f64> {
        (**self).relevance()
    }
}

/// Compares two entries by `key` in `direction`.
///
/// Relevance ties fall back to name ascending regardless of direction.
/// Unranked entries compare as relevance 0. Every other key reports ties as
/// `Equal` so a stable sort keeps their input order.
pub fn compare<T: Sortable + ?Sized>(a: &T, b: &T, key: SortKey, direction: Direction) -> Ordering {
    match key {
        SortKey::Relevance => {
            let a_score = a.relevance().unwrap_or(0.0);
            let b_score = b.relevance().unwrap_or(0.0);
            direction
                .apply(a_score.total_cmp(&b_score))
                .then_with(|| a.name().cmp(b.name()))
        }
        SortKey::Downloads => direction.apply(a.downloads().cmp(&b.downloads())),
        SortKey::Stars => direction.apply(a.star_count().cmp(&b.star_count())),
        SortKey::Created => direction.apply(a.created().cmp(&b.created())),
        SortKey::Updated => direction.apply(a.updated().cmp(&b.updated())),
    }
}

/// Stably sorts `items` in place by `key` and `direction`.
///
/// # Examples
///
/// ```
/// use pkgq_core::{Direction, SortKey, sort};
/// # use pkgq_core::PackageRecord;
/// # fn pkg(name: &str, downloads: u64) -> PackageRecord {
/// #     serde_json::from_value(serde_json::json!({
/// #         "name": name, "downloads": downloads,
/// #         "created": "2024-01-01T00:00:00Z", "updated": "2024-01-01T00:00:00Z"
/// #     })).unwrap()
/// # }
///
/// let mut packages = vec![pkg("a", 10), pkg("b", 30), pkg("c", 10)];
/// sort(&mut packages, SortKey::Downloads, Direction::Desc);
///
/// let names: Vec<&str> = packages.iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, ["b", "a", "c"]);
/// ```
pub fn sort<T: Sortable>(items: &mut [T], key: SortKey, direction: Direction) {
    items.sort_by(|a, b| compare(a, b, key, direction));
}
