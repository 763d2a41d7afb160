//! Engine compatibility filtering for single-package views.
//!
//! Each version declares the engine versions it supports as an npm-style
//! semver range (`^1.2.0`, `~1.4`, `>=1.0.0 <2.0.0`, `1.5.0 || ^2.0.0`).
//! Listing and search never filter by engine; only the detail view does.

use crate::error::{CoreError, Result};
use crate::types::{PackageRecord, VersionRecord};
use node_semver::{Range, Version};

/// Parses a requested engine version.
///
/// Returns `None` for input that is not a semver version, which callers
/// treat as "no engine requested".
pub fn parse_engine_version(requested: &str) -> Option<Version> {
    let requested = requested.trim();
    if requested.is_empty() {
        return None;
    }

    match Version::parse(requested) {
        Ok(version) => Some(version),
        Err(e) => {
            tracing::debug!("ignoring unparseable engine version '{}': {}", requested, e);
            None
        }
    }
}

/// Checks whether `engine` falls inside the declared `range`.
///
/// # Errors
///
/// Returns `MalformedEngineRange` when `range` cannot be parsed.
///
/// # Examples
///
/// ```
/// use node_semver::Version;
/// use pkgq_core::engine::range_contains;
///
/// let engine = Version::parse("1.5.0").unwrap();
/// assert!(range_contains("^1.2.0", &engine).unwrap());
/// assert!(!range_contains("^2.0.0", &engine).unwrap());
/// assert!(range_contains(">=1.0.0 <1.2.0 || ^1.4.0", &engine).unwrap());
/// ```
pub fn range_contains(range: &str, engine: &Version) -> Result<bool> {
    let parsed = Range::parse(range).map_err(|e| CoreError::MalformedEngineRange {
        range: range.to_string(),
        message: e.to_string(),
    })?;
    Ok(parsed.satisfies(engine))
}

/// Whether a single version is usable on `engine`.
///
/// Versions without a declared range, and versions whose range is
/// malformed, are kept: the filter only removes versions it can prove
/// incompatible.
pub fn is_compatible(version: &VersionRecord, engine: &Version) -> bool {
    let Some(range) = version.engine.as_deref() else {
        return true;
    };

    match range_contains(range, engine) {
        Ok(contains) => contains,
        Err(e) => {
            tracing::warn!("{} (version {} kept)", e, version.version);
            true
        }
    }
}

/// Returns the versions of `package` compatible with the requested engine,
/// newest first.
///
/// When `requested` is absent or not a valid semver version the filter is a
/// no-op and every version is returned.
///
/// # Examples
///
/// ```
/// use pkgq_core::{PackageRecord, engine::compatible_versions};
///
/// let package: PackageRecord = serde_json::from_value(serde_json::json!({
///     "name": "zen-theme",
///     "versions": {
///         "1.5.0": { "version": "1.5.0", "engine": "^1.2.0" },
///         "2.0.0": { "version": "2.0.0", "engine": "^2.0.0" }
///     },
///     "created": "2024-01-01T00:00:00Z",
///     "updated": "2024-01-01T00:00:00Z"
/// }))
/// .unwrap();
///
/// let kept: Vec<&str> = compatible_versions(&package, Some("1.8.0"))
///     .iter()
///     .map(|v| v.version.as_str())
///     .collect();
/// assert_eq!(kept, ["1.5.0"]);
///
/// assert_eq!(compatible_versions(&package, Some("latest")).len(), 2);
/// assert_eq!(compatible_versions(&package, None).len(), 2);
/// ```
pub fn compatible_versions<'a>(
    package: &'a PackageRecord,
    requested: Option<&str>,
) -> Vec<&'a VersionRecord> {
    let versions = package.versions_newest_first();

    let Some(engine) = requested.and_then(parse_engine_version) else {
        return versions;
    };

    let before = versions.len();
    let kept: Vec<&VersionRecord> = versions
        .into_iter()
        .filter(|v| is_compatible(v, &engine))
        .collect();

    tracing::debug!(
        "engine {} keeps {}/{} versions of {}",
        engine,
        kept.len(),
        before,
        package.name
    );

    kept
}
