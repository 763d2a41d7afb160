//! Shared catalog fixtures for pipeline integration tests.

use pkgq_core::PackageRecord;
use serde_json::json;

/// Seven packages with distinct download counts.
///
/// Downloads descending: minimap, linter, zen-theme, git-blame, emmet,
/// file-icons, autosave.
pub(crate) fn seven_packages() -> Vec<PackageRecord> {
    serde_json::from_value(json!([
        {
            "name": "zen-theme",
            "description": "A calm, distraction-free syntax theme",
            "downloads": 700,
            "stargazers": ["ana", "ben", "cho"],
            "created": "2022-03-01T00:00:00Z",
            "updated": "2024-02-01T00:00:00Z",
            "versions": {
                "1.5.0": {
                    "version": "1.5.0",
                    "engine": "^1.2.0",
                    "tarball_url": "https://example.com/zen-theme-1.5.0.tgz"
                },
                "2.0.0": {
                    "version": "2.0.0",
                    "engine": "^2.0.0",
                    "tarball_url": "https://example.com/zen-theme-2.0.0.tgz"
                },
                "0.9.0": {
                    "version": "0.9.0",
                    "tarball_url": "https://example.com/zen-theme-0.9.0.tgz"
                }
            }
        },
        {
            "name": "minimap",
            "description": "A preview of the full source code",
            "downloads": 9000,
            "stargazers": ["ana"],
            "created": "2020-01-10T00:00:00Z",
            "updated": "2024-05-01T00:00:00Z"
        },
        {
            "name": "autosave",
            "description": "Save editors when they lose focus",
            "downloads": 10,
            "created": "2023-07-04T00:00:00Z",
            "updated": "2023-07-04T00:00:00Z"
        },
        {
            "name": "linter",
            "description": "A base linter with support for multiple providers",
            "downloads": 4200,
            "stargazers": ["ana", "ben", "cho", "dee"],
            "created": "2019-11-02T00:00:00Z",
            "updated": "2024-04-11T00:00:00Z"
        },
        {
            "name": "emmet",
            "description": "Abbreviation expansion for markup",
            "downloads": 150,
            "created": "2021-06-15T00:00:00Z",
            "updated": "2023-01-20T00:00:00Z"
        },
        {
            "name": "git-blame",
            "description": "Show blame annotations next to each line",
            "downloads": 320,
            "stargazers": ["ben"],
            "created": "2021-02-28T00:00:00Z",
            "updated": "2022-12-01T00:00:00Z"
        },
        {
            "name": "file-icons",
            "description": "Per-filetype icons in the tree view",
            "downloads": 90,
            "created": "2020-08-08T00:00:00Z",
            "updated": "2024-01-01T00:00:00Z"
        }
    ]))
    .expect("fixture catalog is valid")
}

pub(crate) const BY_DOWNLOADS: [&str; 7] = [
    "minimap",
    "linter",
    "zen-theme",
    "git-blame",
    "emmet",
    "file-icons",
    "autosave",
];
