//! Query pipeline for pkgq.
//!
//! Turns a read-only catalog snapshot plus raw request parameters into one
//! rendered page of packages.
//!
//! # Architecture
//!
//! A request flows through an explicit, ordered sequence of components:
//!
//! 1. **Ranker** (`rank`): scores every package against the normalized
//!    query, skipped when the query is empty
//! 2. **Sorter** (`sort`): stable ordering by relevance, downloads, stars,
//!    created or updated
//! 3. **Paginator** (`pagination`): fixed-size, 1-based page slicing with
//!    self/last/next links
//! 4. **Views** (`view`): pruned, serializable package views
//!
//! Single-package detail views additionally pass through the engine
//! compatibility filter (`engine`), which listings never apply.
//!
//! Configuration is validated once at startup (`config`); after that no
//! per-request function can fail.
//!
//! # Examples
//!
//! ```
//! use pkgq_core::{PackageRecord, QueryParams, QueryPipeline};
//! use pkgq_core::config::PipelineConfig;
//!
//! let settings = serde_json::from_str::<PipelineConfig>(r#"{ "page_size": 1 }"#)
//!     .unwrap()
//!     .validate()
//!     .unwrap();
//! let pipeline = QueryPipeline::new(settings);
//!
//! let catalog: Vec<PackageRecord> = serde_json::from_value(serde_json::json!([
//!     { "name": "linter", "downloads": 5, "created": "2024-01-01T00:00:00Z", "updated": "2024-01-01T00:00:00Z" },
//!     { "name": "minimap", "downloads": 9, "created": "2024-01-01T00:00:00Z", "updated": "2024-01-01T00:00:00Z" }
//! ]))
//! .unwrap();
//!
//! let page = pipeline.search(&catalog, &QueryParams::default().with_page(2));
//! assert_eq!(page.items[0].name, "linter");
//! assert_eq!(page.page.total_pages, 2);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod pagination;
pub mod pipeline;
pub mod rank;
pub mod sort;
pub mod types;
pub mod view;

pub use config::{PipelineConfig, Settings, SimilarityConfig};
pub use error::{CoreError, Result};
pub use pagination::{
    DEFAULT_NEXT_LINK_POLICY, NextLinkPolicy, PageDescriptor, PageLinks, Paginator,
};
pub use pipeline::QueryPipeline;
pub use rank::rank;
pub use sort::{Direction, SortKey, Sortable, sort};
pub use types::{PackageRecord, QueryParams, ScoredPackage, VersionRecord};
pub use view::{PackageView, QueryResult, VersionView};
