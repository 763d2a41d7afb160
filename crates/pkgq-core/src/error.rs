use pkgq_similarity::SimilarityError;
use thiserror::Error;

/// Core error types for pkgq.
///
/// Only startup validation surfaces these to callers. The request-time
/// kinds (`InvalidSortKey`, `InvalidDirection`, `MalformedEngineRange`) are
/// recovered inside the pipeline, which always produces a renderable page.
///
/// An empty catalog is not an error: it yields zero results on a single page.
///
/// # Examples
///
/// ```
/// use pkgq_core::error::CoreError;
/// use pkgq_core::SortKey;
///
/// let err = "popularity".parse::<SortKey>().unwrap_err();
/// assert!(matches!(err, CoreError::InvalidSortKey(_)));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid sort key: {0}")]
    InvalidSortKey(String),

    #[error("invalid sort direction: {0}")]
    InvalidDirection(String),

    #[error("malformed engine range '{range}': {message}")]
    MalformedEngineRange { range: String, message: String },

    #[error("invalid configuration for {field}: {message}")]
    InvalidConfig {
        field: &'static str,
        message: String,
    },

    #[error("similarity algorithm selection failed: {0}")]
    Similarity(#[from] SimilarityError),
}

/// Convenience type alias for `Result<T, CoreError>`.
pub type Result<T> = std::result::Result<T, CoreError>;
