use thiserror::Error;

/// Errors raised while selecting or configuring a similarity algorithm.
///
/// These only occur at startup. Once a [`Scorer`](crate::Scorer) exists,
/// scoring is total and never fails.
///
/// # Examples
///
/// ```
/// use pkgq_similarity::{AlgorithmKind, SimilarityError};
///
/// let err = "soundex".parse::<AlgorithmKind>().unwrap_err();
/// assert!(matches!(err, SimilarityError::UnknownAlgorithm { .. }));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    /// Configured algorithm name is not one of the supported variants
    #[error("unknown similarity algorithm '{name}' (expected one of: {expected})")]
    UnknownAlgorithm {
        name: String,
        expected: &'static str,
    },

    /// Algorithm cannot be used as the per-token metric of word-split scoring
    #[error("'{name}' cannot be used as the word-split token metric")]
    UnsupportedTokenMetric { name: String },

    /// Edit costs outside the accepted range
    #[error("invalid edit costs: {0}")]
    InvalidEditCosts(String),
}

/// Result type alias for similarity configuration.
pub type Result<T> = std::result::Result<T, SimilarityError>;
