//! String-similarity algorithms for pkgq.
//!
//! Every algorithm maps a pair of strings to a score in `[0, 1]`, is
//! deterministic, and is total: empty inputs resolve to defined values
//! (`("", "") → 1`, `(a, "") → 0`) instead of errors.
//!
//! # Algorithms
//!
//! - **Levenshtein**: unit-cost edit distance over the longer length
//! - **Weighted Levenshtein**: custom-cost edit distance over the combined length
//! - **WSDM**: word-split double-mean, token best-match averaging in both directions
//! - **LCS**: longest-common-subsequence overlap, with traceback for highlighting
//!
//! All dynamic-programming variants run in O(n·m) time and score with two
//! rolling rows, so memory stays O(min(n, m)).
//!
//! # Examples
//!
//! Selecting the process-wide algorithm at startup:
//!
//! ```
//! use pkgq_similarity::{Algorithm, EditCosts, Scorer};
//!
//! let algorithm = Algorithm::select("wsdm", "levenshtein", EditCosts::default()).unwrap();
//! let scorer = Scorer::new(algorithm);
//!
//! let related = scorer.score("zen-theme", "Zen Theme dark-mode");
//! let unrelated = scorer.score("zen-theme", "unrelated-name");
//! assert!(related > unrelated);
//! ```

pub mod algorithm;
pub mod error;
pub mod lcs;
pub mod levenshtein;
pub mod normalize;
pub mod wsdm;

pub use algorithm::{Algorithm, AlgorithmKind, Scorer};
pub use error::{Result, SimilarityError};
pub use lcs::{LcsMatch, lcs_length, lcs_similarity, lcs_traceback};
pub use levenshtein::{EditCosts, edit_distance, levenshtein, weighted_levenshtein};
pub use normalize::{normalize, tokenize};
pub use wsdm::{TokenMetric, wsdm};
