//! Algorithm selection and the process-wide scorer.

use crate::error::{Result, SimilarityError};
use crate::lcs::lcs_similarity;
use crate::levenshtein::{EditCosts, levenshtein, weighted_levenshtein};
use crate::normalize::normalize;
use crate::wsdm::{TokenMetric, wsdm};
use std::fmt;
use std::str::FromStr;

/// Names of the supported algorithms, used in error messages.
const EXPECTED_NAMES: &str = "levenshtein, weighted-levenshtein, wsdm, lcs";

/// The closed set of similarity algorithms, without their parameters.
///
/// Parsing is case-insensitive and treats `_` like `-`.
///
/// # Examples
///
/// ```
/// use pkgq_similarity::AlgorithmKind;
///
/// assert_eq!("LCS".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::LongestCommonSubsequence);
/// assert_eq!(
///     "weighted_levenshtein".parse::<AlgorithmKind>().unwrap(),
///     AlgorithmKind::WeightedLevenshtein
/// );
/// assert!("fuzzy".parse::<AlgorithmKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    Levenshtein,
    WeightedLevenshtein,
    WordSplitDoubleMean,
    LongestCommonSubsequence,
}

impl AlgorithmKind {
    pub const ALL: [Self; 4] = [
        Self::Levenshtein,
        Self::WeightedLevenshtein,
        Self::WordSplitDoubleMean,
        Self::LongestCommonSubsequence,
    ];

    /// Canonical configuration name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Levenshtein => "levenshtein",
            Self::WeightedLevenshtein => "weighted-levenshtein",
            Self::WordSplitDoubleMean => "wsdm",
            Self::LongestCommonSubsequence => "lcs",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmKind {
    type Err = SimilarityError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == key)
            .ok_or_else(|| SimilarityError::UnknownAlgorithm {
                name: s.to_string(),
                expected: EXPECTED_NAMES,
            })
    }
}

/// A fully parameterized similarity algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Unit-cost edit distance normalized by the longer length
    Levenshtein,
    /// Custom-cost edit distance normalized by the combined length
    WeightedLevenshtein(EditCosts),
    /// Token-level best-match averaging in both directions
    WordSplitDoubleMean(TokenMetric),
    /// LCS overlap normalized by the combined length
    LongestCommonSubsequence,
}

impl Algorithm {
    /// Resolves configured names into an algorithm.
    ///
    /// `token_metric` names the per-token metric for WSDM and is ignored by
    /// the other algorithms. `costs` feed the weighted variants.
    ///
    /// # Errors
    ///
    /// Returns `UnknownAlgorithm` for unsupported names,
    /// `UnsupportedTokenMetric` when WSDM is asked to use a non edit-distance
    /// metric, and `InvalidEditCosts` for zero costs.
    ///
    /// # Examples
    ///
    /// ```
    /// use pkgq_similarity::{Algorithm, EditCosts, TokenMetric};
    ///
    /// let algorithm = Algorithm::select("wsdm", "levenshtein", EditCosts::default()).unwrap();
    /// assert_eq!(algorithm, Algorithm::WordSplitDoubleMean(TokenMetric::Levenshtein));
    /// ```
    pub fn select(name: &str, token_metric: &str, costs: EditCosts) -> Result<Self> {
        Ok(match name.parse::<AlgorithmKind>()? {
            AlgorithmKind::Levenshtein => Self::Levenshtein,
            AlgorithmKind::WeightedLevenshtein => Self::WeightedLevenshtein(costs.validate()?),
            AlgorithmKind::WordSplitDoubleMean => {
                Self::WordSplitDoubleMean(TokenMetric::from_name(token_metric, costs)?)
            }
            AlgorithmKind::LongestCommonSubsequence => Self::LongestCommonSubsequence,
        })
    }

    pub const fn kind(self) -> AlgorithmKind {
        match self {
            Self::Levenshtein => AlgorithmKind::Levenshtein,
            Self::WeightedLevenshtein(_) => AlgorithmKind::WeightedLevenshtein,
            Self::WordSplitDoubleMean(_) => AlgorithmKind::WordSplitDoubleMean,
            Self::LongestCommonSubsequence => AlgorithmKind::LongestCommonSubsequence,
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Self::WordSplitDoubleMean(TokenMetric::Levenshtein)
    }
}

/// Scores text similarity with one fixed algorithm.
///
/// Created once at startup and shared read-only by every request. Both
/// inputs are passed through [`normalize`] before the algorithm sees them.
///
/// # Examples
///
/// ```
/// use pkgq_similarity::{Algorithm, Scorer};
///
/// let scorer = Scorer::new(Algorithm::Levenshtein);
/// assert_eq!(scorer.score("Minimap", "minimap"), 1.0);
/// assert_eq!(scorer.score("", ""), 1.0);
/// assert_eq!(scorer.score("minimap", ""), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scorer {
    algorithm: Algorithm,
}

impl Scorer {
    pub const fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Similarity in `[0, 1]` between `query` and `target`.
    pub fn score(&self, query: &str, target: &str) -> f64 {
        self.score_normalized(&normalize(query), &normalize(target))
    }

    /// Like [`score`](Self::score) for inputs that are already normalized.
    ///
    /// Lets callers normalize a query once and reuse it across a catalog.
    /// Emptiness is decided on the strings themselves before any algorithm
    /// runs, so a separator-only query still scores 0 against `""`.
    pub fn score_normalized(&self, query: &str, target: &str) -> f64 {
        match (query.is_empty(), target.is_empty()) {
            (true, true) => return 1.0,
            (true, false) | (false, true) => return 0.0,
            (false, false) => {}
        }

        let score = match self.algorithm {
            Algorithm::WordSplitDoubleMean(metric) => wsdm(query, target, metric),
            Algorithm::Levenshtein => {
                let (q, t) = (chars(query), chars(target));
                levenshtein(&q, &t)
            }
            Algorithm::WeightedLevenshtein(costs) => {
                let (q, t) = (chars(query), chars(target));
                weighted_levenshtein(&q, &t, costs)
            }
            Algorithm::LongestCommonSubsequence => {
                let (q, t) = (chars(query), chars(target));
                lcs_similarity(&q, &t)
            }
        };
        score.clamp(0.0, 1.0)
    }
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}
