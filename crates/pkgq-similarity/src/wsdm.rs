//! Word-split double-mean (WSDM) similarity.
//!
//! Both strings are split into word tokens. Every query token is matched
//! against its best target token and the best scores are averaged (mean A);
//! the same is done from the target side (mean B). The result is the mean of
//! the two. This rewards partial overlap of compound names such as
//! `zen-theme` against `zen theme dark-mode`.

use crate::error::{Result, SimilarityError};
use crate::levenshtein::{EditCosts, levenshtein, weighted_levenshtein};
use crate::normalize::tokenize;
use std::str::FromStr;

/// Edit-distance metric used to compare individual tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenMetric {
    /// Unit-cost Levenshtein
    #[default]
    Levenshtein,
    /// Levenshtein with custom operation costs
    WeightedLevenshtein(EditCosts),
}

impl TokenMetric {
    /// Builds a metric from its configured name.
    ///
    /// `costs` is only used by the weighted variant.
    pub fn from_name(name: &str, costs: EditCosts) -> Result<Self> {
        match name.parse::<crate::AlgorithmKind>() {
            Ok(crate::AlgorithmKind::Levenshtein) => Ok(Self::Levenshtein),
            Ok(crate::AlgorithmKind::WeightedLevenshtein) => {
                Ok(Self::WeightedLevenshtein(costs.validate()?))
            }
            Ok(other) => Err(SimilarityError::UnsupportedTokenMetric {
                name: other.as_str().to_string(),
            }),
            Err(err) => Err(err),
        }
    }

    fn similarity(self, a: &[char], b: &[char]) -> f64 {
        match self {
            Self::Levenshtein => levenshtein(a, b),
            Self::WeightedLevenshtein(costs) => weighted_levenshtein(a, b, costs),
        }
    }
}

impl FromStr for TokenMetric {
    type Err = SimilarityError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s, EditCosts::default())
    }
}

/// WSDM similarity of two already-normalized strings.
///
/// Returns 1.0 when neither side has any tokens and 0.0 when exactly one
/// side is token-free.
///
/// # Examples
///
/// ```
/// use pkgq_similarity::{TokenMetric, wsdm};
///
/// let related = wsdm("zen-theme", "zen theme dark-mode", TokenMetric::Levenshtein);
/// let unrelated = wsdm("zen-theme", "unrelated-name", TokenMetric::Levenshtein);
/// assert!(related > unrelated);
/// ```
pub fn wsdm(query: &str, target: &str, metric: TokenMetric) -> f64 {
    let query_tokens: Vec<Vec<char>> = tokenize(query).map(|t| t.chars().collect()).collect();
    let target_tokens: Vec<Vec<char>> = tokenize(target).map(|t| t.chars().collect()).collect();

    match (query_tokens.is_empty(), target_tokens.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    // best[i][j] is shared by both directions, so compute the matrix once
    let matrix: Vec<Vec<f64>> = query_tokens
        .iter()
        .map(|q| {
            target_tokens
                .iter()
                .map(|t| metric.similarity(q, t))
                .collect()
        })
        .collect();

    let mean_a = matrix
        .iter()
        .map(|row| row.iter().copied().fold(0.0, f64::max))
        .sum::<f64>()
        / query_tokens.len() as f64;

    let mean_b = (0..target_tokens.len())
        .map(|j| matrix.iter().map(|row| row[j]).fold(0.0, f64::max))
        .sum::<f64>()
        / target_tokens.len() as f64;

    f64::midpoint(mean_a, mean_b)
}
