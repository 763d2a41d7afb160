//! Edit-distance similarity: plain and weighted Levenshtein.

use crate::error::{Result, SimilarityError};
use serde::{Deserialize, Serialize};

/// Per-operation costs for weighted edit distance.
///
/// # Defaults
///
/// - `insertion`: `1`
/// - `deletion`: `1`
/// - `substitution`: `2` (a substitution costs as much as delete + insert)
///
/// # Examples
///
/// ```
/// use pkgq_similarity::EditCosts;
///
/// let costs: EditCosts = serde_json::from_str(r#"{"substitution": 3}"#).unwrap();
/// assert_eq!(costs.insertion, 1);
/// assert_eq!(costs.substitution, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditCosts {
    #[serde(default = "default_unit_cost")]
    pub insertion: u32,
    #[serde(default = "default_unit_cost")]
    pub deletion: u32,
    #[serde(default = "default_substitution_cost")]
    pub substitution: u32,
}

impl EditCosts {
    /// Classic Levenshtein: every operation costs 1.
    pub const UNIT: Self = Self {
        insertion: 1,
        deletion: 1,
        substitution: 1,
    };

    /// Checks that every cost is at least 1.
    ///
    /// A zero cost would let unrelated strings score as identical.
    pub fn validate(self) -> Result<Self> {
        for (operation, cost) in [
            ("insertion", self.insertion),
            ("deletion", self.deletion),
            ("substitution", self.substitution),
        ] {
            if cost == 0 {
                return Err(SimilarityError::InvalidEditCosts(format!(
                    "{} must be at least 1",
                    operation
                )));
            }
        }
        Ok(self)
    }

    /// Swaps insertion and deletion, giving the costs of the reverse transformation.
    const fn mirrored(self) -> Self {
        Self {
            insertion: self.deletion,
            deletion: self.insertion,
            substitution: self.substitution,
        }
    }
}

impl Default for EditCosts {
    fn default() -> Self {
        Self {
            insertion: default_unit_cost(),
            deletion: default_unit_cost(),
            substitution: default_substitution_cost(),
        }
    }
}

const fn default_unit_cost() -> u32 {
    1
}

const fn default_substitution_cost() -> u32 {
    2
}

/// Minimum cost of transforming `source` into `target`.
///
/// Runs in O(n·m) time with two rolling rows sized by the shorter input.
/// When `target` is the longer side the inputs are swapped and the
/// insertion/deletion costs mirrored, which yields the same distance.
pub fn edit_distance(source: &[char], target: &[char], costs: EditCosts) -> u64 {
    if target.len() > source.len() {
        return edit_distance(target, source, costs.mirrored());
    }

    let insertion = u64::from(costs.insertion);
    let deletion = u64::from(costs.deletion);
    let substitution = u64::from(costs.substitution);

    // prev[j]: cost of turning source[..i] into target[..j]
    let mut prev: Vec<u64> = (0..=target.len() as u64).map(|j| j * insertion).collect();
    let mut cur = vec![0u64; target.len() + 1];

    for (i, &s) in source.iter().enumerate() {
        cur[0] = (i as u64 + 1) * deletion;

        for (j, &t) in target.iter().enumerate() {
            let replace = if s == t { prev[j] } else { prev[j] + substitution };
            let delete = prev[j + 1] + deletion;
            let insert = cur[j] + insertion;
            cur[j + 1] = replace.min(delete).min(insert);
        }

        std::mem::swap(&mut prev, &mut cur);
    }

    prev[target.len()]
}

/// Plain Levenshtein similarity: `1 - distance / max(len(a), len(b))`.
///
/// # Examples
///
/// ```
/// use pkgq_similarity::levenshtein;
///
/// let a: Vec<char> = "kitten".chars().collect();
/// let b: Vec<char> = "sitting".chars().collect();
/// let score = levenshtein(&a, &b);
/// assert!((score - (1.0 - 3.0 / 7.0)).abs() < 1e-12);
/// ```
pub fn levenshtein(a: &[char], b: &[char]) -> f64 {
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 1.0;
    }

    let distance = edit_distance(a, b, EditCosts::UNIT);
    1.0 - distance as f64 / longest as f64
}

/// Weighted Levenshtein similarity: `1 - distance / (len(a) + len(b))`.
///
/// With the default costs the distance never exceeds `len(a) + len(b)`.
/// Heavier custom costs can, so the result is clamped to `[0, 1]`.
pub fn weighted_levenshtein(a: &[char], b: &[char], costs: EditCosts) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let distance = edit_distance(a, b, costs);
    (1.0 - distance as f64 / total as f64).clamp(0.0, 1.0)
}
