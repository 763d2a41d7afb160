use crate::error::{CoreError, Result};
use crate::pagination::{DEFAULT_NEXT_LINK_POLICY, NextLinkPolicy};
use crate::sort::{Direction, SortKey};
use pkgq_similarity::{Algorithm, EditCosts, Scorer};
use serde::Deserialize;
use std::num::NonZeroUsize;

/// Startup configuration for the query pipeline.
///
/// Deserialized once when the process starts and turned into [`Settings`]
/// by [`validate`](Self::validate). All fields use defaults when omitted.
///
/// # Examples
///
/// ```
/// use pkgq_core::config::PipelineConfig;
///
/// let json = r#"{
///     "page_size": 10,
///     "similarity": { "algorithm": "lcs" }
/// }"#;
///
/// let config: PipelineConfig = serde_json::from_str(json).unwrap();
/// let settings = config.validate().unwrap();
/// assert_eq!(settings.page_size.get(), 10);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_sort")]
    pub default_sort: String,
    /// Direction for the default sort; the key's own default when omitted
    #[serde(default)]
    pub default_direction: Option<Direction>,
    #[serde(default)]
    pub similarity: SimilarityConfig,
    /// Queries longer than this many characters are truncated
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
    #[serde(default = "default_next_link")]
    pub next_link: NextLinkPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            default_sort: default_sort(),
            default_direction: None,
            similarity: SimilarityConfig::default(),
            max_query_length: default_max_query_length(),
            next_link: default_next_link(),
        }
    }
}

/// Similarity algorithm selection.
///
/// # Defaults
///
/// - `algorithm`: `"wsdm"`
/// - `token_metric`: `"levenshtein"` (per-token metric for WSDM)
/// - `edit_costs`: insertion 1, deletion 1, substitution 2
#[derive(Debug, Clone, Deserialize)]
pub struct SimilarityConfig {
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    #[serde(default = "default_token_metric")]
    pub token_metric: String,
    #[serde(default)]
    pub edit_costs: EditCosts,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            token_metric: default_token_metric(),
            edit_costs: EditCosts::default(),
        }
    }
}

/// Validated, immutable settings shared by every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub page_size: NonZeroUsize,
    pub default_sort: SortKey,
    pub default_direction: Option<Direction>,
    pub scorer: Scorer,
    pub max_query_length: usize,
    pub next_link: NextLinkPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: NonZeroUsize::new(default_page_size()).unwrap_or(NonZeroUsize::MIN),
            default_sort: SortKey::Downloads,
            default_direction: None,
            scorer: Scorer::default(),
            max_query_length: default_max_query_length(),
            next_link: default_next_link(),
        }
    }
}

impl PipelineConfig {
    /// Checks the configuration and resolves it into [`Settings`].
    ///
    /// Runs once at startup; any error must stop the process before it
    /// serves a request. An unknown similarity algorithm is reported as
    /// [`CoreError::Similarity`].
    pub fn validate(&self) -> Result<Settings> {
        let page_size = NonZeroUsize::new(self.page_size).ok_or(CoreError::InvalidConfig {
            field: "page_size",
            message: "must be at least 1".into(),
        })?;

        if self.max_query_length == 0 {
            return Err(CoreError::InvalidConfig {
                field: "max_query_length",
                message: "must be at least 1".into(),
            });
        }

        let default_sort = self
            .default_sort
            .parse::<SortKey>()
            .map_err(|e| CoreError::InvalidConfig {
                field: "default_sort",
                message: e.to_string(),
            })?;

        let algorithm = Algorithm::select(
            &self.similarity.algorithm,
            &self.similarity.token_metric,
            self.similarity.edit_costs,
        )?;

        tracing::info!(
            "pipeline configured: page_size={}, default_sort={}, algorithm={}",
            page_size,
            default_sort,
            algorithm.kind()
        );

        Ok(Settings {
            page_size,
            default_sort,
            default_direction: self.default_direction,
            scorer: Scorer::new(algorithm),
            max_query_length: self.max_query_length,
            next_link: self.next_link,
        })
    }
}

// Default value functions
const fn default_page_size() -> usize {
    30
}

fn default_sort() -> String {
    "downloads".to_string()
}

fn default_algorithm() -> String {
    "wsdm".to_string()
}

fn default_token_metric() -> String {
    "levenshtein".to_string()
}

const fn default_max_query_length() -> usize {
    50
}

const fn default_next_link() -> NextLinkPolicy {
    DEFAULT_NEXT_LINK_POLICY
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkgq_similarity::{SimilarityError, TokenMetric};

    #[test]
    fn test_defaults() {
        let config: PipelineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.page_size, 30);
        assert_eq!(config.default_sort, "downloads");
        assert_eq!(config.similarity.algorithm, "wsdm");
        assert_eq!(config.max_query_length, 50);
        assert_eq!(config.next_link, NextLinkPolicy::Verbatim);
    }

    #[test]
    fn test_default_config_validates_to_default_settings() {
        let settings = PipelineConfig::default().validate().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_full_config() {
        let json = r#"{
            "page_size": 12,
            "default_sort": "stars",
            "default_direction": "asc",
            "similarity": {
                "algorithm": "wsdm",
                "token_metric": "weighted-levenshtein",
                "edit_costs": { "insertion": 1, "deletion": 2, "substitution": 3 }
            },
            "max_query_length": 80,
            "next_link": "clamped"
        }"#;

        let settings = serde_json::from_str::<PipelineConfig>(json)
            .unwrap()
            .validate()
            .unwrap();

        assert_eq!(settings.page_size.get(), 12);
        assert_eq!(settings.default_sort, SortKey::Stars);
        assert_eq!(settings.default_direction, Some(Direction::Asc));
        assert_eq!(settings.max_query_length, 80);
        assert_eq!(settings.next_link, NextLinkPolicy::Clamped);
        assert_eq!(
            settings.scorer.algorithm(),
            Algorithm::WordSplitDoubleMean(TokenMetric::WeightedLevenshtein(EditCosts {
                insertion: 1,
                deletion: 2,
                substitution: 3,
            }))
        );
    }

    #[test]
    fn test_unknown_algorithm_fails_startup() {
        let json = r#"{ "similarity": { "algorithm": "soundex" } }"#;
        let err = serde_json::from_str::<PipelineConfig>(json)
            .unwrap()
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Similarity(SimilarityError::UnknownAlgorithm { .. })
        ));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config = PipelineConfig {
            page_size: 0,
            ..PipelineConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig { field: "page_size", .. }));
    }

    #[test]
    fn test_zero_query_length_rejected() {
        let config = PipelineConfig {
            max_query_length: 0,
            ..PipelineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_default_sort_rejected() {
        let config = PipelineConfig {
            default_sort: "popularity".into(),
            ..PipelineConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidConfig {
                field: "default_sort",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_next_link_policy_rejected() {
        let json = r#"{ "next_link": "sometimes" }"#;
        assert!(serde_json::from_str::<PipelineConfig>(json).is_err());
    }
}
