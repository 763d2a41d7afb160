//! Reads configuration and catalog snapshots from disk.

use crate::error::{CliError, Result};
use pkgq_core::PackageRecord;
use pkgq_core::config::PipelineConfig;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the pipeline configuration, or the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    match path {
        Some(path) => {
            tracing::debug!("loading configuration from {}", path.display());
            read_json(path)
        }
        None => Ok(PipelineConfig::default()),
    }
}

/// Loads a catalog snapshot: a JSON array of package records.
pub fn load_catalog(path: &Path) -> Result<Vec<PackageRecord>> {
    let catalog: Vec<PackageRecord> = read_json(path)?;
    tracing::info!("loaded {} packages from {}", catalog.len(), path.display());
    Ok(catalog)
}
