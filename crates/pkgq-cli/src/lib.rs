//! Command-line front end for pkgq.
//!
//! Loads a configuration and a catalog snapshot, runs one query through
//! [`QueryPipeline`] and prints the result as JSON on stdout. Logs go to
//! stderr.

pub mod cli;
pub mod error;
pub mod loader;

use crate::cli::{Cli, Command};
use crate::error::{CliError, Result};
use pkgq_core::{QueryParams, QueryPipeline};
use std::io::Write;

/// Executes `cli`, writing pretty-printed JSON to `out`.
///
/// Configuration is validated before the catalog is read, so a bad config
/// fails without touching the snapshot.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let settings = loader::load_config(cli.config.as_deref())?.validate()?;
    let pipeline = QueryPipeline::new(settings);
    let catalog = loader::load_catalog(&cli.catalog)?;

    match &cli.command {
        Command::Search {
            query,
            sort,
            direction,
            page,
        } => {
            let params = QueryParams {
                page: *page,
                sort: sort.clone(),
                direction: direction.clone(),
                query: query.clone(),
                engine: None,
            };
            let result = pipeline.search(&catalog, &params);
            serde_json::to_writer_pretty(&mut *out, &result)?;
        }
        Command::Show { name, engine } => {
            let package = pipeline
                .find(&catalog, name)
                .ok_or_else(|| CliError::PackageNotFound(name.clone()))?;
            let view = pipeline.detail(package, engine.as_deref());
            serde_json::to_writer_pretty(&mut *out, &view)?;
        }
    }

    writeln!(out)?;
    Ok(())
}
