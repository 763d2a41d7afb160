use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Query a package catalog snapshot.
#[derive(Parser, Debug)]
#[command(name = "pkgq", version, about)]
pub struct Cli {
    /// Pipeline configuration (JSON); defaults apply when omitted
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Catalog snapshot (JSON array of packages)
    #[arg(long, value_name = "FILE")]
    pub catalog: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List or search packages, one page at a time
    Search {
        /// Free-text query; lists the catalog when empty
        #[arg(short, long, default_value = "")]
        query: String,

        /// relevance, downloads, stars, created or updated
        #[arg(short, long)]
        sort: Option<String>,

        /// asc or desc; the sort key's default when omitted
        #[arg(short, long)]
        direction: Option<String>,

        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Show one package, optionally restricted to an engine version
    Show {
        name: String,

        /// Engine version to check compatibility against
        #[arg(short, long)]
        engine: Option<String>,
    },
}
