use pkgq_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Error types for the pkgq command line.
///
/// Any of these ends the process with exit code 1.
///
/// # Examples
///
/// ```
/// use pkgq_cli::error::CliError;
///
/// let err = CliError::PackageNotFound("zen-theme".into());
/// assert_eq!(err.to_string(), "package not found: zen-theme");
/// ```
#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] CoreError),

    #[error("package not found: {0}")]
    PackageNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for `Result<T, CliError>`.
pub type Result<T> = std::result::Result<T, CliError>;
