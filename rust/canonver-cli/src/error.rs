//! Errors surfaced by the `canonver` command line.

use canonver_core::VersionError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid toml in '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A command needed a version but was handed the empty string.
    #[error("{argument}: {source}")]
    MissingVersion {
        argument: String,
        #[source]
        source: VersionError,
    },

    #[error("cannot read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("failed to encode json output: {0}")]
    Json(#[from] serde_json::Error),
}
