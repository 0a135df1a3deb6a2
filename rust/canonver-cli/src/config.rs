//! Configuration file parsing for `canonver.toml`.
//!
//! Searches the current directory then its ancestors, falling back to
//! `~/.config/canonver/canonver.toml` if no project-level file is found.

use crate::error::CliError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = "canonver.toml";

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct CanonverConfig {
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputSection {
    /// `text` or `json`.
    pub format: OutputFormat,
    /// Render versions without the leading `v`.
    pub standard: bool,
    pub color: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            standard: false,
            color: true,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl CanonverConfig {
    /// Load config from `canonver.toml`, searching the current dir then parents.
    /// Returns `Default` when no file is found or the file found is unusable.
    pub fn load() -> Self {
        let Ok(cwd) = std::env::current_dir() else {
            return Self::default();
        };

        match Self::discover(&cwd) {
            Some(path) => Self::load_from(&path).unwrap_or_else(|err| {
                warn!("ignoring config: {}", err);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Load config from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, CliError> {
        debug!(path = %path.display(), "loading config");

        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Find the nearest `canonver.toml` at or above `start`, then the global one.
    pub fn discover(start: &Path) -> Option<PathBuf> {
        Self::find_upwards(start).or_else(|| {
            let global = dirs::home_dir()?
                .join(".config")
                .join("canonver")
                .join(CONFIG_FILE_NAME);
            global.exists().then_some(global)
        })
    }

    fn find_upwards(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.exists())
    }

    /// Parse a TOML string directly.
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Generate a default `canonver.toml` template.
    pub fn default_template() -> &'static str {
        r#"# canonver configuration

[output]
# "text" or "json"
format = "text"
# Print "1.22.3" instead of "v1.22.3"
standard = false
color = true
"#
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
