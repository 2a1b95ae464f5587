//! Configuration file loading for the `queens` binary.
//!
//! Settings live in `queens.toml` by default. Every field has a default, so a
//! missing file or a partial file is fine.
//!
//! ```toml
//! [explorer]
//! min_size = 5
//! max_size = 8
//! default_size = 8
//! show_attacks = false
//!
//! [summary]
//! from = 5
//! to = 8
//! examples = 3
//! ```

use queens_core::BoardSize;
use queens_explorer::{ExplorerError, SizeRange};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A configured size range is empty.
    #[error("Invalid range in [{section}]: {source}")]
    InvalidRange {
        section: &'static str,
        source: ExplorerError,
    },
}

/// Settings for the interactive explorer.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ExplorerConfig {
    /// Smallest board the explorer accepts. Defaults to 5.
    #[serde(default = "default_min_size")]
    pub min_size: BoardSize,
    /// Largest board the explorer accepts. Defaults to 8.
    #[serde(default = "default_max_size")]
    pub max_size: BoardSize,
    /// Board opened when the session starts, if any.
    #[serde(default)]
    pub default_size: Option<BoardSize>,
    /// Start with attacked squares highlighted.
    #[serde(default)]
    pub show_attacks: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        ExplorerConfig {
            min_size: default_min_size(),
            max_size: default_max_size(),
            default_size: None,
            show_attacks: false,
        }
    }
}

/// Settings for the batch summary.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SummaryConfig {
    /// First board size to solve. Defaults to 5.
    #[serde(default = "default_min_size")]
    pub from: BoardSize,
    /// Last board size to solve. Defaults to 8.
    #[serde(default = "default_max_size")]
    pub to: BoardSize,
    /// Number of example boards printed per size. Defaults to 3.
    #[serde(default = "default_examples")]
    pub examples: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        SummaryConfig {
            from: default_min_size(),
            to: default_max_size(),
            examples: default_examples(),
        }
    }
}

fn default_min_size() -> BoardSize {
    SizeRange::default().min()
}

fn default_max_size() -> BoardSize {
    SizeRange::default().max()
}

fn default_examples() -> usize {
    3
}

/// Top-level configuration.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct QueensConfig {
    #[serde(default)]
    pub explorer: ExplorerConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
}

impl QueensConfig {
    /// Default configuration file name, relative to the working directory.
    pub const DEFAULT_PATH: &'static str = "queens.toml";

    /// Loads the configuration from `path`.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML or an
    /// invalid board size.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config = toml::from_str(&content)?;
            tracing::debug!(path = %path.display(), "Loaded config");
            Ok(config)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Board sizes accepted by the explorer.
    pub fn explorer_range(&self) -> Result<SizeRange, ConfigError> {
        SizeRange::new(self.explorer.min_size, self.explorer.max_size).map_err(|source| {
            ConfigError::InvalidRange {
                section: "explorer",
                source,
            }
        })
    }

    /// Board sizes covered by the summary.
    pub fn summary_range(&self) -> Result<SizeRange, ConfigError> {
        SizeRange::new(self.summary.from, self.summary.to).map_err(|source| {
            ConfigError::InvalidRange {
                section: "summary",
                source,
            }
        })
    }
}
