//! Session configuration loaded from an optional TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::search::UnknownLocationPolicy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// How query answers are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings for the interactive session.
///
/// Every field has a default, so an empty file is a valid config.
///
/// # Examples
///
/// ```
/// use rental_graph::config::{OutputFormat, RouteConfig};
/// use rental_graph::search::UnknownLocationPolicy;
///
/// let config = RouteConfig::from_toml_str("distance_unit = \"mi\"").unwrap();
/// assert_eq!(config.distance_unit, "mi");
/// assert_eq!(config.unknown_locations, UnknownLocationPolicy::Distinguish);
/// assert_eq!(config.output, OutputFormat::Text);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouteConfig {
    /// Label printed after every distance.
    pub distance_unit: String,
    /// Treatment of labels that were never added.
    pub unknown_locations: UnknownLocationPolicy,
    pub output: OutputFormat,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            distance_unit: "km".to_string(),
            unknown_locations: UnknownLocationPolicy::default(),
            output: OutputFormat::default(),
        }
    }
}

impl RouteConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] on malformed TOML or unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses the config file at `path`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}
