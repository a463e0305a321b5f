//! Per-board resolver configuration.

use crate::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Which resolver a [`crate::CompiledBoard`] uses.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResolutionStrategy {
    /// Linear scans over the board's relation list.
    #[default]
    Legacy,
    /// Dense neighbour table lookups.
    FastPath,
    /// Runs both, reports disagreements and answers with the legacy result.
    Verified,
}

/// Resolution settings chosen when a board is compiled.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Resolver selection.
    #[serde(default = "default_strategy")]
    strategy: ResolutionStrategy,

    /// Boards with more tiles than this refuse `Any` patterns.
    #[serde(default)]
    any_pattern_tile_limit: Option<usize>,
}

#[instrument]
fn default_strategy() -> ResolutionStrategy {
    ResolutionStrategy::Legacy
}

impl ResolverConfig {
    /// Configuration using `strategy` and no `Any` limit.
    #[instrument]
    pub fn new(strategy: ResolutionStrategy) -> Self {
        Self {
            strategy,
            any_pattern_tile_limit: None,
        }
    }

    /// Returns a copy that refuses `Any` patterns on boards above `limit`
    /// tiles.
    pub fn with_any_pattern_tile_limit(mut self, limit: usize) -> Self {
        self.any_pattern_tile_limit = Some(limit);
        self
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not a valid configuration.
    #[instrument(skip(text))]
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(strategy = %config.strategy, "Resolver config parsed");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading resolver config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(strategy = %config.strategy, "Resolver config loaded");
        Ok(config)
    }
}
