//! Game configuration loader.

use std::path::Path;

use anyhow::Context;
use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Bundled defaults, identical to [`GameConfig::default`].
pub const DEFAULT_CONFIG: &str = include_str!("../../data/config.toml");

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing tables and fields fall back to their defaults. The result is
    /// validated for day 1; deeper levels are validated by the session as
    /// they are generated.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in config file {}", path.display()))
    }

    /// Parse and validate config from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate_for_level(1)
            .context("config rejected")?;
        Ok(config)
    }

    /// Loads `path` when given, otherwise the bundled defaults.
    pub fn load_or_default(path: Option<&Path>) -> LoadResult<GameConfig> {
        match path {
            Some(path) => Self::load(path),
            None => Self::parse(DEFAULT_CONFIG),
        }
    }
}
