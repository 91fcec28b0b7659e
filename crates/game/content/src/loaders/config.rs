//! Match configuration loader.

use std::path::Path;

use anyhow::Context;
use skirmish_core::MatchConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for match tunables from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`MatchConfig`] from a TOML file.
    ///
    /// Missing tables and keys fall back to their defaults. The result is
    /// validated, so an out-of-range tunable fails here rather than at use.
    pub fn load(path: &Path) -> LoadResult<MatchConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parse and validate TOML text.
    pub fn parse(content: &str) -> LoadResult<MatchConfig> {
        let config: MatchConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;

        tracing::debug!(seed = config.seed, "match config loaded");
        Ok(config)
    }
}
