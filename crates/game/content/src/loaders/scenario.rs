//! Scenario loader.
//!
//! File format (RON):
//! ```ron
//! (
//!     covers: [(position: (0.0, 10.0), tier: Full)],
//!     blue: [(id: 1, position: (0.0, 0.0))],
//!     red: [(id: 2, position: (0.0, 30.0), health: Some(60.0))],
//! )
//! ```

use std::path::Path;

use anyhow::Context;
use skirmish_core::{Battlefield, UnitProfile};

use crate::loaders::{LoadResult, read_file};
use crate::scenario::ScenarioSpec;

/// Loader for scenario layouts from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario layout without placing it.
    pub fn load_spec(path: &Path) -> LoadResult<ScenarioSpec> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Load a scenario and place its units with `profile`.
    pub fn load(path: &Path, profile: &UnitProfile) -> LoadResult<Battlefield> {
        let spec = Self::load_spec(path)?;
        let battlefield = spec
            .build(profile)
            .with_context(|| format!("invalid scenario {}", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            covers = spec.covers.len(),
            blue = spec.blue.len(),
            red = spec.red.len(),
            "scenario loaded"
        );
        Ok(battlefield)
    }

    /// Parse RON text into a layout.
    pub fn parse(content: &str) -> LoadResult<ScenarioSpec> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))
    }
}
