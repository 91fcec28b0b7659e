//! Scenario definitions and data loaders.
//!
//! This crate turns static data into match inputs:
//! - Scenario layouts (cover placement and starting squads), either built in
//!   or read from RON files
//! - Match tunables read from TOML files
//!
//! Everything a loader returns has already been validated, so the runtime can
//! take it as is.

pub mod scenario;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use scenario::{CoverSpec, ScenarioSpec, UnitSpec};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, ScenarioLoader};
