//! Deterministic combat rules and squad state for turn-based skirmishes.
//!
//! `skirmish-core` defines the canonical rules (cover classification, hit
//! chance, damage) and the data the decision makers reason about: units,
//! rosters, the battlefield, and the per-frame [`TacticalContext`]. Anything
//! that needs a frame clock, a movement backend, or a renderer talks to this
//! crate through the collaborator traits in [`env`].
pub mod combat;
pub mod config;
pub mod context;
pub mod env;
pub mod error;
pub mod geometry;
pub mod state;

pub use combat::{
    ShotOutcome, ShotTrace, apply_damage, best_cover_near, check_hit, classify_cover,
    closest_unit, compute_hit_chance, resolve_shot, roll_damage, select_lowest_cover_target,
};
pub use config::{AccuracyProfile, DamageProfile, DoctrineConfig, MatchConfig, UnitProfile};
pub use context::{HealthPools, TacticalContext};
pub use env::{DirectMovement, MovementExecutor, ShotRecorder, ShotVisualizer};
pub use error::{ConfigError, SetupError};
pub use state::{
    ActionPhase, Battlefield, Cover, CoverSet, CoverTier, Roster, Team, Unit, UnitId,
};

pub use glam::{Vec2, Vec3};
