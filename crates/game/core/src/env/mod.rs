//! Traits describing the collaborators outside the combat rules.
//!
//! Movement and shot visuals belong to whatever hosts the match (a renderer,
//! a navigation layer, a headless simulator). The core only submits intents
//! through these traits and never depends on how they are carried out.
mod movement;
mod visuals;

pub use movement::{DirectMovement, MovementExecutor};
pub use visuals::{ShotRecorder, ShotVisualizer};
