//! Squad and battlefield state.
//!
//! This module owns the data that describes units, their rosters, and the
//! cover objects scattered across the ground plane. Decision makers query it
//! through [`crate::TacticalContext`]; the turn flow mutates it through the
//! action-gated operations on [`Unit`].
mod battlefield;
mod common;
mod cover;
mod roster;
mod unit;

pub use battlefield::Battlefield;
pub use common::{Team, UnitId};
pub use cover::{Cover, CoverSet, CoverTier};
pub use roster::Roster;
pub use unit::{ActionPhase, Unit};
