//! Types downstream clients interact with.
mod errors;
mod provider;

pub use errors::{Result, RuntimeError};
pub use provider::{ControllerKind, SquadController, TurnProgress};
