//! Controller implementations for the two sides.
//!
//! - [`ManualController`] replays orders queued by a host (the player).
//! - [`SquadDriver`] sequences units for an automated side and delegates the
//!   per-unit decision to a [`SquadPolicy`]: either the [`BehaviourTree`] or
//!   the [`StateMachine`]. Both policies express the same doctrine.

pub mod bt;
pub mod doctrine;
pub mod fsm;
pub mod manual;
pub mod squad;

pub use bt::BehaviourTree;
pub use doctrine::Heading;
pub use fsm::{StateMachine, TacticalState};
pub use manual::{ManualController, ManualOrder};
pub use squad::{Activity, SquadDriver, SquadPolicy};
