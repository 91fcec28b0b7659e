//! Finite state machine controller.
//!
//! Three tactical states share one squad-wide current state. Transitions are
//! evaluated once each time a unit becomes active; the current state then
//! runs every frame until that unit has acted. The machine starts in
//! [`TacticalState::Push`] and has no terminal state.

mod machine;
mod state;

pub use machine::StateMachine;
pub use state::{Situation, TacticalState};
