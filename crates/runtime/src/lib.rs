//! Turn orchestration and squad decision making.
//!
//! This crate wires the combat rules from `skirmish-core` into a playable
//! match. Consumers embed [`TurnCoordinator`] to drive frames, read
//! [`MatchEvent`]s, and submit [`ManualOrder`]s for a human-controlled side.
//!
//! Modules are organized by responsibility:
//! - [`coordinator`] owns the battlefield and alternates turns
//! - [`api`] exposes the controller seam and the error type
//! - [`events`] describes what happened during a frame
//! - [`providers`] holds the controllers: manual orders, the behaviour tree,
//!   and the finite state machine
pub mod api;
pub mod coordinator;
pub mod events;
pub mod providers;

pub use api::{ControllerKind, Result, RuntimeError, SquadController, TurnProgress};
pub use coordinator::{GameMode, MatchStatus, TurnCoordinator};
pub use events::{MatchEvent, ShotReport};
pub use providers::{
    Activity, BehaviourTree, ManualController, ManualOrder, SquadDriver, SquadPolicy,
    StateMachine, TacticalState,
};
