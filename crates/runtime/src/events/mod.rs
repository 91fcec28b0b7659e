//! Events emitted by the turn flow.
//!
//! The coordinator collects events while it processes a frame; hosts drain
//! them afterwards to drive UI, logs, or replays.
mod match_event;

pub use match_event::{MatchEvent, ShotReport};
