use serde::Serialize;
use skirmish_core::{ShotOutcome, Team, UnitId};

use crate::api::ControllerKind;
use crate::providers::TacticalState;

/// A shot fired during a frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ShotReport {
    pub shooter: UnitId,
    pub target: UnitId,
    pub outcome: ShotOutcome,
}

/// High-level occurrences in a match, in the order they happened.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MatchEvent {
    /// A side took the turn.
    TurnStarted {
        round: u32,
        side: Team,
        controller: ControllerKind,
    },

    /// A unit became the one being decided for.
    UnitActivated { side: Team, unit: UnitId },

    /// The state machine switched tactical state.
    StateChanged {
        side: Team,
        from: TacticalState,
        to: TacticalState,
    },

    /// A unit was ordered to move.
    MoveIssued {
        unit: UnitId,
        destination: glam::Vec2,
    },

    ShotResolved(ShotReport),

    /// A unit ran out of health and left its roster.
    UnitDown { side: Team, unit: UnitId },

    /// A side handed the turn over.
    TurnEnded { round: u32, side: Team },

    /// One side has no units left.
    MatchOver { winner: Team, rounds: u32 },
}
