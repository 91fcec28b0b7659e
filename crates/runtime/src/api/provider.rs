use skirmish_core::{TacticalContext, UnitId};

use crate::events::MatchEvent;
use crate::providers::ManualOrder;

/// What a controller wants after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnProgress {
    Continue,
    EndTurn,
}

/// Which decision maker drives a side.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, serde::Serialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum ControllerKind {
    Manual,
    StateMachine,
    BehaviourTree,
}

/// Drives one side while it holds the turn.
///
/// The coordinator resets the side's action budget, calls
/// [`SquadController::begin_turn`] once, then [`SquadController::update`]
/// every frame until the controller asks to end the turn.
pub trait SquadController {
    fn kind(&self) -> ControllerKind;

    /// Unit currently being decided for, if any.
    fn active_unit(&self) -> Option<UnitId>;

    fn begin_turn(&mut self, ctx: &mut TacticalContext<'_>);

    fn update(
        &mut self,
        ctx: &mut TacticalContext<'_>,
        dt: f32,
        events: &mut Vec<MatchEvent>,
    ) -> TurnProgress;

    /// Queues an order from outside the match. Controllers that decide on
    /// their own reject every order.
    fn submit(&mut self, order: ManualOrder) -> bool {
        let _ = order;
        false
    }
}
