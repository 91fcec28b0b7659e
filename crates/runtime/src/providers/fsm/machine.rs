use skirmish_core::TacticalContext;

use super::{Situation, TacticalState};
use crate::api::ControllerKind;
use crate::events::MatchEvent;
use crate::providers::squad::{Activity, SquadPolicy};

/// Squad policy driven by [`TacticalState`] transitions.
#[derive(Debug)]
pub struct StateMachine {
    current: TacticalState,
}

impl StateMachine {
    pub fn new() -> Self {
        Self {
            current: TacticalState::INITIAL,
        }
    }

    pub fn current(&self) -> TacticalState {
        self.current
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl SquadPolicy for StateMachine {
    fn kind(&self) -> ControllerKind {
        ControllerKind::StateMachine
    }

    fn on_activate(&mut self, ctx: &mut TacticalContext<'_>, events: &mut Vec<MatchEvent>) {
        let Some(situation) = Situation::observe(ctx) else {
            return;
        };
        let next = self.current.transition(&situation, ctx.doctrine());
        if next != self.current {
            next.on_enter(self.current, &situation, ctx.side(), events);
            self.current = next;
        }
    }

    fn run(&mut self, ctx: &mut TacticalContext<'_>) -> Activity {
        self.current.run(ctx)
    }
}
