//! Turn alternation and match lifecycle.
//!
//! [`TurnCoordinator`] owns the battlefield and drives it one frame at a time:
//! pending moves are stepped, the side on turn decides, casualties are
//! removed, and the match ends as soon as one roster is empty. Turns
//! alternate strictly; resetting a side's action budget happens only when it
//! takes the turn.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use skirmish_core::{
    Battlefield, DirectMovement, MatchConfig, MovementExecutor, ShotRecorder, ShotVisualizer,
    TacticalContext, Team, UnitId,
};

use crate::api::{ControllerKind, Result, RuntimeError, SquadController, TurnProgress};
use crate::events::MatchEvent;
use crate::providers::{BehaviourTree, ManualController, ManualOrder, SquadDriver, StateMachine};

/// Who controls each side.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
    Serialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// The player (blue) against the state machine (red).
    VersusStateMachine,
    /// The player (blue) against the behaviour tree (red).
    VersusBehaviourTree,
    /// State machine (blue) against behaviour tree (red).
    AiVersusAi,
}

impl GameMode {
    /// Side the player commands in the versus modes.
    pub const PLAYER_SIDE: Team = Team::Blue;

    /// Side that takes the first turn.
    pub const fn first_side(self) -> Team {
        Team::Blue
    }

    pub const fn controller_kind(self, team: Team) -> ControllerKind {
        match (self, team) {
            (Self::VersusStateMachine | Self::VersusBehaviourTree, Team::Blue) => {
                ControllerKind::Manual
            }
            (Self::VersusStateMachine, Team::Red) | (Self::AiVersusAi, Team::Blue) => {
                ControllerKind::StateMachine
            }
            (Self::VersusBehaviourTree | Self::AiVersusAi, Team::Red) => {
                ControllerKind::BehaviourTree
            }
        }
    }

    fn controller(self, team: Team) -> Box<dyn SquadController> {
        match self.controller_kind(team) {
            ControllerKind::Manual => Box::new(ManualController::new()),
            ControllerKind::StateMachine => Box::new(SquadDriver::new(StateMachine::new())),
            ControllerKind::BehaviourTree => Box::new(SquadDriver::new(BehaviourTree::new())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchStatus {
    InProgress,
    Over { winner: Team },
}

impl MatchStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, Self::Over { .. })
    }
}

pub struct TurnCoordinator {
    mode: GameMode,
    config: MatchConfig,
    battlefield: Battlefield,
    controllers: [Box<dyn SquadController>; 2],
    movement: Box<dyn MovementExecutor>,
    visuals: Box<dyn ShotVisualizer>,
    rng: ChaCha8Rng,
    on_turn: Team,
    round: u32,
    status: MatchStatus,
    events: Vec<MatchEvent>,
}

impl TurnCoordinator {
    /// Validates `config`, prepares a match, and opens the first turn. Nothing
    /// moves until the first call to [`Self::update`].
    pub fn new(mode: GameMode, config: MatchConfig, battlefield: Battlefield) -> Result<Self> {
        config.validate()?;
        tracing::info!(
            %mode,
            seed = config.seed,
            blue = battlefield.roster(Team::Blue).len(),
            red = battlefield.roster(Team::Red).len(),
            covers = battlefield.covers().len(),
            "match prepared"
        );

        let mut coordinator = Self {
            mode,
            config,
            battlefield,
            controllers: [mode.controller(Team::Blue), mode.controller(Team::Red)],
            movement: Box::new(DirectMovement::default()),
            visuals: Box::new(ShotRecorder::default()),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            on_turn: mode.first_side(),
            round: 1,
            status: MatchStatus::InProgress,
            events: Vec::new(),
        };
        coordinator.start_turn();
        Ok(coordinator)
    }

    pub fn with_movement(mut self, movement: Box<dyn MovementExecutor>) -> Self {
        self.movement = movement;
        self
    }

    pub fn with_visuals(mut self, visuals: Box<dyn ShotVisualizer>) -> Self {
        self.visuals = visuals;
        self
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn battlefield(&self) -> &Battlefield {
        &self.battlefield
    }

    pub fn on_turn(&self) -> Team {
        self.on_turn
    }

    /// Current round. A round is over once both sides have had a turn.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn controller_kind(&self, team: Team) -> ControllerKind {
        self.controllers[team.index()].kind()
    }

    /// Unit the side on turn is currently deciding for.
    pub fn active_unit(&self) -> Option<UnitId> {
        self.controllers[self.on_turn.index()].active_unit()
    }

    /// Hands over the events collected since the last call.
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    /// Queues an order for the player's side.
    pub fn submit(&mut self, order: ManualOrder) -> Result<()> {
        let side = GameMode::PLAYER_SIDE;
        if self.status.is_over() {
            return Err(RuntimeError::MatchOver);
        }
        if self.mode.controller_kind(side) != ControllerKind::Manual {
            return Err(RuntimeError::NotManual(side));
        }
        if self.on_turn != side {
            return Err(RuntimeError::NotOnTurn(side));
        }
        self.controllers[side.index()].submit(order);
        Ok(())
    }

    /// Advances the match by one frame of `dt` seconds.
    pub fn update(&mut self, dt: f32) -> MatchStatus {
        if self.status.is_over() {
            return self.status;
        }
        self.battlefield.advance_movement(self.movement.as_mut(), dt);

        let side = self.on_turn;
        let progress = {
            let mut ctx = TacticalContext::new(
                side,
                &mut self.battlefield,
                self.config.doctrine,
                &mut self.rng,
                self.visuals.as_mut(),
            );
            self.controllers[side.index()].update(&mut ctx, dt, &mut self.events)
        };

        for (team, unit) in self.battlefield.remove_casualties() {
            tracing::info!(side = %team, %unit, "unit down");
            self.events.push(MatchEvent::UnitDown { side: team, unit });
        }

        if let Some(loser) = self.battlefield.eliminated() {
            let winner = loser.opponent();
            tracing::info!(%winner, rounds = self.round, "match over");
            self.status = MatchStatus::Over { winner };
            self.events.push(MatchEvent::MatchOver {
                winner,
                rounds: self.round,
            });
            return self.status;
        }

        if progress == TurnProgress::EndTurn {
            self.end_turn();
        }
        self.status
    }

    /// Runs frames until the match ends or `max_frames` have elapsed.
    pub fn run(&mut self, dt: f32, max_frames: u64) -> MatchStatus {
        for _ in 0..max_frames {
            if self.update(dt).is_over() {
                break;
            }
        }
        self.status
    }

    fn start_turn(&mut self) {
        let side = self.on_turn;
        self.battlefield.roster_mut(side).reset_turn();

        let controller = &mut self.controllers[side.index()];
        tracing::info!(
            round = self.round,
            %side,
            controller = %controller.kind(),
            "turn started"
        );
        self.events.push(MatchEvent::TurnStarted {
            round: self.round,
            side,
            controller: controller.kind(),
        });

        let mut ctx = TacticalContext::new(
            side,
            &mut self.battlefield,
            self.config.doctrine,
            &mut self.rng,
            self.visuals.as_mut(),
        );
        controller.begin_turn(&mut ctx);
    }

    fn end_turn(&mut self) {
        let side = self.on_turn;
        tracing::debug!(round = self.round, %side, "turn ended");
        self.events.push(MatchEvent::TurnEnded {
            round: self.round,
            side,
        });

        self.on_turn = side.opponent();
        if self.on_turn == self.mode.first_side() {
            self.round += 1;
        }
        self.start_turn();
    }
}
