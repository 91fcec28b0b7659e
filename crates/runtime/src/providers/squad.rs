//! Unit sequencing shared by the automated controllers.

use skirmish_core::{HealthPools, TacticalContext, Unit, UnitId};

use crate::api::{ControllerKind, SquadController, TurnProgress};
use crate::events::{MatchEvent, ShotReport};

/// Result of running a policy for the active unit for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Activity {
    /// The unit is acting or waiting for its move to land.
    Acting,
    /// The unit fired.
    Fired(ShotReport),
    /// The policy found nothing to do with the unit.
    Idle,
}

/// Per-unit decision logic for an automated side.
pub trait SquadPolicy {
    fn kind(&self) -> ControllerKind;

    /// Called at the start of every turn of the owning side.
    fn begin_turn(&mut self) {}

    /// Called once when a unit becomes active, after the health snapshot has
    /// been refreshed.
    fn on_activate(&mut self, ctx: &mut TacticalContext<'_>, events: &mut Vec<MatchEvent>);

    /// Called every frame while the active unit has not settled.
    fn run(&mut self, ctx: &mut TacticalContext<'_>) -> Activity;
}

/// Walks an automated side's roster one unit at a time.
///
/// A unit stays active until its action has played out and the post-shot
/// cooldown has elapsed. The next unit is the first in roster order that
/// still has its action. The turn ends when no such unit is left.
#[derive(Debug)]
pub struct SquadDriver<P> {
    policy: P,
    active: Option<UnitId>,
    health: HealthPools,
    cooldown: f32,
}

impl<P: SquadPolicy> SquadDriver<P> {
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            active: None,
            health: HealthPools::default(),
            cooldown: 0.0,
        }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn active(&self) -> Option<UnitId> {
        self.active
    }

    /// Seconds left before the next unit may activate.
    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }

    fn activate_next(
        &mut self,
        ctx: &mut TacticalContext<'_>,
        events: &mut Vec<MatchEvent>,
    ) -> bool {
        let Some(next) = ctx.own().next_ready() else {
            self.active = None;
            return false;
        };

        self.active = Some(next);
        self.health = ctx.activate(self.active);
        tracing::debug!(
            side = %ctx.side(),
            unit = %next,
            own = self.health.own,
            enemy = self.health.enemy,
            "unit activated"
        );
        events.push(MatchEvent::UnitActivated {
            side: ctx.side(),
            unit: next,
        });
        self.policy.on_activate(ctx, events);
        true
    }
}

impl<P: SquadPolicy> SquadController for SquadDriver<P> {
    fn kind(&self) -> ControllerKind {
        self.policy.kind()
    }

    fn active_unit(&self) -> Option<UnitId> {
        self.active
    }

    fn begin_turn(&mut self, _ctx: &mut TacticalContext<'_>) {
        self.active = None;
        self.cooldown = 0.0;
        self.policy.begin_turn();
    }

    fn update(
        &mut self,
        ctx: &mut TacticalContext<'_>,
        dt: f32,
        events: &mut Vec<MatchEvent>,
    ) -> TurnProgress {
        self.cooldown = (self.cooldown - dt).max(0.0);
        ctx.resume(self.active, self.health);

        // A unit removed since the last frame counts as settled.
        let settled = ctx.active_unit().is_none_or(Unit::finished_move);
        if settled {
            if self.cooldown > 0.0 {
                return TurnProgress::Continue;
            }
            if !self.activate_next(ctx, events) {
                tracing::debug!(side = %ctx.side(), "every unit has acted");
                return TurnProgress::EndTurn;
            }
        }

        let was_ready = ctx.active_unit().is_some_and(Unit::action_allowed);
        match self.policy.run(ctx) {
            Activity::Fired(report) => {
                self.cooldown = ctx.doctrine().shot_cooldown_secs;
                events.push(MatchEvent::ShotResolved(report));
            }
            Activity::Acting => {
                // Report a move only on the frame it was issued.
                let issued = ctx
                    .active_unit()
                    .filter(|_| was_ready)
                    .and_then(|unit| Some((unit.id(), unit.destination()?)));
                if let Some((unit, destination)) = issued {
                    events.push(MatchEvent::MoveIssued { unit, destination });
                }
            }
            Activity::Idle => {
                // Nothing sensible to do: hold position so the turn advances.
                if let Some(position) = ctx
                    .active_unit()
                    .filter(|unit| unit.action_allowed())
                    .map(Unit::position)
                {
                    tracing::warn!(
                        side = %ctx.side(),
                        unit = ?self.active,
                        "policy idle, holding position"
                    );
                    ctx.move_active(position);
                }
            }
        }
        TurnProgress::Continue
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use skirmish_core::{
        Battlefield, CoverSet, DoctrineConfig, Roster, ShotRecorder, Team, UnitProfile, Vec2,
    };

    use super::*;

    /// Fires at the closest enemy on the first frame, nothing afterwards.
    struct Marksman;

    impl SquadPolicy for Marksman {
        fn kind(&self) -> ControllerKind {
            ControllerKind::StateMachine
        }

        fn on_activate(&mut self, _ctx: &mut TacticalContext<'_>, _events: &mut Vec<MatchEvent>) {}

        fn run(&mut self, ctx: &mut TacticalContext<'_>) -> Activity {
            let (Some(shooter), Some(target)) = (ctx.active_id(), ctx.closest_enemy()) else {
                return Activity::Idle;
            };
            match ctx.shoot_active(target) {
                Some(outcome) => Activity::Fired(ShotReport {
                    shooter,
                    target,
                    outcome,
                }),
                None => Activity::Acting,
            }
        }
    }

    /// Never finds anything to do.
    struct Dithering;

    impl SquadPolicy for Dithering {
        fn kind(&self) -> ControllerKind {
            ControllerKind::BehaviourTree
        }

        fn on_activate(&mut self, _ctx: &mut TacticalContext<'_>, _events: &mut Vec<MatchEvent>) {}

        fn run(&mut self, _ctx: &mut TacticalContext<'_>) -> Activity {
            Activity::Idle
        }
    }

    fn battlefield() -> Battlefield {
        let profile = UnitProfile::default();
        let blue = Roster::with_units(
            Team::Blue,
            vec![
                Unit::new(UnitId(1), Team::Blue, Vec2::new(0.0, 0.0), profile),
                Unit::new(UnitId(2), Team::Blue, Vec2::new(2.0, 0.0), profile),
            ],
        );
        let red = Roster::with_units(
            Team::Red,
            vec![Unit::new(UnitId(3), Team::Red, Vec2::new(0.0, 6.0), profile)],
        );
        Battlefield::new(blue, red, CoverSet::default()).unwrap()
    }

    #[test]
    fn cooldown_delays_next_activation() {
        let mut field = battlefield();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut visuals = ShotRecorder::default();
        let doctrine = DoctrineConfig {
            shot_cooldown_secs: 1.0,
            ..DoctrineConfig::default()
        };
        let mut ctx =
            TacticalContext::new(Team::Blue, &mut field, doctrine, &mut rng, &mut visuals);
        let mut driver = SquadDriver::new(Marksman);
        let mut events = Vec::new();

        driver.begin_turn(&mut ctx);
        assert_eq!(driver.update(&mut ctx, 0.1, &mut events), TurnProgress::Continue);
        assert_eq!(driver.active(), Some(UnitId(1)));
        assert_eq!(driver.cooldown(), 1.0);

        // Still cooling down.
        driver.update(&mut ctx, 0.5, &mut events);
        assert_eq!(driver.active(), Some(UnitId(1)));

        driver.update(&mut ctx, 0.6, &mut events);
        assert_eq!(driver.active(), Some(UnitId(2)));

        assert_eq!(driver.update(&mut ctx, 1.0, &mut events), TurnProgress::EndTurn);

        let shots = events
            .iter()
            .filter(|e| matches!(e, MatchEvent::ShotResolved(_)))
            .count();
        assert_eq!(shots, 2);
    }

    #[test]
    fn idle_policy_holds_position() {
        let mut field = battlefield();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut visuals = ShotRecorder::default();
        let mut ctx = TacticalContext::new(
            Team::Blue,
            &mut field,
            DoctrineConfig::default(),
            &mut rng,
            &mut visuals,
        );
        let mut driver = SquadDriver::new(Dithering);
        let mut events = Vec::new();

        driver.begin_turn(&mut ctx);
        driver.update(&mut ctx, 0.1, &mut events);

        let unit = ctx.active_unit().unwrap();
        assert_eq!(unit.id(), UnitId(1));
        assert!(!unit.action_allowed());
        assert_eq!(unit.destination(), Some(unit.position()));
    }
}
