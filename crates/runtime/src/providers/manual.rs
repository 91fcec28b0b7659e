//! Orders queued by a human player.

use std::collections::VecDeque;

use glam::Vec2;
use skirmish_core::{TacticalContext, Unit, UnitId, geometry};

use crate::api::{ControllerKind, SquadController, TurnProgress};
use crate::events::{MatchEvent, ShotReport};

/// An order for the side's active unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ManualOrder {
    /// Move to a point within the unit's move radius. The point is snapped to
    /// the integer grid.
    Move { destination: Vec2 },
    /// Fire at an enemy unit.
    Shoot { target: UnitId },
}

/// Applies queued orders to the player's units, one unit at a time.
///
/// The active unit is the first in roster order that still has its action;
/// once it settles the next one takes over. The turn ends after every unit
/// has acted.
#[derive(Debug, Default)]
pub struct ManualController {
    orders: VecDeque<ManualOrder>,
    active: Option<UnitId>,
}

impl ManualController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_orders(&self) -> usize {
        self.orders.len()
    }

    fn apply(
        &mut self,
        order: ManualOrder,
        ctx: &mut TacticalContext<'_>,
        events: &mut Vec<MatchEvent>,
    ) {
        let Some(unit) = ctx.active_unit() else {
            return;
        };
        let shooter = unit.id();

        match order {
            ManualOrder::Move { destination } => {
                let in_reach = unit.position().distance(destination) <= unit.move_radius();
                if !destination.is_finite() || !in_reach {
                    tracing::warn!(
                        unit = %shooter,
                        to = ?destination,
                        radius = unit.move_radius(),
                        "move order out of reach, ignored"
                    );
                    return;
                }
                let destination = geometry::snap_to_grid(destination);
                if ctx.move_active(destination) {
                    events.push(MatchEvent::MoveIssued {
                        unit: shooter,
                        destination,
                    });
                }
            }
            ManualOrder::Shoot { target } => {
                if !ctx.is_enemy_alive(target) {
                    tracing::warn!(
                        unit = %shooter,
                        target = %target,
                        "shoot order without valid target, ignored"
                    );
                    return;
                }
                if let Some(outcome) = ctx.shoot_active(target) {
                    events.push(MatchEvent::ShotResolved(ShotReport {
                        shooter,
                        target,
                        outcome,
                    }));
                }
            }
        }
    }
}

impl SquadController for ManualController {
    fn kind(&self) -> ControllerKind {
        ControllerKind::Manual
    }

    fn active_unit(&self) -> Option<UnitId> {
        self.active
    }

    fn begin_turn(&mut self, _ctx: &mut TacticalContext<'_>) {
        self.active = None;
        self.orders.clear();
    }

    fn update(
        &mut self,
        ctx: &mut TacticalContext<'_>,
        _dt: f32,
        events: &mut Vec<MatchEvent>,
    ) -> TurnProgress {
        ctx.activate(self.active);
        if ctx.active_unit().is_none_or(Unit::finished_move) {
            self.active = ctx.own().next_ready();
            let Some(next) = self.active else {
                return TurnProgress::EndTurn;
            };
            ctx.activate(self.active);
            events.push(MatchEvent::UnitActivated {
                side: ctx.side(),
                unit: next,
            });
        }

        // Orders wait while the active unit's move is still in flight.
        while ctx.active_unit().is_some_and(Unit::action_allowed) {
            let Some(order) = self.orders.pop_front() else {
                break;
            };
            self.apply(order, ctx, events);
        }
        TurnProgress::Continue
    }

    fn submit(&mut self, order: ManualOrder) -> bool {
        self.orders.push_back(order);
        true
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use skirmish_core::{
        Battlefield, CoverSet, DoctrineConfig, Roster, ShotRecorder, Team, UnitProfile,
    };

    use super::*;

    fn battlefield() -> Battlefield {
        let profile = UnitProfile::default();
        Battlefield::new(
            Roster::with_units(
                Team::Blue,
                vec![
                    Unit::new(UnitId(1), Team::Blue, Vec2::ZERO, profile),
                    Unit::new(UnitId(2), Team::Blue, Vec2::new(3.0, 0.0), profile),
                ],
            ),
            Roster::with_units(
                Team::Red,
                vec![Unit::new(UnitId(9), Team::Red, Vec2::new(0.0, 8.0), profile)],
            ),
            CoverSet::default(),
        )
        .unwrap()
    }

    #[test]
    fn move_is_snapped_and_bounded_by_radius() {
        let mut field = battlefield();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut visuals = ShotRecorder::default();
        let mut ctx = TacticalContext::new(
            Team::Blue,
            &mut field,
            DoctrineConfig::default(),
            &mut rng,
            &mut visuals,
        );
        let mut controller = ManualController::new();
        let mut events = Vec::new();

        controller.submit(ManualOrder::Move {
            destination: Vec2::new(50.0, 0.0),
        });
        controller.submit(ManualOrder::Move {
            destination: Vec2::new(2.4, 3.6),
        });
        controller.update(&mut ctx, 0.1, &mut events);

        let unit = ctx.own().get(UnitId(1)).unwrap();
        assert_eq!(unit.destination(), Some(Vec2::new(2.0, 4.0)));
        assert!(events.contains(&MatchEvent::MoveIssued {
            unit: UnitId(1),
            destination: Vec2::new(2.0, 4.0),
        }));
    }

    #[test]
    fn shots_cycle_through_units_then_end_turn() {
        let mut field = battlefield();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut visuals = ShotRecorder::default();
        let mut ctx = TacticalContext::new(
            Team::Blue,
            &mut field,
            DoctrineConfig::default(),
            &mut rng,
            &mut visuals,
        );
        let mut controller = ManualController::new();
        let mut events = Vec::new();

        controller.submit(ManualOrder::Shoot { target: UnitId(9) });
        assert_eq!(controller.update(&mut ctx, 0.1, &mut events), TurnProgress::Continue);
        assert_eq!(controller.active_unit(), Some(UnitId(1)));

        controller.submit(ManualOrder::Shoot { target: UnitId(9) });
        assert_eq!(controller.update(&mut ctx, 0.1, &mut events), TurnProgress::Continue);
        assert_eq!(controller.active_unit(), Some(UnitId(2)));

        assert_eq!(controller.update(&mut ctx, 0.1, &mut events), TurnProgress::EndTurn);
    }

    #[test]
    fn shot_at_unknown_target_keeps_the_action() {
        let mut field = battlefield();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut visuals = ShotRecorder::default();
        let mut ctx = TacticalContext::new(
            Team::Blue,
            &mut field,
            DoctrineConfig::default(),
            &mut rng,
            &mut visuals,
        );
        let mut controller = ManualController::new();
        let mut events = Vec::new();

        controller.submit(ManualOrder::Shoot { target: UnitId(2) });
        controller.update(&mut ctx, 0.1, &mut events);
        assert!(ctx.own().get(UnitId(1)).unwrap().action_allowed());
        assert_eq!(controller.pending_orders(), 0);
    }
}
