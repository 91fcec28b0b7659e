//! Scripted stand-in for the human player in the versus modes.

use skirmish_core::{Unit, geometry};
use skirmish_runtime::{ControllerKind, GameMode, ManualOrder, TurnCoordinator};

/// Issues one order per frame for the player's side: close in on the nearest
/// enemy while it is far away, shoot it otherwise.
#[derive(Clone, Copy, Debug)]
pub struct Autopilot {
    /// Beyond this distance the unit advances instead of shooting.
    pub engage_distance: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            engage_distance: 15.0,
        }
    }
}

impl Autopilot {
    /// Order for the unit about to act, if the player is on turn.
    pub fn next_order(&self, coordinator: &TurnCoordinator) -> Option<ManualOrder> {
        let side = GameMode::PLAYER_SIDE;
        if coordinator.status().is_over()
            || coordinator.on_turn() != side
            || coordinator.controller_kind(side) != ControllerKind::Manual
        {
            return None;
        }

        let battlefield = coordinator.battlefield();
        let own = battlefield.roster(side);
        // A moving unit keeps the turn; a finished one hands it to the next.
        let unit = match coordinator.active_unit().and_then(|id| own.get(id)) {
            Some(unit) if !unit.finished_move() => unit,
            _ => own.next_ready().and_then(|id| own.get(id))?,
        };
        if !unit.action_allowed() {
            return None;
        }

        let enemy = battlefield
            .roster(side.opponent())
            .iter()
            .filter(|enemy| enemy.is_alive())
            .min_by(|a, b| distance(unit, a).total_cmp(&distance(unit, b)))?;

        let gap = distance(unit, enemy);
        if gap > self.engage_distance {
            // At least one grid cell, so snapping cannot undo the step, and
            // inside the radius check applied before snapping.
            let step = (gap - self.engage_distance)
                .max(1.0)
                .min(unit.move_radius() * 0.9);
            let destination =
                geometry::displace(unit.position(), enemy.position() - unit.position(), step);
            return Some(ManualOrder::Move { destination });
        }
        Some(ManualOrder::Shoot { target: enemy.id() })
    }
}

fn distance(a: &Unit, b: &Unit) -> f32 {
    a.position().distance(b.position())
}

#[cfg(test)]
mod tests {
    use skirmish_core::{
        Battlefield, CoverSet, MatchConfig, Roster, Team, UnitId, UnitProfile, Vec2,
    };

    use super::*;

    fn coordinator(mode: GameMode, gap: f32) -> TurnCoordinator {
        let profile = UnitProfile::default();
        let battlefield = Battlefield::new(
            Roster::with_units(
                Team::Blue,
                vec![Unit::new(UnitId(1), Team::Blue, Vec2::ZERO, profile)],
            ),
            Roster::with_units(
                Team::Red,
                vec![
                    Unit::new(UnitId(5), Team::Red, Vec2::new(0.0, gap), profile),
                    Unit::new(UnitId(6), Team::Red, Vec2::new(0.0, gap + 2.0), profile),
                ],
            ),
            CoverSet::default(),
        )
        .unwrap();
        TurnCoordinator::new(mode, MatchConfig::default(), battlefield).unwrap()
    }

    #[test]
    fn shoots_nearest_enemy_in_range() {
        let coordinator = coordinator(GameMode::VersusStateMachine, 8.0);
        assert_eq!(
            Autopilot::default().next_order(&coordinator),
            Some(ManualOrder::Shoot { target: UnitId(5) })
        );
    }

    #[test]
    fn advances_when_far_away() {
        let coordinator = coordinator(GameMode::VersusBehaviourTree, 40.0);
        let Some(ManualOrder::Move { destination }) =
            Autopilot::default().next_order(&coordinator)
        else {
            panic!("expected a move order");
        };
        assert_eq!(destination.x, 0.0);
        assert!(destination.y > 0.0 && destination.y <= 9.0);
    }

    #[test]
    fn short_advances_cover_a_full_grid_cell() {
        let coordinator = coordinator(GameMode::VersusStateMachine, 15.3);
        let Some(ManualOrder::Move { destination }) =
            Autopilot::default().next_order(&coordinator)
        else {
            panic!("expected a move order");
        };
        assert_eq!(geometry::snap_to_grid(destination), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn stays_quiet_without_a_manual_side() {
        let coordinator = coordinator(GameMode::AiVersusAi, 8.0);
        assert_eq!(Autopilot::default().next_order(&coordinator), None);
    }
}
