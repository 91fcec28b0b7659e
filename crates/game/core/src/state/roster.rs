use glam::Vec2;

use super::{Team, Unit, UnitId};
use crate::geometry;

/// Ordered list of the living units on one team.
///
/// Iteration order is insertion order and drives every first-wins tie-break.
#[derive(Clone, Debug, PartialEq)]
pub struct Roster {
    team: Team,
    units: Vec<Unit>,
}

impl Roster {
    pub fn new(team: Team) -> Self {
        Self {
            team,
            units: Vec::new(),
        }
    }

    pub fn with_units(team: Team, units: Vec<Unit>) -> Self {
        Self { team, units }
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn push(&mut self, unit: Unit) {
        self.units.push(unit);
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Unit> {
        self.units.iter_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.units.iter().map(Unit::id)
    }

    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.id() == id)
    }

    pub fn get_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.iter_mut().find(|unit| unit.id() == id)
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Mean position of the team, or `None` when the roster is empty.
    pub fn centroid(&self) -> Option<Vec2> {
        geometry::centroid(self.units.iter().map(Unit::position))
    }

    /// Sum of remaining health across the team.
    pub fn health_pool(&self) -> f32 {
        self.units.iter().map(Unit::health).sum()
    }

    /// First unit, in roster order, that still has its action this turn.
    pub fn next_ready(&self) -> Option<UnitId> {
        self.units
            .iter()
            .find(|unit| unit.action_allowed() && !unit.finished_move())
            .map(Unit::id)
    }

    /// Restores every unit's action budget.
    pub fn reset_turn(&mut self) {
        self.units.iter_mut().for_each(Unit::reset_turn);
    }

    /// Drops units with no health left and returns their ids.
    pub fn remove_casualties(&mut self) -> Vec<UnitId> {
        let mut removed = Vec::new();
        self.units.retain(|unit| {
            let alive = unit.is_alive();
            if !alive {
                removed.push(unit.id());
            }
            alive
        });
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UnitProfile;

    fn roster() -> Roster {
        let profile = UnitProfile::default();
        Roster::with_units(
            Team::Blue,
            vec![
                Unit::new(UnitId(1), Team::Blue, Vec2::new(0.0, 0.0), profile).with_health(40.0),
                Unit::new(UnitId(2), Team::Blue, Vec2::new(2.0, 0.0), profile).with_health(0.0),
                Unit::new(UnitId(3), Team::Blue, Vec2::new(4.0, 0.0), profile),
            ],
        )
    }

    #[test]
    fn health_pool_sums_units() {
        assert_eq!(roster().health_pool(), 140.0);
    }

    #[test]
    fn casualties_are_removed_in_place() {
        let mut r = roster();
        assert_eq!(r.remove_casualties(), vec![UnitId(2)]);
        assert_eq!(r.ids().collect::<Vec<_>>(), vec![UnitId(1), UnitId(3)]);
        assert_eq!(r.centroid(), Some(Vec2::new(2.0, 0.0)));
    }

    #[test]
    fn next_ready_skips_spent_units() {
        let mut r = roster();
        r.get_mut(UnitId(1)).unwrap().move_to(Vec2::ONE);
        assert_eq!(r.next_ready(), Some(UnitId(2)));

        r.iter_mut().for_each(|u| {
            u.move_to(Vec2::ZERO);
        });
        assert_eq!(r.next_ready(), None);

        r.reset_turn();
        assert_eq!(r.next_ready(), Some(UnitId(1)));
    }

    #[test]
    fn empty_roster_has_no_centroid() {
        assert_eq!(Roster::new(Team::Red).centroid(), None);
    }
}
