use std::collections::HashSet;

use super::{CoverSet, Roster, Team, Unit, UnitId};
use crate::env::MovementExecutor;
use crate::error::SetupError;

/// Both rosters plus the static cover layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Battlefield {
    rosters: [Roster; 2],
    covers: CoverSet,
}

impl Battlefield {
    /// Assembles a battlefield, rejecting empty rosters, units filed under the
    /// wrong team, duplicate ids, and non-finite placements.
    pub fn new(blue: Roster, red: Roster, covers: CoverSet) -> Result<Self, SetupError> {
        let mut seen = HashSet::new();
        for (team, roster) in [(Team::Blue, &blue), (Team::Red, &red)] {
            if roster.is_empty() {
                return Err(SetupError::EmptyRoster(team));
            }
            for unit in roster.iter() {
                if unit.team() != team || roster.team() != team {
                    return Err(SetupError::TeamMismatch {
                        id: unit.id(),
                        expected: team,
                        actual: unit.team(),
                    });
                }
                if !seen.insert(unit.id()) {
                    return Err(SetupError::DuplicateUnit(unit.id()));
                }
                if !unit.position().is_finite() {
                    return Err(SetupError::NonFinitePosition(unit.id()));
                }
            }
        }
        if let Some(index) = covers.iter().position(|cover| !cover.position.is_finite()) {
            return Err(SetupError::NonFiniteCover(index));
        }

        Ok(Self {
            rosters: [blue, red],
            covers,
        })
    }

    pub fn roster(&self, team: Team) -> &Roster {
        &self.rosters[team.index()]
    }

    pub fn roster_mut(&mut self, team: Team) -> &mut Roster {
        &mut self.rosters[team.index()]
    }

    /// Disjoint mutable access to `team`'s roster and its opponent's.
    pub fn split_mut(&mut self, team: Team) -> (&mut Roster, &mut Roster) {
        let [blue, red] = &mut self.rosters;
        match team {
            Team::Blue => (blue, red),
            Team::Red => (red, blue),
        }
    }

    /// Like [`Self::split_mut`], plus shared access to the cover set.
    pub fn engagement(&mut self, team: Team) -> (&mut Roster, &mut Roster, &CoverSet) {
        let [blue, red] = &mut self.rosters;
        let (own, enemy) = match team {
            Team::Blue => (blue, red),
            Team::Red => (red, blue),
        };
        (own, enemy, &self.covers)
    }

    pub fn covers(&self) -> &CoverSet {
        &self.covers
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.rosters.iter().find_map(|roster| roster.get(id))
    }

    pub fn team_of(&self, id: UnitId) -> Option<Team> {
        self.unit(id).map(Unit::team)
    }

    /// Steps every pending move on both teams.
    pub fn advance_movement<M>(&mut self, executor: &mut M, dt: f32)
    where
        M: MovementExecutor + ?Sized,
    {
        for roster in &mut self.rosters {
            for unit in roster.iter_mut() {
                unit.advance(executor, dt);
            }
        }
    }

    /// Removes dead units from both rosters.
    pub fn remove_casualties(&mut self) -> Vec<(Team, UnitId)> {
        self.rosters
            .iter_mut()
            .flat_map(|roster| {
                let team = roster.team();
                roster
                    .remove_casualties()
                    .into_iter()
                    .map(move |id| (team, id))
            })
            .collect()
    }

    /// First team (Blue before Red) with no units left.
    pub fn eliminated(&self) -> Option<Team> {
        self.rosters
            .iter()
            .find(|roster| roster.is_empty())
            .map(Roster::team)
    }
}
