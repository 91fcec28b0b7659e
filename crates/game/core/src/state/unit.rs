use glam::Vec2;
use rand::Rng;

use super::{CoverSet, Team, UnitId};
use crate::combat::{self, ShotOutcome};
use crate::config::{MatchConfig, UnitProfile};
use crate::env::{MovementExecutor, ShotVisualizer};

/// Progress of a unit's single action for the current turn.
///
/// A unit gets one action per turn: either a move or a shot. Issuing either
/// consumes the action immediately; a move reaches [`ActionPhase::Finished`]
/// once the unit arrives, a shot reaches it at once.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionPhase {
    #[default]
    Ready,
    Moving {
        destination: Vec2,
    },
    Finished,
}

/// A single combatant.
#[derive(Clone, Debug, PartialEq)]
pub struct Unit {
    id: UnitId,
    team: Team,
    position: Vec2,
    facing: Vec2,
    health: f32,
    profile: UnitProfile,
    phase: ActionPhase,
}

impl Unit {
    pub fn new(id: UnitId, team: Team, position: Vec2, profile: UnitProfile) -> Self {
        Self {
            id,
            team,
            position,
            facing: Vec2::Y,
            health: profile.max_health,
            profile,
            phase: ActionPhase::Ready,
        }
    }

    /// Starts the unit at `health`, clamped to `[0, max_health]`.
    pub fn with_health(mut self, health: f32) -> Self {
        self.health = health.clamp(0.0, self.profile.max_health);
        self
    }

    pub fn with_facing(mut self, facing: Vec2) -> Self {
        self.facing = facing.normalize_or(self.facing);
        self
    }

    #[inline]
    pub fn id(&self) -> UnitId {
        self.id
    }

    #[inline]
    pub fn team(&self) -> Team {
        self.team
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Unit-length heading; updated whenever the unit moves or shoots.
    #[inline]
    pub fn facing(&self) -> Vec2 {
        self.facing
    }

    #[inline]
    pub fn health(&self) -> f32 {
        self.health
    }

    #[inline]
    pub fn profile(&self) -> &UnitProfile {
        &self.profile
    }

    #[inline]
    pub fn move_radius(&self) -> f32 {
        self.profile.move_radius
    }

    #[inline]
    pub fn phase(&self) -> ActionPhase {
        self.phase
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// True until the unit spends its action this turn.
    pub fn action_allowed(&self) -> bool {
        matches!(self.phase, ActionPhase::Ready)
    }

    /// True once the spent action has fully played out.
    pub fn finished_move(&self) -> bool {
        matches!(self.phase, ActionPhase::Finished)
    }

    /// Destination of the pending move, if one is in flight.
    pub fn destination(&self) -> Option<Vec2> {
        match self.phase {
            ActionPhase::Moving { destination } => Some(destination),
            _ => None,
        }
    }

    /// Restores the action budget at the start of the unit's turn.
    pub fn reset_turn(&mut self) {
        self.phase = ActionPhase::Ready;
    }

    /// Submits a movement intent. Returns `false` without side effects when
    /// the action was already spent this turn.
    pub fn move_to(&mut self, destination: Vec2) -> bool {
        if !self.action_allowed() {
            tracing::trace!(unit = %self.id, "move ignored, action already spent");
            return false;
        }

        self.facing = (destination - self.position).normalize_or(self.facing);
        self.phase = ActionPhase::Moving { destination };
        tracing::debug!(
            unit = %self.id,
            from = ?self.position,
            to = ?destination,
            "move issued"
        );
        true
    }

    /// Steps a pending move through `executor` and checks for arrival.
    pub fn advance<M>(&mut self, executor: &mut M, dt: f32)
    where
        M: MovementExecutor + ?Sized,
    {
        if let ActionPhase::Moving { destination } = self.phase {
            self.position = executor.step(self.id, self.position, destination, dt);
            self.poll_arrival();
        }
    }

    /// Marks a pending move finished once the unit is within the arrival
    /// tolerance of its destination. Returns [`Self::finished_move`].
    pub fn poll_arrival(&mut self) -> bool {
        if let ActionPhase::Moving { destination } = self.phase {
            if self.position.distance(destination) < MatchConfig::ARRIVAL_TOLERANCE {
                self.phase = ActionPhase::Finished;
                tracing::debug!(unit = %self.id, at = ?self.position, "move finished");
            }
        }
        self.finished_move()
    }

    /// Fires at `target`, spending the action whether or not the shot hits.
    ///
    /// Returns `None` without side effects when the action was already spent
    /// or the target is not a living enemy.
    pub fn shoot<R, V>(
        &mut self,
        target: &mut Unit,
        covers: &CoverSet,
        rng: &mut R,
        visuals: &mut V,
    ) -> Option<ShotOutcome>
    where
        R: Rng + ?Sized,
        V: ShotVisualizer + ?Sized,
    {
        if !self.action_allowed() {
            tracing::trace!(unit = %self.id, "shot ignored, action already spent");
            return None;
        }
        if target.team == self.team || !target.is_alive() {
            tracing::warn!(unit = %self.id, target = %target.id, "shot ignored, invalid target");
            return None;
        }

        let outcome =
            combat::resolve_shot(self.position, &self.profile, target.position, covers, rng);
        if outcome.hit {
            target.take_damage(outcome.damage);
        }

        self.facing = (target.position - self.position).normalize_or(self.facing);
        self.phase = ActionPhase::Finished;
        visuals.place_shot(outcome.trace.origin, outcome.trace.impact);

        tracing::debug!(
            unit = %self.id,
            target = %target.id,
            hit = outcome.hit,
            chance = outcome.hit_chance,
            cover = %outcome.cover,
            damage = outcome.damage,
            remaining = target.health,
            "shot resolved"
        );
        Some(outcome)
    }

    /// Applies `amount` of damage. Negative amounts heal nothing; health never
    /// drops below zero.
    pub fn take_damage(&mut self, amount: f32) {
        self.health = combat::apply_damage(self.health, amount);
    }
}
