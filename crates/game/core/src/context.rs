//! Per-frame view of the battlefield from one side.
//!
//! [`TacticalContext`] bundles everything a decision maker needs while it
//! drives one unit: both rosters (through the battlefield), the cover set, the
//! active unit, a health-pool snapshot, and the injected RNG and visualizer.
//! The turn flow builds a fresh context every frame; the active unit and the
//! snapshot are carried over by whoever owns the decision state.

use glam::Vec2;
use rand::RngCore;

use crate::combat::{self, ShotOutcome};
use crate::config::DoctrineConfig;
use crate::env::ShotVisualizer;
use crate::state::{Battlefield, CoverSet, CoverTier, Roster, Team, Unit, UnitId};

/// Total remaining health of each side, as seen from one of them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthPools {
    pub own: f32,
    pub enemy: f32,
}

impl HealthPools {
    pub fn new(own: f32, enemy: f32) -> Self {
        Self { own, enemy }
    }

    /// Sums each roster. Own health never leaks into the enemy pool.
    pub fn measure(battlefield: &Battlefield, side: Team) -> Self {
        Self {
            own: battlefield.roster(side).health_pool(),
            enemy: battlefield.roster(side.opponent()).health_pool(),
        }
    }

    /// `own < enemy * ratio`.
    pub fn trails(&self, ratio: f32) -> bool {
        self.own < self.enemy * ratio
    }

    /// `own * ratio > enemy`.
    pub fn leads(&self, ratio: f32) -> bool {
        self.own * ratio > self.enemy
    }
}

pub struct TacticalContext<'a> {
    side: Team,
    battlefield: &'a mut Battlefield,
    doctrine: DoctrineConfig,
    active: Option<UnitId>,
    health: HealthPools,
    rng: &'a mut dyn RngCore,
    visuals: &'a mut dyn ShotVisualizer,
}

impl<'a> TacticalContext<'a> {
    pub fn new(
        side: Team,
        battlefield: &'a mut Battlefield,
        doctrine: DoctrineConfig,
        rng: &'a mut dyn RngCore,
        visuals: &'a mut dyn ShotVisualizer,
    ) -> Self {
        let health = HealthPools::measure(battlefield, side);
        Self {
            side,
            battlefield,
            doctrine,
            active: None,
            health,
            rng,
            visuals,
        }
    }

    /// Makes `unit` the active unit and refreshes the health snapshot.
    pub fn activate(&mut self, unit: Option<UnitId>) -> HealthPools {
        self.active = unit;
        self.health = HealthPools::measure(self.battlefield, self.side);
        self.health
    }

    /// Restores an active unit and snapshot carried over from an earlier frame.
    pub fn resume(&mut self, unit: Option<UnitId>, health: HealthPools) {
        self.active = unit;
        self.health = health;
    }

    pub fn side(&self) -> Team {
        self.side
    }

    pub fn doctrine(&self) -> &DoctrineConfig {
        &self.doctrine
    }

    pub fn health(&self) -> HealthPools {
        self.health
    }

    pub fn battlefield(&self) -> &Battlefield {
        self.battlefield
    }

    pub fn own(&self) -> &Roster {
        self.battlefield.roster(self.side)
    }

    pub fn enemies(&self) -> &Roster {
        self.battlefield.roster(self.side.opponent())
    }

    pub fn covers(&self) -> &CoverSet {
        self.battlefield.covers()
    }

    pub fn active_id(&self) -> Option<UnitId> {
        self.active
    }

    /// The active unit, if it is still on the roster.
    pub fn active_unit(&self) -> Option<&Unit> {
        self.active.and_then(|id| self.own().get(id))
    }

    pub fn own_centroid(&self) -> Option<Vec2> {
        let centroid = self.own().centroid();
        if centroid.is_none() {
            tracing::warn!(side = %self.side, "centroid requested for empty roster");
        }
        centroid
    }

    pub fn enemy_centroid(&self) -> Option<Vec2> {
        let centroid = self.enemies().centroid();
        if centroid.is_none() {
            tracing::warn!(side = %self.side.opponent(), "centroid requested for empty roster");
        }
        centroid
    }

    pub fn centroid_distance(&self) -> Option<f32> {
        Some(self.own_centroid()?.distance(self.enemy_centroid()?))
    }

    /// Direction from the own centroid to the enemy centroid, unnormalized.
    pub fn squad_heading(&self) -> Option<Vec2> {
        Some(self.enemy_centroid()? - self.own_centroid()?)
    }

    pub fn closest_enemy_to(&self, point: Vec2) -> Option<UnitId> {
        combat::closest_unit(point, self.enemies().iter().map(|u| (u.id(), u.position())))
    }

    /// Enemy nearest to the active unit.
    pub fn closest_enemy(&self) -> Option<UnitId> {
        self.closest_enemy_to(self.active_unit()?.position())
    }

    /// Shortest distance between any own unit and any enemy.
    pub fn closest_pair_distance(&self) -> Option<f32> {
        self.own()
            .iter()
            .flat_map(|own| {
                self.enemies()
                    .iter()
                    .map(move |enemy| own.position().distance(enemy.position()))
            })
            .min_by(f32::total_cmp)
    }

    /// Most exposed enemy as seen by the active unit, nearest first.
    pub fn lowest_cover_target(&self) -> Option<UnitId> {
        let shooter = self.active_unit()?;
        combat::select_lowest_cover_target(
            shooter.position(),
            self.enemies().iter().map(|u| (u.id(), u.position())),
            self.covers(),
            shooter.profile().cover_effect_radius,
        )
    }

    /// Cover `point` enjoys against the enemy centroid. `None` without enemies.
    pub fn cover_against_enemy(&self, point: Vec2) -> CoverTier {
        let (Some(observer), Some(radius)) = (
            self.enemy_centroid(),
            self.active_unit().map(|u| u.profile().cover_effect_radius),
        ) else {
            return CoverTier::None;
        };
        combat::classify_cover(observer, point, self.covers(), radius)
    }

    pub fn is_enemy_alive(&self, id: UnitId) -> bool {
        self.enemies().get(id).is_some_and(Unit::is_alive)
    }

    /// Submits a move for the active unit. `false` when there is no active
    /// unit or its action is spent.
    pub fn move_active(&mut self, destination: Vec2) -> bool {
        let Some(id) = self.active else {
            return false;
        };
        self.battlefield
            .roster_mut(self.side)
            .get_mut(id)
            .is_some_and(|unit| unit.move_to(destination))
    }

    /// Fires the active unit at `target`. `None` when either unit is gone or
    /// the shooter's action is spent.
    pub fn shoot_active(&mut self, target: UnitId) -> Option<ShotOutcome> {
        let id = self.active?;
        let (own, enemies, covers) = self.battlefield.engagement(self.side);
        let shooter = own.get_mut(id)?;
        let victim = enemies.get_mut(target)?;
        shooter.shoot(victim, covers, &mut *self.rng, &mut *self.visuals)
    }
}
