//! Shot outcome types and shot resolution.

use glam::{Vec2, Vec3};
use rand::Rng;

use super::cover::classify_cover;
use super::damage::roll_damage;
use super::hit::{check_hit, compute_hit_chance};
use crate::config::UnitProfile;
use crate::geometry;
use crate::state::{CoverSet, CoverTier};

/// Start and impact point of a shot, for the visualizer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotTrace {
    pub origin: Vec3,
    pub impact: Vec3,
}

impl ShotTrace {
    /// Anchors both ends at shot height and jitters the impact slightly so
    /// repeated shots do not stack on one point.
    pub fn jittered<R>(shooter: Vec2, target: Vec2, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let jitter = Vec3::new(
            rng.gen_range(-0.5..0.5),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-0.5..0.5),
        );
        Self {
            origin: geometry::shot_anchor(shooter),
            impact: geometry::shot_anchor(target) + jitter,
        }
    }
}

/// Result of one resolved shot.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotOutcome {
    pub hit: bool,
    /// Damage applied to the target; zero on a miss, never negative.
    pub damage: f32,
    pub hit_chance: u32,
    pub roll: u32,
    pub cover: CoverTier,
    pub distance: f32,
    pub trace: ShotTrace,
}

/// Resolves a shot from `shooter` at `target`.
///
/// Draws the hit roll in `[0, 100)`, then damage on a hit, then the impact
/// jitter, always in that order.
pub fn resolve_shot<R>(
    shooter: Vec2,
    profile: &UnitProfile,
    target: Vec2,
    covers: &CoverSet,
    rng: &mut R,
) -> ShotOutcome
where
    R: Rng + ?Sized,
{
    let cover = classify_cover(shooter, target, covers, profile.cover_effect_radius);
    let distance = shooter.distance(target);
    let hit_chance = compute_hit_chance(&profile.accuracy, cover, distance);

    let roll = rng.gen_range(0..100);
    let hit = check_hit(hit_chance, roll);
    let damage = if hit {
        roll_damage(&profile.damage, rng).max(0.0)
    } else {
        0.0
    };

    ShotOutcome {
        hit,
        damage,
        hit_chance,
        roll,
        cover,
        distance,
        trace: ShotTrace::jittered(shooter, target, rng),
    }
}
