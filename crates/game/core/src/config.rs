//! Match tunables and fixed geometry constants.
//!
//! Every tunable has a documented inclusive range. Values are checked once by
//! [`MatchConfig::validate`] when a configuration is loaded; nothing clamps
//! them later at the point of use.

use crate::error::ConfigError;

/// Shot accuracy parameters, in whole percentage points.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AccuracyProfile {
    /// Hit chance before any penalty. Range `[1, 100]`.
    pub base_hit_chance: u32,
    /// Penalty against a target behind half cover. Range `[0, 100]`.
    pub half_cover_penalty: u32,
    /// Penalty against a target behind full cover. Range `[0, 100]`, at least
    /// the half cover penalty.
    pub full_cover_penalty: u32,
    /// Distance at which precision starts to drop. Range `[0, 20]`.
    pub dropoff_start: f32,
    /// Points lost per unit of distance beyond `dropoff_start`. Range `[0, 100]`.
    pub dropoff_rate: f32,
}

impl Default for AccuracyProfile {
    fn default() -> Self {
        Self {
            base_hit_chance: 80,
            half_cover_penalty: 20,
            full_cover_penalty: 40,
            dropoff_start: 5.0,
            dropoff_rate: 5.0,
        }
    }
}

/// Damage roll parameters. A hit deals `average ± variance`, uniformly.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DamageProfile {
    /// Range `[1, 100]`.
    pub average: f32,
    /// Range `[0, 100]`.
    pub variance: f32,
}

impl Default for DamageProfile {
    fn default() -> Self {
        Self {
            average: 30.0,
            variance: 10.0,
        }
    }
}

/// Per-unit combat profile shared by every unit in a match.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UnitProfile {
    /// Starting health. Range `[1, 200]`.
    pub max_health: f32,
    /// Maximum displacement per turn. Range `[0, 30]`.
    pub move_radius: f32,
    /// Radius around a target in which cover objects are considered when
    /// classifying a shot. Range `[1, 10]`.
    pub cover_effect_radius: f32,
    pub accuracy: AccuracyProfile,
    pub damage: DamageProfile,
}

impl Default for UnitProfile {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            move_radius: 10.0,
            cover_effect_radius: 2.5,
            accuracy: AccuracyProfile::default(),
            damage: DamageProfile::default(),
        }
    }
}

/// Thresholds shared by both decision architectures.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DoctrineConfig {
    /// Pause after a shot before the next unit activates. Range `[0, 5]`.
    pub shot_cooldown_secs: f32,
    /// Below `enemy * stay_health_ratio` a pushing squad holds. Range `[0, 1]`.
    pub stay_health_ratio: f32,
    /// Below `enemy * retreat_health_ratio` a squad falls back. Range `[0, 1]`.
    pub retreat_health_ratio: f32,
    /// Centroid distance under which squads hold and trade shots. Range `[0, 20]`.
    pub stay_distance: f32,
    /// Closest-pair distance that forces a hold. Range `[0, 15]`.
    pub close_proximity_distance: f32,
    /// Whether a holding unit relocates into cover before shooting.
    pub seek_cover_when_staying: bool,
}

impl Default for DoctrineConfig {
    fn default() -> Self {
        Self {
            shot_cooldown_secs: 3.0,
            stay_health_ratio: 0.9,
            retreat_health_ratio: 0.5,
            stay_distance: 15.0,
            close_proximity_distance: 5.0,
            seek_cover_when_staying: true,
        }
    }
}

/// Complete set of tunables for one match.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatchConfig {
    pub unit: UnitProfile,
    pub doctrine: DoctrineConfig,
    /// Seed for the match RNG. Identical seeds replay identical matches.
    pub seed: u64,
}

impl MatchConfig {
    // ===== fixed geometry =====
    /// Distance at which a pending move counts as arrived.
    pub const ARRIVAL_TOLERANCE: f32 = 1.0;
    /// Radius around a desired destination searched for cover.
    pub const COVER_SEARCH_RADIUS: f32 = 5.0;
    /// How far behind a cover object a unit settles.
    pub const COVER_OFFSET: f32 = 0.8;
    /// Cover snap radius used while pushing.
    pub const PUSH_SNAP_RADIUS: f32 = 2.5;
    pub const PUSH_COVER_OFFSET: f32 = 0.8;
    /// Cover snap radius used while retreating.
    pub const RETREAT_SNAP_RADIUS: f32 = 3.5;
    pub const RETREAT_COVER_OFFSET: f32 = 1.0;
    /// Height of shot origins and impacts above the ground plane.
    pub const SHOT_ANCHOR_HEIGHT: f32 = 1.0;

    pub const DEFAULT_SEED: u64 = 0x5EED;

    pub fn new(unit: UnitProfile, doctrine: DoctrineConfig) -> Self {
        Self {
            unit,
            doctrine,
            seed: Self::DEFAULT_SEED,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Rejects any tunable outside its documented range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit = &self.unit;
        ConfigError::check_range("unit.max_health", unit.max_health.into(), 1.0, 200.0)?;
        ConfigError::check_range("unit.move_radius", unit.move_radius.into(), 0.0, 30.0)?;
        ConfigError::check_range(
            "unit.cover_effect_radius",
            unit.cover_effect_radius.into(),
            1.0,
            10.0,
        )?;

        let accuracy = &unit.accuracy;
        ConfigError::check_range(
            "unit.accuracy.base_hit_chance",
            accuracy.base_hit_chance.into(),
            1.0,
            100.0,
        )?;
        ConfigError::check_range(
            "unit.accuracy.half_cover_penalty",
            accuracy.half_cover_penalty.into(),
            0.0,
            100.0,
        )?;
        ConfigError::check_range(
            "unit.accuracy.full_cover_penalty",
            accuracy.full_cover_penalty.into(),
            0.0,
            100.0,
        )?;
        if accuracy.half_cover_penalty > accuracy.full_cover_penalty {
            return Err(ConfigError::PenaltyOrder {
                half: accuracy.half_cover_penalty,
                full: accuracy.full_cover_penalty,
            });
        }
        ConfigError::check_range(
            "unit.accuracy.dropoff_start",
            accuracy.dropoff_start.into(),
            0.0,
            20.0,
        )?;
        ConfigError::check_range(
            "unit.accuracy.dropoff_rate",
            accuracy.dropoff_rate.into(),
            0.0,
            100.0,
        )?;

        ConfigError::check_range("unit.damage.average", unit.damage.average.into(), 1.0, 100.0)?;
        ConfigError::check_range(
            "unit.damage.variance",
            unit.damage.variance.into(),
            0.0,
            100.0,
        )?;

        let doctrine = &self.doctrine;
        ConfigError::check_range(
            "doctrine.shot_cooldown_secs",
            doctrine.shot_cooldown_secs.into(),
            0.0,
            5.0,
        )?;
        ConfigError::check_range(
            "doctrine.stay_health_ratio",
            doctrine.stay_health_ratio.into(),
            0.0,
            1.0,
        )?;
        ConfigError::check_range(
            "doctrine.retreat_health_ratio",
            doctrine.retreat_health_ratio.into(),
            0.0,
            1.0,
        )?;
        ConfigError::check_range(
            "doctrine.stay_distance",
            doctrine.stay_distance.into(),
            0.0,
            20.0,
        )?;
        ConfigError::check_range(
            "doctrine.close_proximity_distance",
            doctrine.close_proximity_distance.into(),
            0.0,
            15.0,
        )?;

        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(UnitProfile::default(), DoctrineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(MatchConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_out_of_range_tunables() {
        let mut config = MatchConfig::default();
        config.doctrine.stay_distance = 25.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                field: "doctrine.stay_distance",
                ..
            })
        ));

        let mut config = MatchConfig::default();
        config.unit.move_radius = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = MatchConfig::default();
        config.unit.accuracy.base_hit_chance = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_half_penalty_above_full() {
        let mut config = MatchConfig::default();
        config.unit.accuracy.half_cover_penalty = 50;
        config.unit.accuracy.full_cover_penalty = 30;
        assert_eq!(
            config.validate(),
            Err(ConfigError::PenaltyOrder { half: 50, full: 30 })
        );
    }
}
