//! Damage rolls and application.

use rand::Rng;

use crate::config::DamageProfile;

/// Draws damage uniformly from `[average - variance, average + variance]`.
///
/// The raw draw may be negative when variance exceeds the average; callers
/// apply it through [`apply_damage`], which ignores the negative part.
pub fn roll_damage<R>(profile: &DamageProfile, rng: &mut R) -> f32
where
    R: Rng + ?Sized,
{
    let low = profile.average - profile.variance;
    let high = profile.average + profile.variance;
    if high > low {
        rng.gen_range(low..=high)
    } else {
        low
    }
}

/// Health left after taking `damage`, floored at zero.
///
/// Negative damage is treated as zero.
#[inline]
pub fn apply_damage(health: f32, damage: f32) -> f32 {
    (health - damage.max(0.0)).max(0.0)
}
