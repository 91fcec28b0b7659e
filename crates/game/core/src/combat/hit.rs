//! Hit chance and accuracy calculations.

use crate::config::AccuracyProfile;
use crate::state::CoverTier;

/// Hit chance, in percent, for a shot at `distance` against `cover`.
///
/// # Formula
///
/// ```text
/// hit_chance = base - cover_penalty - round(max(0, distance - dropoff_start) * dropoff_rate)
/// clamped to [0, base]
/// ```
pub fn compute_hit_chance(accuracy: &AccuracyProfile, cover: CoverTier, distance: f32) -> u32 {
    let cover_penalty = match cover {
        CoverTier::None => 0,
        CoverTier::Half => accuracy.half_cover_penalty,
        CoverTier::Full => accuracy.full_cover_penalty,
    };

    accuracy
        .base_hit_chance
        .saturating_sub(cover_penalty)
        .saturating_sub(distance_penalty(accuracy, distance))
}

/// Points lost to range. Zero up to `dropoff_start`.
pub fn distance_penalty(accuracy: &AccuracyProfile, distance: f32) -> u32 {
    let excess = (distance - accuracy.dropoff_start).max(0.0);
    // Halves round to even. Float-to-int casts saturate, so huge distances
    // just zero the chance.
    (excess * accuracy.dropoff_rate).round_ties_even() as u32
}

/// A roll in `[0, 100)` hits when it does not exceed the hit chance.
#[inline]
pub fn check_hit(hit_chance: u32, roll: u32) -> bool {
    roll <= hit_chance
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn accuracy() -> AccuracyProfile {
        AccuracyProfile {
            base_hit_chance: 80,
            half_cover_penalty: 20,
            full_cover_penalty: 40,
            dropoff_start: 5.0,
            dropoff_rate: 15.0,
        }
    }

    #[test]
    fn no_penalty_inside_dropoff_start() {
        assert_eq!(compute_hit_chance(&accuracy(), CoverTier::None, 5.0), 80);
    }

    #[test]
    fn penalties_stack() {
        // 80 - 20 - round(1.5 * 15 = 22.5) = 80 - 20 - 22
        assert_eq!(compute_hit_chance(&accuracy(), CoverTier::Half, 6.5), 38);
    }

    #[test]
    fn half_penalties_round_to_even() {
        assert_eq!(distance_penalty(&accuracy(), 5.5), 8); // 7.5
        assert_eq!(distance_penalty(&accuracy(), 6.5), 22); // 22.5
        assert_eq!(distance_penalty(&accuracy(), 7.5), 38); // 37.5
    }

    #[test]
    fn floors_at_zero() {
        assert_eq!(compute_hit_chance(&accuracy(), CoverTier::Full, 100.0), 0);
    }

    #[test]
    fn roll_equal_to_chance_hits() {
        assert!(check_hit(50, 50));
        assert!(!check_hit(50, 51));
        assert!(check_hit(0, 0));
    }

    fn tier() -> impl Strategy<Value = CoverTier> {
        prop_oneof![
            Just(CoverTier::None),
            Just(CoverTier::Half),
            Just(CoverTier::Full)
        ]
    }

    fn profile() -> impl Strategy<Value = AccuracyProfile> {
        (1u32..=100, 0u32..=100, 0u32..=100, 0.0f32..=20.0, 0.0f32..=100.0).prop_map(
            |(base, a, b, start, rate)| AccuracyProfile {
                base_hit_chance: base,
                half_cover_penalty: a.min(b),
                full_cover_penalty: a.max(b),
                dropoff_start: start,
                dropoff_rate: rate,
            },
        )
    }

    proptest! {
        #[test]
        fn chance_stays_within_base(acc in profile(), cover in tier(), d in 0.0f32..200.0) {
            let chance = compute_hit_chance(&acc, cover, d);
            prop_assert!(chance <= acc.base_hit_chance);
        }

        #[test]
        fn chance_never_rises_with_distance(
            acc in profile(),
            cover in tier(),
            near in 0.0f32..100.0,
            extra in 0.0f32..100.0,
        ) {
            let close = compute_hit_chance(&acc, cover, near);
            let far = compute_hit_chance(&acc, cover, near + extra);
            prop_assert!(far <= close);
        }

        #[test]
        fn chance_never_rises_with_cover(acc in profile(), d in 0.0f32..100.0) {
            let none = compute_hit_chance(&acc, CoverTier::None, d);
            let half = compute_hit_chance(&acc, CoverTier::Half, d);
            let full = compute_hit_chance(&acc, CoverTier::Full, d);
            prop_assert!(half <= none);
            prop_assert!(full <= half);
        }
    }
}
