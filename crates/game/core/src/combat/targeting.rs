//! Target selection.

use glam::Vec2;

use super::cover::classify_cover;
use crate::state::{CoverSet, UnitId};

/// Candidate nearest to `from`. Ties keep the first candidate.
pub fn closest_unit<I>(from: Vec2, candidates: I) -> Option<UnitId>
where
    I: IntoIterator<Item = (UnitId, Vec2)>,
{
    let mut best: Option<(UnitId, f32)> = None;
    for (id, position) in candidates {
        let distance = from.distance(position);
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((id, distance));
        }
    }
    best.map(|(id, _)| id)
}

/// Most exposed candidate as seen from `from`, nearest first.
///
/// Classifies every candidate's cover, keeps those at the lowest tier found,
/// then returns the closest of them. Ties keep the first candidate.
pub fn select_lowest_cover_target<I>(
    from: Vec2,
    candidates: I,
    covers: &CoverSet,
    effect_radius: f32,
) -> Option<UnitId>
where
    I: IntoIterator<Item = (UnitId, Vec2)>,
{
    let classified: Vec<_> = candidates
        .into_iter()
        .map(|(id, position)| {
            let tier = classify_cover(from, position, covers, effect_radius);
            (id, position, tier)
        })
        .collect();

    let lowest = classified.iter().map(|&(_, _, tier)| tier).min()?;
    closest_unit(
        from,
        classified
            .into_iter()
            .filter(|&(_, _, tier)| tier == lowest)
            .map(|(id, position, _)| (id, position)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Cover, CoverTier};

    #[test]
    fn closest_keeps_first_on_tie() {
        let candidates = [
            (UnitId(1), Vec2::new(3.0, 0.0)),
            (UnitId(2), Vec2::new(-3.0, 0.0)),
        ];
        assert_eq!(closest_unit(Vec2::ZERO, candidates), Some(UnitId(1)));
    }

    #[test]
    fn no_candidates_no_target() {
        let none: Vec<(UnitId, Vec2)> = Vec::new();
        assert_eq!(closest_unit(Vec2::ZERO, none.clone()), None);
        assert_eq!(
            select_lowest_cover_target(Vec2::ZERO, none, &CoverSet::default(), 2.5),
            None
        );
    }

    #[test]
    fn exposed_target_beats_nearer_covered_one() {
        let covers: CoverSet = [Cover::new(Vec2::new(0.0, 4.0), CoverTier::Half)]
            .into_iter()
            .collect();
        let candidates = [
            (UnitId(1), Vec2::new(0.0, 5.0)),
            (UnitId(2), Vec2::new(8.0, 8.0)),
        ];
        assert_eq!(
            select_lowest_cover_target(Vec2::ZERO, candidates, &covers, 2.5),
            Some(UnitId(2))
        );
    }

    #[test]
    fn equal_cover_and_distance_keeps_first() {
        let candidates = [
            (UnitId(7), Vec2::new(0.0, 5.0)),
            (UnitId(4), Vec2::new(5.0, 0.0)),
        ];
        assert_eq!(
            select_lowest_cover_target(Vec2::ZERO, candidates, &CoverSet::default(), 2.5),
            Some(UnitId(7))
        );
    }
}
