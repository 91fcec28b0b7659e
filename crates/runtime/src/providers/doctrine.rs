//! Tactical rules shared by the behaviour tree and the state machine.

use glam::Vec2;
use skirmish_core::{CoverTier, MatchConfig, TacticalContext, combat, geometry};

/// Where a squad-level move points, relative to the enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Heading {
    Toward,
    Away,
    Stay,
}

/// Destination for the active unit along the squad heading.
///
/// Toward and away move along the own-to-enemy centroid direction by the
/// distance to the enemy centroid, capped at the move radius.
pub(crate) fn squad_destination(ctx: &TacticalContext<'_>, heading: Heading) -> Option<Vec2> {
    let unit = ctx.active_unit()?;
    let position = unit.position();
    if heading == Heading::Stay {
        return Some(position);
    }

    let direction = ctx.squad_heading()?;
    let distance = position
        .distance(ctx.enemy_centroid()?)
        .min(unit.move_radius());
    let direction = match heading {
        Heading::Away => -direction,
        _ => direction,
    };
    Some(geometry::displace(position, direction, distance))
}

/// Spot just behind the best cover near `around` that the active unit can
/// reach, offset away from the enemy.
pub(crate) fn cover_spot(ctx: &TacticalContext<'_>, around: Vec2) -> Option<Vec2> {
    let unit = ctx.active_unit()?;
    let cover = combat::best_cover_near(
        ctx.covers(),
        around,
        MatchConfig::COVER_SEARCH_RADIUS,
        unit.position(),
        unit.move_radius(),
    )
    .filter(|cover| cover.tier > CoverTier::None)?;
    let away = ctx.own_centroid()? - ctx.enemy_centroid()?;
    Some(geometry::behind_cover(cover.position, away, MatchConfig::COVER_OFFSET))
}

/// Destination when a holding unit should first relocate into cover.
///
/// `None` when seeking cover is disabled, the unit is already shielded from
/// the enemy centroid, no cover is in reach, or the spot is where the unit
/// already stands.
pub(crate) fn cover_relocation(ctx: &TacticalContext<'_>) -> Option<Vec2> {
    if !ctx.doctrine().seek_cover_when_staying {
        return None;
    }
    let position = ctx.active_unit()?.position();
    if ctx.cover_against_enemy(position) > CoverTier::None {
        return None;
    }
    let spot = cover_spot(ctx, position)?;
    (spot.distance(position) >= MatchConfig::ARRIVAL_TOLERANCE).then_some(spot)
}

/// Distance from the active unit to its nearest enemy.
pub(crate) fn closest_enemy_distance(ctx: &TacticalContext<'_>) -> Option<f32> {
    let unit = ctx.active_unit()?;
    let enemy = ctx.enemies().get(ctx.closest_enemy()?)?;
    Some(unit.position().distance(enemy.position()))
}

/// Whether squads are close enough to hold and trade shots.
///
/// True when the centroids are within the stay distance or the active unit's
/// nearest enemy is inside the close proximity distance.
pub(crate) fn within_engagement_range(ctx: &TacticalContext<'_>) -> Option<bool> {
    let doctrine = ctx.doctrine();
    let centroids = ctx.centroid_distance()?;
    let proximity = closest_enemy_distance(ctx);
    Some(
        centroids < doctrine.stay_distance
            || proximity.is_some_and(|d| d < doctrine.close_proximity_distance),
    )
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use skirmish_core::{
        Battlefield, Cover, CoverSet, DoctrineConfig, Roster, ShotRecorder, Team, Unit, UnitId,
        UnitProfile,
    };

    use super::*;

    fn field(covers: Vec<Cover>) -> Battlefield {
        let profile = UnitProfile {
            move_radius: 6.0,
            ..UnitProfile::default()
        };
        Battlefield::new(
            Roster::with_units(
                Team::Blue,
                vec![Unit::new(UnitId(1), Team::Blue, Vec2::ZERO, profile)],
            ),
            Roster::with_units(
                Team::Red,
                vec![Unit::new(UnitId(2), Team::Red, Vec2::new(0.0, 20.0), profile)],
            ),
            CoverSet::new(covers),
        )
        .unwrap()
    }

    fn with_ctx<T>(field: &mut Battlefield, f: impl FnOnce(&mut TacticalContext<'_>) -> T) -> T {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut visuals = ShotRecorder::default();
        let mut ctx = TacticalContext::new(
            Team::Blue,
            field,
            DoctrineConfig::default(),
            &mut rng,
            &mut visuals,
        );
        ctx.activate(Some(UnitId(1)));
        f(&mut ctx)
    }

    #[test]
    fn destinations_are_capped_at_move_radius() {
        let mut field = field(Vec::new());
        with_ctx(&mut field, |ctx| {
            assert_eq!(squad_destination(ctx, Heading::Toward), Some(Vec2::new(0.0, 6.0)));
            assert_eq!(squad_destination(ctx, Heading::Away), Some(Vec2::new(0.0, -6.0)));
            assert_eq!(squad_destination(ctx, Heading::Stay), Some(Vec2::ZERO));
        });
    }

    #[test]
    fn cover_spot_sits_behind_cover_away_from_enemy() {
        let mut field = field(vec![Cover::new(Vec2::new(0.0, 3.0), CoverTier::Half)]);
        with_ctx(&mut field, |ctx| {
            let spot = cover_spot(ctx, Vec2::ZERO).unwrap();
            assert!((spot - Vec2::new(0.0, 3.0 - MatchConfig::COVER_OFFSET)).length() < 1e-5);
            assert_eq!(cover_relocation(ctx), Some(spot));
        });
    }

    #[test]
    fn no_relocation_without_reachable_cover() {
        let mut field = field(vec![Cover::new(Vec2::new(0.0, 9.0), CoverTier::Full)]);
        with_ctx(&mut field, |ctx| {
            assert_eq!(cover_spot(ctx, Vec2::ZERO), None);
            assert_eq!(cover_relocation(ctx), None);
        });
    }

    #[test]
    fn far_squads_are_out_of_engagement_range() {
        let mut field = field(Vec::new());
        with_ctx(&mut field, |ctx| {
            assert_eq!(within_engagement_range(ctx), Some(false));
        });
    }
}
