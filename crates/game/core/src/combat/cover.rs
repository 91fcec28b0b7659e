//! Cover geometry.

use glam::Vec2;

use crate::state::{Cover, CoverSet, CoverTier};

/// Protection `target` enjoys against shots from `observer`.
///
/// Only covers within `effect_radius` of the target count, and only when they
/// sit strictly inside the observer/target bounding box on at least one axis;
/// a cover outside the box on both axes is flanked. The highest qualifying
/// tier wins.
pub fn classify_cover(
    observer: Vec2,
    target: Vec2,
    covers: &CoverSet,
    effect_radius: f32,
) -> CoverTier {
    let min = observer.min(target);
    let max = observer.max(target);

    covers
        .within(target, effect_radius)
        .filter(|cover| shields(cover.position, min, max))
        .map(|cover| cover.tier)
        .max()
        .unwrap_or(CoverTier::None)
}

fn shields(point: Vec2, min: Vec2, max: Vec2) -> bool {
    let inside_x = point.x > min.x && point.x < max.x;
    let inside_y = point.y > min.y && point.y < max.y;
    inside_x || inside_y
}

/// Best cover within `search_radius` of `around` that a unit at `origin` can
/// reach with `reach`.
///
/// Highest tier wins; among equal tiers the first in set order is kept. The
/// scan stops as soon as a [`CoverTier::MAX`] cover is found.
pub fn best_cover_near(
    covers: &CoverSet,
    around: Vec2,
    search_radius: f32,
    origin: Vec2,
    reach: f32,
) -> Option<&Cover> {
    let mut best: Option<&Cover> = None;
    for cover in covers.within(around, search_radius) {
        if cover.position.distance(origin) > reach {
            continue;
        }
        if best.is_none_or(|current| cover.tier > current.tier) {
            best = Some(cover);
            if cover.tier == CoverTier::MAX {
                break;
            }
        }
    }
    best
}
