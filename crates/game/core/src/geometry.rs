//! Ground-plane helpers.
//!
//! Tactical math runs on [`Vec2`] with `x`/`y` spanning the ground. The only
//! place height matters is shot visuals, which lift points into [`Vec3`] with
//! the world `y` axis up.

use glam::{Vec2, Vec3};

use crate::config::MatchConfig;

/// Mean of `points`, or `None` when there are none.
pub fn centroid<I>(points: I) -> Option<Vec2>
where
    I: IntoIterator<Item = Vec2>,
{
    let (sum, count) = points
        .into_iter()
        .fold((Vec2::ZERO, 0usize), |(sum, count), point| {
            (sum + point, count + 1)
        });
    (count > 0).then(|| sum / count as f32)
}

/// Moves from `origin` along `direction` by `distance`.
///
/// A zero direction leaves `origin` unchanged.
pub fn displace(origin: Vec2, direction: Vec2, distance: f32) -> Vec2 {
    origin + direction.normalize_or_zero() * distance
}

/// Position just behind `cover`, offset along `away` (normalized first).
pub fn behind_cover(cover: Vec2, away: Vec2, offset: f32) -> Vec2 {
    displace(cover, away, offset)
}

/// Lifts a ground point to the height shots are fired from.
pub fn shot_anchor(point: Vec2) -> Vec3 {
    Vec3::new(point.x, MatchConfig::SHOT_ANCHOR_HEIGHT, point.y)
}

/// Snaps a point to the nearest integer grid cell.
pub fn snap_to_grid(point: Vec2) -> Vec2 {
    point.round()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn centroid_of_nothing_is_none() {
        assert_eq!(centroid(std::iter::empty()), None);
    }

    #[test]
    fn centroid_averages_points() {
        let c = centroid([Vec2::new(0.0, 0.0), Vec2::new(4.0, 2.0)]).unwrap();
        assert_eq!(c, Vec2::new(2.0, 1.0));
    }

    #[test]
    fn displace_with_zero_direction_stays_put() {
        let origin = Vec2::new(3.0, 3.0);
        assert_eq!(displace(origin, Vec2::ZERO, 5.0), origin);
    }

    #[test]
    fn shot_anchor_lifts_to_height() {
        let anchor = shot_anchor(Vec2::new(2.0, -4.0));
        assert_eq!(anchor, Vec3::new(2.0, MatchConfig::SHOT_ANCHOR_HEIGHT, -4.0));
    }

    proptest! {
        #[test]
        fn centroid_is_the_componentwise_mean(
            points in prop::collection::vec((-100.0f32..100.0, -100.0f32..100.0), 1..16)
        ) {
            let points: Vec<Vec2> = points.into_iter().map(|(x, y)| Vec2::new(x, y)).collect();
            let c = centroid(points.iter().copied()).unwrap();
            let n = points.len() as f32;
            let mean_x = points.iter().map(|p| p.x).sum::<f32>() / n;
            let mean_y = points.iter().map(|p| p.y).sum::<f32>() / n;
            prop_assert!((c.x - mean_x).abs() < 1e-3);
            prop_assert!((c.y - mean_y).abs() < 1e-3);
        }
    }
}
