use glam::Vec2;
use serde::Serialize;
use skirmish_core::{
    CoverTier, DoctrineConfig, HealthPools, MatchConfig, TacticalContext, Team, combat, geometry,
};

use crate::events::{MatchEvent, ShotReport};
use crate::providers::doctrine;
use crate::providers::squad::Activity;

/// Squad-wide posture.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, Serialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TacticalState {
    /// Hold position and shoot the most exposed enemy.
    Stay,
    /// Advance toward the enemy, snapping to cover near the destination.
    Push,
    /// Fall back and regroup, snapping to cover near the destination.
    Retreat,
}

/// Measurements the transitions depend on, taken when a unit activates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Situation {
    pub health: HealthPools,
    /// Distance between the two squad centroids.
    pub centroid_distance: f32,
    /// Shortest distance between any own unit and any enemy.
    pub closest_pair: Option<f32>,
}

impl Situation {
    /// `None` when either roster is empty.
    pub fn observe(ctx: &TacticalContext<'_>) -> Option<Self> {
        Some(Self {
            health: ctx.health(),
            centroid_distance: ctx.centroid_distance()?,
            closest_pair: ctx.closest_pair_distance(),
        })
    }

    fn close_contact(&self, doctrine: &DoctrineConfig) -> bool {
        self.closest_pair
            .is_some_and(|d| d < doctrine.close_proximity_distance)
    }
}

impl TacticalState {
    pub const INITIAL: Self = Self::Push;

    /// State to adopt given `situation`. Returns `self` when no transition
    /// fires. Rules are checked in priority order; the first match wins.
    pub fn transition(self, situation: &Situation, doctrine: &DoctrineConfig) -> Self {
        let health = &situation.health;
        let in_range = situation.centroid_distance <= doctrine.stay_distance;

        match self {
            Self::Stay => {
                if health.trails(doctrine.retreat_health_ratio) {
                    Self::Retreat
                } else if situation.centroid_distance >= doctrine.stay_distance {
                    Self::Push
                } else {
                    self
                }
            }
            Self::Push => {
                if health.trails(doctrine.retreat_health_ratio) {
                    Self::Retreat
                } else if health.trails(doctrine.stay_health_ratio)
                    || in_range
                    || situation.close_contact(doctrine)
                {
                    Self::Stay
                } else {
                    self
                }
            }
            Self::Retreat => {
                if health.own > health.enemy {
                    Self::Push
                } else if health.leads(doctrine.stay_health_ratio)
                    || in_range
                    || situation.close_contact(doctrine)
                {
                    Self::Stay
                } else {
                    self
                }
            }
        }
    }

    /// Entry hook, run once whenever the machine switches into this state.
    pub(crate) fn on_enter(
        self,
        from: Self,
        situation: &Situation,
        side: Team,
        events: &mut Vec<MatchEvent>,
    ) {
        tracing::debug!(
            %side,
            %from,
            to = %self,
            own = situation.health.own,
            enemy = situation.health.enemy,
            distance = situation.centroid_distance,
            "state changed"
        );
        events.push(MatchEvent::StateChanged {
            side,
            from,
            to: self,
        });
    }

    /// Executes at most one action for the active unit.
    pub(crate) fn run(self, ctx: &mut TacticalContext<'_>) -> Activity {
        let Some(unit) = ctx.active_unit() else {
            return Activity::Idle;
        };
        if !unit.action_allowed() {
            return Activity::Acting;
        }

        match self {
            Self::Stay => hold(ctx),
            Self::Push => match push_destination(ctx) {
                Some(destination) => issue_move(ctx, destination),
                None => Activity::Idle,
            },
            Self::Retreat => match retreat_destination(ctx) {
                Some(destination) => issue_move(ctx, destination),
                None => Activity::Idle,
            },
        }
    }
}

fn issue_move(ctx: &mut TacticalContext<'_>, destination: Vec2) -> Activity {
    if ctx.move_active(destination) {
        Activity::Acting
    } else {
        Activity::Idle
    }
}

fn hold(ctx: &mut TacticalContext<'_>) -> Activity {
    if let Some(spot) = doctrine::cover_relocation(ctx) {
        return issue_move(ctx, spot);
    }

    let (Some(shooter), Some(target)) = (ctx.active_id(), ctx.lowest_cover_target()) else {
        return Activity::Idle;
    };
    match ctx.shoot_active(target) {
        Some(outcome) => Activity::Fired(ShotReport {
            shooter,
            target,
            outcome,
        }),
        None => Activity::Idle,
    }
}

/// Straight at the enemy centroid, at most one move radius.
fn push_destination(ctx: &TacticalContext<'_>) -> Option<Vec2> {
    let unit = ctx.active_unit()?;
    let position = unit.position();
    let enemy = ctx.enemy_centroid()?;
    let target = geometry::displace(
        position,
        enemy - position,
        position.distance(enemy).min(unit.move_radius()),
    );
    Some(snap_to_cover(
        ctx,
        target,
        MatchConfig::PUSH_SNAP_RADIUS,
        MatchConfig::PUSH_COVER_OFFSET,
    ))
}

/// Away from the enemy centroid while pulling toward the own centroid. The
/// combined displacement never exceeds one move radius.
fn retreat_destination(ctx: &TacticalContext<'_>) -> Option<Vec2> {
    let unit = ctx.active_unit()?;
    let position = unit.position();
    let radius = unit.move_radius();
    let away = (position - ctx.enemy_centroid()?).normalize_or_zero();
    let regroup = (ctx.own_centroid()? - position).normalize_or_zero();
    let target = position + ((away + regroup) * radius).clamp_length_max(radius);
    Some(snap_to_cover(
        ctx,
        target,
        MatchConfig::RETREAT_SNAP_RADIUS,
        MatchConfig::RETREAT_COVER_OFFSET,
    ))
}

/// Moves `target` behind the best cover within `radius` of it, if any.
fn snap_to_cover(ctx: &TacticalContext<'_>, target: Vec2, radius: f32, offset: f32) -> Vec2 {
    let cover = combat::best_cover_near(ctx.covers(), target, radius, target, f32::INFINITY)
        .filter(|cover| cover.tier > CoverTier::None);
    let away = ctx
        .own_centroid()
        .zip(ctx.enemy_centroid())
        .map(|(own, enemy)| own - enemy);

    match (cover, away) {
        (Some(cover), Some(away)) => geometry::behind_cover(cover.position, away, offset),
        _ => target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn situation(own: f32, enemy: f32, distance: f32, pair: f32) -> Situation {
        Situation {
            health: HealthPools::new(own, enemy),
            centroid_distance: distance,
            closest_pair: Some(pair),
        }
    }

    #[test]
    fn push_holds_when_in_range() {
        let doctrine = DoctrineConfig::default();
        let next = TacticalState::Push.transition(&situation(100.0, 100.0, 12.0, 12.0), &doctrine);
        assert_eq!(next, TacticalState::Stay);
    }

    #[test]
    fn push_keeps_pushing_from_afar() {
        let doctrine = DoctrineConfig::default();
        let next = TacticalState::Push.transition(&situation(100.0, 100.0, 30.0, 25.0), &doctrine);
        assert_eq!(next, TacticalState::Push);
    }

    #[test]
    fn heavy_losses_force_retreat() {
        let doctrine = DoctrineConfig::default();
        // Far apart, inside stay distance, and in close contact alike.
        for (distance, pair) in [(30.0, 25.0), (6.0, 6.0), (4.0, 2.0)] {
            for state in [TacticalState::Push, TacticalState::Stay] {
                let next = state.transition(&situation(40.0, 100.0, distance, pair), &doctrine);
                assert_eq!(next, TacticalState::Retreat, "{state} at {distance}");
            }
        }
    }

    #[test]
    fn moderate_losses_make_a_push_hold() {
        let doctrine = DoctrineConfig::default();
        let next = TacticalState::Push.transition(&situation(80.0, 100.0, 30.0, 25.0), &doctrine);
        assert_eq!(next, TacticalState::Stay);
    }

    #[test]
    fn close_contact_makes_a_push_hold() {
        let doctrine = DoctrineConfig::default();
        let next = TacticalState::Push.transition(&situation(100.0, 100.0, 30.0, 3.0), &doctrine);
        assert_eq!(next, TacticalState::Stay);
    }

    #[test]
    fn stay_pushes_once_squads_drift_apart() {
        let doctrine = DoctrineConfig::default();
        let next = TacticalState::Stay.transition(&situation(100.0, 100.0, 15.0, 12.0), &doctrine);
        assert_eq!(next, TacticalState::Push);
    }

    #[test]
    fn entering_a_state_reports_the_change() {
        let mut events = Vec::new();
        TacticalState::Retreat.on_enter(
            TacticalState::Push,
            &situation(40.0, 100.0, 30.0, 25.0),
            Team::Red,
            &mut events,
        );
        assert_eq!(
            events,
            vec![MatchEvent::StateChanged {
                side: Team::Red,
                from: TacticalState::Push,
                to: TacticalState::Retreat,
            }]
        );
    }

    #[test]
    fn retreat_recovers() {
        let doctrine = DoctrineConfig::default();
        let retreat = |s: Situation| TacticalState::Retreat.transition(&s, &doctrine);

        assert_eq!(retreat(situation(120.0, 100.0, 30.0, 25.0)), TacticalState::Push);
        assert_eq!(retreat(situation(60.0, 100.0, 30.0, 25.0)), TacticalState::Retreat);
        assert_eq!(retreat(situation(60.0, 100.0, 10.0, 8.0)), TacticalState::Stay);
    }
}
