//! Predicates that route a tick to exactly one child.

use behavior_tree::Branch;

use super::Blackboard;
use crate::providers::doctrine;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum DoctrineBranch {
    /// `[hold, maneuver]`: hold when squads are within engagement range.
    Distance,
    /// `[retreat, push]`: retreat when the own pool trails the enemy's by
    /// more than the retreat ratio.
    HealthPool,
    /// `[take cover, shoot]`: relocate first when exposed and cover is close.
    StayCover,
}

impl DoctrineBranch {
    pub const HOLD: usize = 0;
    pub const MANEUVER: usize = 1;
    pub const RETREAT: usize = 0;
    pub const PUSH: usize = 1;
    pub const TAKE_COVER: usize = 0;
    pub const SHOOT: usize = 1;
}

impl Branch<Blackboard<'_, '_>> for DoctrineBranch {
    fn choose(&self, bb: &mut Blackboard<'_, '_>) -> Option<usize> {
        let ctx = &*bb.ctx;
        let choice = match self {
            DoctrineBranch::Distance => {
                if doctrine::within_engagement_range(ctx)? {
                    Self::HOLD
                } else {
                    Self::MANEUVER
                }
            }
            DoctrineBranch::HealthPool => {
                if ctx.health().trails(ctx.doctrine().retreat_health_ratio) {
                    Self::RETREAT
                } else {
                    Self::PUSH
                }
            }
            DoctrineBranch::StayCover => {
                if doctrine::cover_relocation(ctx).is_some() {
                    Self::TAKE_COVER
                } else {
                    Self::SHOOT
                }
            }
        };
        tracing::trace!(branch = %self, choice, "branch chosen");
        Some(choice)
    }
}
