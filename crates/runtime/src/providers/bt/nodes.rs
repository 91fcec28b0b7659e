//! Leaf nodes.
//!
//! Leaves read the tactical context, write intermediate results to memory,
//! and issue at most one action for the active unit.

use behavior_tree::{Behavior, Status};

use super::Blackboard;
use crate::events::ShotReport;
use crate::providers::doctrine::{self, Heading};

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum DoctrineLeaf {
    /// Picks a destination along the squad heading.
    TargetPosition(Heading),
    /// Moves the destination behind nearby cover. Fails when none qualifies.
    FindCoveredPosition,
    /// Remembers the enemy nearest to the active unit.
    FindClosestEnemy,
    /// Issues the move once, then reports `Running` until the unit arrives.
    Move,
    /// Fires at the remembered enemy, or the nearest one if it is gone.
    Shoot,
}

impl Behavior<Blackboard<'_, '_>> for DoctrineLeaf {
    fn tick(&self, bb: &mut Blackboard<'_, '_>) -> Status {
        bb.memory.active_leaf = Some(*self);
        let status = match *self {
            DoctrineLeaf::TargetPosition(heading) => target_position(bb, heading),
            DoctrineLeaf::FindCoveredPosition => find_covered_position(bb),
            DoctrineLeaf::FindClosestEnemy => find_closest_enemy(bb),
            DoctrineLeaf::Move => move_unit(bb),
            DoctrineLeaf::Shoot => shoot(bb),
        };
        tracing::trace!(leaf = %self, ?status, "leaf ticked");
        status
    }
}

fn target_position(bb: &mut Blackboard<'_, '_>, heading: Heading) -> Status {
    bb.memory.target_position = doctrine::squad_destination(bb.ctx, heading);
    Status::from_bool(bb.memory.target_position.is_some())
}

fn find_covered_position(bb: &mut Blackboard<'_, '_>) -> Status {
    let Some(around) = bb.memory.target_position else {
        return Status::Failure;
    };
    match doctrine::cover_spot(bb.ctx, around) {
        Some(spot) => {
            bb.memory.target_position = Some(spot);
            Status::Success
        }
        None => Status::Failure,
    }
}

fn find_closest_enemy(bb: &mut Blackboard<'_, '_>) -> Status {
    bb.memory.target = bb.ctx.closest_enemy();
    Status::from_bool(bb.memory.target.is_some())
}

fn move_unit(bb: &mut Blackboard<'_, '_>) -> Status {
    let Some(unit) = bb.ctx.active_unit() else {
        return Status::Failure;
    };
    if unit.finished_move() {
        return Status::Success;
    }
    if !unit.action_allowed() {
        return Status::Running;
    }

    let Some(destination) = bb.memory.target_position else {
        return Status::Failure;
    };
    if bb.ctx.move_active(destination) {
        Status::Running
    } else {
        Status::Failure
    }
}

fn shoot(bb: &mut Blackboard<'_, '_>) -> Status {
    let Some(unit) = bb.ctx.active_unit() else {
        return Status::Failure;
    };
    if unit.finished_move() {
        return Status::Success;
    }
    if !unit.action_allowed() {
        return Status::Running;
    }
    let shooter = unit.id();

    // The remembered enemy may have been removed since it was chosen.
    let target = bb
        .memory
        .target
        .filter(|&id| bb.ctx.is_enemy_alive(id))
        .or_else(|| bb.ctx.closest_enemy());
    let Some(target) = target else {
        return Status::Failure;
    };

    match bb.ctx.shoot_active(target) {
        Some(outcome) => {
            bb.memory.shot = Some(ShotReport {
                shooter,
                target,
                outcome,
            });
            Status::Success
        }
        None => Status::Failure,
    }
}

