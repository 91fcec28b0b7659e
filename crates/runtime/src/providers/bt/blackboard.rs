use glam::Vec2;
use skirmish_core::{TacticalContext, UnitId};

use super::DoctrineLeaf;
use crate::events::ShotReport;

/// Scratch state written by leaves and read by later leaves.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Memory {
    /// Destination chosen by `TargetPosition`, refined by `FindCoveredPosition`.
    pub target_position: Option<Vec2>,
    /// Enemy chosen by `FindClosestEnemy`.
    pub target: Option<UnitId>,
    /// Shot fired during the current tick, if any.
    pub shot: Option<ShotReport>,
    /// Last leaf that ran.
    pub active_leaf: Option<DoctrineLeaf>,
}

impl Memory {
    /// Forgets everything tied to the previous unit.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Context handed to every node: the tactical view plus scratch memory.
pub struct Blackboard<'b, 'a> {
    pub ctx: &'b mut TacticalContext<'a>,
    pub memory: &'b mut Memory,
}

impl<'b, 'a> Blackboard<'b, 'a> {
    pub fn new(ctx: &'b mut TacticalContext<'a>, memory: &'b mut Memory) -> Self {
        Self { ctx, memory }
    }
}
