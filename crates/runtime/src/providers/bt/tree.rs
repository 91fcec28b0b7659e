use behavior_tree::Node;
use behavior_tree::builder::{always_succeed, branch, leaf, sequence};
use skirmish_core::TacticalContext;

use super::{Blackboard, DoctrineBranch, DoctrineLeaf, Memory};
use crate::api::ControllerKind;
use crate::events::MatchEvent;
use crate::providers::doctrine::Heading;
use crate::providers::squad::{Activity, SquadPolicy};

pub type DoctrineTree = Node<DoctrineLeaf, DoctrineBranch>;

/// Builds the doctrine tree.
pub fn doctrine_tree() -> DoctrineTree {
    let take_cover = sequence(vec![
        leaf(DoctrineLeaf::TargetPosition(Heading::Stay)),
        leaf(DoctrineLeaf::FindCoveredPosition),
        leaf(DoctrineLeaf::Move),
    ]);
    let shoot = sequence(vec![
        leaf(DoctrineLeaf::FindClosestEnemy),
        leaf(DoctrineLeaf::Shoot),
    ]);
    let retreat = sequence(vec![
        leaf(DoctrineLeaf::TargetPosition(Heading::Away)),
        always_succeed(leaf(DoctrineLeaf::FindCoveredPosition)),
        leaf(DoctrineLeaf::Move),
    ]);
    let push = sequence(vec![
        leaf(DoctrineLeaf::TargetPosition(Heading::Toward)),
        always_succeed(leaf(DoctrineLeaf::FindCoveredPosition)),
        leaf(DoctrineLeaf::Move),
    ]);

    branch(
        DoctrineBranch::Distance,
        vec![
            branch(DoctrineBranch::StayCover, vec![take_cover, shoot]),
            branch(DoctrineBranch::HealthPool, vec![retreat, push]),
        ],
    )
}

/// Squad policy backed by [`doctrine_tree`].
pub struct BehaviourTree {
    root: DoctrineTree,
    memory: Memory,
}

impl BehaviourTree {
    pub fn new() -> Self {
        Self::with_root(doctrine_tree())
    }

    pub fn with_root(root: DoctrineTree) -> Self {
        tracing::debug!(nodes = root.node_count(), "behaviour tree built");
        Self {
            root,
            memory: Memory::default(),
        }
    }

    pub fn root(&self) -> &DoctrineTree {
        &self.root
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }
}

impl Default for BehaviourTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SquadPolicy for BehaviourTree {
    fn kind(&self) -> ControllerKind {
        ControllerKind::BehaviourTree
    }

    fn begin_turn(&mut self) {
        self.memory.clear();
    }

    fn on_activate(&mut self, _ctx: &mut TacticalContext<'_>, _events: &mut Vec<MatchEvent>) {
        self.memory.clear();
    }

    fn run(&mut self, ctx: &mut TacticalContext<'_>) -> Activity {
        let status = {
            let mut bb = Blackboard::new(ctx, &mut self.memory);
            self.root.tick(&mut bb)
        };
        tracing::trace!(?status, leaf = ?self.memory.active_leaf, "tree ticked");

        if let Some(report) = self.memory.shot.take() {
            return Activity::Fired(report);
        }
        if status.is_failure() && ctx.active_unit().is_some_and(|unit| unit.action_allowed()) {
            return Activity::Idle;
        }
        Activity::Acting
    }
}
