//! The closed set of tree nodes.

use crate::{AlwaysSucceed, Behavior, Branch, BranchSelector, Inverter, Repeater, Sequence, Status};

/// A behavior tree node.
///
/// `L` is the domain's leaf type and `B` its branch-predicate type. Trees are
/// assembled once (see [`crate::builder`]) and then only traversed; a node
/// never restructures itself while ticking.
pub enum Node<L, B> {
    /// AND over ordered children.
    Sequence(Sequence<L, B>),
    /// Runs exactly one child picked by a domain predicate.
    Branch(BranchSelector<L, B>),
    /// Runs one child a fixed number of times.
    Repeat(Repeater<L, B>),
    /// Flips the child's success/failure.
    Invert(Inverter<L, B>),
    /// Reports success whatever the child returns.
    AlwaysSucceed(AlwaysSucceed<L, B>),
    /// Terminal domain behavior.
    Leaf(L),
}

impl<L, B> Node<L, B> {
    /// Performs one synchronous traversal of this subtree.
    pub fn tick<C: ?Sized>(&self, ctx: &mut C) -> Status
    where
        L: Behavior<C>,
        B: Branch<C>,
    {
        match self {
            Node::Sequence(node) => node.tick(ctx),
            Node::Branch(node) => node.tick(ctx),
            Node::Repeat(node) => node.tick(ctx),
            Node::Invert(node) => node.tick(ctx),
            Node::AlwaysSucceed(node) => node.tick(ctx),
            Node::Leaf(leaf) => leaf.tick(ctx),
        }
    }

    /// Total number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        1 + match self {
            Node::Sequence(node) => node.children().iter().map(Node::node_count).sum(),
            Node::Branch(node) => node.children().iter().map(Node::node_count).sum(),
            Node::Repeat(node) => node.child().node_count(),
            Node::Invert(node) => node.child().node_count(),
            Node::AlwaysSucceed(node) => node.child().node_count(),
            Node::Leaf(_) => 0,
        }
    }
}
