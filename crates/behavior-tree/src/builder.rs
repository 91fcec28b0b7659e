//! Builder utilities for ergonomic behavior tree construction.
//!
//! Instead of writing verbose `Node::Sequence(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`.

use crate::{AlwaysSucceed, BranchSelector, Inverter, Node, Repeater, Sequence};

/// Creates a sequence node.
#[inline]
pub fn sequence<L, B>(children: Vec<Node<L, B>>) -> Node<L, B> {
    Node::Sequence(Sequence::new(children))
}

/// Creates a branch selector driven by `selector`.
#[inline]
pub fn branch<L, B>(selector: B, children: Vec<Node<L, B>>) -> Node<L, B> {
    Node::Branch(BranchSelector::new(selector, children))
}

/// Creates a repeater node.
#[inline]
pub fn repeat<L, B>(times: u32, child: Node<L, B>) -> Node<L, B> {
    Node::Repeat(Repeater::new(times, child))
}

/// Creates an inverter node.
#[inline]
pub fn inverter<L, B>(child: Node<L, B>) -> Node<L, B> {
    Node::Invert(Inverter::new(child))
}

/// Creates an always-succeed node.
#[inline]
pub fn always_succeed<L, B>(child: Node<L, B>) -> Node<L, B> {
    Node::AlwaysSucceed(AlwaysSucceed::new(child))
}

/// Wraps a domain behavior as a leaf node.
#[inline]
pub fn leaf<L, B>(behavior: L) -> Node<L, B> {
    Node::Leaf(behavior)
}
