//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result or execution.
//! This module provides [`Inverter`] (NOT logic), [`Repeater`] (fixed
//! iteration) and [`AlwaysSucceed`] (error suppression).

use crate::{Behavior, Branch, Node, Status};

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - `Running` passes through unchanged
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter<L, B> {
    child: Box<Node<L, B>>,
}

impl<L, B> Inverter<L, B> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: Node<L, B>) -> Self {
        Self {
            child: Box::new(child),
        }
    }

    pub fn child(&self) -> &Node<L, B> {
        &self.child
    }

    pub(crate) fn tick<C: ?Sized>(&self, ctx: &mut C) -> Status
    where
        L: Behavior<C>,
        B: Branch<C>,
    {
        self.child.tick(ctx).invert()
    }
}

/// Runs its child a fixed number of times, regardless of the child's result.
///
/// # Semantics
///
/// - The child is ticked exactly `times` times within one traversal
/// - Failures do not stop the repetition
/// - The repeater always returns `Success`
pub struct Repeater<L, B> {
    times: u32,
    child: Box<Node<L, B>>,
}

impl<L, B> Repeater<L, B> {
    /// Creates a repeater that runs `child` `times` times per tick.
    pub fn new(times: u32, child: Node<L, B>) -> Self {
        Self {
            times,
            child: Box::new(child),
        }
    }

    pub fn times(&self) -> u32 {
        self.times
    }

    pub fn child(&self) -> &Node<L, B> {
        &self.child
    }

    pub(crate) fn tick<C: ?Sized>(&self, ctx: &mut C) -> Status
    where
        L: Behavior<C>,
        B: Branch<C>,
    {
        for _ in 0..self.times {
            let _ = self.child.tick(ctx);
        }
        Status::Success
    }
}

/// Always returns `Success`, regardless of the child's result.
///
/// # Semantics
///
/// - If the child returns `Success`, returns `Success`
/// - If the child returns `Failure` or `Running`, **still returns `Success`**
///
/// This is useful for:
/// - Optional steps that shouldn't cause a sequence to fail
/// - Best-effort refinements (e.g., snapping a destination to cover)
pub struct AlwaysSucceed<L, B> {
    child: Box<Node<L, B>>,
}

impl<L, B> AlwaysSucceed<L, B> {
    /// Creates a new always-succeed wrapper around the given child behavior.
    pub fn new(child: Node<L, B>) -> Self {
        Self {
            child: Box::new(child),
        }
    }

    pub fn child(&self) -> &Node<L, B> {
        &self.child
    }

    pub(crate) fn tick<C: ?Sized>(&self, ctx: &mut C) -> Status
    where
        L: Behavior<C>,
        B: Branch<C>,
    {
        // Execute child but ignore the result
        let _ = self.child.tick(ctx);
        Status::Success
    }
}
