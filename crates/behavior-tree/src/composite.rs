//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides [`Sequence`] (AND logic) and [`BranchSelector`]
//! (predicate-driven choice of exactly one child).

use crate::{Behavior, Branch, Node, Status};

/// Executes child behaviors in sequence until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Running`, the sequence **stops immediately** and returns `Running`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<L, B> {
    children: Vec<Node<L, B>>,
}

impl<L, B> Sequence<L, B> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Node<L, B>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self { children }
    }

    pub fn children(&self) -> &[Node<L, B>] {
        &self.children
    }

    pub(crate) fn tick<C: ?Sized>(&self, ctx: &mut C) -> Status
    where
        L: Behavior<C>,
        B: Branch<C>,
    {
        // Execute children in order until one does not succeed
        for child in &self.children {
            match child.tick(ctx) {
                Status::Success => continue,
                Status::Failure => return Status::Failure,
                Status::Running => return Status::Running,
            }
        }
        Status::Success
    }
}

/// Runs exactly one child, chosen by a domain predicate.
///
/// # Semantics
///
/// - The [`Branch`] predicate returns the index of the child to run
/// - The chosen child is ticked once and the selector reports `Success`,
///   whatever the child returned
/// - If the predicate cannot decide (`None`) or names a missing child, no
///   child runs and the selector reports `Failure`
///
/// Unlike a priority selector, siblings are never tried as fallbacks: the
/// predicate alone decides which branch of the doctrine applies.
pub struct BranchSelector<L, B> {
    selector: B,
    children: Vec<Node<L, B>>,
}

impl<L, B> BranchSelector<L, B> {
    /// Creates a new branch selector.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(selector: B, children: Vec<Node<L, B>>) -> Self {
        assert!(
            !children.is_empty(),
            "BranchSelector must have at least one child"
        );
        Self { selector, children }
    }

    pub fn selector(&self) -> &B {
        &self.selector
    }

    pub fn children(&self) -> &[Node<L, B>] {
        &self.children
    }

    pub(crate) fn tick<C: ?Sized>(&self, ctx: &mut C) -> Status
    where
        L: Behavior<C>,
        B: Branch<C>,
    {
        let Some(child) = self
            .selector
            .choose(ctx)
            .and_then(|index| self.children.get(index))
        else {
            return Status::Failure;
        };

        let _ = child.tick(ctx);
        Status::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{always_succeed, branch, inverter, leaf, sequence};

    struct TestContext {
        value: i32,
        trace: Vec<&'static str>,
    }

    impl TestContext {
        fn new(value: i32) -> Self {
            Self {
                value,
                trace: Vec::new(),
            }
        }
    }

    enum TestLeaf {
        Increment,
        Decrement,
        FailAlways,
        Pending,
    }

    impl Behavior<TestContext> for TestLeaf {
        fn tick(&self, ctx: &mut TestContext) -> Status {
            match self {
                TestLeaf::Increment => {
                    ctx.value += 1;
                    ctx.trace.push("inc");
                    Status::Success
                }
                TestLeaf::Decrement => {
                    ctx.value -= 1;
                    ctx.trace.push("dec");
                    Status::Success
                }
                TestLeaf::FailAlways => {
                    ctx.trace.push("fail");
                    Status::Failure
                }
                TestLeaf::Pending => {
                    ctx.trace.push("pending");
                    Status::Running
                }
            }
        }
    }

    /// Picks child 0 for positive values, child 1 otherwise; undecided at zero.
    struct SignOf;

    impl Branch<TestContext> for SignOf {
        fn choose(&self, ctx: &mut TestContext) -> Option<usize> {
            match ctx.value {
                0 => None,
                v if v > 0 => Some(0),
                _ => Some(1),
            }
        }
    }

    type TestNode = Node<TestLeaf, SignOf>;

    #[test]
    fn sequence_all_success() {
        let seq: TestNode = sequence(vec![leaf(TestLeaf::Increment), leaf(TestLeaf::Increment)]);

        let mut ctx = TestContext::new(0);
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let seq: TestNode = sequence(vec![
            leaf(TestLeaf::Increment),
            leaf(TestLeaf::FailAlways),
            leaf(TestLeaf::Increment), // Should not execute
        ]);

        let mut ctx = TestContext::new(0);
        assert_eq!(seq.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.value, 1);
        assert_eq!(ctx.trace, vec!["inc", "fail"]);
    }

    #[test]
    fn sequence_stops_on_running() {
        let seq: TestNode = sequence(vec![
            leaf(TestLeaf::Pending),
            leaf(TestLeaf::Increment),
        ]);

        let mut ctx = TestContext::new(0);
        assert_eq!(seq.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.value, 0);
    }

    #[test]
    fn branch_runs_only_chosen_child() {
        let sel: TestNode = branch(
            SignOf,
            vec![leaf(TestLeaf::Increment), leaf(TestLeaf::Decrement)],
        );

        let mut ctx = TestContext::new(5);
        assert_eq!(sel.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.trace, vec!["inc"]);

        let mut ctx = TestContext::new(-5);
        assert_eq!(sel.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.trace, vec!["dec"]);
    }

    #[test]
    fn branch_reports_success_even_if_child_fails() {
        let sel: TestNode = branch(
            SignOf,
            vec![leaf(TestLeaf::FailAlways), leaf(TestLeaf::Decrement)],
        );

        let mut ctx = TestContext::new(1);
        assert_eq!(sel.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.trace, vec!["fail"]);
    }

    #[test]
    fn branch_fails_when_undecided_or_out_of_range() {
        let sel: TestNode = branch(SignOf, vec![leaf(TestLeaf::Increment)]);

        let mut ctx = TestContext::new(0);
        assert_eq!(sel.tick(&mut ctx), Status::Failure);
        assert!(ctx.trace.is_empty());

        // Negative values pick index 1, which does not exist here.
        let mut ctx = TestContext::new(-1);
        assert_eq!(sel.tick(&mut ctx), Status::Failure);
        assert!(ctx.trace.is_empty());
    }

    #[test]
    fn node_count_covers_nested_children() {
        let tree: TestNode = branch(
            SignOf,
            vec![
                sequence(vec![leaf(TestLeaf::Increment), inverter(leaf(TestLeaf::FailAlways))]),
                always_succeed(leaf(TestLeaf::Decrement)),
            ],
        );

        assert_eq!(leaf::<TestLeaf, SignOf>(TestLeaf::Pending).node_count(), 1);
        assert_eq!(tree.node_count(), 7);
    }
}
