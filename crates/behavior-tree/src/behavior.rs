//! Traits implemented by domain nodes.
//!
//! The tree itself is a closed enum ([`crate::Node`]); the only open seams are
//! the leaves ([`Behavior`]) and the predicates that pick a branch
//! ([`Branch`]). Both are generic over a context type `C`, the blackboard
//! that nodes read and write.

use crate::Status;

/// A leaf node that can be evaluated against a context.
pub trait Behavior<C: ?Sized> {
    /// Evaluate this behavior against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context/blackboard. Leaves can read
    ///   game state and modify it (e.g., to store intermediate results).
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    /// - `Status::Running` if the behavior was issued but is still in progress
    fn tick(&self, ctx: &mut C) -> Status;
}

/// A domain predicate that selects exactly one child of a
/// [`crate::BranchSelector`].
pub trait Branch<C: ?Sized> {
    /// Returns the index of the child to run, or `None` when the predicate
    /// cannot be evaluated against the current context.
    fn choose(&self, ctx: &mut C) -> Option<usize>;
}
