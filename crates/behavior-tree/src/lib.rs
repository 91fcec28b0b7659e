//! Lightweight behavior tree library for frame-driven, turn-based tactics.
//!
//! Trees are built once and then only traversed. A single call to
//! [`Node::tick`] performs one synchronous top-to-bottom traversal against a
//! caller-supplied context (the blackboard) and returns a tri-state [`Status`].
//!
//! - **Closed node set**: [`Node`] is an enum over composites, decorators and
//!   domain leaves, so trees never need trait objects or back-references.
//! - **Explicit blackboard**: every node receives `&mut C`; nodes keep no
//!   per-call state of their own.
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: Trait implemented by domain leaves
//! - [`Branch`]: Trait implemented by domain predicates that pick one child
//! - [`Status`]: Success, Failure or Running
//! - Composite nodes: [`Sequence`], [`BranchSelector`]
//! - Decorator nodes: [`Inverter`], [`Repeater`], [`AlwaysSucceed`]

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod node;
pub mod status;

// Re-export core types for ergonomic API
pub use behavior::{Behavior, Branch};
pub use composite::{BranchSelector, Sequence};
pub use decorator::{AlwaysSucceed, Inverter, Repeater};
pub use node::Node;
pub use status::Status;
