//! Behaviour tree controller.
//!
//! The doctrine is expressed as a small tree of domain leaves under predicate
//! branches:
//!
//! ```text
//! Distance
//! ├── StayCover
//! │   ├── Sequence[TargetPosition(stay), FindCoveredPosition, Move]
//! │   └── Sequence[FindClosestEnemy, Shoot]
//! └── HealthPool
//!     ├── Sequence[TargetPosition(away), AlwaysSucceed(FindCoveredPosition), Move]
//!     └── Sequence[TargetPosition(toward), AlwaysSucceed(FindCoveredPosition), Move]
//! ```
//!
//! The whole tree is ticked once per frame for the active unit. Scratch state
//! that has to survive between frames lives in [`Memory`].

mod blackboard;
mod branches;
mod nodes;
mod tree;

pub use blackboard::{Blackboard, Memory};
pub use branches::DoctrineBranch;
pub use nodes::DoctrineLeaf;
pub use tree::{BehaviourTree, DoctrineTree, doctrine_tree};
