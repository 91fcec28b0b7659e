//! Combat resolution system.
//!
//! Pure functions shared by every decision maker: cover classification, hit
//! chance, damage rolls, and target selection. Randomness is always injected
//! by the caller, so identical RNG streams replay identical fights.
//!
//! # Core Functions
//!
//! - `classify_cover`: protection a target enjoys against one observer
//! - `compute_hit_chance`: base chance minus cover and distance penalties
//! - `resolve_shot`: hit roll, damage roll, and visual trace for one shot
//! - `select_lowest_cover_target`: most exposed enemy, nearest first

pub mod cover;
pub mod damage;
pub mod hit;
pub mod result;
pub mod targeting;

pub use cover::{best_cover_near, classify_cover};
pub use damage::{apply_damage, roll_damage};
pub use hit::{check_hit, compute_hit_chance, distance_penalty};
pub use result::{ShotOutcome, ShotTrace, resolve_shot};
pub use targeting::{closest_unit, select_lowest_cover_target};
