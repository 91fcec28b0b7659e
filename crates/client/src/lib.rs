//! Headless client for running skirmish matches.
//!
//! # Architecture
//!
//! ```text
//! main (composition root)
//!   ├─→ ClientConfig (environment)
//!   ├─→ skirmish-content loaders (tunables, scenario)
//!   └─→ MatchSession
//!         ├─→ TurnCoordinator (skirmish-runtime)
//!         └─→ Autopilot (orders for a manual side)
//! ```
//!
//! The binary never renders anything. Progress is reported through `tracing`
//! and, optionally, a JSON lines event log.

mod autopilot;
mod config;
pub mod logging;
mod session;

pub use autopilot::Autopilot;
pub use config::ClientConfig;
pub use session::{MatchSession, MatchSummary};
