//! Skirmish client binary.
//!
//! Main entry point for headless matches. Loads tunables and a scenario,
//! plays the match to the end and prints a summary.
//!
//! # Examples
//!
//! ```bash
//! # Behaviour tree against state machine on the built-in scenario
//! cargo run -p skirmish-client
//!
//! # Scripted player against the behaviour tree on a bundled scenario
//! SKIRMISH_MODE=versus_behaviour_tree \
//! SKIRMISH_SCENARIO=crates/game/content/data/crossing.ron \
//!     cargo run -p skirmish-client
//! ```

use anyhow::Result;
use skirmish_client::{ClientConfig, MatchSession, logging};
use skirmish_content::{ConfigLoader, ScenarioLoader, ScenarioSpec};
use skirmish_core::MatchConfig;
use skirmish_runtime::TurnCoordinator;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let client_config = ClientConfig::from_env();

    // 2. Setup logging
    let _guard = logging::setup_logging(client_config.log_dir.as_deref())?;

    tracing::info!("Starting skirmish client");
    tracing::info!("Mode: {}", client_config.mode);

    // 3. Load match data
    let match_config = match &client_config.config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => MatchConfig::default(),
    };
    let battlefield = match &client_config.scenario_path {
        Some(path) => ScenarioLoader::load(path, &match_config.unit)?,
        None => ScenarioSpec::standoff().build(&match_config.unit)?,
    };

    // 4. Build and run
    let coordinator = TurnCoordinator::new(client_config.mode, match_config, battlefield)?;
    let mut session = MatchSession::new(coordinator);
    if let Some(path) = &client_config.event_log {
        session = session.with_event_log(path)?;
    }

    let summary = session.run(client_config.frame_secs, client_config.max_frames)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    tracing::info!("Client shutdown complete");
    Ok(())
}
