//! Client configuration read from the process environment.

use std::env;
use std::path::PathBuf;

use skirmish_runtime::GameMode;

/// Everything the binary needs to set up and run one match.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// TOML tunables. Built-in defaults when unset.
    pub config_path: Option<PathBuf>,
    /// RON scenario. The built-in standoff when unset.
    pub scenario_path: Option<PathBuf>,
    pub mode: GameMode,
    /// Hard stop for matches that never resolve.
    pub max_frames: u64,
    /// Simulated seconds per frame.
    pub frame_secs: f32,
    /// Where to write match events as JSON lines.
    pub event_log: Option<PathBuf>,
    /// Directory for a log file next to stderr output.
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            scenario_path: None,
            mode: GameMode::AiVersusAi,
            max_frames: 100_000,
            frame_secs: 0.05,
            event_log: None,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SKIRMISH_CONFIG` - Path to the tunables TOML
    /// - `SKIRMISH_SCENARIO` - Path to the scenario RON
    /// - `SKIRMISH_MODE` - `versus_state_machine`, `versus_behaviour_tree` or
    ///   `ai_versus_ai` (default: ai_versus_ai)
    /// - `SKIRMISH_MAX_FRAMES` - Frame limit (default: 100000)
    /// - `SKIRMISH_FRAME_SECS` - Seconds per frame (default: 0.05)
    /// - `SKIRMISH_EVENT_LOG` - JSON lines event log path (optional)
    /// - `SKIRMISH_LOG_DIR` - Log file directory (optional)
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.config_path = env::var("SKIRMISH_CONFIG").ok().map(PathBuf::from);
        config.scenario_path = env::var("SKIRMISH_SCENARIO").ok().map(PathBuf::from);

        if let Some(mode) = read_env::<GameMode>("SKIRMISH_MODE") {
            config.mode = mode;
        }
        if let Some(frames) = read_env::<u64>("SKIRMISH_MAX_FRAMES") {
            config.max_frames = frames.max(1);
        }
        if let Some(secs) =
            read_env::<f32>("SKIRMISH_FRAME_SECS").filter(|secs| secs.is_finite() && *secs > 0.0)
        {
            config.frame_secs = secs;
        }

        config.event_log = env::var("SKIRMISH_EVENT_LOG").ok().map(PathBuf::from);
        config.log_dir = env::var("SKIRMISH_LOG_DIR").ok().map(PathBuf::from);

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
