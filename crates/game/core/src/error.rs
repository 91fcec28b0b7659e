//! Error types raised while preparing a match.
//!
//! Combat itself never fails: missing targets, consumed actions, and empty
//! rosters are ordinary outcomes reported through `Option`/`bool`. The errors
//! here cover the two places where bad input can enter the system, namely
//! tunables that fall outside their ranges and rosters that cannot be fielded.

use crate::state::{Team, UnitId};

/// A tunable failed validation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("half cover penalty ({half}) exceeds full cover penalty ({full})")]
    PenaltyOrder { half: u32, full: u32 },
}

impl ConfigError {
    /// Checks `value` against an inclusive range. NaN never passes.
    pub fn check_range(
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    ) -> Result<(), ConfigError> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(ConfigError::OutOfRange {
                field,
                value,
                min,
                max,
            })
        }
    }
}

/// The initial battlefield could not be assembled.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("{0} roster has no units")]
    EmptyRoster(Team),

    #[error("unit id {0} appears more than once")]
    DuplicateUnit(UnitId),

    #[error("unit {id} listed under {expected} but belongs to {actual}")]
    TeamMismatch {
        id: UnitId,
        expected: Team,
        actual: Team,
    },

    #[error("unit {0} is placed at a non-finite position")]
    NonFinitePosition(UnitId),

    #[error("cover #{0} is placed at a non-finite position")]
    NonFiniteCover(usize),
}
