//! Unified error type surfaced by the runtime API.
//!
//! Wraps configuration and setup failures so clients can bubble them up with
//! consistent context. Nothing inside a running match produces an error;
//! degenerate situations are logged and absorbed.
use skirmish_core::{ConfigError, SetupError, Team};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid match configuration")]
    Config(#[from] ConfigError),

    #[error("invalid battlefield")]
    Setup(#[from] SetupError),

    #[error("the match is already over")]
    MatchOver,

    #[error("{0} is not controlled manually")]
    NotManual(Team),

    #[error("it is not {0}'s turn")]
    NotOnTurn(Team),
}
