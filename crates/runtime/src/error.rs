//! Unified error type surfaced by a game session.
//!
//! Rule violations from the engine pass through untouched so the shell can
//! print them; the remaining variants cover commands the session itself
//! refuses.
use droll_core::{DrollError, ErrorSeverity, GameError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Rule(#[from] DrollError),

    #[error("Unknown hero class '{name}'.")]
    UnknownHero { name: String },

    #[error("'{command}' accepts no arguments.")]
    NoArgumentsAccepted { command: &'static str },

    #[error("No command given.")]
    EmptyCommand,

    #[error("The game is over.")]
    GameOver,
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Rule(err) => err.severity(),
            Self::UnknownHero { .. } | Self::NoArgumentsAccepted { .. } | Self::EmptyCommand => {
                ErrorSeverity::Validation
            }
            Self::GameOver => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Rule(err) => err.error_code(),
            Self::UnknownHero { .. } => "SESSION_UNKNOWN_HERO",
            Self::NoArgumentsAccepted { .. } => "SESSION_NO_ARGUMENTS_ACCEPTED",
            Self::EmptyCommand => "SESSION_EMPTY_COMMAND",
            Self::GameOver => "SESSION_GAME_OVER",
        }
    }
}
