//! Errors raised while building a simulation.
//!
//! Once a [`crate::Simulation`] exists every tick succeeds; rejected player
//! actions are no-ops, not errors.

use dungeon_core::{ConfigError, ErrorContext, ErrorSeverity, GameError, GoalError};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum SetupError {
    #[error("scenario places more than one player")]
    DuplicatePlayer { context: ErrorContext },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid goal: {0}")]
    Goal(#[from] GoalError),
}

impl GameError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DuplicatePlayer { .. } => ErrorSeverity::Validation,
            Self::Config(err) => err.severity(),
            Self::Goal(err) => err.severity(),
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::DuplicatePlayer { context } => Some(context),
            _ => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicatePlayer { .. } => "SETUP_DUPLICATE_PLAYER",
            Self::Config(err) => err.error_code(),
            Self::Goal(err) => err.error_code(),
        }
    }
}
