//! Unified error types surfaced by the runtime API.
//!
//! Wraps rule violations from game-core together with orchestration failures
//! (content loading, empty encounter pools, calls made in the wrong phase) so
//! clients can bubble them up with consistent context.
use thiserror::Error;

use game_core::{DifficultyTier, ErrorSeverity, GameError};

use crate::runtime::GamePhase;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("no enemies available in tier {tier}")]
    NoEnemies { tier: DifficultyTier },

    #[error("{operation} is not allowed while {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: GamePhase,
    },

    #[error(transparent)]
    Content(#[from] anyhow::Error),
}

impl RuntimeError {
    /// Severity used by frontends to decide between re-prompting and exiting.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Game(error) => error.severity(),
            Self::NoEnemies { .. } | Self::InvalidPhase { .. } | Self::Content(_) => {
                ErrorSeverity::Internal
            }
        }
    }

    /// The underlying selection error, if this is one.
    pub fn as_game_error(&self) -> Option<&GameError> {
        match self {
            Self::Game(error) => Some(error),
            _ => None,
        }
    }
}
