//! Common error infrastructure for game-core.
//!
//! Every error the rules can raise comes from a player selection that does not
//! map to a legal transition. None of them are fatal: the caller re-prompts or
//! treats the selection as a no-op, and game state is left untouched.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - re-prompt or ignore the selection.
    Recoverable,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Reserved for callers that wrap game errors with orchestration failures.
    Internal,
}

impl ErrorSeverity {
    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Errors raised while interpreting player selections.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameError {
    #[error("invalid menu choice {choice}")]
    InvalidMenuChoice { choice: i64 },

    #[error("invalid move {choice}")]
    InvalidMove { choice: i64 },

    #[error("no move in slot {slot}")]
    UnknownMoveSlot { slot: i64 },

    #[error("invalid stat selection {choice}")]
    InvalidStatSelection { choice: i64 },

    #[error("malformed input {input:?}")]
    MalformedInput { input: String },
}

impl GameError {
    /// Returns the severity level of this error.
    ///
    /// Selection errors never corrupt state, so they are all recoverable.
    pub const fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidMenuChoice { .. } => "INVALID_MENU_CHOICE",
            Self::InvalidMove { .. } => "INVALID_MOVE",
            Self::UnknownMoveSlot { .. } => "UNKNOWN_MOVE_SLOT",
            Self::InvalidStatSelection { .. } => "INVALID_STAT_SELECTION",
            Self::MalformedInput { .. } => "MALFORMED_INPUT",
        }
    }
}
