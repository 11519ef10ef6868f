//! Runtime wrappers around static game content oracles.
//!
//! The data is immutable for the lifetime of the process; everything that
//! changes during play lives in [`crate::Runtime`].
mod roster;

use std::sync::Arc;

use game_core::GameConfig;

pub use roster::RosterOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) roster: Arc<RosterOracleImpl>,
    pub(crate) config: GameConfig,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(roster: Arc<RosterOracleImpl>, config: GameConfig) -> Self {
        Self { roster, config }
    }

    pub fn roster(&self) -> &RosterOracleImpl {
        &self.roster
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
