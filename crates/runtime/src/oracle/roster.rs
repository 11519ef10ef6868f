//! Roster oracle implementation for runtime.

use std::path::Path;

use game_content::{LoadResult, RosterLoader};
use game_core::{DifficultyTier, EnemyRoster, EnemyTemplate, RosterOracle};

/// Runtime implementation of RosterOracle that wraps a loaded EnemyRoster
pub struct RosterOracleImpl {
    roster: EnemyRoster,
}

impl RosterOracleImpl {
    pub fn new(roster: EnemyRoster) -> Self {
        Self { roster }
    }

    /// Load from `path`, or the built-in roster when no path is given.
    pub fn load(path: Option<&Path>) -> LoadResult<Self> {
        let roster = match path {
            Some(path) => RosterLoader::load(path)?,
            None => RosterLoader::embedded()?,
        };
        Ok(Self::new(roster))
    }

    pub fn roster(&self) -> &EnemyRoster {
        &self.roster
    }
}

impl RosterOracle for RosterOracleImpl {
    fn tier(&self, tier: DifficultyTier) -> &[EnemyTemplate] {
        self.roster.tier(tier)
    }
}
