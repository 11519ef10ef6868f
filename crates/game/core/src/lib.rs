//! Deterministic combat and progression rules for the hero's journey.
//!
//! `game-core` defines the canonical rules (entities, moves, damage, the
//! encounter state machine, experience) and exposes pure APIs that the
//! runtime drives. It performs no I/O: randomness arrives through
//! [`env::RngOracle`] and enemy data through [`env::RosterOracle`].
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod moves;
pub mod progression;
pub mod state;
pub mod stats;

pub use combat::{AttackOutcome, AttackResult, compute_damage, is_critical};
pub use config::GameConfig;
pub use engine::{
    CombatSession, CommandOutcome, EncounterOutcome, EnemyAttack, MainMenuChoice, PlayerCommand,
    SessionPhase, TurnOwner, TurnReport, parse_selection,
};
pub use env::{DifficultyTier, EnemyRoster, PcgRng, RngOracle, RosterOracle, draw_enemy};
pub use error::{ErrorSeverity, GameError};
pub use moves::{Move, MoveCatalog, MoveChoice, MoveEffect, MoveKind, MoveSlot, Penetration};
pub use progression::{LevelUp, RewardReport, StatOption, StatUpgrade};
pub use state::{EnemyTemplate, Entity, Experience, HealthMeter, Player};
pub use stats::{CombatStats, GrowthRates, StatKind};
