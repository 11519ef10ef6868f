//! Read-only data and randomness the rules depend on.
//!
//! The enemy roster is exposed through [`RosterOracle`] and random rolls
//! through [`RngOracle`], so the engine never touches process globals.
mod rng;
mod roster;

pub use rng::{PcgRng, RngOracle};
pub use roster::{DifficultyTier, EnemyRoster, RosterOracle, draw_enemy};
