//! Stat system for combatants.
//!
//! A combatant carries four offensive/defensive stats next to its health pool,
//! plus a fixed growth increment for each of the five upgradeable stats.
//!
//! ```text
//! [ StatKind ]     menu-addressable identifier (1..=5)
//!      ↓
//! [ GrowthRates ]  per-level increment for that stat
//!      ↓
//! [ CombatStats ]  base values read by the damage calculator
//! ```

pub mod core;
pub mod growth;
pub mod kind;

pub use self::core::CombatStats;
pub use growth::GrowthRates;
pub use kind::StatKind;
