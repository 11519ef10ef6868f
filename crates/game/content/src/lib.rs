//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Enemy roster (five difficulty tiers plus bosses, data-driven via RON)
//! - Game configuration (experience tunables, data-driven via TOML)
//!
//! The built-in roster ships inside the binary; a file with the same schema
//! can replace it at startup.
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, RosterLoader};
