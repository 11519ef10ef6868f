//! Combatant state representation.
//!
//! These types describe who is fighting: the shared [`Entity`] schema, the
//! [`Player`] with its move catalog and experience, and the [`EnemyTemplate`]
//! roster entries enemies are spawned from. Encounter-local values (live
//! health, turn owner) live in [`crate::engine::CombatSession`].
pub mod types;

pub use types::{EnemyTemplate, Entity, Experience, HealthMeter, Player};
