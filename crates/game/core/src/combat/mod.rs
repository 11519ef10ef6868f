//! Combat resolution.
//!
//! Pure functions for resolving a single exchange of blows. The only source of
//! nondeterminism is the critical roll, drawn through [`RngOracle`].
//!
//! # Core Functions
//!
//! - `compute_damage`: move damage against armor and magic resist
//! - `is_critical`: one percent roll against the move's critical chance
//! - `apply_damage`: health reduction (clamped to 0)
//! - `resolve_attack`: critical check + damage + application
//!
//! [`RngOracle`]: crate::env::RngOracle

pub mod critical;
pub mod damage;
pub mod result;

pub use critical::{check_critical, is_critical};
pub use damage::{apply_damage, compute_damage};
pub use result::{AttackOutcome, AttackResult, resolve_attack, resolve_basic_attack};
