//! Runtime orchestration for the hero's journey.
//!
//! This crate wires game content, the RNG stream and the game-core rules into
//! a single synchronous [`Runtime`] that frontends drive one selection at a
//! time.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, builder and configuration
//! - [`api`] exposes the error types downstream clients interact with
//! - [`events`] describes what each transition produced
//! - [`oracle`] provides read-only content adapters
pub mod api;
pub mod events;
pub mod oracle;
pub mod runtime;

pub use api::{Result, RuntimeError};
pub use events::GameEvent;
pub use oracle::{OracleManager, RosterOracleImpl};
pub use runtime::{GamePhase, Runtime, RuntimeBuilder, RuntimeConfig};
