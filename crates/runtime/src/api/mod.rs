//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the orchestrator can stay focused on phase transitions.

pub mod errors;

pub use errors::{Result, RuntimeError};
