//! Terminal UI frontend for A Hero's Journey.
//!
//! Reads numbered selections line by line, drives the [`runtime::Runtime`]
//! with them, and narrates the resulting events with pauses between beats.
//!
//! # Architecture
//!
//! - `input` turns lines into selections
//! - [`presentation`] owns every byte written to the terminal
//! - `app` runs the menus and the encounter loop

mod app;
mod config;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::CliConfig;
pub use input::{LineInput, Selection};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::{Frontend, FrontendConfig};
