//! Top-level client pairing the game runtime with a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (Game rules, encounter state, RNG stream)
//!   └─→ Frontend (UI layer - CLI today)
//! ```
//!
//! The client owns both layers and lends the runtime to the frontend for the
//! whole session; the game is single threaded and turn based.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;

/// Top-level client container.
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend until the player quits, then hand back the runtime.
    ///
    /// # Errors
    ///
    /// Returns the frontend's fatal error, if any.
    pub fn run(mut self) -> Result<runtime::Runtime> {
        tracing::info!(phase = %self.runtime.phase(), "Client starting frontend");
        self.frontend.run(&mut self.runtime)?;
        tracing::info!(
            encounters = self.runtime.encounters(),
            level = self.runtime.player().level(),
            "Frontend finished"
        );
        Ok(self.runtime)
    }
}
