//! A Hero's Journey client binary.
//!
//! This binary is the composition root that assembles:
//! 1. Runtime (game logic) via `Runtime::builder()`
//! 2. Frontend (UI) - the terminal CLI
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! # Fixed seed, no pauses
//! GAME_SEED=42 CLI_PACING_PERCENT=0 cargo run -p journey-client
//!
//! # Debug menu against the boss tier
//! CLI_DEBUG_MENU=true GAME_ENCOUNTER_TIER=boss cargo run -p journey-client
//! ```

use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli()?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use journey_client::Client;
    use runtime::{Runtime, RuntimeConfig};

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    let log_dir = std::env::var_os("GAME_LOG_DIR").map(Into::into);
    logging::setup_logging(&runtime_config.session_id, log_dir)?;

    tracing::info!("Starting A Hero's Journey");
    tracing::info!("Session ID: {:?}", runtime_config.session_id);
    tracing::info!(tier = %runtime_config.encounter_tier, "Encounter tier");

    // 3. Build Runtime (independent layer)
    tracing::debug!("Building runtime...");
    let runtime = Runtime::builder().config(runtime_config).build()?;

    tracing::info!("Runtime built successfully");

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::stdio(frontend_config, cli_config);

    // 5. Build and run
    let client = Client::builder().runtime(runtime).frontend(frontend).build()?;

    tracing::info!("Client assembled, starting...");
    let runtime = client.run()?;

    tracing::info!(
        encounters = runtime.encounters(),
        "Client shutdown complete"
    );
    Ok(())
}
