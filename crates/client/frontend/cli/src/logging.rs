//! Logging setup for the terminal client.
//!
//! All output goes to a per-session log file; the terminal belongs to the game.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global subscriber writing to `<log_dir>/<session>/client.log`.
///
/// `log_dir` overrides the platform cache directory (`GAME_LOG_DIR`).
pub fn setup_logging(session_id: &Option<String>, log_dir: Option<PathBuf>) -> Result<()> {
    let log_dir = log_dir.unwrap_or_else(default_log_directory);

    let session_id = session_id.clone().unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{timestamp}")
    });

    let session_log_dir = log_dir.join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    // File only: anything on stdout would interleave with the game.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    // Keep the writer alive for the rest of the process.
    std::mem::forget(guard);

    tracing::info!(session = %session_id, "Logging initialized");
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(())
}

/// Platform cache directory, falling back to the system temp dir.
fn default_log_directory() -> PathBuf {
    ProjectDirs::from("", "", "heros-journey")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("heros-journey").join("logs"))
}
