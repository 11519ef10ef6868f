//! CLI-specific configuration for the terminal UI.
use client_frontend_core::read_env_bool;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend configuration.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Open the debug menu instead of the main menu.
    pub debug_menu: bool,
    /// Clear the terminal between screens.
    pub clear_screen: bool,
    /// Colorize warnings.
    pub color: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            debug_menu: false,
            clear_screen: true,
            color: true,
        }
    }
}

impl CliConfig {
    /// Plain output: no clearing, no colors. Used for scripted sessions.
    pub const fn plain() -> Self {
        Self {
            debug_menu: false,
            clear_screen: false,
            color: false,
        }
    }

    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_DEBUG_MENU` - Start in the debug menu (default: false)
    /// - `CLI_CLEAR_SCREEN` - Clear the terminal between screens (default: true)
    /// - `CLI_COLOR` - Colorize warnings (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(debug) = read_env_bool("CLI_DEBUG_MENU") {
            config.debug_menu = debug;
        }
        if let Some(clear) = read_env_bool("CLI_CLEAR_SCREEN") {
            config.clear_screen = clear;
        }
        if let Some(color) = read_env_bool("CLI_COLOR") {
            config.color = color;
        }

        config
    }
}
