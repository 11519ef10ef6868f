//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations.

use std::env;
use std::time::Duration;

/// Frontend-specific configuration.
///
/// This contains UI-related settings like narration pacing and message history.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub pacing: PacingConfig,
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(pacing: PacingConfig, messages: MessageConfig) -> Self {
        Self { pacing, messages }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLI_PACING_PERCENT` - Scale of narration pauses, 0 disables them (default: 100)
    /// - `CLI_MESSAGE_CAPACITY` - Narration lines kept for the combat screen (default: 4)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(percent) = read_env::<u32>("CLI_PACING_PERCENT") {
            config.pacing = PacingConfig::from_percent(percent);
        }

        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        config
    }
}

/// How long narration lingers on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PacingConfig {
    /// Percentage applied to every base delay.
    pub percent: u32,
}

impl PacingConfig {
    /// Pause after each dot of a loading animation.
    pub const LOADING_DOT: Duration = Duration::from_millis(200);
    /// Pause after each dot of "Preparing for battle".
    pub const PREPARING_DOT: Duration = Duration::from_millis(100);
    pub const SHORT: Duration = Duration::from_millis(200);
    pub const OUTCOME: Duration = Duration::from_millis(1000);
    pub const TURN: Duration = Duration::from_millis(2000);

    pub const fn from_percent(percent: u32) -> Self {
        Self { percent }
    }

    /// No pauses at all.
    pub const fn instant() -> Self {
        Self { percent: 0 }
    }

    /// Scale a base delay by the configured percentage.
    pub fn scale(&self, base: Duration) -> Duration {
        base * self.percent / 100
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self::from_percent(100)
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 4 }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Parse a boolean environment variable leniently.
pub fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pacing_scales_base_delays() {
        assert_eq!(
            PacingConfig::default().scale(PacingConfig::TURN),
            Duration::from_millis(2000)
        );
        assert_eq!(
            PacingConfig::from_percent(50).scale(PacingConfig::TURN),
            Duration::from_millis(1000)
        );
        assert_eq!(
            PacingConfig::instant().scale(PacingConfig::OUTCOME),
            Duration::ZERO
        );
    }

    #[test]
    fn booleans_accept_common_spellings() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
