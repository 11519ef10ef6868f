//! Cross-frontend primitives for presenting the game.
//!
//! Houses narration, message logging, and view-model types that the CLI and
//! any future frontend can reuse.
pub mod config;
pub mod event;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig, PacingConfig, read_env_bool};
pub use event::{describe_error, describe_game_error, narrate};
pub use frontend::Frontend;
pub use message::{Beat, MessageEntry, MessageLevel, MessageLog};
pub use view_model::{CombatView, CombatantView, LevelUpView, MoveMenuView, StatSheet};
