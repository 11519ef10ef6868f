//! Events emitted by runtime transitions.
//!
//! Every runtime call returns the events it produced, in order. Frontends
//! narrate them; tests assert on them.

use game_core::{EncounterOutcome, Experience, GameError, PlayerCommand, StatKind};

/// High-level occurrence inside a play session.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A new enemy was drawn and the encounter began.
    EncounterStarted {
        player: String,
        enemy: String,
        level: u32,
    },

    /// The attack sub-menu was opened.
    MoveSelectionOpened,

    /// Back was chosen in the attack sub-menu.
    MoveSelectionCancelled,

    /// A command that is accepted but does nothing (Magic, Inventory, Retreat).
    CommandIgnored { command: PlayerCommand },

    /// The player used a move.
    MoveUsed { user: String, move_name: String },

    /// A combatant launched its basic attack.
    AttackAnnounced { attacker: String },

    /// Damage was applied to a combatant.
    DamageDealt {
        /// Move name for player attacks, enemy name for basic attacks.
        source: String,
        /// `None` for enemy attacks, which do not name their target.
        target: Option<String>,
        damage: f64,
        critical: bool,
        remaining_health: f64,
    },

    /// The encounter ended.
    EncounterEnded {
        outcome: EncounterOutcome,
        defeated: String,
    },

    /// Experience was granted after an encounter.
    ExperienceGained {
        name: String,
        amount: u32,
        experience: Experience,
    },

    /// The level increased; a stat choice is pending.
    LevelUp { name: String, from: u32, to: u32 },

    /// A stat was raised by a level-up choice.
    StatUpgraded { stat: StatKind, value: f64 },

    /// A level-up choice was rejected; stats are unchanged.
    StatRejected { error: GameError },
}
