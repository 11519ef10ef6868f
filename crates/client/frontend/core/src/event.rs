//! Narration of runtime events and errors.
//!
//! Turns [`GameEvent`]s into the lines the player reads, each tagged with how
//! long it should stay up. Rendering and waiting are left to the frontend.

use game_core::{EncounterOutcome, GameError};
use runtime::{GameEvent, RuntimeError};

use crate::message::{Beat, MessageEntry};

/// Lines describing one event, in display order. Silent events yield none.
pub fn narrate(event: &GameEvent) -> Vec<MessageEntry> {
    match event {
        GameEvent::EncounterStarted { player, enemy, .. } => vec![MessageEntry::info(
            format!("{player} has encountered a {enemy}!"),
            Beat::Short,
        )],
        GameEvent::MoveSelectionOpened
        | GameEvent::MoveSelectionCancelled
        | GameEvent::CommandIgnored { .. } => Vec::new(),
        GameEvent::MoveUsed { user, move_name } => {
            vec![MessageEntry::info(format!("{user} used {move_name}!"), Beat::Turn)]
        }
        GameEvent::AttackAnnounced { attacker } => {
            vec![MessageEntry::info(format!("{attacker} attacks!"), Beat::Turn)]
        }
        GameEvent::DamageDealt {
            source,
            target,
            damage,
            critical,
            ..
        } => {
            let text = match (target, critical) {
                (Some(target), true) => {
                    format!("{source} dealt {damage:.1} critical damage to {target}!!!")
                }
                (Some(target), false) => format!("{source} dealt {damage:.1} damage to {target}"),
                (None, _) => format!("{source} dealt {damage:.1} damage"),
            };
            vec![MessageEntry::info(text, Beat::Turn)]
        }
        GameEvent::EncounterEnded { outcome, defeated } => match outcome {
            EncounterOutcome::EnemyDefeated => {
                vec![MessageEntry::info(format!("{defeated} defeated!"), Beat::Outcome)]
            }
            EncounterOutcome::PlayerDefeated => vec![MessageEntry::info(
                format!("{defeated} has been defeated!"),
                Beat::Turn,
            )],
        },
        GameEvent::ExperienceGained { name, amount, .. } => {
            vec![MessageEntry::info(format!("{name} gained {amount} XP!"), Beat::Turn)]
        }
        GameEvent::LevelUp { name, from, to } => vec![
            MessageEntry::info("Level Up!", Beat::None),
            MessageEntry::info(format!("[ {name} ]"), Beat::None),
            MessageEntry::info(format!("Lvl. {from} >> Lvl. {to}"), Beat::None),
        ],
        GameEvent::StatUpgraded { stat, .. } => {
            vec![MessageEntry::info(format!("{stat} upgraded!"), Beat::Short)]
        }
        GameEvent::StatRejected { error } => {
            vec![MessageEntry::warning(describe_game_error(error), Beat::Short)]
        }
    }
}

/// Player-facing text for a rejected selection.
pub fn describe_game_error(error: &GameError) -> String {
    match error {
        GameError::InvalidMenuChoice { .. } => "Invalid Choice.".to_owned(),
        GameError::InvalidMove { .. } => "Invalid Move.".to_owned(),
        GameError::UnknownMoveSlot { .. } => "Invalid Attack.".to_owned(),
        GameError::InvalidStatSelection { .. } => "Invalid Stat.".to_owned(),
        GameError::MalformedInput { .. } => "Please enter a number.".to_owned(),
    }
}

/// Player-facing text for any runtime error.
pub fn describe_error(error: &RuntimeError) -> String {
    match error.as_game_error() {
        Some(game_error) => describe_game_error(game_error),
        None => error.to_string(),
    }
}
