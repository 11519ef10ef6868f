//! Encounter state machine and menu selections.
//!
//! A [`CombatSession`] owns the live health of both combatants for one
//! encounter and advances only through [`CombatSession::select_command`] and
//! [`CombatSession::select_move`]. What happens between encounters (rewards,
//! level-ups, drawing the next enemy) is driven by the caller through
//! [`crate::progression`].

mod command;
mod session;

pub use command::{MainMenuChoice, PlayerCommand, parse_selection};
pub use session::{
    CombatSession, CommandOutcome, EncounterOutcome, EnemyAttack, SessionPhase, TurnOwner,
    TurnReport,
};
