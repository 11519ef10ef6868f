//! Menu selections understood by the engine.

use crate::error::GameError;

/// Parse a raw line of player input into an integer selection.
///
/// Surrounding whitespace is ignored. Anything that is not an integer is
/// reported as [`GameError::MalformedInput`].
pub fn parse_selection(input: &str) -> Result<i64, GameError> {
    let trimmed = input.trim();
    trimmed.parse::<i64>().map_err(|_| GameError::MalformedInput {
        input: trimmed.to_owned(),
    })
}

/// Top-level menu selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MainMenuChoice {
    Start,
    Exit,
}

impl MainMenuChoice {
    pub fn from_menu(choice: i64) -> Result<Self, GameError> {
        match choice {
            1 => Ok(Self::Start),
            2 => Ok(Self::Exit),
            _ => Err(GameError::InvalidMenuChoice { choice }),
        }
    }
}

/// In-combat command selected on the player's turn.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerCommand {
    Attack,
    Magic,
    Inventory,
    Retreat,
}

impl PlayerCommand {
    pub fn from_menu(choice: i64) -> Result<Self, GameError> {
        match choice {
            1 => Ok(Self::Attack),
            2 => Ok(Self::Magic),
            3 => Ok(Self::Inventory),
            4 => Ok(Self::Retreat),
            _ => Err(GameError::InvalidMove { choice }),
        }
    }

    pub const fn menu_index(self) -> i64 {
        match self {
            Self::Attack => 1,
            Self::Magic => 2,
            Self::Inventory => 3,
            Self::Retreat => 4,
        }
    }
}
