//! Identifiers for the upgradeable stats.

use crate::error::GameError;

/// One of the five stats a level-up can raise.
///
/// The declaration order is the level-up menu order (`1..=5`), and the
/// `Display` form is the label shown after an upgrade.
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
pub enum StatKind {
    #[strum(to_string = "HP")]
    Health,
    #[strum(to_string = "Physical Damage")]
    PhysicalDamage,
    #[strum(to_string = "Magic Damage")]
    MagicDamage,
    #[strum(to_string = "Armor")]
    Armor,
    #[strum(to_string = "Magic Resist")]
    MagicResist,
}

impl StatKind {
    /// Resolve a level-up menu selection.
    pub fn from_menu(choice: i64) -> Result<Self, GameError> {
        match choice {
            1 => Ok(Self::Health),
            2 => Ok(Self::PhysicalDamage),
            3 => Ok(Self::MagicDamage),
            4 => Ok(Self::Armor),
            5 => Ok(Self::MagicResist),
            _ => Err(GameError::InvalidStatSelection { choice }),
        }
    }

    /// Menu number of this stat in the level-up screen.
    pub const fn menu_index(self) -> u32 {
        match self {
            Self::Health => 1,
            Self::PhysicalDamage => 2,
            Self::MagicDamage => 3,
            Self::Armor => 4,
            Self::MagicResist => 5,
        }
    }
}
