//! Slot-keyed move collections.

use std::fmt;

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::error::GameError;

use super::{Move, MoveEffect};

/// Stable 1-based key of a move inside a catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveSlot(pub u8);

impl fmt::Display for MoveSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Selection made in the attack sub-menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveChoice {
    Move(MoveSlot),
    /// Leave the attack menu without acting.
    Back,
}

/// Immutable, ordered set of moves keyed by [`MoveSlot`].
///
/// Slots are assigned `1..=N` in insertion order, which is also display order.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct MoveCatalog {
    entries: ArrayVec<(MoveSlot, Move), { GameConfig::MAX_MOVES }>,
}

impl MoveCatalog {
    /// Build a catalog from moves in display order.
    ///
    /// Moves beyond [`GameConfig::MAX_MOVES`] are ignored.
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        let entries = moves
            .into_iter()
            .take(GameConfig::MAX_MOVES)
            .enumerate()
            .map(|(index, mv)| (MoveSlot(index as u8 + 1), mv))
            .collect();
        Self { entries }
    }

    /// The Knight's starting moves.
    pub fn knight() -> Self {
        Self::new([
            Move::physical("Sword Slash")
                .with_damage(10.0, 0.0)
                .with_armor_penetration(2.0, 0.0)
                .with_critical(30.0, 1.75),
            Move::physical("Guard")
                .with_damage(0.0, 0.0)
                .with_critical(0.0, 15.0)
                .with_effect(MoveEffect::Guard { shield: 2.0 }),
            Move::physical("Quick Strike")
                .with_damage(1.0, 0.0)
                .with_armor_penetration(0.0, 10.0)
                .with_critical(20.0, 3.0),
            Move::physical("Blood Cry")
                .with_damage(3.0, 0.0)
                .with_critical(10.0, 10.0)
                .with_effect(MoveEffect::Lifesteal { healing: 1.5 }),
        ])
    }

    /// Look up the move in `slot`.
    pub fn get(&self, slot: MoveSlot) -> Result<&Move, GameError> {
        self.entries
            .iter()
            .find(|(key, _)| *key == slot)
            .map(|(_, mv)| mv)
            .ok_or(GameError::UnknownMoveSlot {
                slot: i64::from(slot.0),
            })
    }

    /// Resolve an attack-menu number: `1..=N` picks a move, `N + 1` is Back.
    pub fn choice(&self, selection: i64) -> Result<MoveChoice, GameError> {
        let len = self.entries.len() as i64;
        match selection {
            n if (1..=len).contains(&n) => Ok(MoveChoice::Move(MoveSlot(n as u8))),
            n if n == len + 1 => Ok(MoveChoice::Back),
            n => Err(GameError::UnknownMoveSlot { slot: n }),
        }
    }

    /// Menu number of the Back entry.
    pub fn back_index(&self) -> usize {
        self.entries.len() + 1
    }

    pub fn iter(&self) -> impl Iterator<Item = (MoveSlot, &Move)> {
        self.entries.iter().map(|(slot, mv)| (*slot, mv))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
