//! Experience rewards and level-up stat allocation.
//!
//! Progression happens between encounters. A reward may cross the
//! experience threshold, which raises the level immediately; the stat
//! choice that follows is a separate step so the caller can prompt for it.

use strum::IntoEnumIterator;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::state::{Entity, Experience, Player};
use crate::stats::StatKind;

/// Level transition produced by a level-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUp {
    pub from: u32,
    pub to: u32,
}

/// Outcome of granting experience for one encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardReport {
    pub xp_gained: u32,
    /// Experience after the award (and any carry-over).
    pub experience: Experience,
    pub level_up: Option<LevelUp>,
}

/// One line of the level-up menu.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatOption {
    pub stat: StatKind,
    pub menu_index: u32,
    pub current: f64,
    pub growth: f64,
}

/// A stat raised by a level-up choice.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatUpgrade {
    pub stat: StatKind,
    pub value: f64,
}

/// Experience granted for an enemy of `enemy_level`.
pub fn experience_for(enemy_level: u32, config: &GameConfig) -> u32 {
    enemy_level.saturating_mul(config.xp_per_enemy_level)
}

/// Grant experience for an encounter against an enemy of `enemy_level`.
///
/// Crossing the threshold carries the surplus over, raises the threshold by
/// `config.xp_threshold_step` and advances the level by exactly one.
pub fn award_experience(player: &mut Player, enemy_level: u32, config: &GameConfig) -> RewardReport {
    let xp_gained = experience_for(enemy_level, config);
    let leveled = player.experience.gain(xp_gained, config.xp_threshold_step);

    RewardReport {
        xp_gained,
        experience: player.experience,
        level_up: leveled.then(|| begin_level_up(player)),
    }
}

/// Advance the player one level without touching experience.
///
/// The stat choice is applied afterwards with [`apply_stat_choice`].
pub fn begin_level_up(player: &mut Player) -> LevelUp {
    let from = player.level();
    let to = player.entity.advance_level();
    LevelUp { from, to }
}

/// The five level-up options in menu order.
pub fn level_up_options(entity: &Entity) -> Vec<StatOption> {
    StatKind::iter()
        .map(|stat| StatOption {
            stat,
            menu_index: stat.menu_index(),
            current: entity.stat_value(stat),
            growth: entity.growth.get(stat),
        })
        .collect()
}

/// Apply a level-up menu selection.
///
/// An invalid selection leaves every stat untouched; the level gained in
/// [`begin_level_up`] is kept either way.
pub fn apply_stat_choice(player: &mut Player, choice: i64) -> Result<StatUpgrade, GameError> {
    let stat = player.entity.level_up_selection(choice)?;
    Ok(StatUpgrade {
        stat,
        value: player.entity.stat_value(stat),
    })
}
