//! Shared combatant schema for the player and enemies.

use crate::error::GameError;
use crate::stats::{CombatStats, GrowthRates, StatKind};

use super::common::HealthMeter;

/// A combatant: identity, level, health pool, combat stats and growth.
///
/// Outside of combat `health.current` equals `health.maximum`; the live
/// values used during an encounter belong to the combat session.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub name: String,
    pub level: u32,
    pub health: HealthMeter,
    pub stats: CombatStats,
    pub growth: GrowthRates,
}

impl Entity {
    /// Create an entity at full health with the standard growth rates.
    pub fn new(name: impl Into<String>, level: u32, max_health: f64, stats: CombatStats) -> Self {
        Self {
            name: name.into(),
            level: level.max(1),
            health: HealthMeter::full(max_health),
            stats,
            growth: GrowthRates::STANDARD,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn max_health(&self) -> f64 {
        self.health.maximum
    }

    pub fn physical_damage(&self) -> f64 {
        self.stats.physical_damage
    }

    pub fn magic_damage(&self) -> f64 {
        self.stats.magic_damage
    }

    pub fn armor(&self) -> f64 {
        self.stats.armor
    }

    pub fn magic_resist(&self) -> f64 {
        self.stats.magic_resist
    }

    /// Current base value of an upgradeable stat (health reports its maximum).
    pub fn stat_value(&self, stat: StatKind) -> f64 {
        match stat {
            StatKind::Health => self.health.maximum,
            StatKind::PhysicalDamage => self.stats.physical_damage,
            StatKind::MagicDamage => self.stats.magic_damage,
            StatKind::Armor => self.stats.armor,
            StatKind::MagicResist => self.stats.magic_resist,
        }
    }

    /// Damage of the fixed basic attack: the flat physical damage stat.
    pub fn basic_attack_damage(&self) -> f64 {
        self.stats.physical_damage
    }

    /// Raise `stat` by its growth increment and return it for display.
    pub fn level_up(&mut self, stat: StatKind) -> StatKind {
        let increment = self.growth.get(stat);
        match stat {
            StatKind::Health => self.health.raise_maximum(increment),
            StatKind::PhysicalDamage => self.stats.physical_damage += increment,
            StatKind::MagicDamage => self.stats.magic_damage += increment,
            StatKind::Armor => self.stats.armor += increment,
            StatKind::MagicResist => self.stats.magic_resist += increment,
        }
        stat
    }

    /// Apply a level-up menu selection (`1..=5`).
    ///
    /// An out-of-range selection leaves every stat untouched.
    pub fn level_up_selection(&mut self, choice: i64) -> Result<StatKind, GameError> {
        let stat = StatKind::from_menu(choice)?;
        Ok(self.level_up(stat))
    }

    /// Increment the level by one.
    pub fn advance_level(&mut self) -> u32 {
        self.level += 1;
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knight() -> Entity {
        Entity::new("Knight", 1, 10.0, CombatStats::new(2.0, 1.0, 2.0, 2.0))
    }

    #[test]
    fn level_up_applies_growth_increment() {
        let mut entity = knight();

        assert_eq!(entity.level_up(StatKind::PhysicalDamage), StatKind::PhysicalDamage);
        assert_eq!(entity.physical_damage(), 4.5);

        entity.level_up(StatKind::Armor);
        assert_eq!(entity.armor(), 2.8);

        entity.level_up(StatKind::Health);
        assert_eq!(entity.max_health(), 14.0);
        assert_eq!(entity.health.current, 14.0);
    }

    #[test]
    fn invalid_selection_leaves_stats_unmodified() {
        let mut entity = knight();
        let before = entity.clone();

        let result = entity.level_up_selection(9);

        assert_eq!(result, Err(GameError::InvalidStatSelection { choice: 9 }));
        assert_eq!(entity, before);
    }

    #[test]
    fn level_never_starts_below_one() {
        let entity = Entity::new("Nobody", 0, 1.0, CombatStats::default());
        assert_eq!(entity.level(), 1);
    }
}
