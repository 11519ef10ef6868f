use crate::stats::CombatStats;

use super::entity::Entity;

/// Static roster entry an enemy is spawned from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub name: String,
    pub level: u32,
    pub health: f64,
    pub physical_damage: f64,
    pub magic_damage: f64,
    pub armor: f64,
    pub magic_resist: f64,
}

impl EnemyTemplate {
    pub fn new(
        name: impl Into<String>,
        level: u32,
        health: f64,
        physical_damage: f64,
        magic_damage: f64,
        armor: f64,
        magic_resist: f64,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            health,
            physical_damage,
            magic_damage,
            armor,
            magic_resist,
        }
    }

    /// Generic enemy shown before any encounter has taken place.
    pub fn placeholder() -> Self {
        Self::new("Enemy", 1, 5.0, 1.0, 0.0, 0.5, 0.5)
    }

    /// Create a fresh entity from this template.
    pub fn spawn(&self) -> Entity {
        Entity::new(
            self.name.clone(),
            self.level,
            self.health,
            CombatStats::new(
                self.physical_damage,
                self.magic_damage,
                self.armor,
                self.magic_resist,
            ),
        )
    }
}
