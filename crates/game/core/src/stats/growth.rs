//! Per-level stat growth.

use super::kind::StatKind;

/// Fixed amount each stat grows by when it is picked on level-up.
///
/// Growth is a per-entity constant; it is never randomized.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrowthRates {
    pub health: f64,
    pub physical_damage: f64,
    pub magic_damage: f64,
    pub armor: f64,
    pub magic_resist: f64,
}

impl GrowthRates {
    /// Growth shared by every entity: +4 HP, +2.5 damage, +0.8 mitigation.
    pub const STANDARD: Self = Self {
        health: 4.0,
        physical_damage: 2.5,
        magic_damage: 2.5,
        armor: 0.8,
        magic_resist: 0.8,
    };

    /// Get the increment for a specific stat.
    pub const fn get(&self, stat: StatKind) -> f64 {
        match stat {
            StatKind::Health => self.health,
            StatKind::PhysicalDamage => self.physical_damage,
            StatKind::MagicDamage => self.magic_damage,
            StatKind::Armor => self.armor,
            StatKind::MagicResist => self.magic_resist,
        }
    }
}

impl Default for GrowthRates {
    fn default() -> Self {
        Self::STANDARD
    }
}
