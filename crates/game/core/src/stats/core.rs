//! Base combat stats read by the damage calculator.

/// Offensive and defensive stats of a combatant.
///
/// Health is tracked separately through [`crate::state::HealthMeter`] because
/// it has both a current and a maximum value.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub physical_damage: f64,
    pub magic_damage: f64,
    pub armor: f64,
    pub magic_resist: f64,
}

impl CombatStats {
    pub const fn new(physical_damage: f64, magic_damage: f64, armor: f64, magic_resist: f64) -> Self {
        Self {
            physical_damage,
            magic_damage,
            armor,
            magic_resist,
        }
    }
}
