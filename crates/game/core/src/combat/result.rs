//! Attack result types and resolution.

use crate::env::RngOracle;
use crate::moves::Move;
use crate::state::{Entity, HealthMeter};

use super::critical::is_critical;
use super::damage::{apply_damage, compute_damage};

/// Outcome of a resolved attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    Hit,
    Critical,
}

impl AttackOutcome {
    pub fn is_critical(self) -> bool {
        matches!(self, Self::Critical)
    }
}

/// Result of a player attack against a target.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub outcome: AttackOutcome,
    /// Damage as computed, before the target's health is clamped.
    pub damage: f64,
    /// Target health after the hit.
    pub remaining_health: f64,
}

/// Resolve a player move against `target`, mutating its live health.
///
/// Draws exactly one roll from `rng` for the critical check.
pub fn resolve_attack(
    mv: &Move,
    target: &Entity,
    target_health: &mut HealthMeter,
    rng: &mut impl RngOracle,
) -> AttackResult {
    let critical = is_critical(mv, rng);
    let damage = compute_damage(mv, critical, target.armor(), target.magic_resist());
    let remaining_health = apply_damage(target_health, damage);

    AttackResult {
        outcome: if critical {
            AttackOutcome::Critical
        } else {
            AttackOutcome::Hit
        },
        damage,
        remaining_health,
    }
}

/// Resolve an enemy's basic attack: its flat physical damage, no mitigation
/// and no critical roll.
///
/// # Returns
///
/// `(damage, remaining_health)`
pub fn resolve_basic_attack(attacker: &Entity, target_health: &mut HealthMeter) -> (f64, f64) {
    let damage = attacker.basic_attack_damage();
    let remaining = apply_damage(target_health, damage);
    (damage, remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::stats::CombatStats;

    fn target() -> Entity {
        Entity::new("Degraded Skeleton", 1, 5.0, CombatStats::new(2.0, 0.0, 2.0, 0.0))
    }

    #[test]
    fn guaranteed_critical_scales_damage() {
        let mv = Move::physical("Smash")
            .with_damage(4.0, 0.0)
            .with_critical(100.0, 2.0);
        let enemy = target();
        let mut health = enemy.health;
        let mut rng = PcgRng::new(1);

        let result = resolve_attack(&mv, &enemy, &mut health, &mut rng);

        assert_eq!(result.outcome, AttackOutcome::Critical);
        assert_eq!(result.damage, 4.0);
        assert_eq!(result.remaining_health, 1.0);
        assert_eq!(health.current, 1.0);
    }

    #[test]
    fn negative_damage_does_not_overheal() {
        let mv = Move::physical("Guard")
            .with_damage(0.0, 0.0)
            .with_critical(0.0, 15.0);
        let enemy = target();
        let mut health = enemy.health;
        let mut rng = PcgRng::new(1);

        let result = resolve_attack(&mv, &enemy, &mut health, &mut rng);

        assert_eq!(result.outcome, AttackOutcome::Hit);
        assert_eq!(result.damage, -2.0);
        assert_eq!(result.remaining_health, 5.0);
    }

    #[test]
    fn basic_attack_ignores_armor() {
        let enemy = target();
        let mut health = HealthMeter::full(10.0);

        assert_eq!(resolve_basic_attack(&enemy, &mut health), (2.0, 8.0));
    }
}
