//! Damage calculation and application.

use crate::moves::{Move, Penetration};
use crate::state::HealthMeter;

// ============================================================================
// Damage Calculation
// ============================================================================

/// Calculate the damage a move deals against the target's mitigation stats.
///
/// # Formula
///
/// ```text
/// effective_armor      = armor - flat_armor_pen
/// armor_pen_reduction  = armor * percent_armor_pen
/// physical             = move_physical - (effective_armor - armor_pen_reduction)
///
/// (magic mirrors physical with magic resist and magic penetration)
///
/// damage = physical + magic
/// if critical:
///     damage *= crit_multiplier
/// ```
///
/// Percent penetration is subtracted from the flat-reduced stat rather than
/// scaling it. The result is not floored: mitigation larger than the raw
/// damage yields a negative value, and only the health it is applied to is
/// clamped (see [`apply_damage`]).
pub fn compute_damage(mv: &Move, is_critical: bool, target_armor: f64, target_magic_resist: f64) -> f64 {
    let physical = mitigated(mv.physical_damage, target_armor, mv.armor_penetration);
    let magic = mitigated(mv.magic_damage, target_magic_resist, mv.magic_penetration);
    let total = physical + magic;

    if is_critical {
        total * mv.critical_multiplier
    } else {
        total
    }
}

/// Raw damage minus what is left of a mitigation stat after penetration.
fn mitigated(raw: f64, stat: f64, penetration: Penetration) -> f64 {
    let flat_reduced = stat - penetration.flat;
    let percent_reduction = stat * penetration.percent;
    raw - (flat_reduced - percent_reduction)
}

/// Apply damage to a health meter.
///
/// # Returns
///
/// Health left after the hit (clamped to 0)
pub fn apply_damage(health: &mut HealthMeter, damage: f64) -> f64 {
    health.apply_damage(damage)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sword_slash() -> Move {
        Move::physical("Sword Slash")
            .with_damage(10.0, 0.0)
            .with_armor_penetration(2.0, 0.0)
            .with_critical(30.0, 1.75)
    }

    #[test]
    fn sword_slash_against_armored_target() {
        let mv = sword_slash();
        assert_eq!(compute_damage(&mv, false, 5.0, 0.0), 7.0);
        assert_eq!(compute_damage(&mv, true, 5.0, 0.0), 12.25);
    }

    #[test]
    fn non_critical_matches_closed_form() {
        let mv = Move::physical("Mixed")
            .with_damage(6.0, 4.0)
            .with_armor_penetration(1.0, 0.25)
            .with_magic_penetration(0.5, 0.5)
            .with_critical(50.0, 2.0);
        let (armor, resist) = (4.0, 2.0);

        let expected = (6.0 - (armor - 1.0) + armor * 0.25) + (4.0 - (resist - 0.5) + resist * 0.5);

        assert_eq!(compute_damage(&mv, false, armor, resist), expected);
        assert_eq!(compute_damage(&mv, true, armor, resist), expected * 2.0);
    }

    #[test]
    fn percent_penetration_is_additive_on_flat_reduced_stat() {
        // Quick Strike: 1 damage, 1000% armor penetration.
        let mv = Move::physical("Quick Strike")
            .with_damage(1.0, 0.0)
            .with_armor_penetration(0.0, 10.0);
        // physical: 1 - ((2 - 0) - 2 * 10) = 19, magic: 0 - 2 = -2
        assert_eq!(compute_damage(&mv, false, 2.0, 2.0), 17.0);
    }

    #[test]
    fn damage_can_go_negative() {
        let guard = Move::physical("Guard").with_damage(0.0, 0.0);
        assert_eq!(compute_damage(&guard, false, 3.0, 1.0), -4.0);
    }

    #[test]
    fn applied_damage_never_leaves_negative_health() {
        let mut health = HealthMeter::full(5.0);
        assert_eq!(apply_damage(&mut health, 12.25), 0.0);
        assert_eq!(health.current, 0.0);
    }
}
