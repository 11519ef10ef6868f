//! Critical hit determination.

use crate::env::RngOracle;
use crate::moves::Move;

/// Check whether a roll in `[0, 100)` lands a critical hit.
///
/// Strictly greater-than: a chance of 0 never crits, a chance of 100 always
/// does.
pub fn check_critical(critical_chance: f64, roll: u32) -> bool {
    critical_chance > f64::from(roll)
}

/// Draw one percent roll and decide whether `mv` lands a critical hit.
pub fn is_critical(mv: &Move, rng: &mut impl RngOracle) -> bool {
    check_critical(mv.critical_chance, rng.roll_percent())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    #[test]
    fn boundary_chances_are_exact() {
        for roll in 0..100 {
            assert!(!check_critical(0.0, roll));
            assert!(check_critical(100.0, roll));
        }
        assert!(check_critical(30.0, 29));
        assert!(!check_critical(30.0, 30));
    }

    #[test]
    fn frequency_tracks_critical_chance() {
        let mv = Move::physical("Sword Slash").with_critical(30.0, 1.75);
        let mut rng = PcgRng::new(0x5eed);
        let samples = 100_000;

        let crits = (0..samples).filter(|_| is_critical(&mv, &mut rng)).count();
        let frequency = crits as f64 / samples as f64;

        assert!((frequency - 0.30).abs() < 0.01, "frequency {frequency}");
    }

    #[test]
    fn each_check_consumes_one_roll() {
        let mv = Move::physical("Slash");
        let mut rng = PcgRng::new(7);
        let mut mirror = rng;

        is_critical(&mv, &mut rng);
        mirror.roll_percent();

        assert_eq!(rng, mirror);
    }
}
