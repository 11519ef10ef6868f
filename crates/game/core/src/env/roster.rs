//! Enemy roster grouped by difficulty tier.

use crate::state::EnemyTemplate;

use super::rng::RngOracle;

/// Difficulty pool an enemy is drawn from.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DifficultyTier {
    #[default]
    #[strum(to_string = "difficulty1")]
    Difficulty1,
    #[strum(to_string = "difficulty2")]
    Difficulty2,
    #[strum(to_string = "difficulty3")]
    Difficulty3,
    #[strum(to_string = "difficulty4")]
    Difficulty4,
    #[strum(to_string = "difficulty5")]
    Difficulty5,
    Boss,
}

/// Read-only access to the enemy roster.
pub trait RosterOracle {
    /// Enemies of a tier, in roster order.
    fn tier(&self, tier: DifficultyTier) -> &[EnemyTemplate];
}

/// Six ordered enemy pools, built once and never mutated.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyRoster {
    pub difficulty1: Vec<EnemyTemplate>,
    pub difficulty2: Vec<EnemyTemplate>,
    pub difficulty3: Vec<EnemyTemplate>,
    pub difficulty4: Vec<EnemyTemplate>,
    pub difficulty5: Vec<EnemyTemplate>,
    pub boss: Vec<EnemyTemplate>,
}

impl EnemyRoster {
    /// Total number of templates across all tiers.
    pub fn len(&self) -> usize {
        [
            &self.difficulty1,
            &self.difficulty2,
            &self.difficulty3,
            &self.difficulty4,
            &self.difficulty5,
            &self.boss,
        ]
        .iter()
        .map(|tier| tier.len())
        .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RosterOracle for EnemyRoster {
    fn tier(&self, tier: DifficultyTier) -> &[EnemyTemplate] {
        match tier {
            DifficultyTier::Difficulty1 => &self.difficulty1,
            DifficultyTier::Difficulty2 => &self.difficulty2,
            DifficultyTier::Difficulty3 => &self.difficulty3,
            DifficultyTier::Difficulty4 => &self.difficulty4,
            DifficultyTier::Difficulty5 => &self.difficulty5,
            DifficultyTier::Boss => &self.boss,
        }
    }
}

/// Draw an enemy uniformly at random from `tier`.
///
/// Returns `None` for an empty tier without consuming a roll.
pub fn draw_enemy<'a, O, R>(roster: &'a O, tier: DifficultyTier, rng: &mut R) -> Option<&'a EnemyTemplate>
where
    O: RosterOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    let pool = roster.tier(tier);
    if pool.is_empty() {
        return None;
    }
    pool.get(rng.pick_index(pool.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    fn roster() -> EnemyRoster {
        EnemyRoster {
            difficulty1: vec![
                EnemyTemplate::new("Pup", 1, 5.0, 2.5, 0.0, 1.0, 0.0),
                EnemyTemplate::new("Thief", 1, 3.0, 5.0, 0.0, 0.0, 0.0),
            ],
            boss: vec![EnemyTemplate::new("Skeletron", 5, 1000.0, 30.0, 5.0, 50.0, 50.0)],
            ..EnemyRoster::default()
        }
    }

    #[test]
    fn draws_only_from_requested_tier() {
        let roster = roster();
        let mut rng = PcgRng::new(11);
        for _ in 0..50 {
            let enemy = draw_enemy(&roster, DifficultyTier::Difficulty1, &mut rng).unwrap();
            assert_eq!(enemy.level, 1);
        }
        let boss = draw_enemy(&roster, DifficultyTier::Boss, &mut rng).unwrap();
        assert_eq!(boss.name, "Skeletron");
    }

    #[test]
    fn empty_tier_yields_none() {
        let roster = roster();
        let mut rng = PcgRng::new(11);
        assert!(draw_enemy(&roster, DifficultyTier::Difficulty3, &mut rng).is_none());
    }

    #[test]
    fn tier_names_parse_case_insensitively() {
        assert_eq!("difficulty1".parse::<DifficultyTier>(), Ok(DifficultyTier::Difficulty1));
        assert_eq!("BOSS".parse::<DifficultyTier>(), Ok(DifficultyTier::Boss));
        assert_eq!(DifficultyTier::Difficulty5.to_string(), "difficulty5");
    }
}
