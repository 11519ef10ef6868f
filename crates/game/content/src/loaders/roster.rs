//! Enemy roster loader.

use std::path::Path;

use game_core::EnemyRoster;

use crate::loaders::{LoadResult, read_file};

/// Built-in roster shipped with the game.
const EMBEDDED_ROSTER: &str = include_str!("../../data/enemies.ron");

/// Loader for the enemy roster from RON files.
///
/// The document is a single struct with one list per tier:
/// `difficulty1` .. `difficulty5` and `boss`. Every tier must be present;
/// a tier may be empty.
pub struct RosterLoader;

impl RosterLoader {
    /// Parse the built-in roster.
    pub fn embedded() -> LoadResult<EnemyRoster> {
        Self::parse(EMBEDDED_ROSTER)
    }

    /// Load a roster from a RON file.
    pub fn load(path: &Path) -> LoadResult<EnemyRoster> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse a roster from a RON string.
    pub fn parse(content: &str) -> LoadResult<EnemyRoster> {
        let roster: EnemyRoster = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy roster RON: {}", e))?;

        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use game_core::{DifficultyTier, RosterOracle};

    use super::*;

    const TIERS: [DifficultyTier; 6] = [
        DifficultyTier::Difficulty1,
        DifficultyTier::Difficulty2,
        DifficultyTier::Difficulty3,
        DifficultyTier::Difficulty4,
        DifficultyTier::Difficulty5,
        DifficultyTier::Boss,
    ];

    #[test]
    fn embedded_roster_has_ten_enemies_per_tier() {
        let roster = RosterLoader::embedded().unwrap();
        for tier in TIERS {
            assert_eq!(roster.tier(tier).len(), 10, "{tier}");
        }
    }

    #[test]
    fn embedded_roster_keeps_literal_values() {
        let roster = RosterLoader::embedded().unwrap();

        let first = &roster.tier(DifficultyTier::Difficulty1)[0];
        assert_eq!(first.name, "Degraded Skeleton");
        assert_eq!(first.level, 1);
        assert_eq!(first.health, 5.0);
        assert_eq!(first.physical_damage, 2.0);
        assert_eq!(first.armor, 2.0);

        let pup = &roster.tier(DifficultyTier::Difficulty1)[3];
        assert_eq!((pup.name.as_str(), pup.physical_damage), ("Pup", 2.5));

        let awakened = &roster.tier(DifficultyTier::Difficulty3)[4];
        assert_eq!((awakened.name.as_str(), awakened.level), ("Awakened", 10));

        let queen = &roster.tier(DifficultyTier::Difficulty5)[1];
        assert_eq!(queen.name, "Slime Queen");

        let merlin = &roster.tier(DifficultyTier::Boss)[9];
        assert_eq!(merlin.name, "Merlin, the First Mage");
        assert_eq!(merlin.health, 2000.0);
    }

    #[test]
    fn missing_tier_is_rejected() {
        let result = RosterLoader::parse("(difficulty1: [])");
        assert!(result.is_err());
    }

    #[test]
    fn loads_roster_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.ron");
        std::fs::write(
            &path,
            r#"(
                difficulty1: [(name: "Rat", level: 1, health: 2.0, physical_damage: 1.0,
                               magic_damage: 0.0, armor: 0.0, magic_resist: 0.0)],
                difficulty2: [], difficulty3: [], difficulty4: [], difficulty5: [], boss: [],
            )"#,
        )
        .unwrap();

        let roster = RosterLoader::load(&path).unwrap();

        assert_eq!(roster.len(), 1);
        assert_eq!(roster.tier(DifficultyTier::Difficulty1)[0].name, "Rat");
    }

    #[test]
    fn missing_file_reports_path() {
        let error = RosterLoader::load(Path::new("/nonexistent/roster.ron")).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/roster.ron"));
    }
}
