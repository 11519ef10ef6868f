use crate::config::GameConfig;
use crate::moves::MoveCatalog;
use crate::stats::CombatStats;

use super::entity::Entity;
use super::experience::Experience;

/// The controllable character: an entity with moves and experience.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub entity: Entity,
    pub moves: MoveCatalog,
    pub experience: Experience,
}

impl Player {
    pub const NAME: &'static str = "Knight";
    pub const STARTING_HEALTH: f64 = 10.0;
    pub const STARTING_STATS: CombatStats = CombatStats::new(2.0, 1.0, 2.0, 2.0);

    pub fn new(entity: Entity, moves: MoveCatalog, experience: Experience) -> Self {
        Self {
            entity,
            moves,
            experience,
        }
    }

    /// Level 1 Knight with the starting move catalog and 0 XP.
    pub fn knight(config: &GameConfig) -> Self {
        Self::new(
            Entity::new(Self::NAME, 1, Self::STARTING_HEALTH, Self::STARTING_STATS),
            MoveCatalog::knight(),
            Experience::new(0, config.starting_xp_threshold),
        )
    }

    pub fn name(&self) -> &str {
        self.entity.name()
    }

    pub fn level(&self) -> u32 {
        self.entity.level()
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::knight(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_starts_with_default_stats() {
        let player = Player::default();
        assert_eq!(player.name(), "Knight");
        assert_eq!(player.level(), 1);
        assert_eq!(player.entity.max_health(), 10.0);
        assert_eq!(player.entity.physical_damage(), 2.0);
        assert_eq!(player.entity.magic_damage(), 1.0);
        assert_eq!(player.entity.armor(), 2.0);
        assert_eq!(player.entity.magic_resist(), 2.0);
        assert_eq!(player.experience, Experience::new(0, 5));
        assert_eq!(player.moves.len(), 4);
    }
}
