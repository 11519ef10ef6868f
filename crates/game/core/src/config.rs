/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Experience granted per level of a defeated (or surviving) enemy.
    pub xp_per_enemy_level: u32,
    /// Experience required for the first level-up.
    pub starting_xp_threshold: u32,
    /// Amount the experience threshold grows after every level-up.
    pub xp_threshold_step: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of moves a single catalog can hold.
    pub const MAX_MOVES: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_XP_PER_ENEMY_LEVEL: u32 = 5;
    pub const DEFAULT_STARTING_XP_THRESHOLD: u32 = 5;
    pub const DEFAULT_XP_THRESHOLD_STEP: u32 = 3;

    pub fn new() -> Self {
        Self {
            xp_per_enemy_level: Self::DEFAULT_XP_PER_ENEMY_LEVEL,
            starting_xp_threshold: Self::DEFAULT_STARTING_XP_THRESHOLD,
            xp_threshold_step: Self::DEFAULT_XP_THRESHOLD_STEP,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
