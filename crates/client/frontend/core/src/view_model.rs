//! Read-only snapshots of runtime state for presentation.
//!
//! Frontends never reach into the runtime while drawing; they build these
//! views first and render from them.

use game_core::progression::StatOption;
use game_core::{Entity, Experience, HealthMeter, MoveSlot};
use runtime::Runtime;

/// One combatant as shown on the combat screen.
#[derive(Clone, Debug, PartialEq)]
pub struct CombatantView {
    pub name: String,
    pub level: u32,
    pub health: HealthMeter,
    pub physical_damage: f64,
    pub magic_damage: f64,
    pub armor: f64,
    pub magic_resist: f64,
    /// Only the player tracks experience.
    pub experience: Option<Experience>,
}

impl CombatantView {
    /// Snapshot an entity with a given live health value.
    pub fn new(entity: &Entity, health: HealthMeter) -> Self {
        Self {
            name: entity.name.clone(),
            level: entity.level,
            health,
            physical_damage: entity.physical_damage(),
            magic_damage: entity.magic_damage(),
            armor: entity.armor(),
            magic_resist: entity.magic_resist(),
            experience: None,
        }
    }

    #[must_use]
    pub fn with_experience(mut self, experience: Experience) -> Self {
        self.experience = Some(experience);
        self
    }
}

/// Both sides of the encounter in progress.
#[derive(Clone, Debug, PartialEq)]
pub struct CombatView {
    pub enemy: CombatantView,
    pub player: CombatantView,
}

impl CombatView {
    /// `None` when no encounter is running.
    pub fn from_runtime(runtime: &Runtime) -> Option<Self> {
        let session = runtime.session()?;
        let player = runtime.player();
        Some(Self {
            enemy: CombatantView::new(session.enemy(), session.enemy_health()),
            player: CombatantView::new(&player.entity, session.player_health())
                .with_experience(player.experience),
        })
    }
}

/// Nominal stats of an entity outside of combat.
#[derive(Clone, Debug, PartialEq)]
pub struct StatSheet {
    pub name: String,
    pub level: u32,
    pub max_health: f64,
    pub physical_damage: f64,
    pub magic_damage: f64,
    pub armor: f64,
    pub magic_resist: f64,
}

impl StatSheet {
    pub fn new(entity: &Entity) -> Self {
        Self {
            name: entity.name.clone(),
            level: entity.level,
            max_health: entity.max_health(),
            physical_damage: entity.physical_damage(),
            magic_damage: entity.magic_damage(),
            armor: entity.armor(),
            magic_resist: entity.magic_resist(),
        }
    }

    pub fn player(runtime: &Runtime) -> Self {
        Self::new(&runtime.player().entity)
    }

    /// The current enemy, or the most recent one between encounters.
    pub fn enemy(runtime: &Runtime) -> Self {
        Self::new(runtime.last_enemy())
    }
}

/// Entries of the attack sub-menu.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveMenuView {
    pub moves: Vec<(MoveSlot, String)>,
    pub back_index: usize,
}

impl MoveMenuView {
    pub fn from_runtime(runtime: &Runtime) -> Self {
        let catalog = &runtime.player().moves;
        Self {
            moves: catalog
                .iter()
                .map(|(slot, mv)| (slot, mv.name.clone()))
                .collect(),
            back_index: catalog.back_index(),
        }
    }
}

/// The stat choice after a level-up.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelUpView {
    pub name: String,
    pub level: u32,
    pub options: Vec<StatOption>,
}

impl LevelUpView {
    pub fn from_runtime(runtime: &Runtime) -> Self {
        let player = runtime.player();
        Self {
            name: player.name().to_owned(),
            level: player.level(),
            options: runtime.level_up_options(),
        }
    }
}

#[cfg(test)]
mod tests {
    use game_core::{EnemyRoster, EnemyTemplate};

    use super::*;

    #[test]
    fn combat_view_tracks_live_health() {
        let roster = EnemyRoster {
            difficulty1: vec![EnemyTemplate::new("Degraded Skeleton", 1, 5.0, 2.0, 0.0, 2.0, 0.0)],
            ..Default::default()
        };
        let mut runtime = Runtime::builder().seed(1).roster(roster).build().unwrap();
        assert!(CombatView::from_runtime(&runtime).is_none());

        runtime.start_encounter().unwrap();
        let view = CombatView::from_runtime(&runtime).unwrap();

        assert_eq!(view.enemy.name, "Degraded Skeleton");
        assert_eq!(view.enemy.health, HealthMeter::full(5.0));
        assert_eq!(view.enemy.experience, None);
        assert_eq!(view.player.health, HealthMeter::full(10.0));
        assert_eq!(view.player.experience, Some(Experience::new(0, 5)));
    }

    #[test]
    fn move_menu_lists_knight_moves_then_back() {
        let runtime = Runtime::builder().seed(1).build().unwrap();
        let menu = MoveMenuView::from_runtime(&runtime);

        let names: Vec<_> = menu.moves.iter().map(|(_, name)| name.as_str()).collect();
        assert_eq!(names, ["Sword Slash", "Guard", "Quick Strike", "Blood Cry"]);
        assert_eq!(menu.back_index, 5);
    }

    #[test]
    fn enemy_sheet_defaults_to_placeholder() {
        let runtime = Runtime::builder().seed(1).build().unwrap();
        let sheet = StatSheet::enemy(&runtime);

        assert_eq!(sheet.name, "Enemy");
        assert_eq!(sheet.level, 1);
        assert_eq!(sheet.physical_damage, 1.0);
    }
}
