//! Encounter state machine.

use crate::combat::{AttackResult, resolve_attack, resolve_basic_attack};
use crate::env::RngOracle;
use crate::error::GameError;
use crate::moves::MoveChoice;
use crate::state::{Entity, HealthMeter, Player};

use super::command::PlayerCommand;

/// Whose turn it is inside an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnOwner {
    #[default]
    Player,
    Enemy,
}

/// How an encounter ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterOutcome {
    EnemyDefeated,
    PlayerDefeated,
}

/// Where the session is waiting for input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionPhase {
    /// Player turn, command menu.
    AwaitingCommand,
    /// Player turn, attack sub-menu.
    SelectingMove,
    Finished(EncounterOutcome),
}

/// Result of accepting a command on the player's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The attack sub-menu is open.
    MoveSelection,
    /// The command is not implemented; the turn is not consumed.
    NoOp(PlayerCommand),
}

/// The enemy's retaliation after a non-lethal player attack.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyAttack {
    pub damage: f64,
    pub player_health: f64,
}

/// Everything that happened during one completed player turn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub move_name: String,
    pub attack: AttackResult,
    pub retaliation: Option<EnemyAttack>,
    pub outcome: Option<EncounterOutcome>,
}

/// Live state of one encounter between the player and an enemy.
///
/// Health here is encounter-local: both sides start full and the player's
/// nominal entity is never touched. The session is discarded once it reaches
/// [`SessionPhase::Finished`].
#[derive(Clone, Debug, PartialEq)]
pub struct CombatSession {
    enemy: Entity,
    player_health: HealthMeter,
    enemy_health: HealthMeter,
    phase: SessionPhase,
    turn_owner: TurnOwner,
}

impl CombatSession {
    /// Begin an encounter with both combatants at full health.
    pub fn start(player: &Player, enemy: Entity) -> Self {
        Self {
            player_health: HealthMeter::full(player.entity.max_health()),
            enemy_health: HealthMeter::full(enemy.max_health()),
            enemy,
            phase: SessionPhase::AwaitingCommand,
            turn_owner: TurnOwner::Player,
        }
    }

    pub fn enemy(&self) -> &Entity {
        &self.enemy
    }

    pub fn player_health(&self) -> HealthMeter {
        self.player_health
    }

    pub fn enemy_health(&self) -> HealthMeter {
        self.enemy_health
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn turn_owner(&self) -> TurnOwner {
        self.turn_owner
    }

    pub fn outcome(&self) -> Option<EncounterOutcome> {
        match self.phase {
            SessionPhase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    /// Consume the session and hand back the enemy it was fought against.
    pub fn into_enemy(self) -> Entity {
        self.enemy
    }

    /// Accept a command-menu selection.
    pub fn select_command(&mut self, command: PlayerCommand) -> Result<CommandOutcome, GameError> {
        if self.phase != SessionPhase::AwaitingCommand {
            return Err(GameError::InvalidMove {
                choice: command.menu_index(),
            });
        }

        match command {
            PlayerCommand::Attack => {
                self.phase = SessionPhase::SelectingMove;
                Ok(CommandOutcome::MoveSelection)
            }
            stub => Ok(CommandOutcome::NoOp(stub)),
        }
    }

    /// Accept an attack-menu selection.
    ///
    /// Back returns `Ok(None)` and leaves health, turn owner and `rng`
    /// untouched. An unknown slot is rejected and the session stays in move
    /// selection. A move plays out the full exchange: critical roll, damage,
    /// and the enemy's retaliation unless it was brought to 0.
    pub fn select_move(
        &mut self,
        selection: i64,
        player: &Player,
        rng: &mut impl RngOracle,
    ) -> Result<Option<TurnReport>, GameError> {
        if self.phase != SessionPhase::SelectingMove {
            return Err(GameError::InvalidMove { choice: selection });
        }

        let slot = match player.moves.choice(selection)? {
            MoveChoice::Back => {
                self.phase = SessionPhase::AwaitingCommand;
                return Ok(None);
            }
            MoveChoice::Move(slot) => slot,
        };
        let mv = player.moves.get(slot)?;

        let attack = resolve_attack(mv, &self.enemy, &mut self.enemy_health, rng);

        let mut retaliation = None;
        let outcome = if self.enemy_health.is_depleted() {
            Some(EncounterOutcome::EnemyDefeated)
        } else {
            self.turn_owner = TurnOwner::Enemy;
            let (damage, player_health) =
                resolve_basic_attack(&self.enemy, &mut self.player_health);
            retaliation = Some(EnemyAttack {
                damage,
                player_health,
            });
            self.turn_owner = TurnOwner::Player;

            self.player_health
                .is_depleted()
                .then_some(EncounterOutcome::PlayerDefeated)
        };

        self.phase = match outcome {
            Some(outcome) => SessionPhase::Finished(outcome),
            None => SessionPhase::AwaitingCommand,
        };

        Ok(Some(TurnReport {
            move_name: mv.name.clone(),
            attack,
            retaliation,
            outcome,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::state::EnemyTemplate;

    fn skeleton() -> Entity {
        EnemyTemplate::new("Degraded Skeleton", 1, 5.0, 2.0, 0.0, 2.0, 0.0).spawn()
    }

    fn in_move_selection(player: &Player, enemy: Entity) -> CombatSession {
        let mut session = CombatSession::start(player, enemy);
        assert_eq!(
            session.select_command(PlayerCommand::Attack),
            Ok(CommandOutcome::MoveSelection)
        );
        session
    }

    #[test]
    fn back_leaves_session_and_rng_untouched() {
        let player = Player::default();
        let mut session = in_move_selection(&player, skeleton());
        let mut rng = PcgRng::new(42);
        let rng_before = rng;
        let player_health = session.player_health();
        let enemy_health = session.enemy_health();

        let report = session
            .select_move(player.moves.back_index() as i64, &player, &mut rng)
            .unwrap();

        assert_eq!(report, None);
        assert_eq!(rng, rng_before);
        assert_eq!(session.player_health(), player_health);
        assert_eq!(session.enemy_health(), enemy_health);
        assert_eq!(session.turn_owner(), TurnOwner::Player);
        assert_eq!(session.phase(), SessionPhase::AwaitingCommand);
    }

    #[test]
    fn unknown_slot_keeps_move_selection_open() {
        let player = Player::default();
        let mut session = in_move_selection(&player, skeleton());
        let before = session.clone();
        let mut rng = PcgRng::new(42);

        let result = session.select_move(9, &player, &mut rng);

        assert_eq!(result, Err(GameError::UnknownMoveSlot { slot: 9 }));
        assert_eq!(session, before);
    }

    #[test]
    fn stub_commands_do_not_consume_the_turn() {
        let player = Player::default();
        let mut session = CombatSession::start(&player, skeleton());
        let before = session.clone();

        for command in [
            PlayerCommand::Magic,
            PlayerCommand::Inventory,
            PlayerCommand::Retreat,
        ] {
            assert_eq!(
                session.select_command(command),
                Ok(CommandOutcome::NoOp(command))
            );
        }

        assert_eq!(session, before);
    }

    #[test]
    fn enemy_brought_to_exactly_zero_does_not_retaliate() {
        let player = Player::default();
        // Sword Slash deals exactly 10 - (2 - 2) = 10 without a crit.
        let enemy = EnemyTemplate::new("Target", 1, 10.0, 3.0, 0.0, 2.0, 0.0).spawn();
        let mut session = in_move_selection(&player, enemy);
        let mut rng = PcgRng::new(3);

        let report = loop {
            let mut probe = rng;
            let roll = probe.roll_percent();
            if roll >= 30 {
                break session.select_move(1, &player, &mut rng).unwrap().unwrap();
            }
            rng = probe;
        };

        assert_eq!(report.attack.damage, 10.0);
        assert_eq!(report.attack.remaining_health, 0.0);
        assert_eq!(report.retaliation, None);
        assert_eq!(report.outcome, Some(EncounterOutcome::EnemyDefeated));
        assert_eq!(session.player_health().current, 10.0);
        assert!(session.is_finished());
    }

    #[test]
    fn surviving_enemy_retaliates_with_flat_damage() {
        let player = Player::default();
        let enemy = EnemyTemplate::new("Wall", 1, 1000.0, 3.0, 0.0, 0.0, 0.0).spawn();
        let mut session = in_move_selection(&player, enemy);
        let mut rng = PcgRng::new(11);

        let report = session.select_move(2, &player, &mut rng).unwrap().unwrap();

        assert_eq!(report.move_name, "Guard");
        assert_eq!(
            report.retaliation,
            Some(EnemyAttack {
                damage: 3.0,
                player_health: 7.0
            })
        );
        assert_eq!(report.outcome, None);
        assert_eq!(session.phase(), SessionPhase::AwaitingCommand);
        assert_eq!(session.turn_owner(), TurnOwner::Player);
    }

    #[test]
    fn player_defeat_finishes_the_session() {
        let player = Player::default();
        let enemy = EnemyTemplate::new("Brute", 3, 1000.0, 25.0, 0.0, 0.0, 0.0).spawn();
        let mut session = in_move_selection(&player, enemy);
        let mut rng = PcgRng::new(5);

        let report = session.select_move(2, &player, &mut rng).unwrap().unwrap();

        assert_eq!(report.outcome, Some(EncounterOutcome::PlayerDefeated));
        assert_eq!(session.player_health().current, 0.0);
        assert_eq!(
            session.select_command(PlayerCommand::Attack),
            Err(GameError::InvalidMove { choice: 1 })
        );
    }
}
