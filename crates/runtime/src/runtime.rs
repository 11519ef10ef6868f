//! High-level runtime orchestrator.
//!
//! The runtime owns the player, the live encounter and the RNG stream, and
//! exposes one method per kind of player selection. Each call validates the
//! current [`GamePhase`], advances the game, and returns the [`GameEvent`]s it
//! produced. Encounters follow each other iteratively: after rewards the
//! phase returns to [`GamePhase::AwaitingEncounter`] and the caller starts the
//! next one.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use game_content::ConfigLoader;
use game_core::progression::{self, StatOption};
use game_core::{
    CombatSession, CommandOutcome, DifficultyTier, EncounterOutcome, EnemyRoster, EnemyTemplate,
    Entity, GameConfig, GameError, PcgRng, Player, PlayerCommand, draw_enemy,
};

use crate::api::{Result, RuntimeError};
use crate::events::GameEvent;
use crate::oracle::{OracleManager, RosterOracleImpl};

/// Runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// RNG seed; a random one is drawn at build time when unset.
    pub seed: Option<u64>,
    /// Tier every encounter is drawn from.
    pub encounter_tier: DifficultyTier,
    /// RON roster replacing the built-in one.
    pub roster_path: Option<PathBuf>,
    /// TOML file overriding `game_config`.
    pub config_path: Option<PathBuf>,
    pub session_id: Option<String>,
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GAME_SEED` - RNG seed (default: random)
    /// - `GAME_ENCOUNTER_TIER` - `difficulty1`..`difficulty5` or `boss` (default: difficulty1)
    /// - `GAME_ROSTER_PATH` - RON roster file (default: built-in roster)
    /// - `GAME_CONFIG_PATH` - TOML experience tunables (default: built-in values)
    /// - `GAME_SESSION_ID` - Session identifier for log files (default: auto-generated)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.seed = read_env::<u64>("GAME_SEED");

        if let Some(tier) = read_env::<DifficultyTier>("GAME_ENCOUNTER_TIER") {
            config.encounter_tier = tier;
        }

        config.roster_path = env::var("GAME_ROSTER_PATH").ok().map(PathBuf::from);
        config.config_path = env::var("GAME_CONFIG_PATH").ok().map(PathBuf::from);
        config.session_id = env::var("GAME_SESSION_ID").ok();

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Which selection the runtime is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum GamePhase {
    /// Between encounters; `start_encounter` or the debug level-up are legal.
    AwaitingEncounter,
    /// Command menu of the player's turn.
    PlayerTurn,
    /// Attack sub-menu of the player's turn.
    SelectingMove,
    /// A level was gained and a stat choice is pending.
    LevelUp,
}

/// Single-player game session.
pub struct Runtime {
    oracles: OracleManager,
    tier: DifficultyTier,
    rng: PcgRng,
    player: Player,
    session: Option<CombatSession>,
    last_enemy: Entity,
    phase: GamePhase,
    encounters: u64,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn game_config(&self) -> &GameConfig {
        self.oracles.config()
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    /// The encounter in progress, if any.
    pub fn session(&self) -> Option<&CombatSession> {
        self.session.as_ref()
    }

    /// The enemy currently or most recently fought; a generic placeholder
    /// before the first encounter.
    pub fn last_enemy(&self) -> &Entity {
        self.session
            .as_ref()
            .map_or(&self.last_enemy, CombatSession::enemy)
    }

    /// Number of encounters started so far.
    pub fn encounters(&self) -> u64 {
        self.encounters
    }

    pub fn rng(&self) -> &PcgRng {
        &self.rng
    }

    /// Stat options for the pending (or next) level-up.
    pub fn level_up_options(&self) -> Vec<StatOption> {
        progression::level_up_options(&self.player.entity)
    }

    /// Draw an enemy uniformly from the configured tier and begin an encounter.
    pub fn start_encounter(&mut self) -> Result<Vec<GameEvent>> {
        self.expect_phase(GamePhase::AwaitingEncounter, "start_encounter")?;

        let template = self.next_enemy()?;
        let enemy = template.spawn();
        self.encounters += 1;

        info!(
            encounter = self.encounters,
            enemy = %enemy.name,
            level = enemy.level,
            tier = %self.tier,
            "Encounter started"
        );

        let event = GameEvent::EncounterStarted {
            player: self.player.name().to_owned(),
            enemy: enemy.name.clone(),
            level: enemy.level,
        };

        self.session = Some(CombatSession::start(&self.player, enemy));
        self.phase = GamePhase::PlayerTurn;
        Ok(vec![event])
    }

    /// Apply a command-menu selection (1 Attack, 2 Magic, 3 Inventory, 4 Retreat).
    pub fn choose_command(&mut self, selection: i64) -> Result<Vec<GameEvent>> {
        const OPERATION: &str = "choose_command";
        self.expect_phase(GamePhase::PlayerTurn, OPERATION)?;

        let command =
            PlayerCommand::from_menu(selection).map_err(|e| Self::rejected(OPERATION, e))?;
        let phase = self.phase;
        let session = self
            .session
            .as_mut()
            .ok_or(RuntimeError::InvalidPhase {
                operation: OPERATION,
                phase,
            })?;

        match session
            .select_command(command)
            .map_err(|e| Self::rejected(OPERATION, e))?
        {
            CommandOutcome::MoveSelection => {
                self.phase = GamePhase::SelectingMove;
                Ok(vec![GameEvent::MoveSelectionOpened])
            }
            CommandOutcome::NoOp(command) => {
                debug!(%command, "Command not implemented; turn not consumed");
                Ok(vec![GameEvent::CommandIgnored { command }])
            }
        }
    }

    /// Apply an attack-menu selection (`1..=N` move, `N + 1` Back).
    pub fn choose_move(&mut self, selection: i64) -> Result<Vec<GameEvent>> {
        const OPERATION: &str = "choose_move";
        self.expect_phase(GamePhase::SelectingMove, OPERATION)?;

        let phase = self.phase;
        let session = self
            .session
            .as_mut()
            .ok_or(RuntimeError::InvalidPhase {
                operation: OPERATION,
                phase,
            })?;

        let report = session
            .select_move(selection, &self.player, &mut self.rng)
            .map_err(|e| Self::rejected(OPERATION, e))?;

        let Some(report) = report else {
            self.phase = GamePhase::PlayerTurn;
            return Ok(vec![GameEvent::MoveSelectionCancelled]);
        };

        let enemy_name = session.enemy().name.clone();
        debug!(
            move_name = %report.move_name,
            damage = report.attack.damage,
            critical = report.attack.outcome.is_critical(),
            enemy_health = report.attack.remaining_health,
            "Player attack resolved"
        );

        let mut events = vec![
            GameEvent::MoveUsed {
                user: self.player.name().to_owned(),
                move_name: report.move_name.clone(),
            },
            GameEvent::DamageDealt {
                source: report.move_name.clone(),
                target: Some(enemy_name.clone()),
                damage: report.attack.damage,
                critical: report.attack.outcome.is_critical(),
                remaining_health: report.attack.remaining_health,
            },
        ];

        if let Some(retaliation) = report.retaliation {
            debug!(
                enemy = %enemy_name,
                damage = retaliation.damage,
                player_health = retaliation.player_health,
                "Enemy attack resolved"
            );
            events.push(GameEvent::AttackAnnounced {
                attacker: enemy_name.clone(),
            });
            events.push(GameEvent::DamageDealt {
                source: enemy_name,
                target: None,
                damage: retaliation.damage,
                critical: false,
                remaining_health: retaliation.player_health,
            });
        }

        match report.outcome {
            Some(outcome) => self.finish_encounter(outcome, &mut events),
            None => self.phase = GamePhase::PlayerTurn,
        }

        Ok(events)
    }

    /// Apply a level-up stat selection (`1..=5`).
    ///
    /// An invalid selection is reported as [`GameEvent::StatRejected`] and
    /// leaves stats untouched; the level-up completes either way.
    pub fn choose_stat(&mut self, selection: i64) -> Result<Vec<GameEvent>> {
        self.expect_phase(GamePhase::LevelUp, "choose_stat")?;

        let event = match progression::apply_stat_choice(&mut self.player, selection) {
            Ok(upgrade) => {
                info!(stat = %upgrade.stat, value = upgrade.value, "Stat upgraded");
                GameEvent::StatUpgraded {
                    stat: upgrade.stat,
                    value: upgrade.value,
                }
            }
            Err(error) => Self::stat_rejected(error),
        };

        self.phase = GamePhase::AwaitingEncounter;
        Ok(vec![event])
    }

    /// Complete a pending level-up without raising any stat, for input that
    /// could not be read as a selection at all.
    pub fn reject_stat(&mut self, error: GameError) -> Result<Vec<GameEvent>> {
        self.expect_phase(GamePhase::LevelUp, "reject_stat")?;

        self.phase = GamePhase::AwaitingEncounter;
        Ok(vec![Self::stat_rejected(error)])
    }

    /// Gain a level outside of combat and open the stat choice.
    pub fn begin_level_up(&mut self) -> Result<Vec<GameEvent>> {
        self.expect_phase(GamePhase::AwaitingEncounter, "begin_level_up")?;

        let level_up = progression::begin_level_up(&mut self.player);
        info!(from = level_up.from, to = level_up.to, "Level up");

        self.phase = GamePhase::LevelUp;
        Ok(vec![GameEvent::LevelUp {
            name: self.player.name().to_owned(),
            from: level_up.from,
            to: level_up.to,
        }])
    }

    fn next_enemy(&mut self) -> Result<EnemyTemplate> {
        draw_enemy(self.oracles.roster(), self.tier, &mut self.rng)
            .cloned()
            .ok_or(RuntimeError::NoEnemies { tier: self.tier })
    }

    /// Close the encounter, grant experience, and move to the next phase.
    ///
    /// Experience is granted whether the enemy or the player fell.
    fn finish_encounter(&mut self, outcome: EncounterOutcome, events: &mut Vec<GameEvent>) {
        if let Some(session) = self.session.take() {
            self.last_enemy = session.into_enemy();
        }

        let defeated = match outcome {
            EncounterOutcome::EnemyDefeated => self.last_enemy.name.clone(),
            EncounterOutcome::PlayerDefeated => self.player.name().to_owned(),
        };
        info!(%outcome, %defeated, "Encounter ended");
        events.push(GameEvent::EncounterEnded { outcome, defeated });

        let reward = progression::award_experience(
            &mut self.player,
            self.last_enemy.level,
            &self.oracles.config,
        );
        info!(
            xp = reward.xp_gained,
            experience = %reward.experience,
            "Experience granted"
        );
        events.push(GameEvent::ExperienceGained {
            name: self.player.name().to_owned(),
            amount: reward.xp_gained,
            experience: reward.experience,
        });

        match reward.level_up {
            Some(level_up) => {
                info!(from = level_up.from, to = level_up.to, "Level up");
                events.push(GameEvent::LevelUp {
                    name: self.player.name().to_owned(),
                    from: level_up.from,
                    to: level_up.to,
                });
                self.phase = GamePhase::LevelUp;
            }
            None => self.phase = GamePhase::AwaitingEncounter,
        }
    }

    fn expect_phase(&self, expected: GamePhase, operation: &'static str) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(RuntimeError::InvalidPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    fn stat_rejected(error: GameError) -> GameEvent {
        warn!(code = error.error_code(), %error, "Stat selection rejected");
        GameEvent::StatRejected { error }
    }

    fn rejected(operation: &'static str, error: GameError) -> RuntimeError {
        warn!(operation, code = error.error_code(), %error, "Selection rejected");
        RuntimeError::Game(error)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    roster: Option<EnemyRoster>,
    player: Option<Player>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            roster: None,
            player: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide the enemy roster directly instead of loading it.
    pub fn roster(mut self, roster: EnemyRoster) -> Self {
        self.roster = Some(roster);
        self
    }

    /// Start from an existing player instead of a fresh Knight.
    pub fn player(mut self, player: Player) -> Self {
        self.player = Some(player);
        self
    }

    /// Fix the RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<Runtime> {
        let RuntimeConfig {
            mut game_config,
            seed,
            encounter_tier,
            roster_path,
            config_path,
            ..
        } = self.config;

        if let Some(path) = config_path.as_deref() {
            game_config = ConfigLoader::load(path)?;
            info!(path = %path.display(), "Loaded game config");
        }

        let roster = match self.roster {
            Some(roster) => RosterOracleImpl::new(roster),
            None => RosterOracleImpl::load(roster_path.as_deref())?,
        };
        info!(
            enemies = roster.roster().len(),
            custom = roster_path.is_some(),
            "Enemy roster ready"
        );

        let seed = seed.unwrap_or_else(rand::random);
        info!(seed, "RNG seeded");

        let player = self
            .player
            .unwrap_or_else(|| Player::knight(&game_config));

        Ok(Runtime {
            oracles: OracleManager::new(Arc::new(roster), game_config),
            tier: encounter_tier,
            rng: PcgRng::new(seed),
            player,
            session: None,
            last_enemy: EnemyTemplate::placeholder().spawn(),
            phase: GamePhase::AwaitingEncounter,
            encounters: 0,
        })
    }
}
