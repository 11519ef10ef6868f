//! Glue code tying the runtime and the terminal together.
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info};

use client_frontend_core::{
    Beat, CombatView, Frontend, FrontendConfig, LevelUpView, MessageLog, MoveMenuView, StatSheet,
    describe_error, describe_game_error, narrate,
};
use game_core::MainMenuChoice;
use runtime::{GameEvent, GamePhase, Runtime};

use crate::config::CliConfig;
use crate::input::{LineInput, Selection};
use crate::presentation::{Screen, screens};

/// Whether the session keeps going after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Line-based terminal frontend.
///
/// Generic over its reader and writer so scripted sessions can drive it with
/// in-memory buffers.
pub struct CliFrontend<R, W> {
    input: LineInput<R>,
    screen: Screen<W>,
    log: MessageLog,
    debug_menu: bool,
}

impl CliFrontend<BufReader<Stdin>, Stdout> {
    /// Frontend bound to the process's stdin and stdout.
    pub fn stdio(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self::new(
            frontend_config,
            cli_config,
            BufReader::new(io::stdin()),
            io::stdout(),
        )
    }
}

impl<R: BufRead, W: Write> CliFrontend<R, W> {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig, reader: R, writer: W) -> Self {
        Self {
            input: LineInput::new(reader),
            screen: Screen::new(writer, frontend_config.pacing, &cli_config),
            log: MessageLog::new(frontend_config.messages.capacity),
            debug_menu: cli_config.debug_menu,
        }
    }

    pub fn into_writer(self) -> W {
        self.screen.into_inner()
    }

    fn main_menu(&mut self, runtime: &mut Runtime) -> Result<()> {
        loop {
            screens::main_menu(&mut self.screen)?;
            let choice = match self.input.read_selection()? {
                Selection::Closed => return Ok(()),
                Selection::Malformed(error) => Err(error),
                Selection::Number(number) => MainMenuChoice::from_menu(number),
            };

            match choice {
                Ok(MainMenuChoice::Start) => return self.play(runtime),
                Ok(MainMenuChoice::Exit) => {
                    info!("Exit selected from main menu");
                    self.screen.line("exiting game...")?;
                    return Ok(());
                }
                Err(error) => self.reject(&describe_game_error(&error))?,
            }
        }
    }

    fn debug_menu(&mut self, runtime: &mut Runtime) -> Result<()> {
        loop {
            screens::debug_menu(&mut self.screen)?;
            let selection = self.input.read_selection()?;
            self.screen.clear()?;

            match selection {
                Selection::Closed => return Ok(()),
                Selection::Malformed(error) => self.reject(&describe_game_error(&error))?,
                Selection::Number(1) => {
                    screens::stat_sheet(&mut self.screen, "PLAYER", &StatSheet::player(runtime))?
                }
                Selection::Number(2) => {
                    screens::stat_sheet(&mut self.screen, "ENEMY", &StatSheet::enemy(runtime))?
                }
                Selection::Number(3) => return self.play(runtime),
                Selection::Number(4) => {
                    let events = runtime.begin_level_up()?;
                    self.present(runtime, &events)?;
                    if self.level_up(runtime)? == Flow::Quit {
                        return Ok(());
                    }
                }
                Selection::Number(5) => {
                    self.screen.line("exit debugging...")?;
                    return Ok(());
                }
                Selection::Number(choice) => {
                    debug!(choice, "Unknown debug menu entry");
                }
            }

            screens::back_to_menu(&mut self.screen)?;
            if !self.input.read_confirmation()? {
                return Ok(());
            }
        }
    }

    /// Encounters follow each other until input ends.
    fn play(&mut self, runtime: &mut Runtime) -> Result<()> {
        loop {
            let flow = match runtime.phase() {
                GamePhase::AwaitingEncounter => self.start_encounter(runtime)?,
                GamePhase::PlayerTurn => self.command_turn(runtime)?,
                GamePhase::SelectingMove => self.move_turn(runtime)?,
                GamePhase::LevelUp => self.level_up(runtime)?,
            };
            if flow == Flow::Quit {
                info!(encounters = runtime.encounters(), "Input closed; leaving game");
                return Ok(());
            }
        }
    }

    fn start_encounter(&mut self, runtime: &mut Runtime) -> Result<Flow> {
        screens::encounter_intro(&mut self.screen)?;
        let events = runtime.start_encounter()?;
        self.present(runtime, &events)?;
        // The combat screen only replays narration from this fight's turns.
        self.log.clear();
        screens::preparing(&mut self.screen)?;
        Ok(Flow::Continue)
    }

    fn command_turn(&mut self, runtime: &mut Runtime) -> Result<Flow> {
        let view = CombatView::from_runtime(runtime)
            .ok_or_else(|| anyhow!("player turn without an encounter"))?;
        screens::combat(&mut self.screen, &view, &self.log)?;

        match self.input.read_selection()? {
            Selection::Closed => return Ok(Flow::Quit),
            Selection::Malformed(error) => self.reject(&describe_game_error(&error))?,
            Selection::Number(number) => {
                let result = runtime.choose_command(number);
                self.settle(runtime, result)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn move_turn(&mut self, runtime: &mut Runtime) -> Result<Flow> {
        screens::attack_menu(&mut self.screen, &MoveMenuView::from_runtime(runtime))?;

        match self.input.read_selection()? {
            Selection::Closed => return Ok(Flow::Quit),
            Selection::Malformed(error) => self.reject(&describe_game_error(&error))?,
            Selection::Number(number) => {
                let result = runtime.choose_move(number);
                self.settle(runtime, result)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn level_up(&mut self, runtime: &mut Runtime) -> Result<Flow> {
        screens::level_up_options(&mut self.screen, &LevelUpView::from_runtime(runtime))?;

        let events = match self.input.read_selection()? {
            Selection::Closed => return Ok(Flow::Quit),
            Selection::Malformed(error) => runtime.reject_stat(error)?,
            Selection::Number(number) => runtime.choose_stat(number)?,
        };
        self.present(runtime, &events)?;
        Ok(Flow::Continue)
    }

    /// Present the events of a selection, or re-prompt if it was rejected.
    fn settle(
        &mut self,
        runtime: &Runtime,
        result: runtime::Result<Vec<GameEvent>>,
    ) -> Result<()> {
        match result {
            Ok(events) => self.present(runtime, &events),
            Err(error) if error.severity().is_recoverable() => self.reject(&describe_error(&error)),
            Err(error) => Err(error).context("runtime rejected a selection"),
        }
    }

    fn present(&mut self, runtime: &Runtime, events: &[GameEvent]) -> Result<()> {
        for event in events {
            match event {
                GameEvent::MoveUsed { .. } | GameEvent::EncounterEnded { .. } | GameEvent::LevelUp { .. } => {
                    self.screen.clear()?
                }
                GameEvent::DamageDealt {
                    target,
                    remaining_health,
                    ..
                } => {
                    let (name, maximum) = match target {
                        Some(enemy) => (enemy.as_str(), runtime.last_enemy().max_health()),
                        None => (runtime.player().name(), runtime.player().entity.max_health()),
                    };
                    screens::health_bar(&mut self.screen, name, *remaining_health, maximum)?;
                }
                _ => {}
            }

            for entry in narrate(event) {
                self.screen.message(&entry)?;
                self.log.push(entry);
            }
        }
        Ok(())
    }

    fn reject(&mut self, text: &str) -> Result<()> {
        self.screen.warning(text)?;
        self.screen.pause(Beat::Short)?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Frontend for CliFrontend<R, W> {
    fn run(&mut self, runtime: &mut Runtime) -> Result<()> {
        info!(debug_menu = self.debug_menu, "CLI frontend started");
        if self.debug_menu {
            self.debug_menu(runtime)
        } else {
            self.main_menu(runtime)
        }
    }
}
