//! Terminal output: screen clearing, pacing and the individual screens.
//!
//! Nothing outside this module writes terminal control codes.

pub mod screens;

use std::fmt::Display;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use client_frontend_core::{Beat, MessageEntry, MessageLevel, PacingConfig};

use crate::config::CliConfig;

/// Line-based terminal writer with optional clearing, color and pauses.
pub struct Screen<W> {
    out: W,
    pacing: PacingConfig,
    clear_screen: bool,
    color: bool,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W, pacing: PacingConfig, config: &CliConfig) -> Self {
        Self {
            out,
            pacing,
            clear_screen: config.clear_screen,
            color: config.color,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Write text without a newline and flush so it shows before a read.
    pub fn prompt(&mut self, text: impl Display) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    pub fn warning(&mut self, text: impl Display) -> io::Result<()> {
        if self.color {
            queue!(self.out, SetForegroundColor(Color::Yellow))?;
            writeln!(self.out, "{text}")?;
            queue!(self.out, ResetColor)
        } else {
            self.line(text)
        }
    }

    /// Show a narrated line and hold it for its beat.
    pub fn message(&mut self, entry: &MessageEntry) -> io::Result<()> {
        match entry.level {
            MessageLevel::Info => self.line(&entry.text)?,
            MessageLevel::Warning => self.warning(&entry.text)?,
        }
        self.pause(entry.beat)
    }

    pub fn pause(&mut self, beat: Beat) -> io::Result<()> {
        let base = match beat {
            Beat::None => return Ok(()),
            Beat::Short => PacingConfig::SHORT,
            Beat::Outcome => PacingConfig::OUTCOME,
            Beat::Turn => PacingConfig::TURN,
        };
        self.wait(base)
    }

    /// Print `count` dots, waiting `per_dot` after each.
    pub fn loading_dots(&mut self, count: usize, per_dot: Duration) -> io::Result<()> {
        for _ in 0..count {
            write!(self.out, ".")?;
            self.wait(per_dot)?;
        }
        Ok(())
    }

    fn wait(&mut self, base: Duration) -> io::Result<()> {
        self.out.flush()?;
        let delay = self.pacing.scale(base);
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        Ok(())
    }
}
