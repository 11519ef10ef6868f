//! Individual screens, drawn from view models.

use std::io::{self, Write};

use client_frontend_core::{
    CombatView, CombatantView, LevelUpView, MessageLog, MoveMenuView, PacingConfig, StatSheet,
};
use game_core::PlayerCommand;
use strum::IntoEnumIterator;

use super::Screen;

const PROMPT: &str = ">> ";

fn rule<W: Write>(screen: &mut Screen<W>, width: usize, fill: char) -> io::Result<()> {
    screen.line(fill.to_string().repeat(width))
}

pub fn main_menu<W: Write>(screen: &mut Screen<W>) -> io::Result<()> {
    screen.clear()?;
    screen.line("| A Hero's Journey |")?;
    rule(screen, 20, '-')?;
    screen.line("    [1] | Start")?;
    screen.line("    [2] | Exit")?;
    rule(screen, 20, '-')?;
    screen.prompt(PROMPT)
}

pub fn debug_menu<W: Write>(screen: &mut Screen<W>) -> io::Result<()> {
    screen.clear()?;
    screen.line("|      DEBUG MENU      |")?;
    rule(screen, 24, '-')?;
    screen.line("[1] | Show Player Stats")?;
    screen.line("[2] | Show Enemy Stats")?;
    screen.line("[3] | Start Combat")?;
    screen.line("[4] | Level Up")?;
    screen.line("[5] | Exit")?;
    screen.prompt(PROMPT)
}

pub fn back_to_menu<W: Write>(screen: &mut Screen<W>) -> io::Result<()> {
    screen.prompt("Back to Menu[y]?: ")
}

fn combatant<W: Write>(screen: &mut Screen<W>, view: &CombatantView) -> io::Result<()> {
    screen.line(format_args!("[ Lvl. {} {} ]", view.level, view.name))?;
    match view.experience {
        Some(xp) => screen.line(format_args!(
            "[ HP: {:.1} / {:.1} | {xp} ]",
            view.health.current, view.health.maximum
        ))?,
        None => screen.line(format_args!(
            "[ HP: {:.1} / {:.1} ]",
            view.health.current, view.health.maximum
        ))?,
    }
    rule(screen, 34, '#')?;
    screen.line(format_args!(
        "{:<11}{:.1} | {:<14}{:.1}",
        "P. Attack: ", view.physical_damage, "M. Attack: ", view.magic_damage
    ))?;
    screen.line(format_args!(
        "{:<11}{:.1} | Magic Resist: {:.1}",
        "Armor: ", view.armor, view.magic_resist
    ))?;
    rule(screen, 34, '#')
}

/// Both combatants, the command menu, and the most recent narration.
pub fn combat<W: Write>(screen: &mut Screen<W>, view: &CombatView, log: &MessageLog) -> io::Result<()> {
    screen.clear()?;
    combatant(screen, &view.enemy)?;
    screen.blank()?;
    combatant(screen, &view.player)?;

    rule(screen, 34, '-')?;
    let commands: Vec<_> = PlayerCommand::iter().collect();
    // Two columns: 1 and 3 on the first row, 2 and 4 on the second.
    let rows = commands.len().div_ceil(2);
    for row in 0..rows {
        let left = &commands[row];
        let mut line = format!("{:<18}", format!("[{}] || {left}", left.menu_index()));
        if let Some(right) = commands.get(row + rows) {
            line.push_str(&format!("[{}] || {right}", right.menu_index()));
        }
        screen.line(line.trim_end())?;
    }
    rule(screen, 34, '-')?;

    for entry in log.iter() {
        screen.line(&entry.text)?;
    }
    screen.prompt(PROMPT)
}

pub fn attack_menu<W: Write>(screen: &mut Screen<W>, menu: &MoveMenuView) -> io::Result<()> {
    screen.clear()?;
    screen.line("||     ATTACK     ||")?;
    rule(screen, 20, '-')?;
    for (slot, name) in &menu.moves {
        screen.line(format_args!("[{slot}] || {name}"))?;
    }
    screen.line(format_args!("[{}] || Back", menu.back_index))?;
    rule(screen, 20, '-')?;
    screen.prompt(PROMPT)
}

/// `Name | HP: x / y` framed by separators, shown while a turn resolves.
pub fn health_bar<W: Write>(screen: &mut Screen<W>, name: &str, current: f64, maximum: f64) -> io::Result<()> {
    rule(screen, 20, '-')?;
    screen.line(format_args!("{name} | HP: {current:.1} / {maximum:.1}"))?;
    rule(screen, 20, '-')
}

pub fn encounter_intro<W: Write>(screen: &mut Screen<W>) -> io::Result<()> {
    screen.clear()?;
    screen.loading_dots(3, PacingConfig::LOADING_DOT)?;
    screen.blank()
}

pub fn preparing<W: Write>(screen: &mut Screen<W>) -> io::Result<()> {
    screen.prompt("Preparing for battle")?;
    screen.loading_dots(3, PacingConfig::PREPARING_DOT)?;
    screen.blank()
}

pub fn level_up_options<W: Write>(screen: &mut Screen<W>, view: &LevelUpView) -> io::Result<()> {
    rule(screen, 33, '-')?;
    screen.line(format_args!("Lvl {} {}", view.level, view.name))?;
    rule(screen, 33, '-')?;
    for option in &view.options {
        screen.line(format_args!(
            "{:>19}{:>5.1} {:.1}+ [{}]",
            format!("{}: ", option.stat),
            option.current,
            option.growth,
            option.menu_index
        ))?;
    }
    rule(screen, 33, '-')?;
    screen.prompt(PROMPT)
}

pub fn stat_sheet<W: Write>(screen: &mut Screen<W>, title: &str, sheet: &StatSheet) -> io::Result<()> {
    screen.line(format_args!("showing {} stats...", title.to_lowercase()))?;
    screen.line(format_args!("{:>25}", format!("[ {title} STATS ]")))?;
    rule(screen, 33, '-')?;
    screen.line(format_args!("{:>14}{}: {}", "Lvl ", sheet.level, sheet.name))?;
    rule(screen, 33, '-')?;
    for (label, value) in [
        ("HP: ", sheet.max_health),
        ("Physical Damage: ", sheet.physical_damage),
        ("Magic Damage: ", sheet.magic_damage),
        ("Armor: ", sheet.armor),
        ("Magic Resist: ", sheet.magic_resist),
    ] {
        screen.line(format_args!("{label:>20}{value:.1}"))?;
    }
    rule(screen, 33, '-')
}
