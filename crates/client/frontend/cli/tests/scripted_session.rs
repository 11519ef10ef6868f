use std::io::Cursor;

use client_frontend_cli::{CliConfig, CliFrontend, Frontend};
use client_frontend_core::{FrontendConfig, MessageConfig, PacingConfig};
use game_core::{EnemyRoster, EnemyTemplate};
use runtime::{GamePhase, Runtime};

fn frontend_config() -> FrontendConfig {
    FrontendConfig::new(PacingConfig::instant(), MessageConfig::default())
}

/// Run a scripted session and return everything written to the terminal.
fn play(runtime: &mut Runtime, cli_config: CliConfig, script: impl AsRef<[u8]>) -> String {
    let mut frontend = CliFrontend::new(
        frontend_config(),
        cli_config,
        Cursor::new(script.as_ref().to_vec()),
        Vec::new(),
    );
    frontend.run(runtime).unwrap();
    String::from_utf8(frontend.into_writer()).unwrap()
}

fn runtime_against(enemy: EnemyTemplate) -> Runtime {
    Runtime::builder()
        .roster(EnemyRoster {
            difficulty1: vec![enemy],
            ..EnemyRoster::default()
        })
        .seed(11)
        .build()
        .unwrap()
}

#[test]
fn exit_from_main_menu() {
    let mut runtime = Runtime::builder().seed(1).build().unwrap();
    let output = play(&mut runtime, CliConfig::plain(), "2\n");

    assert!(output.starts_with("| A Hero's Journey |\n"));
    assert!(output.contains("    [1] | Start\n    [2] | Exit\n"));
    assert!(output.ends_with("exiting game...\n"));
    assert_eq!(runtime.encounters(), 0);
}

#[test]
fn main_menu_reprompts_on_bad_input() {
    let mut runtime = Runtime::builder().seed(1).build().unwrap();
    let output = play(&mut runtime, CliConfig::plain(), "abc\n9\n2\n");

    assert!(output.contains("Please enter a number.\n"));
    assert!(output.contains("Invalid Choice.\n"));
    assert_eq!(output.matches("| A Hero's Journey |").count(), 3);
    assert!(output.ends_with("exiting game...\n"));
}

#[test]
fn non_utf8_line_reprompts() {
    let mut runtime = Runtime::builder().seed(1).build().unwrap();
    let output = play(&mut runtime, CliConfig::plain(), b"\xff\xfe\n2\n");

    assert!(output.contains("Please enter a number.\n"));
    assert_eq!(output.matches("| A Hero's Journey |").count(), 2);
    assert!(output.ends_with("exiting game...\n"));
}

#[test]
fn end_of_input_leaves_cleanly() {
    let mut runtime = Runtime::builder().seed(1).build().unwrap();
    let output = play(&mut runtime, CliConfig::plain(), "");

    assert!(output.ends_with(">> "));
}

#[test]
fn winning_fight_levels_up_and_moves_on() {
    // Quick Strike finishes the one-health gnat before it can swing.
    let mut runtime = runtime_against(EnemyTemplate::new("Gnat", 1, 1.0, 9.0, 0.0, 0.0, 0.0));
    let output = play(&mut runtime, CliConfig::plain(), "1\n1\n3\n2\n");

    for line in [
        "Knight has encountered a Gnat!",
        "Preparing for battle...",
        "[1] || Sword Slash",
        "Knight used Quick Strike!",
        "Gnat | HP: 0.0 / 1.0",
        "Gnat defeated!",
        "Knight gained 5 XP!",
        "Level Up!",
        "[ Knight ]",
        "Lvl. 1 >> Lvl. 2",
        "Physical Damage upgraded!",
    ] {
        assert!(output.contains(line), "missing {line:?} in:\n{output}");
    }
    assert!(!output.contains("Gnat attacks!"));
    // Once per encounter; the combat screen replays turn narration only.
    assert_eq!(output.matches("Knight has encountered a Gnat!").count(), 2);

    assert_eq!(runtime.player().level(), 2);
    assert_eq!(runtime.player().entity.physical_damage(), 4.5);
    assert_eq!(runtime.phase(), GamePhase::PlayerTurn);
}

#[test]
fn defeat_reports_and_offers_level_up() {
    let mut runtime = runtime_against(EnemyTemplate::new("Ogre", 2, 500.0, 20.0, 0.0, 0.0, 0.0));
    let output = play(&mut runtime, CliConfig::plain(), "1\n1\n2\n");

    assert!(output.contains("Ogre attacks!\n"));
    assert!(output.contains("Knight | HP: 0.0 / 10.0\n"));
    assert!(output.contains("Ogre dealt 20.0 damage\n"));
    assert!(output.contains("Knight has been defeated!\n"));
    assert!(output.contains("Knight gained 10 XP!\n"));
    assert_eq!(runtime.phase(), GamePhase::LevelUp);
}

#[test]
fn combat_errors_reprompt_without_consuming_the_turn() {
    let mut runtime = runtime_against(EnemyTemplate::new("Dummy", 1, 50.0, 1.0, 0.0, 0.0, 0.0));
    let output = play(&mut runtime, CliConfig::plain(), "1\n7\nx\n1\n9\n5\n");

    assert!(output.contains("Invalid Move.\n"));
    assert!(output.contains("Please enter a number.\n"));
    assert!(output.contains("Invalid Attack.\n"));
    assert_eq!(runtime.phase(), GamePhase::PlayerTurn);
    assert_eq!(runtime.session().unwrap().enemy_health().current, 50.0);
}

#[test]
fn debug_menu_shows_stats_and_levels_up() {
    let mut runtime = Runtime::builder().seed(1).build().unwrap();
    let config = CliConfig {
        debug_menu: true,
        ..CliConfig::plain()
    };
    let output = play(&mut runtime, config, "1\ny\n2\ny\n4\n3\ny\n5\n");

    assert!(output.starts_with("|      DEBUG MENU      |\n"));
    assert!(output.contains("[ PLAYER STATS ]"));
    assert!(output.contains("Lvl 1: Knight\n"));
    assert!(output.contains("[ ENEMY STATS ]"));
    assert!(output.contains("Lvl 1: Enemy\n"));
    assert!(output.contains("Lvl. 1 >> Lvl. 2\n"));
    assert!(output.contains("Magic Damage upgraded!\n"));
    assert!(output.ends_with("exit debugging...\n"));

    assert_eq!(runtime.player().level(), 2);
    assert_eq!(runtime.encounters(), 0);
}

#[test]
fn debug_menu_exits_unless_confirmed() {
    let mut runtime = Runtime::builder().seed(1).build().unwrap();
    let config = CliConfig {
        debug_menu: true,
        ..CliConfig::plain()
    };
    let output = play(&mut runtime, config, "1\nn\n");

    assert!(output.ends_with("Back to Menu[y]?: "));
    assert_eq!(output.matches("DEBUG MENU").count(), 1);
}
