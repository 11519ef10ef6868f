use runtime::{GamePhase, Runtime};

/// Play a fixed script of selections and collect everything that happened.
fn play(seed: u64) -> Vec<String> {
    let mut runtime = Runtime::builder().seed(seed).build().unwrap();
    let mut log = Vec::new();

    for _ in 0..200 {
        let events = match runtime.phase() {
            GamePhase::AwaitingEncounter => runtime.start_encounter(),
            GamePhase::PlayerTurn => runtime.choose_command(1),
            GamePhase::SelectingMove => runtime.choose_move(1),
            GamePhase::LevelUp => runtime.choose_stat(2),
        }
        .unwrap();
        log.extend(events.iter().map(|event| format!("{event:?}")));
    }

    log
}

#[test]
fn same_seed_replays_the_same_session() {
    assert_eq!(play(42), play(42));
}

#[test]
fn session_keeps_cycling_encounters() {
    let mut runtime = Runtime::builder().seed(9).build().unwrap();

    while runtime.encounters() < 5 {
        match runtime.phase() {
            GamePhase::AwaitingEncounter => runtime.start_encounter(),
            GamePhase::PlayerTurn => runtime.choose_command(1),
            GamePhase::SelectingMove => runtime.choose_move(1),
            GamePhase::LevelUp => runtime.choose_stat(1),
        }
        .unwrap();
    }

    assert!(runtime.player().level() > 1);
}

#[test]
fn roster_and_config_files_override_builtins() {
    let dir = tempfile::tempdir().unwrap();
    let roster_path = dir.path().join("roster.ron");
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &roster_path,
        r#"(
            difficulty1: [(name: "Rat", level: 2, health: 1.0, physical_damage: 1.0,
                           magic_damage: 0.0, armor: 0.0, magic_resist: 0.0)],
            difficulty2: [], difficulty3: [], difficulty4: [], difficulty5: [], boss: [],
        )"#,
    )
    .unwrap();
    std::fs::write(&config_path, "xp_per_enemy_level = 1\n").unwrap();

    let config = runtime::RuntimeConfig {
        roster_path: Some(roster_path),
        config_path: Some(config_path),
        ..Default::default()
    };
    let mut runtime = Runtime::builder().config(config).seed(5).build().unwrap();

    assert_eq!(runtime.game_config().xp_per_enemy_level, 1);
    runtime.start_encounter().unwrap();
    assert_eq!(runtime.session().unwrap().enemy().name, "Rat");
}

#[test]
fn missing_roster_file_fails_to_build() {
    let config = runtime::RuntimeConfig {
        roster_path: Some("/nonexistent/roster.ron".into()),
        ..Default::default()
    };

    let result = Runtime::builder().config(config).seed(5).build();

    assert!(matches!(result, Err(runtime::RuntimeError::Content(_))));
}
