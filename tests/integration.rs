//! Integration tests for the verso engine binary.
//!
//! Tests full protocol sessions by spawning the engine process, sending
//! commands via stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the engine and collects stdout lines.
fn run_engine(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_verso");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start verso");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("verso-it-{}-{}", std::process::id(), name))
}

#[test]
fn newgame_announces_creation_and_shows_a_medium_board() {
    let lines = run_engine(&["newgame", "show", "quit"]);

    assert_eq!(lines[0], "created");
    // Snapshot header: size, clocks, scores, side to move.
    assert_eq!(lines[1], "20");
    assert_eq!(lines[2], "0 0");
    assert_eq!(lines[3], "2 2");
    assert_eq!(lines[4], "2");
    // 20 grid rows follow.
    assert_eq!(lines.len(), 5 + 20);
}

#[test]
fn size_choice_applies_to_the_next_game() {
    let lines = run_engine(&["size small", "newgame", "show", "quit"]);
    assert_eq!(lines[0], "created");
    assert_eq!(lines[1], "10");
    assert_eq!(lines.len(), 5 + 10);
}

#[test]
fn reference_step_updates_scores_and_turn() {
    let lines = run_engine(&["newgame", "step 8 9", "show", "quit"]);

    assert_eq!(lines[0], "created");
    assert_eq!(lines[1], "fields");
    // White 1, Black 4; White to move.
    assert_eq!(lines[4], "1 4");
    assert_eq!(lines[5], "1");
}

#[test]
fn illegal_steps_emit_nothing() {
    let lines = run_engine(&["newgame", "step 0 0", "step 8 9", "step 8 9", "quit"]);
    assert_eq!(lines, vec!["created", "fields"]);
}

#[test]
fn tick_moves_the_current_players_clock() {
    let lines = run_engine(&["newgame", "tick", "tick", "show", "quit"]);

    assert_eq!(&lines[..3], &["created", "time", "time"]);
    // Black is to move at game start, so only its clock advanced.
    assert_eq!(lines[4], "0 2");
}

#[test]
fn unknown_commands_are_skipped() {
    let lines = run_engine(&["dance", "newgame", "quit"]);
    assert_eq!(lines, vec!["created"]);
}

#[test]
fn save_then_load_restores_the_position() {
    let path = temp_path("roundtrip.verso");
    let path_str = path.to_str().unwrap();

    let lines = run_engine(&[
        "size small",
        "newgame",
        "step 3 4",
        "tick",
        &format!("save {}", path_str),
        "show",
        // Disturb the session thoroughly before loading.
        "size large",
        "newgame",
        &format!("load {}", path_str),
        "show",
        "quit",
    ]);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(&lines[..4], &["created", "fields", "time", "saved"]);
    let saved_show = &lines[4..4 + 14];
    assert_eq!(lines[4 + 14], "created"); // large newgame
    assert_eq!(lines[4 + 15], "created"); // load
    let loaded_show = &lines[4 + 16..4 + 16 + 14];
    assert_eq!(saved_show, loaded_show);
    assert_eq!(loaded_show[0], "10");
    // Black's move handed the turn to White, so the tick hit White's clock.
    assert_eq!(loaded_show[1], "1 0");
    assert_eq!(loaded_show[2], "1 4");
}

#[test]
fn failed_load_keeps_the_running_game() {
    let missing = temp_path("missing.verso");
    let lines = run_engine(&[
        "newgame",
        "step 8 9",
        "show",
        &format!("load {}", missing.to_str().unwrap()),
        "show",
        "quit",
    ]);

    assert_eq!(&lines[..2], &["created", "fields"]);
    let before = &lines[2..2 + 24];
    // No "created" line: the load failed on stderr and the board survived.
    let after = &lines[2 + 24..2 + 48];
    assert_eq!(before, after);
    assert_eq!(lines.len(), 2 + 48);
}

#[test]
fn malformed_save_file_is_rejected_gracefully() {
    let path = temp_path("garbage.verso");
    std::fs::write(&path, "definitely not a snapshot\n").unwrap();

    let lines = run_engine(&[
        "newgame",
        &format!("load {}", path.to_str().unwrap()),
        "show",
        "quit",
    ]);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(lines[0], "created");
    // Still the fresh medium board.
    assert_eq!(lines[1], "20");
    assert_eq!(lines[3], "2 2");
}

#[test]
fn loaded_endgame_position_finishes_on_a_double_pass() {
    // 4x4 position: Black captures at (0, 2), after which neither side has
    // a legal move and Black leads 3 to 1.
    let snapshot = "4\n0 0\n2 1\n2\n2 1 0 0\n0 0 0 0\n0 0 0 0\n0 0 0 1\n";
    let path = temp_path("endgame.verso");
    std::fs::write(&path, snapshot).unwrap();

    let lines = run_engine(&[
        &format!("load {}", path.to_str().unwrap()),
        "step 0 2",
        "quit",
    ]);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(lines, vec!["created", "fields", "gameover black 1 3"]);
}

#[test]
fn loaded_position_can_trigger_a_pass() {
    // 4x4 position: after Black's capture at (0, 2) White cannot answer,
    // but Black can, so the turn passes straight back.
    let snapshot = "4\n0 0\n3 2\n2\n2 1 0 0\n0 0 0 0\n1 1 0 0\n2 0 0 0\n";
    let path = temp_path("pass.verso");
    std::fs::write(&path, snapshot).unwrap();

    let lines = run_engine(&[
        &format!("load {}", path.to_str().unwrap()),
        "step 0 2",
        "show",
        "quit",
    ]);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(&lines[..3], &["created", "fields", "passed white"]);
    // Black is still to move.
    assert_eq!(lines[6], "2");
}

#[test]
fn legacy_rows_with_trailing_spaces_load() {
    let snapshot = "4\n0 0\n2 2\n2\n0 0 0 0 \n0 1 2 0 \n0 2 1 0 \n0 0 0 0 \n";
    let path = temp_path("legacy.verso");
    std::fs::write(&path, snapshot).unwrap();

    let lines = run_engine(&[
        &format!("load {}", path.to_str().unwrap()),
        "show",
        "quit",
    ]);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(lines[0], "created");
    assert_eq!(lines[1], "4");
    // Canonical re-encoding drops the padding.
    assert_eq!(lines[5], "0 0 0 0");
}
