//! Verso -- a Reversi engine driven over a line protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Session notifications are rendered as single lines, so a host process
//! (or a human in a terminal) can wire a full game without linking the
//! library.

use std::io::{self, BufRead, Write};
use std::path::Path;

use verso::board::Player;
use verso::persistence::FileDataAccess;
use verso::protocol::parser::{parse_command, Command};
use verso::protocol::snapshot::encode_snapshot;
use verso::session::{GameEvent, GameSession};

/// Renders one session notification as a protocol line.
fn write_event<W: Write>(out: &mut W, event: GameEvent) {
    match event {
        GameEvent::GameCreated => writeln!(out, "created").unwrap(),
        GameEvent::FieldsChanged => writeln!(out, "fields").unwrap(),
        GameEvent::TimeAdvanced => writeln!(out, "time").unwrap(),
        GameEvent::PlayerPassed(player) => {
            writeln!(out, "passed {}", side_name(player)).unwrap()
        }
        GameEvent::GameOver {
            winner,
            score_white,
            score_black,
        } => writeln!(
            out,
            "gameover {} {} {}",
            winner_name(winner),
            score_white,
            score_black
        )
        .unwrap(),
    }
}

fn side_name(player: Player) -> &'static str {
    match player {
        Player::White => "white",
        Player::Black => "black",
        Player::None => "none",
    }
}

fn winner_name(winner: Player) -> &'static str {
    match winner {
        Player::None => "draw",
        other => side_name(other),
    }
}

/// Runs the main protocol loop, reading commands from stdin and writing
/// responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = GameSession::new(FileDataAccess);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::NewGame => {
                let mut sink = |e| write_event(&mut out, e);
                session.new_game(&mut sink);
            }
            Command::Size(choice) => {
                session.set_size_choice(choice);
            }
            Command::Step { x, y } => {
                let mut sink = |e| write_event(&mut out, e);
                if let Err(e) = session.step(x, y, &mut sink) {
                    eprintln!("step rejected: {}", e);
                }
            }
            Command::Tick => {
                let mut sink = |e| write_event(&mut out, e);
                if let Err(e) = session.advance_time(&mut sink) {
                    eprintln!("tick rejected: {}", e);
                }
            }
            Command::Show => {
                out.write_all(encode_snapshot(session.board()).as_bytes())
                    .unwrap();
            }
            Command::Save(path) => match session.save_game(Path::new(&path)) {
                Ok(()) => writeln!(out, "saved").unwrap(),
                Err(e) => eprintln!("save failed: {}", e),
            },
            Command::Load(path) => {
                let mut sink = |e| write_event(&mut out, e);
                if let Err(e) = session.load_game(Path::new(&path), &mut sink) {
                    eprintln!("load failed: {}", e);
                }
            }
            Command::Quit => {
                break;
            }
        }

        out.flush().unwrap();
    }
}
