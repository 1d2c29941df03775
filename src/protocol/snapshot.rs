//! Snapshot encoding and decoding.
//!
//! A snapshot is the line-oriented text form of a complete board: size,
//! clocks, scores, side to move, then one grid row per line as space
//! separated occupancy ordinals. The shape is fixed for interoperability
//! with existing save files:
//!
//! ```text
//! line 1:          <size>
//! line 2:          <time_white> <time_black>
//! line 3:          <score_white> <score_black>
//! line 4:          <current_player ordinal>
//! line 5..size+4:  <size ordinals separated by single spaces>
//! ```
//!
//! The encoder emits exactly this shape. The parser splits rows on
//! whitespace runs, so files whose rows carry a trailing space load
//! identically.

use crate::board::{Board, BoardError, Player};

/// Errors that can occur during snapshot parsing.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("missing {0} line")]
    MissingLine(&'static str),

    #[error("invalid board size: '{0}'")]
    InvalidSize(String),

    #[error("invalid clock line: '{0}'")]
    InvalidClocks(String),

    #[error("invalid score line: '{0}'")]
    InvalidScores(String),

    #[error("invalid player ordinal: '{0}'")]
    InvalidPlayer(String),

    #[error("grid row {row} has {got} cells, expected {expected}")]
    WrongRowLength {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid cell value: '{0}'")]
    InvalidCell(String),

    #[error("board rejected snapshot: {0}")]
    Board(#[from] BoardError),
}

/// Parses a line of exactly two non-negative integers.
fn parse_pair(line: &str) -> Option<(u32, u32)> {
    let mut tokens = line.split_whitespace();
    let first = tokens.next()?.parse().ok()?;
    let second = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((first, second))
}

/// Parses snapshot text into a `Board`.
pub fn parse_snapshot(text: &str) -> Result<Board, SnapshotError> {
    let mut lines = text.lines();

    let size_line = lines.next().ok_or(SnapshotError::MissingLine("size"))?;
    let size: usize = size_line
        .trim()
        .parse()
        .map_err(|_| SnapshotError::InvalidSize(size_line.to_string()))?;
    let mut board = Board::new(size)?;

    let clock_line = lines.next().ok_or(SnapshotError::MissingLine("clock"))?;
    let (time_white, time_black) =
        parse_pair(clock_line).ok_or_else(|| SnapshotError::InvalidClocks(clock_line.to_string()))?;
    board.set_times(time_white, time_black);

    let score_line = lines.next().ok_or(SnapshotError::MissingLine("score"))?;
    let (score_white, score_black) =
        parse_pair(score_line).ok_or_else(|| SnapshotError::InvalidScores(score_line.to_string()))?;
    board.set_scores(score_white, score_black);

    let player_line = lines
        .next()
        .ok_or(SnapshotError::MissingLine("current player"))?;
    let current = player_line
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(Player::from_ordinal)
        .ok_or_else(|| SnapshotError::InvalidPlayer(player_line.to_string()))?;
    board.set_current_player(current);

    for x in 0..size {
        let row_line = lines.next().ok_or(SnapshotError::MissingLine("grid row"))?;
        let tokens: Vec<&str> = row_line.split_whitespace().collect();
        if tokens.len() != size {
            return Err(SnapshotError::WrongRowLength {
                row: x,
                expected: size,
                got: tokens.len(),
            });
        }
        for (y, token) in tokens.iter().enumerate() {
            let cell = token
                .parse::<u8>()
                .ok()
                .and_then(Player::from_ordinal)
                .ok_or_else(|| SnapshotError::InvalidCell(token.to_string()))?;
            board.set_value(x, y, cell)?;
        }
    }

    Ok(board)
}

/// Encodes a `Board` into canonical snapshot text.
pub fn encode_snapshot(board: &Board) -> String {
    let size = board.size();
    let mut out = String::with_capacity((size + 1) * (2 * size + 2));

    out.push_str(&format!("{}\n", size));
    out.push_str(&format!("{} {}\n", board.time_white(), board.time_black()));
    out.push_str(&format!("{} {}\n", board.score_white(), board.score_black()));
    out.push_str(&format!("{}\n", board.current_player().ordinal()));

    for row in board.rows() {
        for (y, cell) in row.iter().enumerate() {
            if y > 0 {
                out.push(' ');
            }
            out.push_str(&format!("{}", cell.ordinal()));
        }
        out.push('\n');
    }

    out
}
