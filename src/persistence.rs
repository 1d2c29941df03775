//! Storage contract for saved games.
//!
//! The session consumes `DataAccess` without caring what stands behind it;
//! the shipped implementation reads and writes snapshot text through the
//! filesystem, and tests substitute in-memory fakes. Every transport or
//! parse failure surfaces as `DataError`, the one error kind a caller is
//! expected to catch and recover from.

use std::fs;
use std::path::Path;

use crate::board::Board;
use crate::protocol::snapshot::{encode_snapshot, parse_snapshot, SnapshotError};

/// Errors crossing the persistence boundary.
///
/// Save files are untrusted external data: a failure here must leave the
/// in-memory game intact and never abort the process.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("save file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed save file: {0}")]
    Malformed(#[from] SnapshotError),
}

/// Load/save contract consumed by the game session.
pub trait DataAccess {
    /// Reconstructs a board from the snapshot at `path`.
    fn load(&self, path: &Path) -> Result<Board, DataError>;

    /// Writes the board's snapshot to `path`.
    fn save(&self, path: &Path, board: &Board) -> Result<(), DataError>;
}

/// Snapshot persistence over the local filesystem.
pub struct FileDataAccess;

impl DataAccess for FileDataAccess {
    fn load(&self, path: &Path) -> Result<Board, DataError> {
        let text = fs::read_to_string(path)?;
        Ok(parse_snapshot(&text)?)
    }

    fn save(&self, path: &Path, board: &Board) -> Result<(), DataError> {
        fs::write(path, encode_snapshot(board))?;
        Ok(())
    }
}
