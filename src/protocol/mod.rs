//! Control-protocol handling.
//!
//! This module implements the text surfaces of the engine: the snapshot
//! codec used by persistence, and the command parser for the binary's
//! stdin/stdout loop.

pub mod parser;
pub mod snapshot;

pub use parser::{parse_command, Command};
pub use snapshot::{encode_snapshot, parse_snapshot, SnapshotError};
