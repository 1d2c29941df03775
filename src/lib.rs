//! Verso engine library.
//!
//! Exposes the board representation, game session, persistence contract,
//! and protocol modules for use by integration tests and the binary entry
//! point.

pub mod board;
pub mod persistence;
pub mod protocol;
pub mod session;
