//! Board representation.
//!
//! Contains the disc/player marker and the board state machine that
//! enforces move legality and performs capture.

pub mod player;
pub mod state;

pub use player::Player;
pub use state::{Board, BoardError, DIRECTIONS};
