//! Game session management.
//!
//! Holds the current board, the configured size choice, and the injected
//! persistence backend; sequences turns, advances the clock, resolves
//! passes, and raises typed notifications through an `EventSink` supplied
//! per call. The session is the sole mutator of its board.

use std::cmp::Ordering;
use std::path::Path;

use crate::board::{Board, BoardError, Player};
use crate::persistence::DataAccess;

/// The three board sizes reachable through normal game creation.
///
/// Arbitrary even sizes above 2 remain valid at the board level and can
/// enter a session through the load path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeChoice {
    Small,
    Medium,
    Large,
}

impl SizeChoice {
    /// Returns the board edge length for this choice.
    pub const fn cells(self) -> usize {
        match self {
            SizeChoice::Small => 10,
            SizeChoice::Medium => 20,
            SizeChoice::Large => 30,
        }
    }

    /// Maps a board edge length back to a choice, if it is one of the three.
    pub fn from_cells(size: usize) -> Option<SizeChoice> {
        match size {
            10 => Some(SizeChoice::Small),
            20 => Some(SizeChoice::Medium),
            30 => Some(SizeChoice::Large),
            _ => None,
        }
    }
}

/// A state-change notification raised by the session.
///
/// These carry no UI semantics; hosts map them to rendering, dialogs, or
/// anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh or loaded board replaced the previous one; rebuild any
    /// presentation state.
    GameCreated,

    /// A move mutated the grid.
    FieldsChanged,

    /// The current player's clock gained a second.
    TimeAdvanced,

    /// The named side had no legal move and its turn was skipped.
    PlayerPassed(Player),

    /// The game ended. `winner` is `Player::None` for a draw.
    GameOver {
        winner: Player,
        score_white: u32,
        score_black: u32,
    },
}

/// Receives session notifications.
///
/// Implemented for every `FnMut(GameEvent)`, so a closure pushing into a
/// `Vec` or writing protocol lines is already a sink.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

impl<F: FnMut(GameEvent)> EventSink for F {
    fn emit(&mut self, event: GameEvent) {
        self(event)
    }
}

/// Orchestrates games over an owned board and an injected storage backend.
pub struct GameSession<D> {
    data_access: D,
    board: Board,
    size_choice: SizeChoice,
}

impl<D: DataAccess> GameSession<D> {
    /// Creates a session holding a fresh default (Medium) board.
    pub fn new(data_access: D) -> GameSession<D> {
        GameSession {
            data_access,
            board: fresh_board(SizeChoice::Medium),
            size_choice: SizeChoice::Medium,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size_choice(&self) -> SizeChoice {
        self.size_choice
    }

    /// Sets the size used by the next `new_game`.
    pub fn set_size_choice(&mut self, choice: SizeChoice) {
        self.size_choice = choice;
    }

    /// Returns whether the game has ended: either side wiped out, or no
    /// empty cell remains.
    pub fn is_game_over(&self) -> bool {
        self.board.score_white() == 0 || self.board.score_black() == 0 || self.board.is_filled()
    }

    /// Replaces the board with a fresh one sized per the current choice.
    pub fn new_game<S: EventSink>(&mut self, sink: &mut S) {
        self.board = fresh_board(self.size_choice);
        sink.emit(GameEvent::GameCreated);
    }

    /// Adds a second to the current player's clock. No-op once the game is
    /// over; time is only accounted while a side is to move.
    pub fn advance_time<S: EventSink>(&mut self, sink: &mut S) -> Result<(), BoardError> {
        if self.is_game_over() {
            return Ok(());
        }
        self.board.increase_time()?;
        sink.emit(GameEvent::TimeAdvanced);
        Ok(())
    }

    /// Attempts a move for the side to move.
    ///
    /// An illegal target is ignored silently; a successful move emits
    /// `FieldsChanged`, then either ends the game or resolves whose turn it
    /// is next. Out-of-range coordinates are a caller bug and propagate.
    pub fn step<S: EventSink>(
        &mut self,
        x: usize,
        y: usize,
        sink: &mut S,
    ) -> Result<(), BoardError> {
        if self.is_game_over() {
            return Ok(());
        }
        if !self.board.make_move(x, y)? {
            return Ok(());
        }

        sink.emit(GameEvent::FieldsChanged);

        if self.is_game_over() {
            self.emit_game_over(sink);
        } else {
            self.resolve_turn(sink);
        }
        Ok(())
    }

    /// Loads a saved game through the injected backend.
    ///
    /// On success the owned board is replaced atomically, the size choice is
    /// re-derived when the loaded size is one of the three standard ones,
    /// and `GameCreated` fires. On failure the previous board stays intact.
    pub fn load_game<S: EventSink>(
        &mut self,
        path: &Path,
        sink: &mut S,
    ) -> Result<(), crate::persistence::DataError> {
        let board = self.data_access.load(path)?;
        if let Some(choice) = SizeChoice::from_cells(board.size()) {
            self.size_choice = choice;
        }
        self.board = board;
        sink.emit(GameEvent::GameCreated);
        Ok(())
    }

    /// Saves the current board unchanged through the injected backend.
    pub fn save_game(&self, path: &Path) -> Result<(), crate::persistence::DataError> {
        self.data_access.save(path, &self.board)
    }

    /// Move-driven pass resolution.
    ///
    /// After a successful move the turn sits with the mover's opponent. If
    /// the opponent has no legal move, the turn returns to the mover and the
    /// skip is announced; if the mover is then also stuck, the game ends on
    /// a double pass.
    fn resolve_turn<S: EventSink>(&mut self, sink: &mut S) {
        if self.board.has_any_valid_move() {
            return;
        }
        let skipped = self.board.current_player();
        self.board.set_current_player(skipped.opponent());
        if self.board.has_any_valid_move() {
            sink.emit(GameEvent::PlayerPassed(skipped));
        } else {
            self.emit_game_over(sink);
        }
    }

    fn emit_game_over<S: EventSink>(&self, sink: &mut S) {
        let score_white = self.board.score_white();
        let score_black = self.board.score_black();
        let winner = match score_white.cmp(&score_black) {
            Ordering::Greater => Player::White,
            Ordering::Less => Player::Black,
            Ordering::Equal => Player::None,
        };
        sink.emit(GameEvent::GameOver {
            winner,
            score_white,
            score_black,
        });
    }
}

fn fresh_board(choice: SizeChoice) -> Board {
    Board::new(choice.cells()).expect("size choices map to valid board sizes")
}
