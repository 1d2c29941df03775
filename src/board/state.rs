//! Board state and move execution.
//!
//! Holds the complete snapshot of a Reversi game at a given point in time:
//! the grid of disc occupancies, both scores, both clocks, and the side to
//! move. The board is the single source of truth for move legality and
//! disc-flipping capture.

use super::player::Player;

/// The eight compass directions as `(dx, dy)` offsets.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Errors raised by board construction and coordinate access.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("board size must be even and greater than 2, got {0}")]
    InvalidSize(usize),

    #[error("coordinate ({x}, {y}) is outside the {size}x{size} board")]
    OutOfRange { x: usize, y: usize, size: usize },

    #[error("no player is to move")]
    InvalidState,
}

/// Complete game position: grid, scores, clocks, and side to move.
///
/// Scores are maintained incrementally by `make_move` and always equal the
/// disc counts in the grid. A board is replaced wholesale on new-game and
/// load; nothing outside this module mutates its internals field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major occupancies; index `x * size + y`.
    cells: Vec<Player>,
    score_white: u32,
    score_black: u32,
    time_white: u32,
    time_black: u32,
    current_player: Player,
}

impl Board {
    /// Creates a board with the standard four-disc opening.
    ///
    /// The two cells on the main-diagonal side of the center are White, the
    /// other two Black; Black moves first. Fails with `InvalidSize` for odd
    /// sizes and sizes of 2 or less.
    pub fn new(size: usize) -> Result<Board, BoardError> {
        if size <= 2 || size % 2 == 1 {
            return Err(BoardError::InvalidSize(size));
        }

        let mut board = Board {
            size,
            cells: vec![Player::None; size * size],
            score_white: 2,
            score_black: 2,
            time_white: 0,
            time_black: 0,
            current_player: Player::Black,
        };

        let mid = size / 2;
        board.cells[mid * size + mid] = Player::White;
        board.cells[(mid - 1) * size + (mid - 1)] = Player::White;
        board.cells[(mid - 1) * size + mid] = Player::Black;
        board.cells[mid * size + (mid - 1)] = Player::Black;

        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn score_white(&self) -> u32 {
        self.score_white
    }

    pub fn score_black(&self) -> u32 {
        self.score_black
    }

    pub fn time_white(&self) -> u32 {
        self.time_white
    }

    pub fn time_black(&self) -> u32 {
        self.time_black
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the occupancy at `(x, y)`, or `OutOfRange`.
    pub fn value(&self, x: usize, y: usize) -> Result<Player, BoardError> {
        self.ensure_in_range(x, y)?;
        Ok(self.cells[x * self.size + y])
    }

    /// Returns whether the cell at `(x, y)` is empty, or `OutOfRange`.
    pub fn is_empty(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        Ok(self.value(x, y)? == Player::None)
    }

    /// Writes a single cell without touching the scores.
    ///
    /// Used by the snapshot codec while reconstructing a board and by test
    /// fixtures; regular play goes through `make_move`.
    pub fn set_value(&mut self, x: usize, y: usize, player: Player) -> Result<(), BoardError> {
        self.ensure_in_range(x, y)?;
        self.cells[x * self.size + y] = player;
        Ok(())
    }

    /// Overwrites both scores. Deserialization only.
    pub fn set_scores(&mut self, white: u32, black: u32) {
        self.score_white = white;
        self.score_black = black;
    }

    /// Overwrites both clocks. Deserialization only.
    pub fn set_times(&mut self, white: u32, black: u32) {
        self.time_white = white;
        self.time_black = black;
    }

    /// Hands the turn to `player`.
    ///
    /// The session's pass resolution and the snapshot codec both set this
    /// directly; during active play the value is never `None`.
    pub fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    /// Adds one second to the clock of the side to move.
    pub fn increase_time(&mut self) -> Result<(), BoardError> {
        match self.current_player {
            Player::White => self.time_white += 1,
            Player::Black => self.time_black += 1,
            Player::None => return Err(BoardError::InvalidState),
        }
        Ok(())
    }

    /// Returns whether placing the current player's disc at `(x, y)` is
    /// legal: the cell is on the board, empty, and at least one direction
    /// yields a non-zero capture run.
    pub fn is_valid_move(&self, x: usize, y: usize) -> bool {
        if x >= self.size || y >= self.size || self.cells[x * self.size + y] != Player::None {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&(dx, dy)| self.captured_in_direction(x, y, dx, dy) > 0)
    }

    /// Executes a move for the current player.
    ///
    /// An illegal target returns `Ok(false)` with the board untouched. A
    /// legal move places the disc, flips every captured run in all eight
    /// directions, credits the mover with one plus the capture total while
    /// debiting the opponent the capture total, and hands the turn over.
    /// Out-of-range coordinates are a caller bug and error out.
    pub fn make_move(&mut self, x: usize, y: usize) -> Result<bool, BoardError> {
        self.ensure_in_range(x, y)?;
        if self.current_player == Player::None {
            return Err(BoardError::InvalidState);
        }
        if !self.is_valid_move(x, y) {
            return Ok(false);
        }

        let mover = self.current_player;
        self.cells[x * self.size + y] = mover;

        let mut captured = 0;
        for (dx, dy) in DIRECTIONS {
            let run = self.captured_in_direction(x, y, dx, dy);
            let mut cx = x as i32;
            let mut cy = y as i32;
            for _ in 0..run {
                cx += dx;
                cy += dy;
                self.cells[cx as usize * self.size + cy as usize] = mover;
            }
            captured += run as u32;
        }

        match mover {
            Player::White => {
                self.score_white += 1 + captured;
                self.score_black -= captured;
            }
            Player::Black => {
                self.score_black += 1 + captured;
                self.score_white -= captured;
            }
            Player::None => unreachable!("guarded above"),
        }

        self.current_player = mover.opponent();
        Ok(true)
    }

    /// Returns whether any cell is a legal move for the current player.
    pub fn has_any_valid_move(&self) -> bool {
        for x in 0..self.size {
            for y in 0..self.size {
                if self.is_valid_move(x, y) {
                    return true;
                }
            }
        }
        false
    }

    /// Returns whether no empty cell remains.
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|&c| c != Player::None)
    }

    /// Iterates the grid row by row, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[Player]> {
        self.cells.chunks(self.size)
    }

    /// Walks outward from `(x, y)` along `(dx, dy)` and returns the length
    /// of the contiguous run of opposing discs, provided the run is
    /// terminated in-bounds by one of the current player's discs. An empty
    /// cell or the board edge voids the run.
    ///
    /// The same walk backs `is_valid_move` and `make_move`, so validity and
    /// execution can never disagree.
    fn captured_in_direction(&self, x: usize, y: usize, dx: i32, dy: i32) -> usize {
        let size = self.size as i32;
        let mut cx = x as i32 + dx;
        let mut cy = y as i32 + dy;
        let mut run = 0;

        while cx >= 0 && cy >= 0 && cx < size && cy < size {
            let cell = self.cells[cx as usize * self.size + cy as usize];
            if cell == self.current_player {
                return run;
            }
            if cell == Player::None {
                return 0;
            }
            run += 1;
            cx += dx;
            cy += dy;
        }

        // Walked off the board before reaching a terminating disc.
        0
    }

    fn ensure_in_range(&self, x: usize, y: usize) -> Result<(), BoardError> {
        if x >= self.size || y >= self.size {
            return Err(BoardError::OutOfRange {
                x,
                y,
                size: self.size,
            });
        }
        Ok(())
    }
}
