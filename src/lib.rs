//! Omok (five-in-a-row) game engine
//!
//! A synchronous game-state engine for Omok/Gomoku against a rule-based
//! computer opponent:
//! - Square board of runtime size (default 15x15)
//! - 5-in-a-row to win (overlines allowed)
//! - Priority-cascade opponent: win, block, attack, deny, fallback
//! - Human plays Black and moves first
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bounds-checked access
//! - [`rules`]: Line scanning and win detection
//! - [`policy`]: The opponent's heuristic move-selection cascade
//! - [`game`]: The turn state machine exposed to callers
//!
//! # Quick Start
//!
//! ```
//! use omok::{Game, Pos, Turn};
//!
//! // Seeded game so the opponent's fallback choices are reproducible
//! let mut game = Game::with_seed(15, 42).unwrap();
//!
//! // One human move; the opponent replies inside the same call
//! let outcome = game.submit_move(Pos::new(7, 7)).unwrap();
//! assert_eq!(outcome.placements.len(), 2);
//! assert_eq!(game.turn(), Turn::Human);
//! ```
//!
//! # Opponent Priority
//!
//! The opponent evaluates a strict cascade and plays the first hit:
//! 1. Complete its own five-in-a-row
//! 2. Block the human's five-in-a-row
//! 3. Extend to a run of four
//! 4. Deny the human a run of four
//! 5. Extend to a run of three
//! 6. Deny the human a run of three
//! 7. Positional fallback biased toward the board center

use thiserror::Error;

pub mod board;
pub mod game;
pub mod policy;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use game::{Game, GameOutcome, MoveOutcome, Turn};
pub use policy::{CascadePolicy, PolicyMove, Stage};

/// Errors that can occur during game play
///
/// All variants are recoverable by the caller: a failed operation never
/// mutates the board or the turn state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OmokError {
    /// The position is outside the board
    #[error("position is outside the board")]
    OutOfBounds,

    /// The target cell already has a stone
    #[error("cell is already occupied")]
    CellOccupied,

    /// A human move was submitted while the engine is not accepting one
    #[error("not accepting a human move right now")]
    NotYourTurn,

    /// A move was submitted after the game ended
    #[error("the game is already finished")]
    GameFinished,

    /// The requested board cannot fit a five-in-a-row
    #[error("board size {0} cannot fit five in a row")]
    BoardTooSmall(usize),

    /// The requested board exceeds the addressable coordinate range
    #[error("board size {0} exceeds the maximum of 255")]
    BoardTooLarge(usize),
}
