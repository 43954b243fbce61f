//! Board representation for Omok

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Default board size (15x15, as on a standard Omok board)
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Smallest board on which a five-in-a-row is geometrically possible
pub const MIN_BOARD_SIZE: usize = 5;

/// Largest addressable board (`Pos` coordinates are `u8`)
pub const MAX_BOARD_SIZE: usize = 255;

/// Stone colors
///
/// `Black` is the human side and moves first; `White` is the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }
}

/// Position on the board
///
/// `x` is the column, `y` the row. Storage and scanning are both
/// row-major, so `(x, y)` means the same cell everywhere in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Check signed coordinates against a board of the given size
    #[inline]
    pub fn is_valid(x: i32, y: i32, size: usize) -> bool {
        x >= 0 && x < size as i32 && y >= 0 && y < size as i32
    }
}
