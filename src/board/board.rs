//! Board structure with bounds-checked access

use crate::OmokError;

use super::{Pos, Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Game board: a runtime-sized square grid of cells
///
/// Cells only ever transition from `Empty` to a stone through [`Board::place`].
/// The unchecked `place_stone`/`remove_stone` pair exists for speculative
/// probes by the opponent policy and must always be used together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
}

impl Board {
    /// Create an all-empty board
    ///
    /// Fails with [`OmokError::BoardTooSmall`] if a five-in-a-row could
    /// never fit, or [`OmokError::BoardTooLarge`] if `size` exceeds what
    /// [`Pos`] coordinates can address.
    pub fn new(size: usize) -> Result<Self, OmokError> {
        if size < MIN_BOARD_SIZE {
            return Err(OmokError::BoardTooSmall(size));
        }
        if size > MAX_BOARD_SIZE {
            return Err(OmokError::BoardTooLarge(size));
        }
        Ok(Self {
            size,
            cells: vec![Stone::Empty; size * size],
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Center cell, `floor(size / 2)` on both axes
    #[inline]
    pub fn center(&self) -> Pos {
        let mid = (self.size / 2) as u8;
        Pos::new(mid, mid)
    }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        (pos.x as usize) < self.size && (pos.y as usize) < self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.y as usize * self.size + pos.x as usize
    }

    /// Get stone at position
    pub fn get(&self, pos: Pos) -> Result<Stone, OmokError> {
        if !self.in_bounds(pos) {
            return Err(OmokError::OutOfBounds);
        }
        Ok(self.cells[self.index(pos)])
    }

    /// Read a cell that is known to be in bounds
    #[inline]
    pub(crate) fn at(&self, pos: Pos) -> Stone {
        debug_assert!(self.in_bounds(pos));
        self.cells[self.index(pos)]
    }

    /// Check if position is empty (false when out of bounds)
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.at(pos) == Stone::Empty
    }

    /// Place a stone as a game move
    ///
    /// Fails with `OutOfBounds` or `CellOccupied`; the board is left
    /// untouched on failure.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<(), OmokError> {
        if !self.in_bounds(pos) {
            return Err(OmokError::OutOfBounds);
        }
        let idx = self.index(pos);
        if self.cells[idx] != Stone::Empty {
            return Err(OmokError::CellOccupied);
        }
        self.cells[idx] = stone;
        Ok(())
    }

    /// Set a cell without occupancy checks (speculative probes only)
    /// Use `place` for game moves
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.in_bounds(pos));
        match stone {
            Stone::Black | Stone::White => {
                let idx = self.index(pos);
                self.cells[idx] = stone;
            }
            Stone::Empty => {}
        }
    }

    /// Restore a cell to empty (speculative probes only)
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        debug_assert!(self.in_bounds(pos));
        let idx = self.index(pos);
        self.cells[idx] = Stone::Empty;
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Stone::Empty).count()
    }

    /// True iff no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Stone::Empty)
    }

    /// Reset every cell to empty, keeping the size
    pub fn clear(&mut self) {
        self.cells.fill(Stone::Empty);
    }
}
