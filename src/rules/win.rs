//! Line scanning and win detection
//!
//! A win is five or more contiguous same-color stones through the cell
//! that was just played. Only that cell is evaluated, so the check must
//! run immediately after each placement; there is no global board scan.
//! Overlines (six or more) also win.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal NE
];

/// Steps walked per side; runs longer than five decide nothing extra
const MAX_STEPS: i32 = 4;

/// Length of the contiguous run of `stone` through `pos` along one direction
///
/// Counts the cell itself as 1 (it is assumed to hold `stone`), then walks
/// outward along `+dir` and `-dir` independently, stopping at the board
/// edge or the first non-matching cell.
#[must_use]
pub fn run_length(board: &Board, pos: Pos, stone: Stone, dir: (i32, i32)) -> u32 {
    let (dx, dy) = dir;
    let size = board.size();
    let mut count = 1u32;

    // Positive direction
    for i in 1..=MAX_STEPS {
        let x = i32::from(pos.x) + dx * i;
        let y = i32::from(pos.y) + dy * i;
        if !Pos::is_valid(x, y, size) || board.at(Pos::new(x as u8, y as u8)) != stone {
            break;
        }
        count += 1;
    }

    // Negative direction
    for i in 1..=MAX_STEPS {
        let x = i32::from(pos.x) - dx * i;
        let y = i32::from(pos.y) - dy * i;
        if !Pos::is_valid(x, y, size) || board.at(Pos::new(x as u8, y as u8)) != stone {
            break;
        }
        count += 1;
    }

    count
}

/// Maximum run length through `pos` over the four line orientations
#[must_use]
pub fn max_run(board: &Board, pos: Pos, stone: Stone) -> u32 {
    DIRECTIONS
        .iter()
        .map(|&dir| run_length(board, pos, stone, dir))
        .max()
        .unwrap_or(1)
}

/// Check whether a stone just played at `pos` completes a line of five
#[inline]
#[must_use]
pub fn check_win(board: &Board, pos: Pos, stone: Stone) -> bool {
    max_run(board, pos, stone) >= 5
}
