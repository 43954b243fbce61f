//! Priority-cascade opponent policy
//!
//! The opponent picks its move as the first hit of a strictly ordered
//! cascade, each step an exhaustive scan over every empty cell in
//! row-major order (ties go to the earliest-scanned cell):
//!
//! 1. **Own win**: a cell that completes the opponent's five-in-a-row
//! 2. **Block win**: a cell that would complete the human's five
//! 3. **Attack**: a cell reaching an own run of at least four
//! 4. **Block attack**: a cell the human could use for a run of four
//! 5. **Build three**: same as attack with threshold three
//! 6. **Block three**: same as block attack with threshold three
//! 7. **Positional fallback**: center proximity plus random jitter
//!
//! Steps 1-2 use speculative placement (place, check, restore); steps 3-6
//! only measure run lengths, which already count the candidate cell as
//! occupied. The cascade performs no look-ahead beyond this single ply.

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, trace};

use crate::board::{Board, Pos, Stone};
use crate::rules::{check_win, max_run};

/// Cascade step that produced a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Completes the opponent's own five-in-a-row
    OwnWin,
    /// Denies the human's five-in-a-row
    BlockWin,
    /// Extends an own run to four or more
    Attack,
    /// Denies a human run of four or more
    BlockAttack,
    /// Extends an own run to three or more
    BuildThree,
    /// Denies a human run of three or more
    BlockThree,
    /// Center-biased positional fallback
    Positional,
}

/// A selected move together with the cascade step that found it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyMove {
    pub pos: Pos,
    pub stage: Stage,
}

/// Rule-based opponent policy
///
/// Holds only the random source for the fallback step; it never retains
/// board state. Speculative probes made during [`CascadePolicy::choose`]
/// are always rolled back before the call returns.
///
/// # Example
///
/// ```
/// use omok::{Board, CascadePolicy, Stone, Stage};
///
/// let mut board = Board::new(15).unwrap();
/// let mut policy = CascadePolicy::with_seed(7);
///
/// let mv = policy.choose(&mut board, Stone::White).unwrap();
/// assert_eq!(mv.stage, Stage::Positional);
/// ```
pub struct CascadePolicy {
    rng: StdRng,
}

impl CascadePolicy {
    /// Create a policy with an unpredictable seed
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::random::<u64>())
    }

    /// Create a policy whose fallback choices are reproducible
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Select the next move for `stone`
    ///
    /// Returns `None` only when no empty cell remains; the caller must
    /// treat that as a terminal (draw) condition.
    pub fn choose(&mut self, board: &mut Board, stone: Stone) -> Option<PolicyMove> {
        let human = stone.opponent();

        let mv = if let Some(pos) = find_winning_cell(board, stone) {
            PolicyMove { pos, stage: Stage::OwnWin }
        } else if let Some(pos) = find_winning_cell(board, human) {
            PolicyMove { pos, stage: Stage::BlockWin }
        } else if let Some(pos) = find_run_cell(board, stone, 4) {
            PolicyMove { pos, stage: Stage::Attack }
        } else if let Some(pos) = find_run_cell(board, human, 4) {
            PolicyMove { pos, stage: Stage::BlockAttack }
        } else if let Some(pos) = find_run_cell(board, stone, 3) {
            PolicyMove { pos, stage: Stage::BuildThree }
        } else if let Some(pos) = find_run_cell(board, human, 3) {
            PolicyMove { pos, stage: Stage::BlockThree }
        } else {
            let pos = self.positional_fallback(board)?;
            PolicyMove { pos, stage: Stage::Positional }
        };

        debug!(x = mv.pos.x, y = mv.pos.y, stage = ?mv.stage, "cascade selected move");
        Some(mv)
    }

    /// Score every empty cell by center proximity plus jitter, keep the best
    ///
    /// Score is `(20 - L1_to_center) + uniform(0, 5)`. The strict
    /// greater-than comparison resolves exact ties by scan order.
    fn positional_fallback(&mut self, board: &Board) -> Option<Pos> {
        let size = board.size() as u8;
        let center = board.center();
        let mut best: Option<(Pos, f32)> = None;

        for y in 0..size {
            for x in 0..size {
                let pos = Pos::new(x, y);
                if !board.is_empty(pos) {
                    continue;
                }
                let dist = i32::from(pos.x).abs_diff(i32::from(center.x))
                    + i32::from(pos.y).abs_diff(i32::from(center.y));
                let jitter: f32 = self.rng.gen_range(0.0..5.0);
                let score = (20 - dist as i32) as f32 + jitter;
                if best.map_or(true, |(_, s)| score > s) {
                    best = Some((pos, score));
                }
            }
        }

        if let Some((pos, score)) = best {
            trace!(x = pos.x, y = pos.y, score, "fallback candidate chosen");
        }
        best.map(|(pos, _)| pos)
    }
}

impl Default for CascadePolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// First empty cell (scan order) where placing `stone` wins outright
///
/// Uses a strictly paired speculative place/rollback per candidate.
fn find_winning_cell(board: &mut Board, stone: Stone) -> Option<Pos> {
    let size = board.size() as u8;
    for y in 0..size {
        for x in 0..size {
            let pos = Pos::new(x, y);
            if !board.is_empty(pos) {
                continue;
            }
            board.place_stone(pos, stone);
            let wins = check_win(board, pos, stone);
            board.remove_stone(pos);
            if wins {
                return Some(pos);
            }
        }
    }
    None
}

/// First empty cell where `stone` would reach a run of at least `target`
///
/// `max_run` counts the candidate cell itself, so no speculative write is
/// needed. Openness of the resulting run is deliberately not checked.
fn find_run_cell(board: &Board, stone: Stone, target: u32) -> Option<Pos> {
    let size = board.size() as u8;
    for y in 0..size {
        for x in 0..size {
            let pos = Pos::new(x, y);
            if board.is_empty(pos) && max_run(board, pos, stone) >= target {
                return Some(pos);
            }
        }
    }
    None
}
