//! Turn state machine and external API
//!
//! [`Game`] owns the board exclusively and is the only writer. A single
//! [`Game::submit_move`] call applies the human stone, checks the result,
//! and (while the game is still open) computes and applies the opponent
//! reply before returning. Everything is synchronous; any pacing delay
//! before showing the reply is a presentation concern layered on top.

use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::policy::CascadePolicy;
use crate::rules::check_win;
use crate::OmokError;

/// Whose move the state machine is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Human,
    Opponent,
    Finished,
}

/// Terminal status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Stone),
    /// Board filled without a five-in-a-row
    Draw,
}

/// Result of one accepted human move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Every stone placed by this call, in order (human, then the
    /// opponent reply if the game stayed open)
    pub placements: Vec<(Pos, Stone)>,
    /// Outcome after the last placement
    pub outcome: GameOutcome,
}

type StoneObserver = Box<dyn FnMut(Pos, Stone)>;
type FinishObserver = Box<dyn FnMut(GameOutcome)>;

/// A single game against the cascade opponent
///
/// The human plays [`Stone::Black`] and moves first.
///
/// # Example
///
/// ```
/// use omok::{Game, GameOutcome, Pos};
///
/// let mut game = Game::with_seed(15, 42).unwrap();
/// let result = game.submit_move(Pos::new(7, 7)).unwrap();
/// assert_eq!(result.outcome, GameOutcome::InProgress);
/// ```
pub struct Game {
    board: Board,
    policy: CascadePolicy,
    turn: Turn,
    outcome: GameOutcome,
    move_count: u32,
    human_moves: u32,
    opponent_moves: u32,
    last_move: Option<Pos>,
    move_history: Vec<(Pos, Stone)>,
    on_stone_placed: Option<StoneObserver>,
    on_game_finished: Option<FinishObserver>,
}

impl Game {
    /// Stone color played by the human side
    pub const HUMAN: Stone = Stone::Black;
    /// Stone color played by the computer side
    pub const OPPONENT: Stone = Stone::White;

    /// Start a new game on an `size` x `size` board
    ///
    /// Fails with [`OmokError::BoardTooSmall`] or
    /// [`OmokError::BoardTooLarge`] for sizes outside `5..=255`.
    pub fn new(size: usize) -> Result<Self, OmokError> {
        Ok(Self::from_parts(Board::new(size)?, CascadePolicy::new()))
    }

    /// Start a new game with a seeded opponent
    ///
    /// The opponent's positional fallback is deterministic for a given
    /// seed and move sequence.
    pub fn with_seed(size: usize, seed: u64) -> Result<Self, OmokError> {
        Ok(Self::from_parts(
            Board::new(size)?,
            CascadePolicy::with_seed(seed),
        ))
    }

    fn from_parts(board: Board, policy: CascadePolicy) -> Self {
        Self {
            board,
            policy,
            turn: Turn::Human,
            outcome: GameOutcome::InProgress,
            move_count: 0,
            human_moves: 0,
            opponent_moves: 0,
            last_move: None,
            move_history: Vec::new(),
            on_stone_placed: None,
            on_game_finished: None,
        }
    }

    /// Apply a human move and drive the state machine
    ///
    /// On success the returned [`MoveOutcome`] lists the human placement
    /// and, if the game stayed open, the opponent reply. An invalid move
    /// (occupied, out of bounds, wrong turn, finished game) is rejected
    /// without consuming a turn or touching the board.
    pub fn submit_move(&mut self, pos: Pos) -> Result<MoveOutcome, OmokError> {
        match self.turn {
            Turn::Finished => return Err(OmokError::GameFinished),
            Turn::Opponent => return Err(OmokError::NotYourTurn),
            Turn::Human => {}
        }

        self.board.place(pos, Self::HUMAN)?;
        debug!(x = pos.x, y = pos.y, "human move applied");
        let mut placements = vec![(pos, Self::HUMAN)];
        self.record(pos, Self::HUMAN);

        if self.outcome == GameOutcome::InProgress {
            self.turn = Turn::Opponent;
            match self.policy.choose(&mut self.board, Self::OPPONENT) {
                Some(mv) => {
                    self.board.place(mv.pos, Self::OPPONENT)?;
                    debug!(x = mv.pos.x, y = mv.pos.y, stage = ?mv.stage, "opponent reply applied");
                    placements.push((mv.pos, Self::OPPONENT));
                    self.record(mv.pos, Self::OPPONENT);
                    if self.outcome == GameOutcome::InProgress {
                        self.turn = Turn::Human;
                    }
                }
                // No empty cell left for the opponent
                None => self.finish(GameOutcome::Draw),
            }
        }

        Ok(MoveOutcome {
            placements,
            outcome: self.outcome,
        })
    }

    /// Bookkeeping shared by both sides after a stone lands
    fn record(&mut self, pos: Pos, stone: Stone) {
        self.move_count += 1;
        if stone == Self::HUMAN {
            self.human_moves += 1;
        } else {
            self.opponent_moves += 1;
        }
        self.last_move = Some(pos);
        self.move_history.push((pos, stone));

        if let Some(observer) = self.on_stone_placed.as_mut() {
            observer(pos, stone);
        }

        if check_win(&self.board, pos, stone) {
            self.finish(GameOutcome::Win(stone));
        } else if self.board.is_full() {
            self.finish(GameOutcome::Draw);
        }
    }

    fn finish(&mut self, outcome: GameOutcome) {
        debug!(?outcome, moves = self.move_count, "game finished");
        self.outcome = outcome;
        self.turn = Turn::Finished;
        if let Some(observer) = self.on_game_finished.as_mut() {
            observer(outcome);
        }
    }

    /// Cell content at `pos`
    pub fn cell(&self, pos: Pos) -> Result<Stone, OmokError> {
        self.board.get(pos)
    }

    #[must_use]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Read-only view of the board for renderers
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn human_moves(&self) -> u32 {
        self.human_moves
    }

    #[must_use]
    pub fn opponent_moves(&self) -> u32 {
        self.opponent_moves
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Every placement so far, in order
    #[must_use]
    pub fn history(&self) -> &[(Pos, Stone)] {
        &self.move_history
    }

    /// Register a callback invoked after every placed stone
    ///
    /// Correctness never depends on observers being present.
    pub fn on_stone_placed(&mut self, observer: impl FnMut(Pos, Stone) + 'static) {
        self.on_stone_placed = Some(Box::new(observer));
    }

    /// Register a callback invoked once when the game reaches a terminal
    /// outcome
    pub fn on_game_finished(&mut self, observer: impl FnMut(GameOutcome) + 'static) {
        self.on_game_finished = Some(Box::new(observer));
    }

    /// Start over on the same board size, keeping observers and the
    /// opponent's random state
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = Turn::Human;
        self.outcome = GameOutcome::InProgress;
        self.move_count = 0;
        self.human_moves = 0;
        self.opponent_moves = 0;
        self.last_move = None;
        self.move_history.clear();
    }
}
