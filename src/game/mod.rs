//! Game orchestration
//!
//! The turn state machine that sequences human input, board mutation,
//! win checking, and the opponent reply.

pub mod controller;

pub use controller::{Game, GameOutcome, MoveOutcome, Turn};
