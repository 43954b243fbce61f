//! Opponent move selection
//!
//! Contains the priority-cascade policy: an ordered sequence of tactical
//! pattern searches with a center-biased positional fallback.

pub mod cascade;

pub use cascade::{CascadePolicy, PolicyMove, Stage};
