//! Game rules for Omok
//!
//! This module implements line scanning and the win condition:
//! five or more contiguous stones through the just-played cell.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, max_run, run_length, DIRECTIONS};
