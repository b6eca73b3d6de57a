//! Game rules for Connect Four
//!
//! This module implements the line scanner:
//! - Window enumeration over the four line orientations
//! - Win conditions (four in a row)
//! - Terminal-state classification (win or full board)

pub mod win;
pub mod window;

// Re-exports for convenient access
pub use win::{find_winning_line, has_win, is_terminal, outcome, Outcome};
pub use window::{all_windows, cells, windows, Direction, Window, DIRECTIONS};
