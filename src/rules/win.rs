//! Win and terminal-state detection for Connect Four
//!
//! A side wins with four of its pieces in a row horizontally, vertically
//! or along either diagonal. A position is terminal once either side has
//! won or no column has room left.

use crate::board::{Board, Piece};

use super::window::{all_windows, Window};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Four in a row for this side
    Win(Piece),
    /// Board full without a winner
    Draw,
}

/// Check if `piece` holds any full window
pub fn has_win(board: &Board, piece: Piece) -> bool {
    find_winning_line(board, piece).is_some()
}

/// Find the first window (in scan order) held entirely by `piece`
pub fn find_winning_line(board: &Board, piece: Piece) -> Option<Window> {
    let owned = board.pieces(piece)?;
    all_windows().find(|window| window.iter().all(|&(row, col)| owned.get(row, col)))
}

/// Classify a finished position.
///
/// Returns `None` while the game is still open.
pub fn outcome(board: &Board) -> Option<Outcome> {
    if has_win(board, Piece::Ai) {
        return Some(Outcome::Win(Piece::Ai));
    }
    if has_win(board, Piece::Player) {
        return Some(Outcome::Win(Piece::Player));
    }
    if board.is_full() {
        return Some(Outcome::Draw);
    }
    None
}

/// Check if no further play is meaningful
#[inline]
pub fn is_terminal(board: &Board) -> bool {
    outcome(board).is_some()
}
