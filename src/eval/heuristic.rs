//! Heuristic evaluation function for Connect Four positions
//!
//! This module provides the static evaluator used at the leaves of the
//! minimax search and by the greedy selector. It is linear in the board
//! contents and does no lookahead:
//! - Center-column bias
//! - Window scoring over every horizontal, vertical and diagonal window

use crate::board::{Board, Piece, CENTER_COL, WINDOW_LENGTH};
use crate::rules::{cells, windows, Direction, DIRECTIONS};

use super::patterns::WindowScore;

/// Score the contents of one window for `piece`.
///
/// The own-piece tiers (four, three + empty, two + two empty) exclude each
/// other; the opponent-three penalty is checked independently and added on
/// top.
#[must_use]
pub fn score_window(window: &[Piece; WINDOW_LENGTH], piece: Piece) -> i32 {
    let opponent = piece.opponent();
    let own = window.iter().filter(|&&p| p == piece).count();
    let opp = window.iter().filter(|&&p| p == opponent).count();
    let empty = window.iter().filter(|&&p| p == Piece::Empty).count();

    let mut score = 0;

    if own == 4 {
        score += WindowScore::FOUR;
    } else if own == 3 && empty == 1 {
        score += WindowScore::THREE;
    } else if own == 2 && empty == 2 {
        score += WindowScore::TWO;
    }

    if opp == 3 && empty == 1 {
        score += WindowScore::OPP_THREE;
    }

    score
}

/// Evaluate the board from the perspective of `piece`.
///
/// Sum of the center-column bias and `score_window` over all 69 windows.
/// Deterministic for a given board and piece; works on any position,
/// including ones that are already won.
#[must_use]
pub fn score_position(board: &Board, piece: Piece) -> i32 {
    let mut score = center_score(board, piece);

    for direction in DIRECTIONS {
        score += score_direction(board, piece, direction);
    }

    score
}

/// Center-column bias: a bonus for every own piece in the middle column
fn center_score(board: &Board, piece: Piece) -> i32 {
    let count = board.pieces(piece).map_or(0, |owned| {
        owned.iter_ones().filter(|&(_, col)| col == CENTER_COL).count()
    });
    count as i32 * WindowScore::CENTER
}

/// Sum of window scores along one orientation
fn score_direction(board: &Board, piece: Piece, direction: Direction) -> i32 {
    windows(direction)
        .map(|window| score_window(&cells(board, &window), piece))
        .sum()
}
