//! Greedy one-ply move selection
//!
//! Tries every legal column once and keeps the drop with the best static
//! score for the mover. No lookahead.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Piece};
use crate::eval::score_position;

/// Starting best score. Any real position scores above it.
pub const GREEDY_SENTINEL: i32 = -80_000;

/// Pick the column whose drop maximizes `score_position` for `piece`.
///
/// Ties keep the leftmost best column. The fallback is a uniformly random
/// legal column, used only if no drop scores above `GREEDY_SENTINEL`.
/// Returns `None` if the board has no legal column.
pub fn pick_best_move<R: Rng + ?Sized>(board: &Board, piece: Piece, rng: &mut R) -> Option<usize> {
    let valid = board.valid_columns();
    let mut best_col = *valid.choose(rng)?;
    let mut best_score = GREEDY_SENTINEL;

    for &col in &valid {
        let Some(next) = board.with_move(col, piece) else {
            continue;
        };
        let score = score_position(&next, piece);
        if score > best_score {
            best_score = score;
            best_col = col;
        }
    }

    Some(best_col)
}
