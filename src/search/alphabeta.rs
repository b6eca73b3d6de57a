//! Depth-limited minimax with alpha-beta pruning
//!
//! This module implements the core search algorithm for the Connect Four AI.
//! The AI is always the maximizing side and the human player the minimizing
//! side; leaves are scored by the static evaluator from the AI's point of
//! view, even when the minimizer is to move.
//!
//! # Features
//!
//! - Alpha-beta pruning over legal columns in ascending order
//! - Tagged [`Score`] values instead of integer win sentinels
//! - Explicit, seedable random source for the fallback column
//! - Every child is searched on its own board copy
//!
//! # Example
//!
//! ```
//! use connect4::board::Board;
//! use connect4::search::Searcher;
//!
//! let mut searcher = Searcher::with_seed(42);
//! let board = Board::new();
//!
//! let result = searcher.search(&board, 3);
//! if let Some(col) = result.best_move {
//!     println!("Best move: column {}", col);
//! }
//! ```

use log::trace;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Piece};
use crate::eval::score_position;
use crate::rules::outcome;

use super::greedy;
use super::Score;

/// Default lookahead in plies
pub const DEFAULT_DEPTH: u8 = 5;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best column found, if any
    pub best_move: Option<usize>,
    /// Minimax value of the root
    pub score: Score,
    /// Depth searched
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
    /// Times a node stopped early because alpha >= beta
    pub cutoffs: u64,
}

/// Move searcher owning the random source used for fallback columns.
pub struct Searcher {
    rng: SmallRng,
    nodes: u64,
    cutoffs: u64,
}

impl Searcher {
    /// Create a searcher seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_entropy())
    }

    /// Create a searcher with a fixed seed, for reproducible play.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(rng: SmallRng) -> Self {
        Self {
            rng,
            nodes: 0,
            cutoffs: 0,
        }
    }

    /// Search from the full window with the AI to move.
    #[must_use]
    pub fn search(&mut self, board: &Board, depth: u8) -> SearchResult {
        self.nodes = 0;
        self.cutoffs = 0;

        let (best_move, score) =
            self.minimax(board, depth, Score::NegInfinity, Score::PosInfinity, true);

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            cutoffs: self.cutoffs,
        }
    }

    /// Alpha-beta minimax.
    ///
    /// Returns the chosen column (none at a leaf) and the node's value.
    /// Terminal positions score `AiWin`, `PlayerWin` or a draw of
    /// `Eval(0)`; depth-zero leaves score `score_position(board, Ai)`.
    ///
    /// The column starts as a random legal one and is only replaced by a
    /// strictly better child, so among equal children the earliest wins.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> (Option<usize>, Score) {
        self.nodes += 1;

        if let Some(result) = outcome(board) {
            return (None, Score::from(result));
        }
        if depth == 0 {
            return (None, Score::Eval(score_position(board, Piece::Ai)));
        }

        let valid = board.valid_columns();
        let mut column = valid.choose(&mut self.rng).copied();

        if maximizing {
            let mut value = Score::NegInfinity;
            for &col in &valid {
                let Some(child) = board.with_move(col, Piece::Ai) else {
                    continue;
                };
                let (_, score) = self.minimax(&child, depth - 1, alpha, beta, false);
                if score > value {
                    value = score;
                    column = Some(col);
                }
                alpha = alpha.max(value);
                if alpha >= beta {
                    self.cutoffs += 1;
                    trace!("beta cutoff at depth {depth} after column {col}");
                    break;
                }
            }
            (column, value)
        } else {
            let mut value = Score::PosInfinity;
            for &col in &valid {
                let Some(child) = board.with_move(col, Piece::Player) else {
                    continue;
                };
                let (_, score) = self.minimax(&child, depth - 1, alpha, beta, true);
                if score < value {
                    value = score;
                    column = Some(col);
                }
                beta = beta.min(value);
                if alpha >= beta {
                    self.cutoffs += 1;
                    trace!("alpha cutoff at depth {depth} after column {col}");
                    break;
                }
            }
            (column, value)
        }
    }

    /// Greedy one-ply choice for `piece`, using this searcher's random source.
    pub fn pick_best_move(&mut self, board: &Board, piece: Piece) -> Option<usize> {
        greedy::pick_best_move(board, piece, &mut self.rng)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{COL_COUNT, ROW_COUNT};
    use crate::rules::is_terminal;

    /// Plain minimax without pruning, as a reference for the value
    fn exhaustive(board: &Board, depth: u8, maximizing: bool) -> Score {
        if let Some(result) = outcome(board) {
            return Score::from(result);
        }
        if depth == 0 {
            return Score::Eval(score_position(board, Piece::Ai));
        }
        let mover = if maximizing { Piece::Ai } else { Piece::Player };
        let children = board
            .valid_columns()
            .into_iter()
            .filter_map(|col| board.with_move(col, mover))
            .map(|child| exhaustive(&child, depth - 1, !maximizing));
        if maximizing {
            children.max().unwrap_or(Score::NegInfinity)
        } else {
            children.min().unwrap_or(Score::PosInfinity)
        }
    }

    /// Play `moves` random legal columns, stopping early at a terminal position
    fn random_position(rng: &mut SmallRng, moves: usize) -> Board {
        let mut board = Board::new();
        let mut turn = Piece::Player;
        for _ in 0..moves {
            if is_terminal(&board) {
                break;
            }
            let col = *board.valid_columns().choose(rng).unwrap();
            board.play(col, turn).unwrap();
            turn = turn.opponent();
        }
        board
    }

    fn drawn_board() -> Board {
        let mut board = Board::new();
        for col in 0..COL_COUNT {
            for row in 0..ROW_COUNT {
                let piece = if (row + col / 2) % 2 == 0 { Piece::Player } else { Piece::Ai };
                board.drop(row, col, piece);
            }
        }
        board
    }

    #[test]
    fn test_search_empty_board() {
        let mut searcher = Searcher::with_seed(1);
        let board = Board::new();

        let result = searcher.search(&board, 3);
        assert_eq!(result.best_move, Some(3));
        assert_eq!(result.score, Score::Eval(8));
        assert!(!result.score.is_decisive());
        assert!(result.nodes > 1);
    }

    #[test]
    fn test_search_finds_winning_move() {
        let mut board = Board::new();
        for col in 0..3 {
            board.play(col, Piece::Ai).unwrap();
        }
        board.play(0, Piece::Player).unwrap();
        board.play(1, Piece::Player).unwrap();

        for depth in 1..=4 {
            let mut searcher = Searcher::with_seed(u64::from(depth));
            let result = searcher.search(&board, depth);
            assert_eq!(result.best_move, Some(3), "depth {depth}");
            assert_eq!(result.score, Score::AiWin, "depth {depth}");
        }
    }

    #[test]
    fn test_search_blocks_opponent_win() {
        let mut board = Board::new();
        for col in 0..3 {
            board.play(col, Piece::Player).unwrap();
        }

        for depth in 1..=4 {
            let mut searcher = Searcher::with_seed(9);
            let result = searcher.search(&board, depth);
            assert_eq!(result.best_move, Some(3), "depth {depth}");
        }
    }

    #[test]
    fn test_depth_zero_is_static_eval() {
        let mut board = Board::new();
        board.play(3, Piece::Ai).unwrap();
        board.play(3, Piece::Player).unwrap();

        let mut searcher = Searcher::with_seed(2);
        let (col, score) =
            searcher.minimax(&board, 0, Score::NegInfinity, Score::PosInfinity, false);
        assert_eq!(col, None);
        assert_eq!(score, Score::Eval(score_position(&board, Piece::Ai)));
    }

    #[test]
    fn test_full_board_scores_draw() {
        let board = drawn_board();
        assert!(is_terminal(&board));

        let mut searcher = Searcher::with_seed(3);
        let result = searcher.search(&board, 5);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, Score::DRAW);
        assert_eq!(result.score.value(), 0);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_existing_win_is_terminal() {
        let mut board = Board::new();
        for col in 0..4 {
            board.play(col, Piece::Player).unwrap();
        }
        let mut searcher = Searcher::with_seed(4);
        let result = searcher.search(&board, 3);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, Score::PlayerWin);
    }

    #[test]
    fn test_double_four_scores_ai_win() {
        let mut board = Board::new();
        for col in 0..4 {
            board.drop(0, col, Piece::Player);
            board.drop(1, col, Piece::Ai);
        }
        let mut searcher = Searcher::with_seed(4);
        let result = searcher.search(&board, 2);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, Score::AiWin);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_pruning_preserves_value() {
        let mut rng = SmallRng::seed_from_u64(2024);

        for game in 0..12 {
            let board = random_position(&mut rng, 4 + game % 8);
            for depth in 1..=4 {
                let mut searcher = Searcher::with_seed(game as u64);
                let pruned = searcher.search(&board, depth);
                let full = exhaustive(&board, depth, true);
                assert_eq!(pruned.score, full, "depth {depth}\n{board}");

                // The chosen column must achieve that value too
                if let Some(col) = pruned.best_move {
                    let child = board.with_move(col, Piece::Ai).unwrap();
                    assert_eq!(exhaustive(&child, depth - 1, false), full);
                }
            }
        }
    }

    #[test]
    fn test_pruning_cuts_nodes() {
        let board = Board::new();
        let mut searcher = Searcher::with_seed(5);
        let result = searcher.search(&board, 4);

        // 1 + 7 + 49 + 343 + 2401 nodes without pruning
        assert!(result.nodes < 2801, "visited {}", result.nodes);
        assert!(result.cutoffs > 0);
    }

    #[test]
    fn test_seeded_searches_agree() {
        let mut rng = SmallRng::seed_from_u64(77);
        let board = random_position(&mut rng, 6);

        let a = Searcher::with_seed(11).search(&board, 4);
        let b = Searcher::with_seed(11).search(&board, 4);
        assert_eq!(a, b);
    }

    #[test]
    fn test_search_multiple_times() {
        let mut searcher = Searcher::with_seed(6);
        let mut board = Board::new();
        board.play(3, Piece::Player).unwrap();

        let first = searcher.search(&board, 3);
        let second = searcher.search(&board, 3);
        assert_eq!(first.score, second.score);
        assert_eq!(first.nodes, second.nodes);
    }

    #[test]
    fn test_pick_best_move_delegates() {
        let mut searcher = Searcher::with_seed(7);
        let mut board = Board::new();
        for col in 0..3 {
            board.play(col, Piece::Player).unwrap();
        }
        assert_eq!(searcher.pick_best_move(&board, Piece::Ai), Some(3));
    }
}
