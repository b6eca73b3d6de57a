//! Main AI Engine wrapping the move-selection strategies
//!
//! The engine owns a [`Searcher`] and dispatches each AI turn to one of
//! two independent strategies:
//!
//! 1. **Minimax**: depth-limited alpha-beta search (the default)
//! 2. **Greedy**: one-ply choice by static score
//!
//! It also times every decision and logs it.
//!
//! # Example
//!
//! ```
//! use connect4::{AIEngine, Board, Piece, Strategy};
//!
//! let mut engine = AIEngine::with_config(4, Strategy::Minimax, Some(7));
//! let mut board = Board::new();
//! board.play(3, Piece::Player).unwrap();
//!
//! let result = engine.get_move_with_stats(&board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Score: {}", result.score);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use log::debug;

use crate::board::{Board, Piece};
use crate::config::{EngineConfig, Strategy};
use crate::eval::score_position;
use crate::search::{Score, Searcher, DEFAULT_DEPTH};

/// Strategy that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Alpha-beta minimax result
    Minimax,
    /// Greedy one-ply result
    Greedy,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best column found, if any
    pub best_move: Option<usize>,
    /// Minimax value, or the static score after the greedy drop
    pub score: Score,
    /// Strategy that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Main AI Engine for Connect Four.
///
/// The AI always plays `Piece::Ai`.
pub struct AIEngine {
    searcher: Searcher,
    /// Plies of lookahead for minimax
    depth: u8,
    strategy: Strategy,
}

impl AIEngine {
    /// Create an engine with default settings (minimax, depth 5, random seed).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DEPTH, Strategy::Minimax, None)
    }

    /// Create an engine with custom settings.
    ///
    /// `seed` fixes the random source; `None` seeds from entropy.
    #[must_use]
    pub fn with_config(depth: u8, strategy: Strategy, seed: Option<u64>) -> Self {
        let searcher = match seed {
            Some(seed) => Searcher::with_seed(seed),
            None => Searcher::new(),
        };
        Self {
            searcher,
            depth,
            strategy,
        }
    }

    /// Create an engine from the `[engine]` configuration section.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_config(config.depth, config.strategy, config.seed)
    }

    /// Get the AI's move for the given position.
    ///
    /// Returns `None` if no column is legal or the game is already decided.
    #[must_use]
    pub fn get_move(&mut self, board: &Board) -> Option<usize> {
        self.get_move_with_stats(board).best_move
    }

    /// Get the AI's move with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();

        let result = match self.strategy {
            Strategy::Minimax => {
                let search = self.searcher.search(board, self.depth);
                MoveResult {
                    best_move: search.best_move,
                    score: search.score,
                    search_type: SearchType::Minimax,
                    time_ms: elapsed_ms(start),
                    nodes: search.nodes,
                }
            }
            Strategy::Greedy => {
                let best_move = self.searcher.pick_best_move(board, Piece::Ai);
                let score = best_move
                    .and_then(|col| board.with_move(col, Piece::Ai))
                    .map_or(Score::DRAW, |next| Score::Eval(score_position(&next, Piece::Ai)));
                MoveResult {
                    best_move,
                    score,
                    search_type: SearchType::Greedy,
                    time_ms: elapsed_ms(start),
                    nodes: board.valid_columns().len() as u64,
                }
            }
        };

        debug!(
            "AI ({:?}) chose {:?}: score {}, {} nodes, {}ms",
            result.search_type, result.best_move, result.score, result.nodes, result.time_ms
        );
        result
    }

    /// Greedy suggestion for `piece`, used for hints.
    pub fn suggest_move(&mut self, board: &Board, piece: Piece) -> Option<usize> {
        self.searcher.pick_best_move(board, piece)
    }

    /// Set the minimax depth.
    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth;
    }

    /// Get the minimax depth
    #[must_use]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Get the configured strategy
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.depth(), 5);
        assert_eq!(engine.strategy(), Strategy::Minimax);
    }

    #[test]
    fn test_engine_from_config() {
        let config = EngineConfig {
            depth: 3,
            strategy: Strategy::Greedy,
            seed: Some(1),
        };
        let engine = AIEngine::from_config(&config);
        assert_eq!(engine.depth(), 3);
        assert_eq!(engine.strategy(), Strategy::Greedy);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Board::new();
        for _ in 0..3 {
            board.play(2, Piece::Ai).unwrap();
        }
        board.play(4, Piece::Player).unwrap();
        board.play(5, Piece::Player).unwrap();

        let mut engine = AIEngine::with_config(3, Strategy::Minimax, Some(1));
        let result = engine.get_move_with_stats(&board);

        assert_eq!(result.best_move, Some(2));
        assert_eq!(result.score, Score::AiWin);
        assert_eq!(result.search_type, SearchType::Minimax);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut board = Board::new();
        for col in 0..3 {
            board.play(col, Piece::Player).unwrap();
        }

        for strategy in [Strategy::Minimax, Strategy::Greedy] {
            let mut engine = AIEngine::with_config(5, strategy, Some(2));
            assert_eq!(engine.get_move(&board), Some(3), "{strategy:?}");
        }
    }

    #[test]
    fn test_engine_empty_board() {
        let board = Board::new();
        let mut engine = AIEngine::with_config(4, Strategy::Minimax, Some(3));
        assert_eq!(engine.get_move(&board), Some(3));
    }

    #[test]
    fn test_greedy_result_scores_the_drop() {
        let board = Board::new();
        let mut engine = AIEngine::with_config(1, Strategy::Greedy, Some(4));
        let result = engine.get_move_with_stats(&board);

        assert_eq!(result.best_move, Some(3));
        assert_eq!(result.score, Score::Eval(3));
        assert_eq!(result.search_type, SearchType::Greedy);
        assert_eq!(result.nodes, 7);
    }

    #[test]
    fn test_engine_finished_game_has_no_move() {
        let mut board = Board::new();
        for col in 0..4 {
            board.play(col, Piece::Player).unwrap();
        }
        let mut engine = AIEngine::with_config(3, Strategy::Minimax, Some(5));
        let result = engine.get_move_with_stats(&board);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, Score::PlayerWin);
    }

    #[test]
    fn test_suggest_move_for_player() {
        let mut board = Board::new();
        for col in 2..5 {
            board.play(col, Piece::Ai).unwrap();
        }
        let mut engine = AIEngine::with_config(3, Strategy::Minimax, Some(6));
        // Columns 1 and 5 both block one side of the open three; ties keep the leftmost
        assert_eq!(engine.suggest_move(&board, Piece::Player), Some(1));
    }

    #[test]
    fn test_engine_set_depth() {
        let mut engine = AIEngine::new();
        engine.set_depth(2);
        assert_eq!(engine.depth(), 2);
    }

    #[test]
    fn test_engine_time_reasonable() {
        let mut board = Board::new();
        board.play(3, Piece::Player).unwrap();
        board.play(3, Piece::Ai).unwrap();
        board.play(2, Piece::Player).unwrap();

        let mut engine = AIEngine::with_config(5, Strategy::Minimax, Some(7));
        let result = engine.get_move_with_stats(&board);

        #[cfg(debug_assertions)]
        let max_time_ms = 30_000;
        #[cfg(not(debug_assertions))]
        let max_time_ms = 2_000;

        assert!(
            result.time_ms < max_time_ms,
            "Search took too long: {}ms (limit: {}ms)",
            result.time_ms,
            max_time_ms
        );
        assert!(result.best_move.is_some());
    }
}
