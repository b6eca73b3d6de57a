//! Search module for the Connect Four AI
//!
//! Contains:
//! - Tagged minimax scores
//! - Alpha-beta minimax search
//! - Greedy one-ply selection

pub mod alphabeta;
pub mod greedy;
pub mod score;

pub use alphabeta::{SearchResult, Searcher, DEFAULT_DEPTH};
pub use greedy::{pick_best_move, GREEDY_SENTINEL};
pub use score::{Score, WIN_VALUE};
