//! Connect Four AI Engine
//!
//! A Connect Four game with an automated opponent:
//! - Standard 6x7 board, pieces fall to the lowest empty row
//! - Four in a row (horizontal, vertical or diagonal) wins
//! - Full board without four in a row is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Line scanning (windows, wins, terminal states)
//! - [`eval`]: Static position evaluation
//! - [`search`]: Move selection (alpha-beta minimax, greedy)
//! - [`engine`]: AI engine dispatching to the configured strategy
//! - [`config`]: TOML configuration
//! - [`ui`]: egui game driver
//!
//! # Quick Start
//!
//! ```
//! use connect4::{AIEngine, Board, Piece};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_config(4, connect4::Strategy::Minimax, Some(1));
//!
//! // Human drops into the center column
//! board.play(3, Piece::Player).unwrap();
//!
//! // AI responds
//! if let Some(col) = engine.get_move(&board) {
//!     let row = board.play(col, Piece::Ai).unwrap();
//!     println!("AI plays column {} (row {})", col, row);
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Piece, COL_COUNT, ROW_COUNT};
pub use config::{AppConfig, FirstTurn, Strategy};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{ConfigError, MoveError};
pub use search::{Score, Searcher};
