//! Evaluation module for Connect Four positions
//!
//! This module provides window scoring and the static position score.
//! The evaluation considers:
//! - Own pieces in each four-cell window (fours, threes, twos)
//! - Opponent threes with room to complete
//! - Center-column control

pub mod heuristic;
pub mod patterns;

pub use heuristic::{score_position, score_window};
pub use patterns::WindowScore;
