//! Search scores as a tagged total order
//!
//! Terminal outcomes are their own variants instead of huge integers, so
//! a heuristic value can never collide with a win or a search bound.

use std::fmt;

use crate::board::Piece;
use crate::rules::Outcome;

/// Magnitude reported by `Score::value` for a decided game
pub const WIN_VALUE: i64 = 1_000_000_000_000_000;

/// Minimax value, ordered `NegInfinity < PlayerWin < Eval(_) < AiWin < PosInfinity`.
///
/// Values are always from the AI's point of view: the AI maximizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    /// Initial alpha and the maximizer's starting value
    NegInfinity,
    /// The player has four in a row
    PlayerWin,
    /// Static evaluation (a draw is `Eval(0)`)
    Eval(i32),
    /// The AI has four in a row
    AiWin,
    /// Initial beta and the minimizer's starting value
    PosInfinity,
}

impl Score {
    /// Value of a full board with no winner
    pub const DRAW: Score = Score::Eval(0);

    /// Project onto integers for display and logging
    #[must_use]
    pub fn value(self) -> i64 {
        match self {
            Score::NegInfinity => i64::MIN,
            Score::PlayerWin => -WIN_VALUE,
            Score::Eval(v) => i64::from(v),
            Score::AiWin => WIN_VALUE,
            Score::PosInfinity => i64::MAX,
        }
    }

    /// Check if the score is a decided game
    #[inline]
    pub fn is_decisive(self) -> bool {
        matches!(self, Score::PlayerWin | Score::AiWin)
    }
}

impl From<Outcome> for Score {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win(Piece::Ai) => Score::AiWin,
            Outcome::Win(Piece::Player) => Score::PlayerWin,
            Outcome::Win(Piece::Empty) | Outcome::Draw => Score::DRAW,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::NegInfinity => f.write_str("-inf"),
            Score::PlayerWin => f.write_str("player wins"),
            Score::Eval(v) => write!(f, "{v}"),
            Score::AiWin => f.write_str("AI wins"),
            Score::PosInfinity => f.write_str("+inf"),
        }
    }
}
