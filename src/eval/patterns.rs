//! Window scores for Connect Four evaluation
//!
//! These constants define the scoring weights for the contents of a
//! single four-cell window, plus the center-column bias.

/// Window scores for evaluation
pub struct WindowScore;

impl WindowScore {
    /// Four own pieces
    pub const FOUR: i32 = 100;
    /// Three own pieces and one empty cell
    pub const THREE: i32 = 5;
    /// Two own pieces and two empty cells
    pub const TWO: i32 = 2;
    /// Penalty when the opponent has three pieces and one empty cell.
    /// Applied on top of any own-piece tier.
    pub const OPP_THREE: i32 = -4;

    /// Bonus per own piece in the center column
    pub const CENTER: i32 = 3;
}
