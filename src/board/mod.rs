//! Board representation for Connect Four

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Number of rows (row 0 is the bottom row)
pub const ROW_COUNT: usize = 6;
/// Number of columns
pub const COL_COUNT: usize = 7;
pub const TOTAL_CELLS: usize = ROW_COUNT * COL_COUNT; // 42

/// Column index of the middle column
pub const CENTER_COL: usize = COL_COUNT / 2;

/// Pieces in a row needed to win
pub const WINDOW_LENGTH: usize = 4;

/// Contents of a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Empty,
    Player,
    Ai,
}

impl Piece {
    /// Get the other side's piece
    #[inline]
    pub fn opponent(self) -> Piece {
        match self {
            Piece::Player => Piece::Ai,
            Piece::Ai => Piece::Player,
            Piece::Empty => Piece::Empty,
        }
    }

    /// Symbol used by the text dump
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::Player => 'X',
            Piece::Ai => 'O',
        }
    }
}

/// Bit index of a cell, row-major from the bottom-left corner
#[inline]
pub fn cell_index(row: usize, col: usize) -> usize {
    debug_assert!(row < ROW_COUNT && col < COL_COUNT);
    row * COL_COUNT + col
}

/// Check if signed coordinates are on the board
#[inline]
pub fn in_bounds(row: i32, col: i32) -> bool {
    row >= 0 && row < ROW_COUNT as i32 && col >= 0 && col < COL_COUNT as i32
}
