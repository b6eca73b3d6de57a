//! Four-cell windows along the four line orientations
//!
//! A window is the unit shared by win detection and heuristic scoring.
//! The 6x7 board holds 69 of them: 24 horizontal, 21 vertical and
//! 12 along each diagonal.

use crate::board::{Board, Piece, COL_COUNT, ROW_COUNT, WINDOW_LENGTH};

/// Cells of one window as (row, col)
pub type Window = [(usize, usize); WINDOW_LENGTH];

/// Line orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Row fixed, column increases
    Horizontal,
    /// Column fixed, row increases
    Vertical,
    /// (row + i, col + i)
    DiagonalUp,
    /// (row - i, col + i)
    DiagonalDown,
}

/// All four orientations, in scan order
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Horizontal,
    Direction::Vertical,
    Direction::DiagonalUp,
    Direction::DiagonalDown,
];

impl Direction {
    /// Step between consecutive cells as (d_row, d_col)
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalUp => (1, 1),
            Direction::DiagonalDown => (-1, 1),
        }
    }

    /// Row range of anchors whose whole window stays on the board
    fn anchor_rows(self) -> std::ops::Range<usize> {
        match self {
            Direction::Horizontal => 0..ROW_COUNT,
            Direction::Vertical | Direction::DiagonalUp => 0..ROW_COUNT - (WINDOW_LENGTH - 1),
            Direction::DiagonalDown => WINDOW_LENGTH - 1..ROW_COUNT,
        }
    }

    /// Column range of anchors whose whole window stays on the board
    fn anchor_cols(self) -> std::ops::Range<usize> {
        match self {
            Direction::Vertical => 0..COL_COUNT,
            _ => 0..COL_COUNT - (WINDOW_LENGTH - 1),
        }
    }

    /// Window starting at (row, col). The caller guarantees it fits.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn window_at(self, row: usize, col: usize) -> Window {
        let (dr, dc) = self.delta();
        std::array::from_fn(|i| {
            let i = i as i32;
            ((row as i32 + dr * i) as usize, (col as i32 + dc * i) as usize)
        })
    }
}

/// Every window in one orientation
pub fn windows(direction: Direction) -> impl Iterator<Item = Window> {
    direction.anchor_rows().flat_map(move |row| {
        direction
            .anchor_cols()
            .map(move |col| direction.window_at(row, col))
    })
}

/// Every window on the board, orientation by orientation
pub fn all_windows() -> impl Iterator<Item = Window> {
    DIRECTIONS.into_iter().flat_map(windows)
}

/// Read the pieces under a window
#[inline]
pub fn cells(board: &Board, window: &Window) -> [Piece; WINDOW_LENGTH] {
    window.map(|(row, col)| board.get(row, col))
}
