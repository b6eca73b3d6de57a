//! Board structure with gravity-aware move primitives

use std::fmt;

use super::bitboard::Bitboard;
use super::{Piece, COL_COUNT, ROW_COUNT};
use crate::error::MoveError;

/// Game board.
///
/// A plain `Copy` value: search explores hypothetical moves on copies, so
/// sibling branches never observe each other's drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Board {
    /// Human player's pieces
    pub player: Bitboard,
    /// AI pieces
    pub ai: Bitboard,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            player: Bitboard::new(),
            ai: Bitboard::new(),
        }
    }

    /// Get piece at (row, col). Row 0 is the bottom row.
    #[inline]
    ///
    /// Coordinates off the board read as `Piece::Empty`.
    pub fn get(&self, row: usize, col: usize) -> Piece {
        if row >= ROW_COUNT || col >= COL_COUNT {
            return Piece::Empty;
        }
        if self.player.get(row, col) {
            Piece::Player
        } else if self.ai.get(row, col) {
            Piece::Ai
        } else {
            Piece::Empty
        }
    }

    /// Check if a piece can still be dropped into `col`
    #[inline]
    pub fn is_valid(&self, col: usize) -> bool {
        col < COL_COUNT && self.get(ROW_COUNT - 1, col) == Piece::Empty
    }

    /// Lowest empty row of `col`, scanning upward from row 0.
    ///
    /// Returns `None` for a full or out-of-range column.
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        if col >= COL_COUNT {
            return None;
        }
        (0..ROW_COUNT).find(|&row| self.get(row, col) == Piece::Empty)
    }

    /// Set a cell without any validation.
    ///
    /// Whatever occupied the cell is replaced, and gravity is not enforced.
    /// Use `play` for checked game moves. Coordinates off the board are ignored.
    #[inline]
    pub fn drop(&mut self, row: usize, col: usize, piece: Piece) {
        if row >= ROW_COUNT || col >= COL_COUNT {
            return;
        }
        self.player.clear(row, col);
        self.ai.clear(row, col);
        match piece {
            Piece::Player => self.player.set(row, col),
            Piece::Ai => self.ai.set(row, col),
            Piece::Empty => {}
        }
    }

    /// All columns that can take another piece, in ascending order
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..COL_COUNT).filter(|&col| self.is_valid(col)).collect()
    }

    /// Derive a copy of this board with `piece` dropped into `col`.
    ///
    /// Returns `None` if the column cannot take a piece.
    #[must_use]
    pub fn with_move(&self, col: usize, piece: Piece) -> Option<Board> {
        let row = self.next_open_row(col)?;
        let mut next = *self;
        next.drop(row, col, piece);
        Some(next)
    }

    /// Drop `piece` into `col` obeying gravity. Returns the landing row.
    pub fn play(&mut self, col: usize, piece: Piece) -> Result<usize, MoveError> {
        if col >= COL_COUNT {
            return Err(MoveError::InvalidColumn(col));
        }
        let row = self.next_open_row(col).ok_or(MoveError::ColumnFull(col))?;
        self.drop(row, col, piece);
        Ok(row)
    }

    /// Get bitboard for a side (returns None for Empty)
    #[inline]
    pub fn pieces(&self, piece: Piece) -> Option<&Bitboard> {
        match piece {
            Piece::Player => Some(&self.player),
            Piece::Ai => Some(&self.ai),
            Piece::Empty => None,
        }
    }

    /// Number of cells holding `piece`
    pub fn count(&self, piece: Piece) -> u32 {
        match piece {
            Piece::Player => self.player.count(),
            Piece::Ai => self.ai.count(),
            Piece::Empty => (ROW_COUNT * COL_COUNT) as u32 - self.piece_count(),
        }
    }

    /// Total pieces on board
    #[inline]
    pub fn piece_count(&self) -> u32 {
        self.player.count() + self.ai.count()
    }

    /// Check if no column has room left
    #[inline]
    pub fn is_full(&self) -> bool {
        (0..COL_COUNT).all(|col| !self.is_valid(col))
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.player.is_empty() && self.ai.is_empty()
    }
}

/// Text dump with the top row first, so pieces rest at the bottom
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROW_COUNT).rev() {
            for col in 0..COL_COUNT {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.get(row, col).symbol())?;
            }
            writeln!(f)?;
        }
        for col in 0..COL_COUNT {
            if col > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{col}")?;
        }
        Ok(())
    }
}
