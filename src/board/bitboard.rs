//! Bitboard implementation for one side's pieces

use super::{cell_index, COL_COUNT, TOTAL_CELLS};

/// Mask of the 42 playable cells
const BOARD_MASK: u64 = (1u64 << TOTAL_CELLS) - 1;

/// Bitboard representation of one side's pieces
/// A single u64 covers all 42 cells (bit = row * 7 + col)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Set a bit at (row, col)
    #[inline]
    pub fn set(&mut self, row: usize, col: usize) {
        self.bits |= 1u64 << cell_index(row, col);
    }

    /// Clear a bit at (row, col)
    #[inline]
    pub fn clear(&mut self, row: usize, col: usize) {
        self.bits &= !(1u64 << cell_index(row, col));
    }

    /// Check if bit is set at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        (self.bits >> cell_index(row, col)) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        (self.bits & BOARD_MASK).count_ones()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits & BOARD_MASK == 0
    }

    /// Iterate over set cells as (row, col)
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter {
            current: self.bits & BOARD_MASK,
        }
    }
}

/// Iterator over set cells in a Bitboard
pub struct BitboardIter {
    current: u64,
}

impl Iterator for BitboardIter {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == 0 {
            return None;
        }

        let idx = self.current.trailing_zeros() as usize;

        // Clear the bit we just found
        self.current &= self.current - 1;

        Some((idx / COL_COUNT, idx % COL_COUNT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut bb = Bitboard::new();
        assert!(bb.is_empty());

        bb.set(0, 0);
        bb.set(5, 6);
        assert!(bb.get(0, 0));
        assert!(bb.get(5, 6));
        assert!(!bb.get(3, 3));
        assert_eq!(bb.count(), 2);

        bb.clear(0, 0);
        assert!(!bb.get(0, 0));
        assert_eq!(bb.count(), 1);
    }

    #[test]
    fn test_iter_ones_order() {
        let mut bb = Bitboard::new();
        bb.set(2, 1);
        bb.set(0, 4);
        bb.set(5, 6);

        let cells: Vec<_> = bb.iter_ones().collect();
        assert_eq!(cells, vec![(0, 4), (2, 1), (5, 6)]);
    }

    #[test]
    fn test_top_corner_index() {
        let mut bb = Bitboard::new();
        bb.set(5, 6);
        assert_eq!(bb.iter_ones().collect::<Vec<_>>(), vec![(5, 6)]);
        assert_eq!(bb.count(), 1);
    }
}
