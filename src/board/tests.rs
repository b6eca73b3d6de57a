use super::*;
use crate::error::MoveError;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Occupied cells of every column form a run starting at row 0
fn assert_gravity(board: &Board) {
    for col in 0..COL_COUNT {
        let mut seen_empty = false;
        for row in 0..ROW_COUNT {
            match board.get(row, col) {
                Piece::Empty => seen_empty = true,
                _ => assert!(!seen_empty, "floating piece at ({row}, {col})\n{board}"),
            }
        }
    }
}

#[test]
fn test_piece_opponent() {
    assert_eq!(Piece::Player.opponent(), Piece::Ai);
    assert_eq!(Piece::Ai.opponent(), Piece::Player);
    assert_eq!(Piece::Empty.opponent(), Piece::Empty);
}

#[test]
fn test_board_constants() {
    assert_eq!(ROW_COUNT, 6);
    assert_eq!(COL_COUNT, 7);
    assert_eq!(TOTAL_CELLS, 42);
    assert_eq!(CENTER_COL, 3);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    for row in 0..ROW_COUNT {
        for col in 0..COL_COUNT {
            assert_eq!(board.get(row, col), Piece::Empty);
        }
    }
    assert!(board.is_board_empty());
    assert_eq!(board.valid_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_next_open_row_stacks_upward() {
    let mut board = Board::new();
    assert_eq!(board.next_open_row(3), Some(0));

    board.drop(0, 3, Piece::Player);
    assert_eq!(board.next_open_row(3), Some(1));

    board.drop(1, 3, Piece::Ai);
    assert_eq!(board.next_open_row(3), Some(2));
    assert_eq!(board.get(0, 3), Piece::Player);
    assert_eq!(board.get(1, 3), Piece::Ai);
}

#[test]
fn test_full_column_is_invalid() {
    let mut board = Board::new();
    for _ in 0..ROW_COUNT {
        board.play(0, Piece::Player).unwrap();
    }
    assert!(!board.is_valid(0));
    assert_eq!(board.next_open_row(0), None);
    assert_eq!(board.valid_columns(), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(board.play(0, Piece::Ai), Err(MoveError::ColumnFull(0)));
    assert_eq!(board.with_move(0, Piece::Ai), None);
}

#[test]
fn test_out_of_range_column() {
    let mut board = Board::new();
    assert!(!board.is_valid(7));
    assert_eq!(board.next_open_row(7), None);
    assert_eq!(board.play(7, Piece::Player), Err(MoveError::InvalidColumn(7)));

    // Unchecked drop ignores coordinates off the board
    board.drop(6, 0, Piece::Player);
    board.drop(0, 9, Piece::Player);
    assert!(board.is_board_empty());
}

#[test]
fn test_get_off_board_reads_empty() {
    let mut board = Board::new();
    for col in 0..COL_COUNT {
        board.drop(ROW_COUNT - 1, col, Piece::Ai);
    }
    assert_eq!(board.get(ROW_COUNT, 0), Piece::Empty);
    assert_eq!(board.get(0, COL_COUNT), Piece::Empty);
    assert_eq!(board.get(usize::MAX, usize::MAX), Piece::Empty);
}

#[test]
fn test_drop_overwrites_without_validation() {
    let mut board = Board::new();
    board.drop(4, 2, Piece::Ai); // floating piece, no gravity
    assert_eq!(board.get(4, 2), Piece::Ai);

    board.drop(4, 2, Piece::Player);
    assert_eq!(board.get(4, 2), Piece::Player);
    assert_eq!(board.count(Piece::Ai), 0);
    assert_eq!(board.count(Piece::Player), 1);
}

#[test]
fn test_with_move_leaves_original_untouched() {
    let board = Board::new();
    let next = board.with_move(4, Piece::Ai).unwrap();

    assert!(board.is_board_empty());
    assert_eq!(next.get(0, 4), Piece::Ai);
    assert_eq!(next.piece_count(), 1);
}

#[test]
fn test_full_board() {
    let mut board = Board::new();
    for col in 0..COL_COUNT {
        for row in 0..ROW_COUNT {
            let piece = if (row + col) % 2 == 0 { Piece::Player } else { Piece::Ai };
            board.play(col, piece).unwrap();
        }
    }
    assert!(board.is_full());
    assert!(board.valid_columns().is_empty());
    assert_eq!(board.count(Piece::Empty), 0);
}

#[test]
fn test_gravity_invariant_random_games() {
    let mut rng = SmallRng::seed_from_u64(7);

    for _ in 0..50 {
        let mut board = Board::new();
        let mut turn = Piece::Player;
        while let Some(&col) = board.valid_columns().choose(&mut rng) {
            let row = board.next_open_row(col).unwrap();
            board.drop(row, col, turn);
            assert_gravity(&board);
            turn = turn.opponent();
        }
        assert!(board.is_full());
    }
}

#[test]
fn test_display_puts_bottom_row_last() {
    let mut board = Board::new();
    board.play(0, Piece::Player).unwrap();
    board.play(0, Piece::Ai).unwrap();

    let dump = board.to_string();
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines.len(), ROW_COUNT + 1);
    assert_eq!(lines[ROW_COUNT - 1], "X . . . . . .");
    assert_eq!(lines[ROW_COUNT - 2], "O . . . . . .");
    assert_eq!(lines[ROW_COUNT], "0 1 2 3 4 5 6");
}
