//! Board construction and access integration tests.
//!
//! These tests exercise the public surface collaborators use to build and
//! inspect boards: construction, reads, writes, configuration and notation.

use reversi_engine::{Board, BoardConfig, BoardError, Color, Opening};

// =============================================================================
// Construction
// =============================================================================

/// Every in-range cell of a fresh board is empty, for a range of sizes.
#[test]
fn test_new_board_all_empty() {
    for (w, h) in [(1, 1), (1, 7), (6, 6), (8, 8), (10, 3)] {
        let board = Board::new(w, h).unwrap();
        assert_eq!(board.cell_count(), (w * h) as usize);

        for y in 0..h {
            for x in 0..w {
                assert_eq!(board.get_color(x, y), Color::Empty);
            }
        }
    }
}

/// Non-positive dimensions are rejected.
#[test]
fn test_invalid_dimensions() {
    for (w, h) in [(0, 5), (5, 0), (-1, -1), (0, 0), (-3, 4)] {
        assert_eq!(
            Board::new(w, h),
            Err(BoardError::InvalidDimensions { width: w, height: h })
        );
    }
}

// =============================================================================
// Access
// =============================================================================

/// Reads outside the board, including negative indices, are empty.
#[test]
fn test_out_of_range_reads_are_empty() {
    let board = BoardConfig::new(4, 4)
        .with_opening(Opening::Standard)
        .build()
        .unwrap();

    for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 4), (-100, -100), (i32::MAX, i32::MAX), (i32::MIN, 2)] {
        assert_eq!(board.get_color(x, y), Color::Empty);
        assert!(!board.in_bounds(x, y));
    }
}

/// `set_color` changes exactly one cell and leaves the input untouched.
#[test]
fn test_set_then_get() {
    let board = Board::new(5, 4).unwrap();

    for color in Color::ALL {
        let next = board.set_color(3, 1, color).unwrap();
        assert_eq!(next.get_color(3, 1), color);

        for y in 0..4 {
            for x in 0..5 {
                if (x, y) != (3, 1) {
                    assert_eq!(next.get_color(x, y), board.get_color(x, y));
                }
            }
        }
    }

    assert_eq!(board.count(Color::Empty), 20);
}

/// Overwriting a stone with `Empty` clears it.
#[test]
fn test_set_color_overwrite() {
    let board = Board::new(2, 2)
        .unwrap()
        .set_color(1, 1, Color::Black)
        .unwrap()
        .set_color(1, 1, Color::Empty)
        .unwrap();

    assert_eq!(board, Board::new(2, 2).unwrap());
}

/// Off-board writes fail instead of landing on another cell.
#[test]
fn test_set_color_out_of_bounds() {
    let board = Board::new(4, 4).unwrap();

    let err = board.set_color(4, 0, Color::Black).unwrap_err();
    assert_eq!(err, BoardError::OutOfBounds { x: 4, y: 0, width: 4, height: 4 });
    assert!(board.set_color(-1, 1, Color::White).is_err());
    assert!(board.set_color(0, 4, Color::White).is_err());
}

/// Historical snapshots survive a long chain of edits.
#[test]
fn test_snapshot_history() {
    let mut history = vec![Board::new(3, 3).unwrap()];
    for i in 0..9 {
        let next = history.last().unwrap().set_color(i % 3, i / 3, Color::Black).unwrap();
        history.push(next);
    }

    for (n, board) in history.iter().enumerate() {
        assert_eq!(board.count(Color::Black), n);
    }
}

// =============================================================================
// Configuration & Notation
// =============================================================================

/// The standard opening matches the usual Othello start on 8x8.
#[test]
fn test_standard_opening_notation() {
    let board = BoardConfig::default()
        .with_opening(Opening::Standard)
        .build()
        .unwrap();

    let expected: Board = "
        ........
        ........
        ........
        ...WB...
        ...BW...
        ........
        ........
        ........
    "
    .parse()
    .unwrap();

    assert_eq!(board, expected);
}

/// Boards survive a JSON round trip, but caches do not.
#[test]
fn test_json_drops_cache() {
    let board = BoardConfig::new(6, 6)
        .with_opening(Opening::Standard)
        .build()
        .unwrap()
        .calculate_movability(Color::Black);

    let json = serde_json::to_string(&board).unwrap();
    let restored: Board = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, board);
    assert!(!restored.has_movability());
}
