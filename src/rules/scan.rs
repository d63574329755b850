//! Direction scanning shared by legality checks and move application.

use crate::board::Board;
use crate::core::Color;

/// The 8 compass steps `(dx, dy)`.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count the opposing stones a stone of `color` at `(x, y)` would capture
/// along `(dx, dy)`.
///
/// Walks outward from `(x, y)`. The run captures only if one or more
/// opposing stones are followed by a stone of `color`. An empty cell (the
/// board edge reads as empty) or an immediately adjacent own stone yields 0.
/// The target cell itself is not inspected.
///
/// A start off the board, a `(0, 0)` step or a walk past `i32` range also
/// yields 0.
#[must_use]
pub fn capture_len(board: &Board, x: i32, y: i32, color: Color, dx: i32, dy: i32) -> usize {
    if !color.is_stone() || (dx, dy) == (0, 0) || !board.in_bounds(x, y) {
        return 0;
    }

    let (mut cx, mut cy) = (x, y);
    let mut run = 0;
    loop {
        let (Some(nx), Some(ny)) = (cx.checked_add(dx), cy.checked_add(dy)) else {
            return 0;
        };
        (cx, cy) = (nx, ny);
        match board.get_color(cx, cy) {
            Color::Empty => return 0,
            c if c == color => return run,
            _ => run += 1,
        }
    }
}
