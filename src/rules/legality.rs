//! Move legality.

use super::scan::{capture_len, DIRECTIONS};
use crate::board::Board;
use crate::core::Color;

impl Board {
    /// Check if `color` may place a stone at `(x, y)`.
    ///
    /// A move is legal when the target cell is on the board and empty, and
    /// at least one of the 8 directions captures an opposing run.
    ///
    /// When the board carries a movability cache computed for `color`, the
    /// answer is read from the cache instead of rescanning.
    ///
    /// ```
    /// use reversi_engine::{Board, Color};
    ///
    /// let board: Board = "...\n.WB\n...".parse().unwrap();
    /// assert!(board.can_move(0, 1, Color::Black));
    /// assert!(!board.can_move(0, 1, Color::White));
    /// ```
    #[must_use]
    pub fn can_move(&self, x: i32, y: i32, color: Color) -> bool {
        let Some(index) = self.index_of(x, y) else {
            return false;
        };

        if let Some(cached) = self.cached_movability(index, color) {
            return cached;
        }

        self.can_move_uncached(x, y, color)
    }

    /// Legality by direct scan, ignoring any cache.
    pub(crate) fn can_move_uncached(&self, x: i32, y: i32, color: Color) -> bool {
        if !color.is_stone() || !self.in_bounds(x, y) {
            return false;
        }

        if self.get_color(x, y) != Color::Empty {
            return false;
        }

        DIRECTIONS
            .iter()
            .any(|&(dx, dy)| capture_len(self, x, y, color, dx, dy) > 0)
    }
}
