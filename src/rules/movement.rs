//! Move application: place a stone and flip captured runs.

use smallvec::SmallVec;

use super::scan::{capture_len, DIRECTIONS};
use crate::board::Board;
use crate::core::Color;

/// Cells recolored by a move, excluding the placed stone.
///
/// 16 covers the typical capture without a heap allocation.
pub type Flips = SmallVec<[(i32, i32); 16]>;

impl Board {
    /// Cells a stone of `color` at `(x, y)` would flip.
    ///
    /// Every direction is scanned against this board, so runs never observe
    /// each other's flips. Empty for an illegal move.
    #[must_use]
    pub fn flips(&self, x: i32, y: i32, color: Color) -> Flips {
        let mut flips = Flips::new();
        if !self.can_move(x, y, color) {
            return flips;
        }

        for &(dx, dy) in &DIRECTIONS {
            let run = capture_len(self, x, y, color, dx, dy) as i32;
            flips.extend((1..=run).map(|step| (x + dx * step, y + dy * step)));
        }
        flips
    }

    /// Apply a move by `color` at `(x, y)`.
    ///
    /// An illegal move is ignored and the board is returned unchanged.
    /// Otherwise the stone is placed, every captured run is flipped in one
    /// batch and the result carries no movability cache.
    ///
    /// ```
    /// use reversi_engine::{Board, Color};
    ///
    /// let board: Board = "......\n......\n..BW..\n..WB..\n......\n......".parse().unwrap();
    /// let next = board.make_move(2, 1, Color::White);
    ///
    /// assert_eq!(next.get_color(2, 1), Color::White);
    /// assert_eq!(next.get_color(2, 2), Color::White);
    /// assert_eq!(next.get_color(3, 3), Color::Black);
    /// ```
    #[must_use]
    pub fn make_move(&self, x: i32, y: i32, color: Color) -> Self {
        let Some(placed) = self.index_of(x, y) else {
            return self.clone();
        };

        let flips = self.flips(x, y, color);
        if flips.is_empty() {
            return self.clone();
        }

        let mut cells = self.raw_cells().clone();
        cells.set(placed, color);
        for (fx, fy) in flips {
            if let Some(index) = self.index_of(fx, fy) {
                cells.set(index, color);
            }
        }
        self.with_cells(cells)
    }
}
