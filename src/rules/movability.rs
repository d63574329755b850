//! Movability cache: memoized per-cell legality for one color.
//!
//! A board computes the cache once via [`Board::calculate_movability`] and
//! then answers [`Board::can_move`] for that color in O(1). Any edit
//! produces a board without a cache.

use im::Vector;

use crate::board::Board;
use crate::core::Color;

/// Per-cell legality for a single color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Movability {
    color: Color,
    cells: Vector<bool>,
}

impl Movability {
    /// Color the cache was computed for.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Cached legality at a row-major index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.cells.get(index).copied()
    }

    /// Number of legal cells.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&m| m).count()
    }
}

impl Board {
    /// Return a board carrying the movability cache for `color`.
    ///
    /// If a cache is already present the board is returned unchanged, even
    /// when the existing cache was computed for a different color. The
    /// cache never changes what [`Board::get_color`] or [`Board::can_move`]
    /// report.
    ///
    /// ```
    /// use reversi_engine::{Board, Color};
    ///
    /// let board: Board = "....\n.WB.\n.BW.\n....".parse().unwrap();
    /// let cached = board.calculate_movability(Color::Black);
    ///
    /// assert_eq!(cached.movability_color(), Some(Color::Black));
    /// assert_eq!(cached.can_move(2, 0, Color::Black), board.can_move(2, 0, Color::Black));
    /// ```
    #[must_use]
    pub fn calculate_movability(&self, color: Color) -> Self {
        if self.movability.is_some() {
            return self.clone();
        }

        let cells = (0..self.cell_count())
            .map(|index| {
                let (x, y) = self.position_of(index);
                self.can_move_uncached(x, y, color)
            })
            .collect();

        let mut board = self.clone();
        board.movability = Some(Movability { color, cells });
        board
    }

    /// Check if the board carries a movability cache.
    #[must_use]
    pub fn has_movability(&self) -> bool {
        self.movability.is_some()
    }

    /// Color of the attached movability cache, if any.
    #[must_use]
    pub fn movability_color(&self) -> Option<Color> {
        self.movability.as_ref().map(Movability::color)
    }

    /// The attached movability cache, if any.
    #[must_use]
    pub fn movability(&self) -> Option<&Movability> {
        self.movability.as_ref()
    }

    /// Cached legality at `index`, if the cache was computed for `color`.
    pub(crate) fn cached_movability(&self, index: usize, color: Color) -> Option<bool> {
        self.movability
            .as_ref()
            .filter(|m| m.color == color)
            .and_then(|m| m.get(index))
    }

    /// All positions where `color` may move, in row-major order.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<(i32, i32)> {
        (0..self.cell_count())
            .map(|index| self.position_of(index))
            .filter(|&(x, y)| self.can_move(x, y, color))
            .collect()
    }

    /// Check if `color` has at least one legal move.
    #[must_use]
    pub fn has_any_move(&self, color: Color) -> bool {
        if let Some(m) = self.movability.as_ref().filter(|m| m.color == color) {
            return m.count() > 0;
        }

        (0..self.cell_count()).any(|index| {
            let (x, y) = self.position_of(index);
            self.can_move_uncached(x, y, color)
        })
    }
}
