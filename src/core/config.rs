//! Board configuration.
//!
//! `BoardConfig` describes the board a game starts from:
//! - Dimensions (default 8x8)
//! - `Opening`: empty or the standard four-stone centre
//!
//! The engine never assumes a board size - callers configure it here or
//! call `Board::new` directly.

use serde::{Deserialize, Serialize};

use super::{BoardError, Color};
use crate::board::Board;

/// Starting arrangement of stones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opening {
    /// Every cell empty.
    #[default]
    Empty,
    /// Four stones on the centre 2x2 square, diagonals of the same color.
    ///
    /// With `cx = width / 2` and `cy = height / 2`: White on `(cx-1, cy-1)`
    /// and `(cx, cy)`, Black on `(cx, cy-1)` and `(cx-1, cy)`.
    Standard,
}

/// Complete board configuration.
///
/// ```
/// use reversi_engine::{BoardConfig, Color, Opening};
///
/// let board = BoardConfig::default().with_opening(Opening::Standard).build().unwrap();
///
/// assert_eq!(board.width(), 8);
/// assert_eq!(board.get_color(3, 3), Color::White);
/// assert_eq!(board.get_color(4, 3), Color::Black);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of columns.
    pub width: i32,

    /// Number of rows.
    pub height: i32,

    /// Initial stones.
    pub opening: Opening,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
            opening: Opening::Empty,
        }
    }
}

impl BoardConfig {
    /// Create a configuration with the given dimensions and no stones.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            opening: Opening::Empty,
        }
    }

    /// Set the opening arrangement.
    #[must_use]
    pub fn with_opening(mut self, opening: Opening) -> Self {
        self.opening = opening;
        self
    }

    /// Set the board dimensions.
    #[must_use]
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Build the initial board.
    pub fn build(&self) -> Result<Board, BoardError> {
        let board = Board::new(self.width, self.height)?;

        match self.opening {
            Opening::Empty => Ok(board),
            Opening::Standard => {
                if self.width < 2 || self.height < 2 {
                    return Err(BoardError::OpeningDoesNotFit {
                        width: board.width(),
                        height: board.height(),
                    });
                }
                let (cx, cy) = (self.width / 2, self.height / 2);
                board
                    .set_color(cx - 1, cy - 1, Color::White)?
                    .set_color(cx, cy, Color::White)?
                    .set_color(cx, cy - 1, Color::Black)?
                    .set_color(cx - 1, cy, Color::Black)
            }
        }
    }
}
