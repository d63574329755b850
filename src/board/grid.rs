//! Board storage and cell access.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{BoardError, Color};
use crate::rules::Movability;

/// Immutable W×H grid of cells.
///
/// Cells are stored row-major (`index = x + y * width`) in an `im::Vector`,
/// so cloning a board is O(1) and every edit produces a new snapshot that
/// shares structure with the old one. No method mutates a board in place.
///
/// A board may carry a movability cache (see
/// [`Board::calculate_movability`]). The cache is derived data: it is
/// dropped by every edit and ignored by equality and serialization.
///
/// ## Example
///
/// ```
/// use reversi_engine::{Board, Color};
///
/// let empty = Board::new(6, 6).unwrap();
/// let board = empty.set_color(2, 2, Color::Black).unwrap();
///
/// assert_eq!(board.get_color(2, 2), Color::Black);
/// assert_eq!(empty.get_color(2, 2), Color::Empty); // Old snapshot untouched
/// assert_eq!(board.get_color(-1, 9), Color::Empty); // Off-board reads as empty
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(into = "BoardRepr", try_from = "BoardRepr")]
pub struct Board {
    cells: Vector<Color>,
    width: usize,
    height: usize,
    pub(crate) movability: Option<Movability>,
}

impl Board {
    /// Create an all-empty board.
    ///
    /// Fails with [`BoardError::InvalidDimensions`] if either dimension is
    /// not positive, or if `width * height` exceeds `i32::MAX` cells.
    pub fn new(width: i32, height: i32) -> Result<Self, BoardError> {
        if width <= 0 || height <= 0 || width.checked_mul(height).is_none() {
            return Err(BoardError::InvalidDimensions { width, height });
        }

        let (width, height) = (width as usize, height as usize);
        Ok(Self {
            cells: Vector::from(vec![Color::Empty; width * height]),
            width,
            height,
            movability: None,
        })
    }

    /// Board width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Board height.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (`width * height`).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if `(x, y)` lies on the board.
    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index_of(x, y).is_some()
    }

    /// Row-major index of `(x, y)`, or `None` when off the board.
    #[must_use]
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(x + y * self.width)
    }

    /// Coordinates of a row-major index.
    #[must_use]
    pub fn position_of(&self, index: usize) -> (i32, i32) {
        ((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Get the color at `(x, y)`.
    ///
    /// Coordinates outside the board read as [`Color::Empty`], which lets
    /// direction scans run off the edge without special cases.
    #[must_use]
    pub fn get_color(&self, x: i32, y: i32) -> Color {
        match self.index_of(x, y) {
            Some(index) => self.cells[index],
            None => Color::Empty,
        }
    }

    /// Return a new board with `(x, y)` set to `color`.
    ///
    /// The result never carries a movability cache. Writing outside the
    /// board fails with [`BoardError::OutOfBounds`].
    pub fn set_color(&self, x: i32, y: i32, color: Color) -> Result<Self, BoardError> {
        let index = self.index_of(x, y).ok_or(BoardError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;

        Ok(self.with_cells(self.cells.update(index, color)))
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Color> + '_ {
        self.cells.iter().copied()
    }

    /// Count cells holding `color`.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }

    pub(crate) fn raw_cells(&self) -> &Vector<Color> {
        &self.cells
    }

    /// Same dimensions, new cells, no cache.
    pub(crate) fn with_cells(&self, cells: Vector<Color>) -> Self {
        debug_assert_eq!(cells.len(), self.width * self.height);
        Self {
            cells,
            width: self.width,
            height: self.height,
            movability: None,
        }
    }

    /// Build a board from row-major cells.
    pub(crate) fn from_cells(
        width: usize,
        height: usize,
        cells: Vector<Color>,
    ) -> Result<Self, BoardError> {
        let fits = i32::try_from(width)
            .ok()
            .zip(i32::try_from(height).ok())
            .and_then(|(w, h)| w.checked_mul(h))
            .is_some();
        if width == 0 || height == 0 || !fits {
            return Err(BoardError::InvalidDimensions {
                width: width.min(i32::MAX as usize) as i32,
                height: height.min(i32::MAX as usize) as i32,
            });
        }
        let expected = width * height;
        if cells.len() != expected {
            return Err(BoardError::CellCountMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
            movability: None,
        })
    }
}

/// Structural equality: dimensions and cells. The cache is ignored.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for Board {}

/// Plain serialized form of a board.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct BoardRepr {
    width: usize,
    height: usize,
    cells: Vec<Color>,
}

impl From<Board> for BoardRepr {
    fn from(board: Board) -> Self {
        Self {
            width: board.width,
            height: board.height,
            cells: board.cells.iter().copied().collect(),
        }
    }
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        Board::from_cells(repr.width, repr.height, Vector::from(repr.cells))
    }
}
