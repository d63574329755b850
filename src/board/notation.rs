//! Text notation for boards.
//!
//! One line per row, top to bottom. `.` is empty, `B` black, `W` white
//! (`X` and `O` are accepted on input). Blank lines and surrounding
//! whitespace are ignored.
//!
//! ```
//! use reversi_engine::{Board, Color};
//!
//! let board: Board = "
//!     .B.
//!     .W.
//! ".parse().unwrap();
//!
//! assert_eq!(board.width(), 3);
//! assert_eq!(board.get_color(1, 1), Color::White);
//! assert_eq!(board.to_string(), ".B.\n.W.");
//! ```

use std::str::FromStr;

use im::Vector;

use super::Board;
use crate::core::{BoardError, Color, ParseError};

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let width = rows.first().map(|r| r.chars().count()).ok_or(ParseError::Empty)?;

        let mut cells = Vector::new();
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ParseError::RaggedRow {
                    row,
                    expected: width,
                    found,
                }
                .into());
            }
            for (col, ch) in line.chars().enumerate() {
                let color = Color::try_from(ch).map_err(|ch| ParseError::BadChar { row, col, ch })?;
                cells.push_back(color);
            }
        }

        Board::from_cells(width, rows.len(), cells)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, color) in self.cells().enumerate() {
            if i > 0 && i % self.width() == 0 {
                writeln!(f)?;
            }
            write!(f, "{}", color)?;
        }
        Ok(())
    }
}
