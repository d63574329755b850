//! Error types.
//!
//! Construction is the only operation that can fail on well-formed input.
//! Everything else either degrades to `Empty` (coordinate queries) or is a
//! no-op (illegal moves).

/// Error raised while constructing or editing a board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Width or height was not positive.
    InvalidDimensions { width: i32, height: i32 },
    /// A write targeted a cell outside the board.
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    /// The requested opening needs at least a 2x2 board.
    OpeningDoesNotFit { width: usize, height: usize },
    /// Serialized cell data did not match `width * height`.
    CellCountMismatch { expected: usize, found: usize },
    /// Text notation could not be parsed.
    Parse(ParseError),
}

/// Error raised by the board text notation parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no rows.
    Empty,
    /// A row had a different length than the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Encountered a character that is not a cell symbol.
    BadChar { row: usize, col: usize, ch: char },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::InvalidDimensions { width, height } => {
                write!(f, "invalid board dimensions {}x{}", width, height)
            }
            BoardError::OutOfBounds { x, y, width, height } => {
                write!(f, "({}, {}) is outside the {}x{} board", x, y, width, height)
            }
            BoardError::OpeningDoesNotFit { width, height } => {
                write!(f, "opening does not fit on a {}x{} board", width, height)
            }
            BoardError::CellCountMismatch { expected, found } => {
                write!(f, "expected {} cells, found {}", expected, found)
            }
            BoardError::Parse(err) => write!(f, "parse error: {}", err),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "no rows"),
            ParseError::RaggedRow { row, expected, found } => {
                write!(f, "row {} has {} cells, expected {}", row, found, expected)
            }
            ParseError::BadChar { row, col, ch } => {
                write!(f, "unexpected character {:?} at row {}, column {}", ch, row, col)
            }
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for BoardError {
    fn from(value: ParseError) -> Self {
        BoardError::Parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display() {
        let err = BoardError::InvalidDimensions { width: 0, height: 5 };
        assert_eq!(err.to_string(), "invalid board dimensions 0x5");

        let err = BoardError::OutOfBounds { x: -1, y: 2, width: 8, height: 8 };
        assert_eq!(err.to_string(), "(-1, 2) is outside the 8x8 board");
    }

    #[test]
    fn test_parse_error_source() {
        let err: BoardError = ParseError::Empty.into();
        assert_eq!(err, BoardError::Parse(ParseError::Empty));
        assert!(err.source().is_some());
        assert!(BoardError::InvalidDimensions { width: -1, height: -1 }.source().is_none());
    }
}
