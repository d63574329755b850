//! Cell colors.
//!
//! Every cell on a board holds exactly one of three values: `Empty`,
//! `Black` or `White`. The same type names the player placing a stone.

use serde::{Deserialize, Serialize};

/// Value stored in a single board cell.
///
/// ```
/// use reversi_engine::Color;
///
/// assert_eq!(Color::Black.opponent(), Color::White);
/// assert_eq!(Color::default(), Color::Empty);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// No stone.
    #[default]
    Empty,
    /// Black stone.
    Black,
    /// White stone.
    White,
}

impl Color {
    /// All three cell values.
    pub const ALL: [Color; 3] = [Color::Empty, Color::Black, Color::White];

    /// Get the opposing stone color. `Empty` has no opponent and maps to itself.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Empty => Color::Empty,
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Check if this is a stone (not `Empty`).
    #[must_use]
    pub const fn is_stone(self) -> bool {
        !matches!(self, Color::Empty)
    }

    /// Single-character notation used by the board text format.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Color::Empty => '.',
            Color::Black => 'B',
            Color::White => 'W',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Color {
    type Error = char;

    /// Accepts `.` for empty, `B`/`X` for black and `W`/`O` for white.
    /// Returns the offending character otherwise.
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '.' => Ok(Color::Empty),
            'B' | 'X' => Ok(Color::Black),
            'W' | 'O' => Ok(Color::White),
            _ => Err(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Empty.opponent(), Color::Empty);
    }

    #[test]
    fn test_is_stone() {
        assert!(!Color::Empty.is_stone());
        assert!(Color::Black.is_stone());
        assert!(Color::White.is_stone());
    }

    #[test]
    fn test_char_conversion() {
        for color in Color::ALL {
            assert_eq!(Color::try_from(color.symbol()), Ok(color));
        }
        assert_eq!(Color::try_from('X'), Ok(Color::Black));
        assert_eq!(Color::try_from('O'), Ok(Color::White));
        assert_eq!(Color::try_from('?'), Err('?'));
    }

    #[test]
    fn test_char_conversion_rejects_unlisted_symbols() {
        for ch in ['-', 'b', 'w', 'x', 'o'] {
            assert_eq!(Color::try_from(ch), Err(ch));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Color::White), "W");
        assert_eq!(format!("{}", Color::Empty), ".");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Color::Black).unwrap();
        let deserialized: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Color::Black);
    }
}
