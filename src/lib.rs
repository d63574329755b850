//! # reversi-engine
//!
//! Board and move rules for Othello/Reversi-style games on any W×H grid.
//!
//! ## Design Principles
//!
//! 1. **Immutable Snapshots**: Every edit returns a new `Board`. Old
//!    snapshots stay valid, so callers can keep history for undo, replay
//!    or tree search.
//!
//! 2. **Total Operations**: Off-board reads are `Empty`, illegal moves are
//!    no-ops. Only construction (and off-board writes) can fail.
//!
//! 3. **Rules Only**: Turn order, passing, scoring and game end belong to
//!    the caller.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Cells live in an `im::Vector`, giving
//!   O(1) clone and O(log n) single-cell updates.
//!
//! - **Movability Cache**: `calculate_movability` memoizes legality for one
//!   color until the next edit.
//!
//! ## Modules
//!
//! - `core`: Colors, errors, configuration
//! - `board`: Board storage, access, text notation
//! - `rules`: Direction scan, legality, move application, movability cache
//!
//! ## Example
//!
//! ```
//! use reversi_engine::{BoardConfig, Color, Opening};
//!
//! let board = BoardConfig::new(8, 8).with_opening(Opening::Standard).build().unwrap();
//!
//! assert!(board.can_move(3, 2, Color::Black));
//! let next = board.make_move(3, 2, Color::Black);
//!
//! assert_eq!(next.get_color(3, 3), Color::Black);
//! assert_eq!(board.get_color(3, 3), Color::White);
//! ```

pub mod board;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::board::Board;

pub use crate::core::{BoardConfig, BoardError, Color, Opening, ParseError};

pub use crate::rules::{Flips, Movability, DIRECTIONS};
