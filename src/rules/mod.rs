//! Move rules.
//!
//! Everything here is implemented as methods on `Board`:
//! - `can_move`: legality of placing a stone
//! - `make_move` / `flips`: placing a stone and flipping captured runs
//! - `calculate_movability`: per-cell legality cache for one color
//!
//! All of them share one direction scan (`scan::capture_len`) run over the
//! 8 compass steps.

pub mod legality;
pub mod movability;
pub mod movement;
pub mod scan;

pub use movability::Movability;
pub use movement::Flips;
pub use scan::{capture_len, DIRECTIONS};
