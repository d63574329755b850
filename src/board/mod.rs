//! Immutable board snapshots.
//!
//! ## Key Types
//!
//! - `Board`: W×H grid of `Color` cells, copy-on-write via `im::Vector`
//!
//! Boards also parse from and print to a compact text notation, used
//! heavily by tests to describe positions.

pub mod grid;
pub mod notation;

pub use grid::Board;
