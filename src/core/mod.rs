//! Core types: cell colors, errors, configuration.
//!
//! These are shared by the board storage and the move rules. Games
//! configure the starting board via `BoardConfig` rather than modifying
//! the engine.

pub mod color;
pub mod config;
pub mod error;

pub use color::Color;
pub use config::{BoardConfig, Opening};
pub use error::{BoardError, ParseError};
