//! Core value types: cells, directions, configuration, errors.
//!
//! These are shared by the level, block and game layers and carry no
//! behavior beyond their own arithmetic.

pub mod cell;
pub mod config;
pub mod direction;
pub mod error;

pub use cell::Cell;
pub use config::EngineConfig;
pub use direction::{Axis, Direction, Sign};
pub use error::LevelError;
