//! Levels: descriptor parsing, support and goal queries, the level catalog.
//!
//! A `GridLevel` answers the two gameplay questions the controller asks
//! after every move:
//! - is the block's footprint held up by tiles?
//! - is the block standing on the goal?
//!
//! Everything else here (`FramingHint`, tile translations) only feeds the
//! renderer.

mod catalog;
mod framing;
mod grid;

pub use catalog::{LevelCatalog, BUILTIN_LEVELS};
pub use framing::{FramingHint, CAMERA_OFFSET};
pub use grid::{GridLevel, ROW_DELIMITER, TILE_CENTER_Y, TILE_SIZE};
