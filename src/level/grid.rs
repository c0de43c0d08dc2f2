//! Grid level: tile membership, start and goal.
//!
//! ## Descriptor format
//!
//! A descriptor is a comma-separated list of rows. Row index is `z`,
//! character index inside a row is `x`:
//!
//! | Marker | Meaning                                   |
//! |--------|-------------------------------------------|
//! | `o`    | empty                                     |
//! | `x`    | supporting tile                           |
//! | `s`    | supporting tile, block starts here        |
//! | `e`    | goal; carries **no** tile                 |
//!
//! Any other character is skipped but still occupies its `x` position.
//!
//! ```
//! use tipblock::core::Cell;
//! use tipblock::level::GridLevel;
//!
//! let level = GridLevel::parse("xs,xe").unwrap();
//! assert_eq!(level.start(), Cell::new(1, 0));
//! assert_eq!(level.goal(), Cell::new(1, 1));
//! assert!(!level.has_tile(level.goal()));
//! ```

use std::str::FromStr;

use glam::Vec3;
use rustc_hash::FxHashSet;

use super::framing::FramingHint;
use crate::block::Footprint;
use crate::core::{Cell, LevelError};

/// Row separator in a level descriptor.
pub const ROW_DELIMITER: char = ',';

/// Height of a tile's center. Tiles sit just below the floor plane.
pub const TILE_CENTER_Y: f32 = -0.05;

/// Tile box extents.
pub const TILE_SIZE: Vec3 = Vec3::new(1.0, 0.2, 1.0);

/// A parsed level.
///
/// Built once when a level is selected and immutable afterwards.
#[derive(Clone, Debug)]
pub struct GridLevel {
    /// Cells with a physical tile.
    support: FxHashSet<Cell>,

    /// Same cells in descriptor order, for the renderer.
    tiles: Vec<Cell>,

    start: Cell,
    goal: Cell,
}

impl GridLevel {
    /// Parse a level descriptor.
    ///
    /// Fails if the start or goal marker is missing or repeated.
    pub fn parse(descriptor: &str) -> Result<Self, LevelError> {
        let mut support = FxHashSet::default();
        let mut tiles = Vec::new();
        let mut start: Option<Cell> = None;
        let mut goal: Option<Cell> = None;

        for (z, row) in descriptor.split(ROW_DELIMITER).enumerate() {
            for (x, marker) in row.chars().enumerate() {
                let cell = Cell::new(x as i32, z as i32);
                match marker {
                    'x' => {
                        if support.insert(cell) {
                            tiles.push(cell);
                        }
                    }
                    's' => {
                        if let Some(first) = start {
                            return Err(LevelError::DuplicateStart { first, second: cell });
                        }
                        start = Some(cell);
                        if support.insert(cell) {
                            tiles.push(cell);
                        }
                    }
                    'e' => {
                        if let Some(first) = goal {
                            return Err(LevelError::DuplicateGoal { first, second: cell });
                        }
                        goal = Some(cell);
                    }
                    _ => {}
                }
            }
        }

        let start = start.ok_or(LevelError::MissingStart)?;
        let goal = goal.ok_or(LevelError::MissingGoal)?;

        Ok(Self {
            support,
            tiles,
            start,
            goal,
        })
    }

    /// Cell the block starts on (always has a tile).
    #[must_use]
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Target cell.
    #[must_use]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Check if a cell carries a tile.
    #[must_use]
    pub fn has_tile(&self, cell: Cell) -> bool {
        self.support.contains(&cell)
    }

    /// Number of supporting tiles.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Supporting cells in descriptor order.
    #[must_use]
    pub fn tiles(&self) -> &[Cell] {
        &self.tiles
    }

    /// Number of footprint cells resting on a tile.
    #[must_use]
    pub fn overlap(&self, footprint: &Footprint) -> usize {
        footprint.cells().iter().filter(|c| self.support.contains(*c)).count()
    }

    /// Check if the footprint is held up by the tiles.
    ///
    /// A standing block needs its one cell on a tile. A lying block needs
    /// both; with only one supported it tips over.
    #[must_use]
    pub fn is_supported(&self, footprint: &Footprint) -> bool {
        let overlap = self.overlap(footprint);
        overlap == 2 || (overlap == 1 && footprint.is_standing())
    }

    /// Check if the footprint completes the level.
    ///
    /// Only a standing block exactly on the goal counts. Tile membership
    /// plays no part: the goal has no tile.
    #[must_use]
    pub fn is_at_goal(&self, footprint: &Footprint) -> bool {
        matches!(footprint, Footprint::Standing(cell) if *cell == self.goal)
    }

    /// Bounding extents of the tiles, for camera placement.
    #[must_use]
    pub fn framing_hint(&self) -> FramingHint {
        FramingHint::from_cells(self.tiles.iter().copied())
    }

    /// World-space centers of every tile.
    pub fn tile_translations(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.tiles
            .iter()
            .map(|c| Vec3::new(c.x as f32, TILE_CENTER_Y, c.z as f32))
    }
}

impl FromStr for GridLevel {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
