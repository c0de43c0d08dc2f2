//! Grid cell coordinates.
//!
//! Every tile, the start marker, the goal marker and each cell of the block's
//! footprint is addressed by a `Cell`.
//!
//! ## Layout
//!
//! - `x`: position inside a descriptor row (character index)
//! - `z`: row index inside the descriptor
//!
//! The vertical world axis (`y`) never appears in the discrete state.
//!
//! ## Usage
//!
//! ```
//! use tipblock::core::{Axis, Cell};
//!
//! let start = Cell::new(1, 0);
//! assert_eq!(start.step(Axis::X, 2), Cell::new(3, 0));
//! assert!(start.is_adjacent(Cell::new(1, 1)));
//! ```

use serde::{Deserialize, Serialize};

use super::direction::Axis;

/// Integer grid coordinate `(x, z)`.
///
/// Two cells are equal iff both components match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Column (position inside a descriptor row).
    pub x: i32,
    /// Row (index of the descriptor row).
    pub z: i32,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Component along a horizontal axis.
    #[must_use]
    pub const fn along(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Z => self.z,
        }
    }

    /// Move `amount` cells along `axis`.
    #[must_use]
    pub const fn step(self, axis: Axis, amount: i32) -> Self {
        match axis {
            Axis::X => Self::new(self.x + amount, self.z),
            Axis::Z => Self::new(self.x, self.z + amount),
        }
    }

    /// Check if `other` shares an edge with this cell.
    ///
    /// ```
    /// use tipblock::core::Cell;
    ///
    /// let c = Cell::new(0, 0);
    /// assert!(c.is_adjacent(Cell::new(1, 0)));
    /// assert!(!c.is_adjacent(Cell::new(1, 1))); // diagonal
    /// assert!(!c.is_adjacent(c));
    /// ```
    #[must_use]
    pub const fn is_adjacent(self, other: Cell) -> bool {
        let dx = (self.x - other.x).abs();
        let dz = (self.z - other.z).abs();
        dx + dz == 1
    }

    /// The axis along which an adjacent cell differs, if any.
    #[must_use]
    pub const fn adjacency_axis(self, other: Cell) -> Option<Axis> {
        if !self.is_adjacent(other) {
            None
        } else if self.x != other.x {
            Some(Axis::X)
        } else {
            Some(Axis::Z)
        }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, z): (i32, i32)) -> Self {
        Self::new(x, z)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}
