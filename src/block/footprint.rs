//! Discrete block state and the roll transition table.
//!
//! A move is described by its primary axis `P` and sign `s`; `Q` is the
//! other horizontal axis and `C` the mean of the occupied cells.
//!
//! | Footprint            | Result                                   |
//! |----------------------|------------------------------------------|
//! | standing at `C`      | lying on `C + s·P̂`, `C + 2s·P̂`           |
//! | lying along `P`      | standing on `C + 1.5s·P̂`                 |
//! | lying along `Q`      | lying on `C + s·P̂ ± 0.5·Q̂` (still `Q`)  |
//!
//! With cells stored low-to-high the half-cell offsets collapse to integer
//! steps: `C + 1.5s·P̂` is one past the leading cell, and the `Q` case is
//! both cells shifted one step along `P`.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::{Axis, Cell, Direction, Sign};

/// Height of the block's center when standing.
pub const STANDING_CENTER_Y: f32 = 1.0;

/// Height of the block's center when lying.
pub const LYING_CENTER_Y: f32 = 0.5;

/// Which way the block's long side points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Long side vertical, one cell occupied.
    Upright,
    /// Long side horizontal along the given axis, two cells occupied.
    Lying(Axis),
}

/// Two cells that cannot form a lying footprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotAdjacent {
    pub first: Cell,
    pub second: Cell,
}

impl fmt::Display for NotAdjacent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lying cells {} and {} are not adjacent", self.first, self.second)
    }
}

impl std::error::Error for NotAdjacent {}

/// The two cells under a lying block: edge-adjacent, ordered low to high.
///
/// Only obtainable through [`LyingCells::new`] (or deserialization, which
/// goes through it).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(Cell, Cell)", into = "(Cell, Cell)")]
pub struct LyingCells {
    low: Cell,
    high: Cell,
}

impl LyingCells {
    /// Pair two adjacent cells, in either order.
    pub fn new(a: Cell, b: Cell) -> Result<Self, NotAdjacent> {
        if !a.is_adjacent(b) {
            return Err(NotAdjacent { first: a, second: b });
        }
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Ok(Self { low, high })
    }

    #[must_use]
    pub fn low(&self) -> Cell {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> Cell {
        self.high
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        if self.low.x != self.high.x {
            Axis::X
        } else {
            Axis::Z
        }
    }

    fn shifted(self, axis: Axis, amount: i32) -> Self {
        Self {
            low: self.low.step(axis, amount),
            high: self.high.step(axis, amount),
        }
    }
}

impl TryFrom<(Cell, Cell)> for LyingCells {
    type Error = NotAdjacent;

    fn try_from((a, b): (Cell, Cell)) -> Result<Self, Self::Error> {
        Self::new(a, b)
    }
}

impl From<LyingCells> for (Cell, Cell) {
    fn from(cells: LyingCells) -> Self {
        (cells.low, cells.high)
    }
}

/// Cells occupied by the block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Footprint {
    Standing(Cell),
    Lying(LyingCells),
}

impl Footprint {
    /// A lying footprint over two adjacent cells, in either order.
    ///
    /// Panics if the cells are not edge-adjacent; see [`Footprint::try_lying`].
    #[must_use]
    pub fn lying(a: Cell, b: Cell) -> Self {
        match LyingCells::new(a, b) {
            Ok(cells) => Footprint::Lying(cells),
            Err(err) => panic!("{err}"),
        }
    }

    /// A lying footprint, or an error if the cells are not edge-adjacent.
    pub fn try_lying(a: Cell, b: Cell) -> Result<Self, NotAdjacent> {
        LyingCells::new(a, b).map(Footprint::Lying)
    }

    /// Occupied cells (1 standing, 2 lying).
    #[must_use]
    pub fn cells(&self) -> SmallVec<[Cell; 2]> {
        match *self {
            Footprint::Standing(c) => smallvec![c],
            Footprint::Lying(cells) => smallvec![cells.low, cells.high],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Footprint::Standing(_) => 1,
            Footprint::Lying(..) => 2,
        }
    }

    /// Never true; a footprint always covers at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn is_standing(&self) -> bool {
        matches!(self, Footprint::Standing(_))
    }

    /// Derived orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        match *self {
            Footprint::Standing(_) => Orientation::Upright,
            Footprint::Lying(cells) => Orientation::Lying(cells.axis()),
        }
    }

    /// Twice the mean of the occupied cells, so half-cell centers stay integral.
    #[must_use]
    pub fn doubled_center(&self) -> (i32, i32) {
        match *self {
            Footprint::Standing(c) => (2 * c.x, 2 * c.z),
            Footprint::Lying(LyingCells { low, high }) => (low.x + high.x, low.z + high.z),
        }
    }

    /// World-space geometric center of the block.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        let (dx, dz) = self.doubled_center();
        let y = if self.is_standing() { STANDING_CENTER_Y } else { LYING_CENTER_Y };
        Vec3::new(dx as f32 / 2.0, y, dz as f32 / 2.0)
    }

    /// Distance from the center to the block's face along `axis`.
    #[must_use]
    pub fn half_extent(&self, axis: Axis) -> f32 {
        match self.orientation() {
            Orientation::Lying(long) if long == axis => 1.0,
            _ => 0.5,
        }
    }

    /// Footprint after tipping one step in `direction`.
    #[must_use]
    pub fn rolled(&self, direction: Direction) -> Self {
        let axis = direction.axis();
        let sign = direction.sign();
        let s = sign.value();

        match *self {
            Footprint::Standing(c) => {
                let (near, far) = (c.step(axis, s), c.step(axis, 2 * s));
                Footprint::Lying(LyingCells {
                    low: near.min(far),
                    high: near.max(far),
                })
            }
            Footprint::Lying(cells) => {
                if cells.axis() == axis {
                    let leading = match sign {
                        Sign::Positive => cells.high,
                        Sign::Negative => cells.low,
                    };
                    Footprint::Standing(leading.step(axis, s))
                } else {
                    Footprint::Lying(cells.shifted(axis, s))
                }
            }
        }
    }
}

impl fmt::Display for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Footprint::Standing(c) => write!(f, "[{c}]"),
            Footprint::Lying(cells) => write!(f, "[{}, {}]", cells.low, cells.high),
        }
    }
}
