//! Movement directions and horizontal axes.
//!
//! Every input direction reduces to an `(Axis, Sign)` pair. The block's
//! transition rule is written once in terms of that pair, so opposite
//! directions share an axis and differ only in sign.
//!
//! | Direction | Axis | Sign |
//! |-----------|------|------|
//! | Up        | X    | +    |
//! | Down      | X    | −    |
//! | Right     | Z    | +    |
//! | Left      | Z    | −    |

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Horizontal movement axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// World X (the descriptor's column axis).
    X,
    /// World Z (the descriptor's row axis).
    Z,
}

impl Axis {
    /// The other horizontal axis.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Axis::X => Axis::Z,
            Axis::Z => Axis::X,
        }
    }

    /// Unit vector along this axis.
    #[must_use]
    pub const fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Z => Vec3::Z,
        }
    }

    /// Axis about which a positive move along `self` tilts the block.
    ///
    /// This is `Y × P̂`, so a positive tilt angle tips the top of the block
    /// toward the direction of travel.
    #[must_use]
    pub const fn tilt_axis(self) -> Vec3 {
        match self {
            Axis::X => Vec3::NEG_Z,
            Axis::Z => Vec3::X,
        }
    }
}

/// Direction of travel along an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// `+1` or `-1`.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }

    /// `+1.0` or `-1.0`.
    #[must_use]
    pub const fn as_f32(self) -> f32 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }

    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// One of the four input directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// All four directions, in input order.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

    /// The primary axis this direction advances along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::X,
            Direction::Left | Direction::Right => Axis::Z,
        }
    }

    /// The sign of travel along [`Direction::axis`].
    #[must_use]
    pub const fn sign(self) -> Sign {
        match self {
            Direction::Up | Direction::Right => Sign::Positive,
            Direction::Down | Direction::Left => Sign::Negative,
        }
    }

    /// Rebuild a direction from its `(axis, sign)` pair.
    #[must_use]
    pub const fn from_axis_sign(axis: Axis, sign: Sign) -> Self {
        match (axis, sign) {
            (Axis::X, Sign::Positive) => Direction::Up,
            (Axis::X, Sign::Negative) => Direction::Down,
            (Axis::Z, Sign::Positive) => Direction::Right,
            (Axis::Z, Sign::Negative) => Direction::Left,
        }
    }

    /// The direction sharing this axis with the opposite sign.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::from_axis_sign(self.axis(), self.sign().flipped())
    }

    /// Map a keyboard `code` (as reported by browser-style key events) to a
    /// direction.
    ///
    /// Unrecognized codes yield `None`; callers drop them without error.
    ///
    /// ```
    /// use tipblock::core::Direction;
    ///
    /// assert_eq!(Direction::from_key_code("KeyW"), Some(Direction::Up));
    /// assert_eq!(Direction::from_key_code("ArrowLeft"), Some(Direction::Left));
    /// assert_eq!(Direction::from_key_code("Space"), None);
    /// ```
    #[must_use]
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" | "ArrowUp" => Some(Direction::Up),
            "KeyA" | "ArrowLeft" => Some(Direction::Left),
            "KeyS" | "ArrowDown" => Some(Direction::Down),
            "KeyD" | "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}
