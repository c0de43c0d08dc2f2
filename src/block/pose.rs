//! Continuous pose of the block, layered over the discrete footprint.
//!
//! The footprint changes only when a move completes. Between those instants
//! the renderer sees a pose interpolated from elapsed time: a rotation about
//! the contact edge while tilting, a spin plus a drop while falling.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::footprint::{Footprint, Orientation};
use crate::core::{Axis, Direction};

/// Block box extents at rest (long side along Y).
pub const BLOCK_SIZE: Vec3 = Vec3::new(1.0, 2.0, 1.0);

/// World transform of the block's geometric center.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockPose {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl BlockPose {
    /// Pose of a block resting on `footprint`.
    #[must_use]
    pub fn at_rest(footprint: &Footprint) -> Self {
        Self {
            translation: footprint.center(),
            rotation: rest_rotation(footprint.orientation()),
        }
    }
}

/// Rotation taking the upright box to the given orientation.
#[must_use]
pub fn rest_rotation(orientation: Orientation) -> Quat {
    match orientation {
        Orientation::Upright => Quat::IDENTITY,
        Orientation::Lying(Axis::X) => Quat::from_rotation_z(FRAC_PI_2),
        Orientation::Lying(Axis::Z) => Quat::from_rotation_x(FRAC_PI_2),
    }
}

/// Geometry of one tilt: where it hinges and which way it turns.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RollPlan {
    pub direction: Direction,

    /// Footprint the block occupies once the tilt finishes.
    pub target: Footprint,

    /// Midpoint of the contact edge, on the floor.
    pub pivot: Vec3,

    /// Unsigned tilt axis of the move's primary axis.
    pub tilt_axis: Vec3,
}

impl RollPlan {
    /// Plan a tilt of `from` toward `direction`.
    #[must_use]
    pub fn new(from: &Footprint, direction: Direction) -> Self {
        let axis = direction.axis();
        let reach = direction.sign().as_f32() * from.half_extent(axis);
        let center = from.center();
        let pivot = Vec3::new(center.x, 0.0, center.z) + axis.unit() * reach;

        Self {
            direction,
            target: from.rolled(direction),
            pivot,
            tilt_axis: axis.tilt_axis(),
        }
    }

    /// Signed tilt angle after `fraction` of the move.
    #[must_use]
    pub fn angle(&self, fraction: f32) -> f32 {
        self.direction.sign().as_f32() * fraction * FRAC_PI_2
    }

    /// Pose of `from` tilted by `fraction` of the move.
    #[must_use]
    pub fn pose(&self, from: &Footprint, fraction: f32) -> BlockPose {
        let tilt = Quat::from_axis_angle(self.tilt_axis, self.angle(fraction));
        BlockPose {
            translation: self.pivot + tilt * (from.center() - self.pivot),
            rotation: tilt * rest_rotation(from.orientation()),
        }
    }
}
