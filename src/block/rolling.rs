//! The rolling block: discrete footprint plus its animation phase.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle --begin_move--> Rotating --advance_move (complete)--> Idle
//! Idle --begin_fall--> Falling  --advance_fall (settled)---> (owner resets)
//! ```
//!
//! The footprint is only replaced when a tilt completes; the pending target
//! is readable through [`RollingBlock::pending_footprint`] in the meantime.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::footprint::{Footprint, Orientation};
use super::pose::{rest_rotation, BlockPose, RollPlan};
use crate::core::{Cell, Direction, EngineConfig};
use crate::level::GridLevel;

/// What the block is animating.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum AnimationPhase {
    /// At rest on its footprint.
    Idle,

    /// Tilting toward `plan.target`.
    Rotating { plan: RollPlan, elapsed_ms: f64 },

    /// Dropping off the level.
    Falling {
        last_direction: Option<Direction>,
        elapsed_ms: f64,
        vertical_velocity: f64,
        vertical_offset: f64,
    },
}

/// Result of [`RollingBlock::advance_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveProgress {
    InProgress,
    /// The footprint now holds the move's target.
    Complete,
}

/// Result of [`RollingBlock::advance_fall`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallProgress {
    Falling,
    /// The block dropped past the settle depth.
    Settled,
}

/// The moving piece.
#[derive(Clone, Debug)]
pub struct RollingBlock {
    footprint: Footprint,
    phase: AnimationPhase,
    last_direction: Option<Direction>,
    config: EngineConfig,
}

impl RollingBlock {
    /// A block standing on `cell`.
    #[must_use]
    pub fn standing_at(cell: Cell, config: EngineConfig) -> Self {
        Self {
            footprint: Footprint::Standing(cell),
            phase: AnimationPhase::Idle,
            last_direction: None,
            config,
        }
    }

    /// A block standing on the level's start cell.
    #[must_use]
    pub fn for_level(level: &GridLevel, config: EngineConfig) -> Self {
        Self::standing_at(level.start(), config)
    }

    #[must_use]
    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.footprint.orientation()
    }

    #[must_use]
    pub fn is_standing(&self) -> bool {
        self.footprint.is_standing()
    }

    #[must_use]
    pub fn phase(&self) -> &AnimationPhase {
        &self.phase
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, AnimationPhase::Idle)
    }

    /// Direction of the last completed move, if the fall should keep spinning.
    #[must_use]
    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    /// Drop the remembered direction so a fall does not spin.
    pub fn clear_last_direction(&mut self) {
        self.last_direction = None;
        if let AnimationPhase::Falling { last_direction, .. } = &mut self.phase {
            *last_direction = None;
        }
    }

    /// Target of the move in flight, if any.
    #[must_use]
    pub fn pending_footprint(&self) -> Option<Footprint> {
        match &self.phase {
            AnimationPhase::Rotating { plan, .. } => Some(plan.target),
            _ => None,
        }
    }

    // === Moving ===

    /// Start tilting toward `direction`.
    ///
    /// Returns the footprint the block will occupy once the tilt finishes.
    /// Panics if the block is not idle.
    pub fn begin_move(&mut self, direction: Direction) -> Footprint {
        assert!(self.is_idle(), "begin_move while {:?}", self.phase);

        let plan = RollPlan::new(&self.footprint, direction);
        self.phase = AnimationPhase::Rotating { plan, elapsed_ms: 0.0 };
        plan.target
    }

    /// Advance the tilt by `delta_ms`.
    ///
    /// Once the accumulated time reaches the move duration the footprint is
    /// committed and the block returns to idle.
    pub fn advance_move(&mut self, delta_ms: f64) -> MoveProgress {
        let (plan, elapsed_ms) = match &mut self.phase {
            AnimationPhase::Rotating { plan, elapsed_ms } => {
                *elapsed_ms += delta_ms;
                (*plan, *elapsed_ms)
            }
            other => {
                debug_assert!(false, "advance_move while {other:?}");
                return MoveProgress::Complete;
            }
        };

        if self.move_fraction_of(elapsed_ms) < 1.0 {
            return MoveProgress::InProgress;
        }

        self.footprint = plan.target;
        self.last_direction = Some(plan.direction);
        self.phase = AnimationPhase::Idle;
        MoveProgress::Complete
    }

    /// Fraction of the current tilt completed, in `0..=1`.
    #[must_use]
    pub fn move_fraction(&self) -> f64 {
        match self.phase {
            AnimationPhase::Rotating { elapsed_ms, .. } => self.move_fraction_of(elapsed_ms),
            _ => 0.0,
        }
    }

    fn move_fraction_of(&self, elapsed_ms: f64) -> f64 {
        (elapsed_ms / self.config.move_duration_ms).min(1.0)
    }

    /// Current signed tilt angle in radians (0 unless tilting).
    #[must_use]
    pub fn tilt_angle(&self) -> f32 {
        match &self.phase {
            AnimationPhase::Rotating { plan, .. } => plan.angle(self.move_fraction() as f32),
            _ => 0.0,
        }
    }

    // === Falling ===

    /// Start dropping from the current footprint.
    ///
    /// The visual pivot snaps to the block's center; any tilt left over from
    /// the previous move is folded into the resting orientation.
    pub fn begin_fall(&mut self) {
        self.phase = AnimationPhase::Falling {
            last_direction: self.last_direction,
            elapsed_ms: 0.0,
            vertical_velocity: 0.0,
            vertical_offset: 0.0,
        };
    }

    /// Integrate the fall by `delta_ms`.
    ///
    /// Velocity is updated before position. Reports `Settled` once the
    /// offset is below the configured depth.
    pub fn advance_fall(&mut self, delta_ms: f64) -> FallProgress {
        let gravity = self.config.gravity;
        let offset = match &mut self.phase {
            AnimationPhase::Falling {
                elapsed_ms,
                vertical_velocity,
                vertical_offset,
                ..
            } => {
                *elapsed_ms += delta_ms;
                *vertical_velocity -= gravity * delta_ms;
                *vertical_offset += *vertical_velocity * delta_ms;
                *vertical_offset
            }
            other => {
                debug_assert!(false, "advance_fall while {other:?}");
                return FallProgress::Settled;
            }
        };

        if offset < self.config.settle_depth {
            FallProgress::Settled
        } else {
            FallProgress::Falling
        }
    }

    /// Current drop below the floor (0 unless falling).
    #[must_use]
    pub fn vertical_offset(&self) -> f64 {
        match self.phase {
            AnimationPhase::Falling { vertical_offset, .. } => vertical_offset,
            _ => 0.0,
        }
    }

    /// Put the block back on the level's start cell, standing and idle.
    pub fn reset_to(&mut self, level: &GridLevel) {
        self.footprint = Footprint::Standing(level.start());
        self.phase = AnimationPhase::Idle;
        self.last_direction = None;
    }

    // === Presentation ===

    /// World transform for the renderer.
    #[must_use]
    pub fn pose(&self) -> BlockPose {
        match &self.phase {
            AnimationPhase::Idle => BlockPose::at_rest(&self.footprint),
            AnimationPhase::Rotating { plan, .. } => plan.pose(&self.footprint, self.move_fraction() as f32),
            AnimationPhase::Falling {
                last_direction,
                elapsed_ms,
                vertical_offset,
                ..
            } => {
                let spin = match last_direction {
                    Some(dir) => {
                        let angle = dir.sign().as_f32() * (self.config.angular_rate() * elapsed_ms) as f32;
                        Quat::from_axis_angle(dir.axis().tilt_axis(), angle)
                    }
                    None => Quat::IDENTITY,
                };
                BlockPose {
                    translation: self.footprint.center() + Vec3::Y * *vertical_offset as f32,
                    rotation: spin * rest_rotation(self.footprint.orientation()),
                }
            }
        }
    }
}
