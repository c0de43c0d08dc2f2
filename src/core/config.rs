//! Engine configuration.
//!
//! Timing and physics constants shared by the block and the controller.
//! The defaults reproduce the reference feel of the puzzle:
//! - a move takes 200 ms and tilts the block by 90°
//! - a falling block accelerates at 0.0001 units/ms²
//! - a fall is over once the block is 20 units below the floor

use serde::{Deserialize, Serialize};

/// Timing and physics constants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Duration of one tilt animation, in milliseconds.
    pub move_duration_ms: f64,

    /// Downward acceleration while falling, in units/ms².
    pub gravity: f64,

    /// Vertical offset below which a fall counts as settled (negative).
    pub settle_depth: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            move_duration_ms: 200.0,
            gravity: 0.0001,
            settle_depth: -20.0,
        }
    }
}

impl EngineConfig {
    /// Create a config with explicit values.
    #[must_use]
    pub fn new(move_duration_ms: f64, gravity: f64, settle_depth: f64) -> Self {
        assert!(move_duration_ms > 0.0, "Move duration must be positive");
        assert!(gravity > 0.0, "Gravity must be positive");
        assert!(settle_depth < 0.0, "Settle depth must be below the floor");

        Self {
            move_duration_ms,
            gravity,
            settle_depth,
        }
    }

    /// Set the move duration.
    #[must_use]
    pub fn with_move_duration(mut self, ms: f64) -> Self {
        assert!(ms > 0.0, "Move duration must be positive");
        self.move_duration_ms = ms;
        self
    }

    /// Set the falling acceleration.
    #[must_use]
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        assert!(gravity > 0.0, "Gravity must be positive");
        self.gravity = gravity;
        self
    }

    /// Set the settle depth.
    #[must_use]
    pub fn with_settle_depth(mut self, depth: f64) -> Self {
        assert!(depth < 0.0, "Settle depth must be below the floor");
        self.settle_depth = depth;
        self
    }

    /// Angular rate of a tilt, in radians per millisecond.
    ///
    /// A falling block keeps spinning at this rate.
    #[must_use]
    pub fn angular_rate(&self) -> f64 {
        std::f64::consts::FRAC_PI_2 / self.move_duration_ms
    }
}
