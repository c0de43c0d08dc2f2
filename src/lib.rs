//! # tipblock
//!
//! Puzzle state engine for a rolling-block tile puzzle: a 1×2×1 block is
//! tipped across a grid of tiles from a start cell to a goal cell without
//! falling off.
//!
//! ## Design Principles
//!
//! 1. **Discrete first**: the block's footprint changes only when a tilt
//!    completes. Poses in between are a presentation function of time.
//!
//! 2. **One transition table**: every direction is an `(Axis, Sign)` pair;
//!    the roll rule is written once over that pair.
//!
//! 3. **Clock-driven**: nothing runs on its own. A driver submits input and
//!    ticks the controller with frame deltas; each tick is synchronous.
//!
//! ## Modules
//!
//! - `core`: Cells, directions, configuration, errors
//! - `level`: Descriptor parsing, support/goal queries, level catalog
//! - `block`: Footprint transitions, tilt and fall kinematics, poses
//! - `game`: Controller state machine and scene collaborator

pub mod block;
pub mod core;
pub mod game;
pub mod level;

// Re-export commonly used types
pub use crate::core::{Axis, Cell, Direction, EngineConfig, LevelError, Sign};

pub use crate::level::{FramingHint, GridLevel, LevelCatalog};

pub use crate::block::{
    AnimationPhase, BlockPose, FallProgress, Footprint, MoveProgress, Orientation, RollingBlock,
};

pub use crate::game::{
    ControllerState, FallCause, GameController, GameEvent, NullScene, SceneSink, TickEvents,
};
