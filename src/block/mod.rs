//! The rolling block.
//!
//! Two layers:
//! - **Discrete**: [`Footprint`] and its transition table. Changes only
//!   when a tilt completes.
//! - **Continuous**: [`AnimationPhase`] and [`BlockPose`]. A pure function of
//!   elapsed time, consumed by the renderer and never by gameplay.
//!
//! ## Example
//!
//! ```
//! use tipblock::block::{Footprint, MoveProgress, RollingBlock};
//! use tipblock::core::{Cell, Direction, EngineConfig};
//!
//! let mut block = RollingBlock::standing_at(Cell::new(0, 0), EngineConfig::default());
//! let target = block.begin_move(Direction::Up);
//! assert_eq!(target, Footprint::lying(Cell::new(1, 0), Cell::new(2, 0)));
//!
//! assert_eq!(block.advance_move(120.0), MoveProgress::InProgress);
//! assert_eq!(block.advance_move(120.0), MoveProgress::Complete);
//! assert_eq!(block.footprint(), target);
//! ```

mod footprint;
mod pose;
mod rolling;

pub use footprint::{Footprint, LyingCells, NotAdjacent, Orientation, LYING_CENTER_Y, STANDING_CENTER_Y};
pub use pose::{rest_rotation, BlockPose, RollPlan, BLOCK_SIZE};
pub use rolling::{AnimationPhase, FallProgress, MoveProgress, RollingBlock};
