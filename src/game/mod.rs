//! Game flow: the controller state machine and its scene collaborator.
//!
//! The controller owns one [`GridLevel`](crate::level::GridLevel) and one
//! [`RollingBlock`](crate::block::RollingBlock) at a time. A driver feeds it
//! input with [`GameController::submit_direction`] and frame deltas with
//! [`GameController::tick`]; nothing runs between calls.
//!
//! ## Example Usage
//!
//! ```
//! use tipblock::core::Direction;
//! use tipblock::game::{ControllerState, GameController, NullScene};
//! use tipblock::level::LevelCatalog;
//!
//! let mut game = GameController::new(&LevelCatalog::builtin()).unwrap();
//! assert!(game.submit_direction(Direction::Right));
//!
//! // Inputs are dropped until the tilt finishes.
//! assert!(!game.submit_direction(Direction::Left));
//!
//! for _ in 0..20 {
//!     game.tick(16.0, &mut NullScene);
//! }
//! assert_eq!(game.state(), ControllerState::Idle);
//! assert_eq!(game.move_count(), 1);
//! ```

mod controller;
mod scene;

pub use controller::{ControllerState, FallCause, GameController, GameEvent, TickEvents};
pub use scene::{NullScene, SceneSink};
