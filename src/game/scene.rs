//! Scene collaborator: where the controller pushes presentation data.
//!
//! The controller never reads anything back from a scene. Renderers, UI
//! counters and test recorders all implement the same trait.

use crate::block::BlockPose;
use crate::level::GridLevel;

/// Receiver of per-tick presentation updates.
///
/// Called in this order within a tick, after all state changes:
/// `level_loaded` (only when the level changed), `block_pose`, `counters`.
pub trait SceneSink {
    /// A new level is active; rebuild static tile geometry and the camera.
    fn level_loaded(&mut self, index: usize, level: &GridLevel);

    /// The block's current world transform.
    fn block_pose(&mut self, pose: BlockPose);

    /// Read-only counters for a HUD.
    fn counters(&mut self, _move_count: u32, _level_index: usize) {}
}

/// A scene that discards everything. Used for headless play.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullScene;

impl SceneSink for NullScene {
    fn level_loaded(&mut self, _index: usize, _level: &GridLevel) {}

    fn block_pose(&mut self, _pose: BlockPose) {}
}
