//! Game-flow state machine.
//!
//! ```text
//!            submit_direction
//!   Idle ─────────────────────▶ Moving(dir)
//!    ▲                              │ move complete
//!    │        supported, not goal   │
//!    ├──────────────────────────────┤
//!    │                              │ at goal        → ResolvingFall(Complete)
//!    │                              │ not supported  → ResolvingFall(Unsupported)
//!    │   settled: reset / advance   ▼
//!    └──────────────────────── ResolvingFall(cause)
//! ```
//!
//! Reaching the goal wins over falling off: the goal cell carries no tile,
//! so every goal arrival is also unsupported.

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::scene::SceneSink;
use crate::block::{FallProgress, Footprint, MoveProgress, RollingBlock};
use crate::core::{Direction, EngineConfig, LevelError};
use crate::level::{GridLevel, LevelCatalog};

/// Why the block is falling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FallCause {
    /// The block tipped off the tiles; it respawns on settle.
    Unsupported,
    /// The block dropped into the goal; the next level loads on settle.
    Complete,
}

/// Controller state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControllerState {
    /// Waiting for input.
    Idle,
    /// A tilt is animating.
    Moving(Direction),
    /// The block is falling.
    ResolvingFall(FallCause),
}

/// Transitions reported by [`GameController::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A tilt finished and the new footprint was evaluated.
    MoveCompleted {
        footprint: Footprint,
        supported: bool,
        at_goal: bool,
    },
    /// The block started falling.
    FallStarted(FallCause),
    /// The block settled after falling off and is back on the start cell.
    BlockReset,
    /// The block settled in the goal and level `index` is now active.
    LevelLoaded { index: usize },
}

/// Events from a single tick. At most two transitions happen per tick.
pub type TickEvents = SmallVec<[GameEvent; 2]>;

/// Owns the level and block for a play session.
///
/// Every level in the catalog is parsed up front, so a malformed descriptor
/// fails session construction instead of a level transition.
#[derive(Clone, Debug)]
pub struct GameController {
    config: EngineConfig,
    levels: Vec<GridLevel>,
    level: GridLevel,
    block: RollingBlock,
    state: ControllerState,
    move_count: u32,
    level_index: usize,
    /// Level changed since the scene last heard about it.
    level_dirty: bool,
}

impl GameController {
    /// Start a session on the first level with default timing.
    pub fn new(catalog: &LevelCatalog) -> Result<Self, LevelError> {
        Self::with_config(catalog, EngineConfig::default())
    }

    /// Start a session on the first level.
    pub fn with_config(catalog: &LevelCatalog, config: EngineConfig) -> Result<Self, LevelError> {
        let levels = (0..catalog.len())
            .map(|index| catalog.load(index))
            .collect::<Result<Vec<_>, _>>()?;

        let level = levels.first().cloned().ok_or(LevelError::EmptyCatalog)?;
        let block = RollingBlock::for_level(&level, config);
        info!("session started with {} levels; level 0 start {}", levels.len(), level.start());

        Ok(Self {
            config,
            levels,
            level,
            block,
            state: ControllerState::Idle,
            move_count: 0,
            level_index: 0,
            level_dirty: true,
        })
    }

    // === Read-only views ===

    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    #[must_use]
    pub fn level(&self) -> &GridLevel {
        &self.level
    }

    #[must_use]
    pub fn block(&self) -> &RollingBlock {
        &self.block
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Moves made this session.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Index of the active level.
    #[must_use]
    pub fn level_index(&self) -> usize {
        self.level_index
    }

    /// Number of levels in the session.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    // === Input ===

    /// Request a move. Only honored while idle; otherwise the input is dropped.
    ///
    /// Returns whether the move started.
    pub fn submit_direction(&mut self, direction: Direction) -> bool {
        if self.state != ControllerState::Idle {
            trace!("dropping {direction} input while {:?}", self.state);
            return false;
        }

        let target = self.block.begin_move(direction);
        self.move_count += 1;
        debug!("move {} {direction} toward {target}", self.move_count);
        self.set_state(ControllerState::Moving(direction));
        true
    }

    /// Request a move by key code. Unrecognized codes are ignored.
    pub fn submit_key(&mut self, code: &str) -> bool {
        match Direction::from_key_code(code) {
            Some(direction) => self.submit_direction(direction),
            None => {
                trace!("ignoring key {code:?}");
                false
            }
        }
    }

    /// Jump to level `index`, abandoning any move or fall in progress.
    ///
    /// On error nothing changes.
    pub fn load_level(&mut self, index: usize) -> Result<(), LevelError> {
        let level = self
            .levels
            .get(index)
            .cloned()
            .ok_or(LevelError::LevelOutOfRange {
                index,
                len: self.levels.len(),
            })?;

        self.block = RollingBlock::for_level(&level, self.config);
        self.level = level;
        self.level_index = index;
        self.level_dirty = true;
        self.set_state(ControllerState::Idle);
        info!("level {index} loaded; start {}", self.level.start());
        Ok(())
    }

    // === Clock ===

    /// Advance the session by one frame of `delta_ms` milliseconds.
    ///
    /// Within the tick: the move or fall advances, then support and goal are
    /// evaluated, then any level change happens, then `scene` gets the
    /// resulting pose. Negative deltas count as zero.
    pub fn tick<S: SceneSink + ?Sized>(&mut self, delta_ms: f64, scene: &mut S) -> TickEvents {
        let delta_ms = delta_ms.max(0.0);
        let mut events = TickEvents::new();

        match self.state {
            ControllerState::Idle => {}
            ControllerState::Moving(_) => {
                if self.block.advance_move(delta_ms) == MoveProgress::Complete {
                    self.resolve_move(&mut events);
                }
            }
            ControllerState::ResolvingFall(cause) => {
                if self.block.advance_fall(delta_ms) == FallProgress::Settled {
                    self.resolve_fall(cause, &mut events);
                }
            }
        }

        if self.level_dirty {
            scene.level_loaded(self.level_index, &self.level);
            self.level_dirty = false;
        }
        scene.block_pose(self.block.pose());
        scene.counters(self.move_count, self.level_index);

        events
    }

    /// Push the full current picture to `scene`, level included.
    pub fn present<S: SceneSink + ?Sized>(&mut self, scene: &mut S) {
        scene.level_loaded(self.level_index, &self.level);
        self.level_dirty = false;
        scene.block_pose(self.block.pose());
        scene.counters(self.move_count, self.level_index);
    }

    fn resolve_move(&mut self, events: &mut TickEvents) {
        let footprint = self.block.footprint();
        let supported = self.level.is_supported(&footprint);
        let at_goal = self.level.is_at_goal(&footprint);
        events.push(GameEvent::MoveCompleted {
            footprint,
            supported,
            at_goal,
        });

        let cause = if at_goal {
            self.block.clear_last_direction();
            FallCause::Complete
        } else if !supported {
            FallCause::Unsupported
        } else {
            self.set_state(ControllerState::Idle);
            return;
        };

        self.block.begin_fall();
        self.set_state(ControllerState::ResolvingFall(cause));
        events.push(GameEvent::FallStarted(cause));
    }

    fn resolve_fall(&mut self, cause: FallCause, events: &mut TickEvents) {
        match cause {
            FallCause::Unsupported => {
                self.block.reset_to(&self.level);
                self.set_state(ControllerState::Idle);
                events.push(GameEvent::BlockReset);
            }
            FallCause::Complete => {
                let next = if self.level_index + 1 >= self.levels.len() {
                    0
                } else {
                    self.level_index + 1
                };
                self.level = self.levels[next].clone();
                self.block = RollingBlock::for_level(&self.level, self.config);
                self.level_index = next;
                self.level_dirty = true;
                self.set_state(ControllerState::Idle);
                info!("level complete; advancing to level {next}");
                events.push(GameEvent::LevelLoaded { index: next });
            }
        }
    }

    fn set_state(&mut self, next: ControllerState) {
        if self.state != next {
            debug!("controller {:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }
}
