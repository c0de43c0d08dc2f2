//! Level loading errors.

use std::fmt;

use super::cell::Cell;

/// Failure to produce a playable level.
///
/// Descriptor problems (`is_malformed()`) are fatal for that load; nothing
/// is constructed. Catalog lookups fail when the index or list is unusable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LevelError {
    /// The descriptor has no `s` marker.
    MissingStart,
    /// The descriptor has no `e` marker.
    MissingGoal,
    /// The descriptor has more than one `s` marker.
    DuplicateStart { first: Cell, second: Cell },
    /// The descriptor has more than one `e` marker.
    DuplicateGoal { first: Cell, second: Cell },
    /// A catalog was built from an empty descriptor list.
    EmptyCatalog,
    /// A level index past the end of the catalog.
    LevelOutOfRange { index: usize, len: usize },
}

impl LevelError {
    /// True for errors caused by the descriptor text itself.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            LevelError::MissingStart
                | LevelError::MissingGoal
                | LevelError::DuplicateStart { .. }
                | LevelError::DuplicateGoal { .. }
        )
    }
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::MissingStart => write!(f, "malformed level: no start marker 's'"),
            LevelError::MissingGoal => write!(f, "malformed level: no goal marker 'e'"),
            LevelError::DuplicateStart { first, second } => {
                write!(f, "malformed level: start marker at {first} and again at {second}")
            }
            LevelError::DuplicateGoal { first, second } => {
                write!(f, "malformed level: goal marker at {first} and again at {second}")
            }
            LevelError::EmptyCatalog => write!(f, "level catalog is empty"),
            LevelError::LevelOutOfRange { index, len } => {
                write!(f, "level {index} out of range (catalog has {len} levels)")
            }
        }
    }
}

impl std::error::Error for LevelError {}
