//! Ordered list of level descriptors.
//!
//! The catalog stores descriptor text only and parses a level when it is
//! loaded. `GameController` loads every level when a session starts, so a
//! bad descriptor fails session construction.

use super::grid::GridLevel;
use crate::core::LevelError;

/// The seven stock levels.
pub const BUILTIN_LEVELS: [&str; 7] = [
    "oooxxx,ooxxsx,ooxxxx,ooxxx,ooxxx,oxxxx,xxxx,xexx,xxxx,oxxo",
    "oxxxx,oxsxx,oxxxx,oxxxx,ooox,ooox,oooxxx,oooxxx,oooxxx,ooooox,ooooox,oxxxxx,xxxxxx,xxex,xxxx",
    "ooxxxxx,ooxsxxx,ooxxxxx,ooooooxxx,oooooooxx,xxxxoooxx,xexxoooxx,xxxxoooxx,ooxxoooxx,ooxxooxxx,xxxxxxx,xxxxxxx,xxxx,xxxx",
    "xxx,xexooxxxx,xxxooxxxx,xxooxxxxx,oxooxxxxx,oxooxooox,oxooxooox,oxooxooox,oxooxooox,oxooxooox,oxxxxooox,oxxxxoooxx,oxxxxooxxx,ooxxoooxsx,ooxxoooxxx",
    "oooooos,oooooox,oooooox,oooooox,ooooxxx,ooooxxxxxx,oxxxxxooox,xxxoooooox,xxxooooxxx,xxxxoooxxx,oxxxoooxxx,oooooxxx,ooooxxxx,ooooxex,ooooxxx",
    "ooxxxx,oxxxsx,xxxxxx,xxoox,xooox,xooox,xooox,xxxxx,ooxxxxxx,ooxxooxx,ooooooxx,oooooxxx,ooxxxx,ooxxex,ooxxxx",
    "oooos,ooooxxxxxx,ooooxooxex,ooooxooxxx,ooooxoooxx,oxxxxxx,oxxoxxx,oxxooox,xxxooox,xxooxxx,xxooxxx,oxxxx",
];

/// Non-empty, ordered list of level descriptors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelCatalog {
    descriptors: Vec<String>,
}

impl LevelCatalog {
    /// Create a catalog from descriptors.
    pub fn new<I, S>(descriptors: I) -> Result<Self, LevelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let descriptors: Vec<String> = descriptors.into_iter().map(Into::into).collect();
        if descriptors.is_empty() {
            return Err(LevelError::EmptyCatalog);
        }
        Ok(Self { descriptors })
    }

    /// The stock levels.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            descriptors: BUILTIN_LEVELS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Number of levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Check if the catalog has no levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Descriptor text of level `index`.
    pub fn get(&self, index: usize) -> Result<&str, LevelError> {
        self.descriptors
            .get(index)
            .map(String::as_str)
            .ok_or(LevelError::LevelOutOfRange {
                index,
                len: self.descriptors.len(),
            })
    }

    /// Parse level `index`.
    pub fn load(&self, index: usize) -> Result<GridLevel, LevelError> {
        GridLevel::parse(self.get(index)?)
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
