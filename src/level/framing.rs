//! Camera framing for the rendering collaborator.
//!
//! Gameplay never reads this. The renderer uses it to aim a camera at the
//! middle of the level from a fixed diagonal offset.

use glam::Vec3;

use crate::core::Cell;

/// Camera position relative to the level focus.
pub const CAMERA_OFFSET: Vec3 = Vec3::new(-15.0, 10.0, -5.0);

/// Bounding extents of a level's tiles (inclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FramingHint {
    pub min: Cell,
    pub max: Cell,
}

impl FramingHint {
    /// Extents of a set of cells. An empty set frames the origin.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut cells = cells.into_iter();
        let Some(first) = cells.next() else {
            return Self {
                min: Cell::default(),
                max: Cell::default(),
            };
        };

        cells.fold(Self { min: first, max: first }, |hint, c| Self {
            min: Cell::new(hint.min.x.min(c.x), hint.min.z.min(c.z)),
            max: Cell::new(hint.max.x.max(c.x), hint.max.z.max(c.z)),
        })
    }

    /// Number of columns and rows spanned.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (
            (self.max.x - self.min.x + 1) as u32,
            (self.max.z - self.min.z + 1) as u32,
        )
    }

    /// Middle of the extents on the floor plane.
    #[must_use]
    pub fn focus(&self) -> Vec3 {
        Vec3::new(
            (self.min.x + self.max.x) as f32 / 2.0,
            0.0,
            (self.min.z + self.max.z) as f32 / 2.0,
        )
    }

    /// Suggested camera position; look at [`FramingHint::focus`] from here.
    #[must_use]
    pub fn camera_eye(&self) -> Vec3 {
        self.focus() + CAMERA_OFFSET
    }
}
