//! Level parsing and support/goal predicate tests.

use tipblock::block::Footprint;
use tipblock::core::{Cell, LevelError};
use tipblock::level::{FramingHint, GridLevel, LevelCatalog, BUILTIN_LEVELS};

// =============================================================================
// Parsing
// =============================================================================

/// The two-row reference descriptor.
#[test]
fn test_two_row_descriptor() {
    let level = GridLevel::parse("xs,xe").unwrap();

    let mut tiles = level.tiles().to_vec();
    tiles.sort();
    assert_eq!(tiles, vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0)]);
    assert_eq!(level.start(), Cell::new(1, 0));
    assert_eq!(level.goal(), Cell::new(1, 1));
}

/// Rows may have different lengths.
#[test]
fn test_ragged_rows() {
    let level = GridLevel::parse("xxxxs,x,,xxe").unwrap();

    assert_eq!(level.start(), Cell::new(4, 0));
    assert_eq!(level.goal(), Cell::new(2, 3));
    assert!(level.has_tile(Cell::new(0, 1)));
    assert!(!level.has_tile(Cell::new(1, 1)));
    assert!(!level.has_tile(Cell::new(0, 2)));
    assert_eq!(level.tile_count(), 8);
}

#[test]
fn test_malformed_descriptors() {
    let cases = [
        ("", LevelError::MissingStart),
        ("xxx,xex", LevelError::MissingStart),
        ("xsx,xxx", LevelError::MissingGoal),
        ("oooo", LevelError::MissingStart),
    ];

    for (descriptor, expected) in cases {
        let err = GridLevel::parse(descriptor).unwrap_err();
        assert_eq!(err, expected, "descriptor {descriptor:?}");
        assert!(err.is_malformed());
    }
}

// =============================================================================
// Support
// =============================================================================

#[test]
fn test_lying_fully_supported() {
    let level = GridLevel::parse("sxx,e").unwrap();
    assert!(level.is_supported(&Footprint::lying(Cell::new(0, 0), Cell::new(1, 0))));
}

#[test]
fn test_lying_half_supported() {
    let level = GridLevel::parse("sx,e").unwrap();
    let fp = Footprint::lying(Cell::new(1, 0), Cell::new(2, 0));
    assert_eq!(level.overlap(&fp), 1);
    assert!(!level.is_supported(&fp));
}

#[test]
fn test_standing_unsupported() {
    let level = GridLevel::parse("sx,e").unwrap();
    assert!(!level.is_supported(&Footprint::Standing(Cell::new(0, 1))));
    assert!(!level.is_supported(&Footprint::Standing(Cell::new(-3, 7))));
}

// =============================================================================
// Goal
// =============================================================================

/// The goal is reachable even though it is never supported.
#[test]
fn test_goal_is_unsupported_but_complete() {
    let level = GridLevel::parse("xs,xe").unwrap();
    let at_goal = Footprint::Standing(Cell::new(1, 1));

    assert!(!level.is_supported(&at_goal));
    assert!(level.is_at_goal(&at_goal));
}

/// A lying block never completes, even across the goal.
#[test]
fn test_lying_never_at_goal() {
    let level = GridLevel::parse("xs,xe").unwrap();
    assert!(!level.is_at_goal(&Footprint::lying(Cell::new(1, 0), Cell::new(1, 1))));
    assert!(!level.is_at_goal(&Footprint::lying(Cell::new(0, 1), Cell::new(1, 1))));
}

// =============================================================================
// Catalog and Framing
// =============================================================================

#[test]
fn test_builtin_catalog() {
    let catalog = LevelCatalog::builtin();
    assert_eq!(catalog.len(), BUILTIN_LEVELS.len());
    assert_eq!(catalog.get(6).unwrap(), BUILTIN_LEVELS[6]);

    for index in 0..catalog.len() {
        let level = catalog.load(index).unwrap();
        assert!(level.is_supported(&Footprint::Standing(level.start())));
    }
}

#[test]
fn test_framing_covers_tiles_only() {
    // Goal sits outside the tile extents.
    let level = GridLevel::parse("sx,oxe").unwrap();
    let hint = level.framing_hint();

    assert_eq!(hint, FramingHint { min: Cell::new(0, 0), max: Cell::new(1, 1) });
    assert_eq!(hint.focus(), glam::Vec3::new(0.5, 0.0, 0.5));
}
