//! Rolling block integration tests: tilt timing, poses and fall physics.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};
use tipblock::block::{rest_rotation, AnimationPhase, BlockPose, FallProgress, Footprint, MoveProgress, Orientation, RollingBlock};
use tipblock::core::{Axis, Cell, Direction, EngineConfig};

fn standing(x: i32, z: i32) -> RollingBlock {
    RollingBlock::standing_at(Cell::new(x, z), EngineConfig::default())
}

fn complete_move(block: &mut RollingBlock, direction: Direction) {
    block.begin_move(direction);
    assert_eq!(block.advance_move(200.0), MoveProgress::Complete);
}

// =============================================================================
// Tilting
// =============================================================================

/// Stand, lie along X, slide along Z, stand again.
#[test]
fn test_move_sequence() {
    let mut block = standing(0, 0);

    complete_move(&mut block, Direction::Up);
    assert_eq!(block.orientation(), Orientation::Lying(Axis::X));

    complete_move(&mut block, Direction::Right);
    assert_eq!(block.footprint(), Footprint::lying(Cell::new(1, 1), Cell::new(2, 1)));
    assert_eq!(block.orientation(), Orientation::Lying(Axis::X));

    complete_move(&mut block, Direction::Up);
    assert_eq!(block.footprint(), Footprint::Standing(Cell::new(3, 1)));
    assert!(block.is_standing());
}

/// Tilt angle grows linearly with elapsed time and clamps at 90°.
#[test]
fn test_tilt_angle_progression() {
    let mut block = standing(0, 0);
    block.begin_move(Direction::Right);

    block.advance_move(50.0);
    assert!((block.tilt_angle() - FRAC_PI_2 / 4.0).abs() < 1e-6);

    block.advance_move(50.0);
    assert!((block.tilt_angle() - FRAC_PI_2 / 2.0).abs() < 1e-6);
    assert_eq!(block.move_fraction(), 0.5);

    assert_eq!(block.advance_move(500.0), MoveProgress::Complete);
    assert_eq!(block.tilt_angle(), 0.0);
}

/// Mid-tilt poses stay above the floor and hinge on the pivot edge.
#[test]
fn test_mid_tilt_pose() {
    let mut block = standing(0, 0);
    block.begin_move(Direction::Up);
    block.advance_move(100.0);

    let pose = block.pose();
    // Pivot at (0.5, 0, 0); the center is sqrt(1.25) from it.
    let pivot = Vec3::new(0.5, 0.0, 0.0);
    assert!(((pose.translation - pivot).length() - 1.25f32.sqrt()).abs() < 1e-5);
    assert!(pose.translation.y > 0.5);
    assert_eq!(pose.translation.z, 0.0);
}

#[test]
fn test_idle_pose_is_rest() {
    let block = standing(2, 3);
    assert_eq!(block.pose(), BlockPose::at_rest(&Footprint::Standing(Cell::new(2, 3))));
    assert_eq!(block.pose().translation, Vec3::new(2.0, 1.0, 3.0));
}

// =============================================================================
// Falling
// =============================================================================

/// Offset decreases strictly every tick and settles at the first crossing.
#[test]
fn test_fall_settles_at_first_crossing() {
    let config = EngineConfig::default();
    let mut block = standing(0, 0);
    block.begin_fall();

    let mut previous = 0.0;
    let mut ticks = 0;
    loop {
        ticks += 1;
        let progress = block.advance_fall(16.0);
        let offset = block.vertical_offset();
        assert!(offset < previous, "offset not decreasing at tick {ticks}");

        match progress {
            FallProgress::Falling => assert!(offset >= config.settle_depth),
            FallProgress::Settled => {
                assert!(offset < config.settle_depth);
                assert!(previous >= config.settle_depth);
                break;
            }
        }
        previous = offset;
        assert!(ticks < 1000);
    }

    // y_n = -g * dt^2 * n(n+1)/2 crosses -20 at n = 40 for dt = 16.
    assert_eq!(ticks, 40);
}

#[test]
fn test_fall_phase_fields() {
    let mut block = standing(0, 0);
    complete_move(&mut block, Direction::Left);
    block.begin_fall();

    match *block.phase() {
        AnimationPhase::Falling {
            last_direction,
            elapsed_ms,
            vertical_velocity,
            vertical_offset,
        } => {
            assert_eq!(last_direction, Some(Direction::Left));
            assert_eq!(elapsed_ms, 0.0);
            assert_eq!(vertical_velocity, 0.0);
            assert_eq!(vertical_offset, 0.0);
        }
        ref other => panic!("expected falling, got {other:?}"),
    }
}

/// The fall spin continues at the tilt rate: 90° per 200 ms.
#[test]
fn test_fall_spin_rate() {
    let mut block = standing(0, 0);
    complete_move(&mut block, Direction::Right);
    block.begin_fall();
    let rest = block.pose().rotation;
    let tilt_axis = Direction::Right.axis().tilt_axis();
    assert!(rest.abs_diff_eq(rest_rotation(block.orientation()), 1e-6));

    block.advance_fall(100.0);
    let half = Quat::from_axis_angle(tilt_axis, FRAC_PI_2 / 2.0) * rest;
    assert!(block.pose().rotation.abs_diff_eq(half, 1e-5));

    block.advance_fall(100.0);
    let quarter = Quat::from_axis_angle(tilt_axis, FRAC_PI_2) * rest;
    assert!(block.pose().rotation.abs_diff_eq(quarter, 1e-5));
}

/// The falling block drops straight down from its center.
#[test]
fn test_fall_pose_translation() {
    let mut block = standing(4, 4);
    complete_move(&mut block, Direction::Down);
    let center = block.footprint().center();
    block.begin_fall();
    block.advance_fall(100.0);

    let pose = block.pose();
    assert_eq!(pose.translation.x, center.x);
    assert_eq!(pose.translation.z, center.z);
    assert!((pose.translation.y as f64 - (center.y as f64 + block.vertical_offset())).abs() < 1e-5);
}
