//! Invariants that must hold for any touch sequence.

use crate::helpers::{FrameBuilder, TouchScript, frame, tracker};
use touchscroll::replay::SurfaceCall;
use touchscroll::{MoveOutcome, Point, TouchId, TouchPoint, Velocity};

#[test]
fn test_only_owner_drives_position_across_interleaved_fingers() {
    let mut tracker = tracker();
    tracker.handle_touch_start(
        &FrameBuilder::new(0)
            .at(100.0, 100.0)
            .with_touch(1, 400.0, 400.0)
            .build(),
    );

    for step in 1..=5u64 {
        let y = 100.0 - step as f64 * 4.0;
        let owner = FrameBuilder::new(0)
            .at(100.0, y)
            .time(step * 16)
            .with_touch(1, 400.0, 400.0 + step as f64 * 50.0)
            .build();
        let other = FrameBuilder::new(1)
            .at(400.0, 400.0 + step as f64 * 50.0)
            .time(step * 16 + 8)
            .with_touch(0, 100.0, y)
            .build();

        assert!(tracker.handle_touch_move(&owner).is_scrolled());
        assert!(!tracker.handle_touch_move(&other).is_scrolled());
        // 4px per 16ms from the owner; the other finger's 50px jumps never leak in
        assert_eq!(tracker.velocity(), Velocity::new(0.0, 0.25));
    }

    let positions = tracker.surface().positions();
    assert_eq!(positions.len(), 5);
    assert_eq!(positions.last(), Some(&Point::new(200.0, 220.0)));
}

#[test]
fn test_update_records_is_idempotent() {
    let mut tracker = tracker();
    let touches = vec![
        TouchPoint::new(0, 10.0, 20.0),
        TouchPoint::new(4, 30.0, 40.0),
    ];

    tracker.update_records(&touches);
    let once = tracker.records().clone();
    tracker.update_records(&touches);

    assert_eq!(tracker.records(), &once);
    assert_eq!(once.len(), 2);
}

#[test]
fn test_identical_timestamps_never_produce_non_finite_velocity() {
    let mut tracker = tracker();
    tracker.handle_touch_start(&frame(0, 100.0, 100.0, 500));
    tracker.handle_touch_move(&frame(0, 60.0, 20.0, 500));

    let velocity = tracker.velocity();
    assert!(velocity.x.is_finite() && velocity.y.is_finite());
    assert_eq!(velocity, Velocity::new(40.0, 80.0));

    tracker.handle_touch_end(&frame(0, 60.0, 20.0, 500));
    let released = tracker.surface().movements()[0];
    assert!(released.x.is_finite() && released.y.is_finite());
}

#[test]
fn test_deadband_boundary() {
    // 1px in 100ms is exactly 10px/s: zeroed
    let at_threshold = TouchScript::new(tracker())
        .start(0, 0.0, 100.0, 0)
        .drag_to(0.0, 99.0, 100)
        .end(100)
        .finish();
    assert_eq!(at_threshold.surface().movements(), vec![Velocity::ZERO]);

    // 2px in 100ms is 20px/s: passed through
    let above_threshold = TouchScript::new(tracker())
        .start(0, 0.0, 100.0, 0)
        .drag_to(0.0, 98.0, 100)
        .end(100)
        .finish();
    let released = above_threshold.surface().movements()[0];
    assert_eq!(released.x, 0.0);
    assert!((released.y - 20.0).abs() < 1e-9);
}

#[test]
fn test_end_resets_session_for_next_gesture() {
    let mut tracker = TouchScript::new(tracker())
        .start(0, 100.0, 900.0, 0)
        .drag_to(100.0, 100.0, 10)
        .end(10)
        .finish();

    assert_eq!(tracker.velocity(), Velocity::ZERO);
    assert!(tracker.state().is_idle());
    assert_eq!(tracker.state().owner(), None);

    // A fresh tap after a violent fling hands off nothing
    tracker.surface_mut().take_calls();
    tracker.handle_touch_start(&frame(0, 100.0, 100.0, 1000));
    tracker.handle_touch_end(&frame(0, 100.0, 100.0, 1050));

    assert_eq!(
        tracker.surface().calls(),
        &[SurfaceCall::Stop, SurfaceCall::SetMovement { vx: 0.0, vy: 0.0 }]
    );
}

#[test]
fn test_start_zeroes_velocity_left_by_an_unfinished_gesture() {
    let mut tracker = tracker();
    tracker.handle_touch_start(&frame(0, 100.0, 100.0, 0));
    tracker.handle_touch_move(&frame(0, 100.0, 50.0, 10));
    assert_ne!(tracker.velocity(), Velocity::ZERO);

    // No end arrived; a new start must not inherit the old estimate
    tracker.handle_touch_start(&frame(1, 200.0, 200.0, 500));
    assert_eq!(tracker.velocity(), Velocity::ZERO);
    assert_eq!(tracker.state().owner(), Some(TouchId(1)));
}

#[test]
fn test_owner_record_follows_anchor() {
    let mut tracker = tracker();
    tracker.handle_touch_start(&frame(0, 100.0, 100.0, 0));

    // Touch list omits the owner; the record still tracks the last sample
    let move_frame = FrameBuilder::new(0)
        .at(90.0, 80.0)
        .time(16)
        .without_self()
        .build();
    assert!(matches!(
        tracker.handle_touch_move(&move_frame),
        MoveOutcome::Scrolled { .. }
    ));

    let anchor = tracker.state().anchor().map(|sample| sample.position);
    assert_eq!(anchor, Some(Point::new(90.0, 80.0)));
    assert_eq!(tracker.records().get(TouchId(0)), anchor);
}
