//! Multi-finger sequences: missed starts, handover after a finger lifts,
//! and surface mode conflicts.

use crate::helpers::{FrameBuilder, frame, surface, tracker};
use touchscroll::replay::SurfaceCall;
use touchscroll::{
    EndOutcome, GestureTracker, IgnoreReason, MoveOutcome, Point, ScrollOptions, StartOutcome,
    TouchId, Velocity,
};

#[test]
fn test_move_without_start_recovers_from_records() {
    let mut tracker = tracker();

    // The first move re-seeds from the record it just wrote: no delta yet
    let first = tracker.handle_touch_move(&frame(3, 50.0, 50.0, 10));
    assert_eq!(
        first,
        MoveOutcome::Scrolled {
            position: Point::new(200.0, 200.0)
        }
    );
    assert_eq!(tracker.state().owner(), Some(TouchId(3)));

    let second = tracker.handle_touch_move(&frame(3, 50.0, 40.0, 20));
    assert_eq!(
        second,
        MoveOutcome::Scrolled {
            position: Point::new(200.0, 210.0)
        }
    );
}

#[test]
fn test_move_without_any_record_is_ignored() {
    let mut tracker = tracker();

    // Empty touch list: nothing to recover the anchor from
    let orphan = FrameBuilder::new(9).at(10.0, 10.0).time(5).without_self().build();
    let outcome = tracker.handle_touch_move(&orphan);

    assert_eq!(outcome, MoveOutcome::Ignored(IgnoreReason::NoAnchor));
    assert!(tracker.surface().calls().is_empty());

    // The next frame carrying the finger recovers
    let outcome = tracker.handle_touch_move(&frame(9, 10.0, 0.0, 21));
    assert!(outcome.is_scrolled());
}

#[test]
fn test_remaining_finger_takes_over_after_owner_lifts() {
    let mut tracker = tracker();
    tracker.handle_touch_start(
        &FrameBuilder::new(0)
            .at(100.0, 100.0)
            .with_touch(1, 300.0, 300.0)
            .build(),
    );
    tracker.handle_touch_move(
        &FrameBuilder::new(0)
            .at(100.0, 90.0)
            .time(16)
            .with_touch(1, 300.0, 300.0)
            .build(),
    );

    let end = FrameBuilder::new(0)
        .at(100.0, 90.0)
        .time(16)
        .without_self()
        .with_touch(1, 300.0, 300.0)
        .build();
    assert_eq!(
        tracker.handle_touch_end(&end),
        EndOutcome::Released {
            velocity: Velocity::new(0.0, 625.0)
        }
    );
    assert!(!tracker.records().contains(TouchId(0)));
    assert!(tracker.records().contains(TouchId(1)));

    // Finger 1 is adopted and scrolls from where the surface was left
    tracker.handle_touch_move(&frame(1, 300.0, 280.0, 40));
    tracker.handle_touch_move(&frame(1, 300.0, 270.0, 56));

    assert_eq!(
        tracker.surface().positions(),
        vec![
            Point::new(200.0, 210.0),
            Point::new(200.0, 210.0),
            Point::new(200.0, 220.0),
        ]
    );
}

#[test]
fn test_secondary_finger_lifting_releases_the_session() {
    let mut tracker = tracker();
    tracker.handle_touch_start(
        &FrameBuilder::new(0)
            .at(100.0, 100.0)
            .with_touch(1, 300.0, 300.0)
            .build(),
    );
    tracker.handle_touch_move(
        &FrameBuilder::new(0)
            .at(100.0, 50.0)
            .time(10)
            .with_touch(1, 300.0, 300.0)
            .build(),
    );

    let secondary_end = FrameBuilder::new(1)
        .at(300.0, 300.0)
        .time(12)
        .without_self()
        .with_touch(0, 100.0, 50.0)
        .build();
    assert_eq!(
        tracker.handle_touch_end(&secondary_end),
        EndOutcome::Released {
            velocity: Velocity::new(0.0, 5000.0)
        }
    );
    assert_eq!(
        tracker
            .surface()
            .count(|call| matches!(call, SurfaceCall::SetMovement { .. })),
        1
    );
    assert!(tracker.state().is_idle());
    assert!(tracker.velocity().is_zero());
    assert!(tracker.records().is_empty());

    // The finger still down is adopted and starts from a zero delta
    tracker.handle_touch_move(&frame(0, 100.0, 40.0, 20));
    assert!(tracker.state().is_tracking());
    assert_eq!(tracker.state().owner(), Some(TouchId(0)));
    assert!(tracker.handle_touch_move(&frame(0, 100.0, 30.0, 30)).is_scrolled());
    assert_eq!(
        tracker.surface().positions(),
        vec![
            Point::new(200.0, 250.0),
            Point::new(200.0, 250.0),
            Point::new(200.0, 260.0),
        ]
    );
}

#[test]
fn test_end_without_session_hands_off_zero_velocity() {
    let mut tracker = tracker();

    assert_eq!(
        tracker.handle_touch_end(&frame(4, 100.0, 100.0, 0)),
        EndOutcome::Released {
            velocity: Velocity::ZERO
        }
    );
    assert_eq!(
        tracker.surface().calls(),
        &[SurfaceCall::SetMovement { vx: 0.0, vy: 0.0 }]
    );
    assert!(tracker.state().is_idle());
}

#[test]
fn test_drag_mode_blocks_every_phase() {
    let mut surface = surface();
    surface.set_dragging(true);
    let mut tracker = GestureTracker::new(surface, ScrollOptions::default());

    assert_eq!(
        tracker.handle_touch_start(&frame(0, 100.0, 100.0, 0)),
        StartOutcome::Ignored(IgnoreReason::Dragging)
    );
    assert_eq!(
        tracker.handle_touch_move(&frame(0, 100.0, 50.0, 16)),
        MoveOutcome::Ignored(IgnoreReason::Dragging)
    );
    assert_eq!(
        tracker.handle_touch_end(&frame(0, 100.0, 50.0, 16)),
        EndOutcome::Ignored(IgnoreReason::Dragging)
    );

    // Not even stop(): the drag owns the surface
    assert!(tracker.surface().calls().is_empty());
    assert!(tracker.records().is_empty());
}

#[test]
fn test_ignored_region_skips_move_and_end_but_not_start() {
    let mut surface = surface();
    surface.ignore_touch(TouchId(0));
    let mut tracker = GestureTracker::new(surface, ScrollOptions::default());

    assert!(matches!(
        tracker.handle_touch_start(&frame(0, 100.0, 100.0, 0)),
        StartOutcome::Started { .. }
    ));
    assert_eq!(
        tracker.handle_touch_move(&frame(0, 100.0, 50.0, 16)),
        MoveOutcome::Ignored(IgnoreReason::IgnoredRegion)
    );
    assert_eq!(
        tracker.handle_touch_end(&frame(0, 100.0, 50.0, 16)),
        EndOutcome::Ignored(IgnoreReason::IgnoredRegion)
    );

    assert_eq!(tracker.surface().calls(), &[SurfaceCall::Stop]);
}
