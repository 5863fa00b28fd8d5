//! Touch input handling for a scrollable surface.
//!
//! This module turns raw touch frames into scroll-position updates while a
//! finger is down, and into a release velocity once it lifts.
//!
//! ## Architecture
//!
//! A single [`GestureTracker`] owns every piece of gesture state. The session
//! itself is an explicit state machine ([`GestureState`]) so "tracking without
//! an owner" cannot be represented.
//!
//! ## Modules
//!
//! - `state` - Gesture state machine and handler outcomes
//! - `records` - Last known position of every finger on the surface
//! - `velocity` - Per-sample velocity and release deadband
//! - `tracker` - The tracker struct and event dispatch
//! - `touch_start` - Touch start handling (session reset, momentum stop)
//! - `touch_move` - Touch move handling (ownership, velocity, position)
//! - `touch_end` - Touch end handling (release velocity handoff)

mod records;
mod state;
mod touch_end;
mod touch_move;
mod touch_start;
mod tracker;
mod velocity;

pub use records::TouchRecords;
pub use state::{
    EndOutcome, EventOutcome, GestureState, IgnoreReason, MoveOutcome, Sample, StartOutcome,
};
pub use tracker::GestureTracker;
pub use velocity::{VelocitySample, release_velocity};
