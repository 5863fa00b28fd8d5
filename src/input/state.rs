//! Gesture state machine - the single-finger session the tracker follows.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Tracking      (touch start, or a move with no owner: adopt + recover)
//! Tracking -> Tracking  (move from the owned finger: anchor advances)
//! Tracking -> Idle      (touch end: release velocity handed off)
//! ```
//!
//! Release is instantaneous: the velocity is handed to the momentum sink and
//! the machine is back in `Idle` before `handle_touch_end` returns.

use crate::types::{Point, TouchId, Velocity};

/// Position and time of the last accepted sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub position: Point,
    pub timestamp_ms: u64,
}

impl Sample {
    pub fn new(position: Point, timestamp_ms: u64) -> Self {
        Self {
            position,
            timestamp_ms,
        }
    }
}

/// Session state for the finger driving the scroll.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum GestureState {
    /// No finger owns the surface
    #[default]
    Idle,

    /// One finger owns the surface
    Tracking {
        /// The owned touch identity
        touch: TouchId,
        /// Last sample to compute deltas against. `None` when ownership was
        /// adopted mid-gesture and no record could seed it.
        anchor: Option<Sample>,
    },
}

impl GestureState {
    /// Returns true if no finger owns the surface
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a finger owns the surface
    pub fn is_tracking(&self) -> bool {
        matches!(self, Self::Tracking { .. })
    }

    /// Get the owned touch identity, if any
    pub fn owner(&self) -> Option<TouchId> {
        match self {
            Self::Tracking { touch, .. } => Some(*touch),
            Self::Idle => None,
        }
    }

    /// Get the last accepted sample, if any
    pub fn anchor(&self) -> Option<Sample> {
        match self {
            Self::Tracking { anchor, .. } => *anchor,
            Self::Idle => None,
        }
    }

    /// Begin tracking a finger
    pub fn start_tracking(&mut self, touch: TouchId, anchor: Option<Sample>) {
        *self = Self::Tracking { touch, anchor };
    }

    /// Advance the anchor to a new sample
    pub fn set_anchor(&mut self, sample: Sample) {
        if let Self::Tracking { anchor, .. } = self {
            *anchor = Some(sample);
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

/// Why a frame left the tracker untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// An external drag owns the surface
    Dragging,
    /// The surface excluded this frame from scrolling
    IgnoredRegion,
    /// Another finger owns the gesture
    ForeignTouch,
    /// No anchor to compute a delta against, even after recovery
    NoAnchor,
}

/// Result of `handle_touch_start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StartOutcome {
    Started { touch: TouchId },
    Ignored(IgnoreReason),
}

/// Result of `handle_touch_move`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// The surface was moved to `position` and the native scroll suppressed
    Scrolled { position: Point },
    /// The move pushed against an edge; a throttled edge update was requested
    EdgeUpdate,
    Ignored(IgnoreReason),
}

/// Result of `handle_touch_end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EndOutcome {
    /// The session ended and this velocity (px/s) was handed off
    Released { velocity: Velocity },
    Ignored(IgnoreReason),
}

/// Result of dispatching a phase-tagged event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EventOutcome {
    Start(StartOutcome),
    Move(MoveOutcome),
    End(EndOutcome),
}

impl EventOutcome {
    /// The ignore reason, if the event was ignored
    pub fn ignored(&self) -> Option<IgnoreReason> {
        match self {
            Self::Start(StartOutcome::Ignored(reason))
            | Self::Move(MoveOutcome::Ignored(reason))
            | Self::End(EndOutcome::Ignored(reason)) => Some(*reason),
            _ => None,
        }
    }
}

impl MoveOutcome {
    pub fn is_scrolled(&self) -> bool {
        matches!(self, Self::Scrolled { .. })
    }
}
