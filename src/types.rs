//! Core types shared by the tracker and its collaborators.
//!
//! Everything here is plain data: positions, touch identities, the frames
//! an event source delivers and the velocities handed to a momentum sink.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

// ============================================================================
// Geometry
// ============================================================================

/// A 2-D position or displacement in surface pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamp each axis into `[0, limit]`.
    #[inline]
    pub fn clamp_to(self, limit: Point) -> Self {
        Self {
            x: self.x.clamp(0.0, limit.x.max(0.0)),
            y: self.y.clamp(0.0, limit.y.max(0.0)),
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A velocity pair. The unit depends on where it is used: the tracker's
/// running estimate is px/ms, release velocities are px/s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

// ============================================================================
// Touch Input
// ============================================================================

/// Platform touch identifier. Stable for as long as the finger is down.
#[derive(
    Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TouchId(pub i64);

impl std::fmt::Display for TouchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One finger in a touch list.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub id: TouchId,
    #[serde(flatten)]
    pub position: Point,
}

impl TouchPoint {
    pub fn new(id: i64, x: f64, y: f64) -> Self {
        Self {
            id: TouchId(id),
            position: Point::new(x, y),
        }
    }
}

/// A single touch frame as delivered by the event source.
///
/// `id` and `position` describe the touch that changed in this frame;
/// `touches` is every finger currently on the surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TouchFrame {
    pub id: TouchId,
    pub position: Point,
    #[serde(default)]
    pub touches: Vec<TouchPoint>,
    /// Event time in milliseconds. Only differences matter.
    #[serde(rename = "time")]
    pub timestamp_ms: u64,
}

impl TouchFrame {
    /// Frame for a lone finger: the touch list holds just that finger.
    pub fn single(id: i64, x: f64, y: f64, timestamp_ms: u64) -> Self {
        let id = TouchId(id);
        Self {
            id,
            position: Point::new(x, y),
            touches: vec![TouchPoint {
                id,
                position: Point::new(x, y),
            }],
            timestamp_ms,
        }
    }

    /// Replace the full touch list.
    pub fn with_touches(mut self, touches: Vec<TouchPoint>) -> Self {
        self.touches = touches;
        self
    }
}

/// A touch frame tagged with its phase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum TouchEvent {
    Start(TouchFrame),
    Move(TouchFrame),
    End(TouchFrame),
}

impl TouchEvent {
    pub fn frame(&self) -> &TouchFrame {
        match self {
            Self::Start(frame) | Self::Move(frame) | Self::End(frame) => frame,
        }
    }

    pub fn phase(&self) -> &'static str {
        match self {
            Self::Start(_) => "start",
            Self::Move(_) => "move",
            Self::End(_) => "end",
        }
    }
}
