//! Touch recording replay.
//!
//! A [`Recording`] is a JSON capture of touch events plus the surface they
//! were delivered to. Replaying it drives a real [`GestureTracker`] against a
//! [`RecordingSurface`], which behaves like a clamped scroll container and
//! logs every outbound call.
//!
//! ```json
//! {
//!   "options": { "speed": 1.0 },
//!   "surface": { "offset": { "x": 0, "y": 0 }, "limit": { "x": 0, "y": 800 } },
//!   "events": [
//!     { "phase": "start", "id": 0, "position": { "x": 100, "y": 300 }, "time": 0 },
//!     { "phase": "move",  "id": 0, "position": { "x": 100, "y": 260 }, "time": 16 },
//!     { "phase": "end",   "id": 0, "position": { "x": 100, "y": 260 }, "time": 20 }
//!   ]
//! }
//! ```

use crate::error::ReplayResult;
use crate::input::{EndOutcome, EventOutcome, GestureTracker, MoveOutcome};
use crate::settings::ScrollOptions;
use crate::surface::{MomentumSink, PositionSink, SurfaceGeometry};
use crate::types::{Point, TouchEvent, TouchFrame, TouchId, Velocity};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use tracing::info;

// ============================================================================
// Recording Format
// ============================================================================

/// Initial surface geometry and modes for a replay.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceSetup {
    #[serde(default)]
    pub offset: Point,
    pub limit: Point,
    /// Simulate an external thumb drag for the whole replay
    #[serde(default)]
    pub dragging: bool,
    /// Touches the surface excludes from scrolling
    #[serde(default)]
    pub ignored_touches: Vec<TouchId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    #[serde(default)]
    pub options: ScrollOptions,
    pub surface: SurfaceSetup,
    pub events: Vec<TouchEvent>,
}

impl Recording {
    /// Parse a recording and validate its options.
    pub fn from_json_str(json: &str) -> ReplayResult<Self> {
        let recording: Self = serde_json::from_str(json)?;
        recording.options.validate()?;
        Ok(recording)
    }

    pub fn load(path: impl AsRef<Path>) -> ReplayResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

// ============================================================================
// Recording Surface
// ============================================================================

/// One outbound call made by the tracker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum SurfaceCall {
    Stop,
    PreventDefault,
    SetPosition { x: f64, y: f64 },
    EdgeUpdate,
    SetMovement { vx: f64, vy: f64 },
}

impl fmt::Display for SurfaceCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stop => write!(f, "stop()"),
            Self::PreventDefault => write!(f, "preventDefault()"),
            Self::SetPosition { x, y } => write!(f, "setPosition({x:.2}, {y:.2})"),
            Self::EdgeUpdate => write!(f, "edgeUpdate()"),
            Self::SetMovement { vx, vy } => write!(f, "setMovement({vx:.2}, {vy:.2})"),
        }
    }
}

/// A scroll container stand-in that clamps positions to its limit and logs
/// every call it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    offset: Point,
    limit: Point,
    dragging: bool,
    ignored: HashSet<TouchId>,
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new(offset: Point, limit: Point) -> Self {
        Self {
            offset: offset.clamp_to(limit),
            limit,
            ..Default::default()
        }
    }

    pub fn from_setup(setup: &SurfaceSetup) -> Self {
        let mut surface = Self::new(setup.offset, setup.limit);
        surface.dragging = setup.dragging;
        surface.ignored = setup.ignored_touches.iter().copied().collect();
        surface
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub fn ignore_touch(&mut self, id: TouchId) {
        self.ignored.insert(id);
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<SurfaceCall> {
        std::mem::take(&mut self.calls)
    }

    /// Every position requested through `set_position`, unclamped.
    pub fn positions(&self) -> Vec<Point> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::SetPosition { x, y } => Some(Point::new(*x, *y)),
                _ => None,
            })
            .collect()
    }

    /// Every velocity handed off through `set_movement`.
    pub fn movements(&self) -> Vec<Velocity> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::SetMovement { vx, vy } => Some(Velocity::new(*vx, *vy)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, matches: impl Fn(&SurfaceCall) -> bool) -> usize {
        self.calls.iter().filter(|call| matches(call)).count()
    }
}

impl PositionSink for RecordingSurface {
    fn offset(&self) -> Point {
        self.offset
    }

    fn set_position(&mut self, position: Point) {
        self.calls.push(SurfaceCall::SetPosition {
            x: position.x,
            y: position.y,
        });
        self.offset = position.clamp_to(self.limit);
    }

    fn prevent_default(&mut self) {
        self.calls.push(SurfaceCall::PreventDefault);
    }
}

impl MomentumSink for RecordingSurface {
    fn stop(&mut self) {
        self.calls.push(SurfaceCall::Stop);
    }

    fn set_movement(&mut self, velocity: Velocity) {
        self.calls.push(SurfaceCall::SetMovement {
            vx: velocity.x,
            vy: velocity.y,
        });
    }
}

impl SurfaceGeometry for RecordingSurface {
    fn limit(&self) -> Point {
        self.limit
    }

    fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn ignores(&self, frame: &TouchFrame) -> bool {
        self.ignored.contains(&frame.id)
    }

    fn request_edge_update(&mut self) {
        self.calls.push(SurfaceCall::EdgeUpdate);
    }
}

// ============================================================================
// Replay
// ============================================================================

/// What happened during a replay.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplayReport {
    pub calls: Vec<SurfaceCall>,
    pub outcomes: Vec<EventOutcome>,
    pub final_offset: Point,
}

impl ReplayReport {
    pub fn scrolled_frames(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, EventOutcome::Move(MoveOutcome::Scrolled { .. })))
            .count()
    }

    pub fn ignored_frames(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.ignored().is_some())
            .count()
    }

    /// Release velocities in the order they were handed off.
    pub fn releases(&self) -> Vec<Velocity> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                EventOutcome::End(EndOutcome::Released { velocity }) => Some(*velocity),
                _ => None,
            })
            .collect()
    }
}

/// Run every event of a recording through a fresh tracker.
pub fn replay(recording: &Recording) -> ReplayReport {
    let surface = RecordingSurface::from_setup(&recording.surface);
    let mut tracker = GestureTracker::new(surface, recording.options.clone());

    let outcomes: Vec<EventOutcome> = recording
        .events
        .iter()
        .map(|event| tracker.handle_event(event))
        .collect();

    let mut surface = tracker.into_surface();
    let report = ReplayReport {
        final_offset: surface.offset(),
        calls: surface.take_calls(),
        outcomes,
    };

    info!(
        events = recording.events.len(),
        scrolled = report.scrolled_frames(),
        ignored = report.ignored_frames(),
        releases = report.releases().len(),
        "Replay finished"
    );

    report
}
