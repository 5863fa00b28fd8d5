//! Touch gesture tracking and momentum handoff for scrollable surfaces.
//!
//! A [`GestureTracker`] consumes touch start/move/end frames and drives a
//! [`ScrollSurface`]: direct position updates while a finger is down, and a
//! release velocity for the surface's fling animation once it lifts.
//!
//! ```ignore
//! let mut tracker = GestureTracker::new(surface, ScrollOptions::default());
//! tracker.handle_touch_start(&TouchFrame::single(0, 100.0, 100.0, 0));
//! tracker.handle_touch_move(&TouchFrame::single(0, 90.0, 100.0, 100));
//! tracker.handle_touch_end(&TouchFrame::single(0, 90.0, 100.0, 100));
//! ```

pub mod constants;
pub mod error;
pub mod input;
pub mod perf;
pub mod replay;
pub mod settings;
pub mod surface;
pub mod types;

pub use error::{ReplayError, SettingsError};
pub use input::{EndOutcome, GestureTracker, IgnoreReason, MoveOutcome, StartOutcome};
pub use settings::{Platform, ScrollOptions};
pub use surface::{MomentumSink, PositionSink, ScrollSurface, SurfaceGeometry};
pub use types::{Point, TouchEvent, TouchFrame, TouchId, TouchPoint, Velocity};
