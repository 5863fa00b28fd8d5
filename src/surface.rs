//! Collaborator seams for the gesture tracker.
//!
//! The tracker never touches a DOM, a renderer or an animation loop. It talks
//! to the scrollable surface through three small traits:
//!
//! - [`PositionSink`] - absolute position updates while a finger is down
//! - [`MomentumSink`] - stopping and seeding the inertial fling
//! - [`SurfaceGeometry`] - drag mode, ignored regions and edge checks
//!
//! Anything implementing all three is a [`ScrollSurface`].

use crate::types::{Point, TouchFrame, Velocity};

/// Receives direct scroll-position updates.
pub trait PositionSink {
    /// Current scroll offset.
    fn offset(&self) -> Point;

    /// Move the surface to an absolute position.
    fn set_position(&mut self, position: Point);

    /// Suppress the platform's native handling of the frame being processed.
    fn prevent_default(&mut self) {}
}

/// Owns the inertial animation that runs after release.
pub trait MomentumSink {
    /// Halt any running fling. Called synchronously on every accepted touch start.
    fn stop(&mut self);

    /// Seed a fling with an initial velocity in px/s. May be zero.
    fn set_movement(&mut self, velocity: Velocity);
}

/// Geometry and mode queries the tracker needs to make policy decisions.
pub trait SurfaceGeometry {
    /// Scrollable extent on each axis.
    fn limit(&self) -> Point;

    /// True while an external drag (e.g. scrollbar thumb) owns the surface.
    fn is_dragging(&self) -> bool {
        false
    }

    /// True if this frame should not scroll the surface, e.g. it began
    /// inside a nested scrollable region.
    fn ignores(&self, _frame: &TouchFrame) -> bool {
        false
    }

    /// Whether moving by `delta` from `offset` would only push against an
    /// edge. The default clamps the destination into `[0, limit]` and reports
    /// true when nothing would change.
    fn scroll_onto_edge(&self, offset: Point, delta: Point) -> bool {
        let dest = (offset + delta).clamp_to(self.limit());
        dest == offset
    }

    /// Throttled re-render used instead of a position update at the edge.
    fn request_edge_update(&mut self);
}

/// A complete surface the tracker can drive.
pub trait ScrollSurface: PositionSink + MomentumSink + SurfaceGeometry {}

impl<T: PositionSink + MomentumSink + SurfaceGeometry + ?Sized> ScrollSurface for T {}

// Borrowed surfaces work too, so a caller can keep ownership of its surface.

impl<T: PositionSink + ?Sized> PositionSink for &mut T {
    fn offset(&self) -> Point {
        (**self).offset()
    }

    fn set_position(&mut self, position: Point) {
        (**self).set_position(position)
    }

    fn prevent_default(&mut self) {
        (**self).prevent_default()
    }
}

impl<T: MomentumSink + ?Sized> MomentumSink for &mut T {
    fn stop(&mut self) {
        (**self).stop()
    }

    fn set_movement(&mut self, velocity: Velocity) {
        (**self).set_movement(velocity)
    }
}

impl<T: SurfaceGeometry + ?Sized> SurfaceGeometry for &mut T {
    fn limit(&self) -> Point {
        (**self).limit()
    }

    fn is_dragging(&self) -> bool {
        (**self).is_dragging()
    }

    fn ignores(&self, frame: &TouchFrame) -> bool {
        (**self).ignores(frame)
    }

    fn scroll_onto_edge(&self, offset: Point, delta: Point) -> bool {
        (**self).scroll_onto_edge(offset, delta)
    }

    fn request_edge_update(&mut self) {
        (**self).request_edge_update()
    }
}
