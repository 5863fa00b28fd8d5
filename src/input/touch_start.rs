//! Touch start handling - claim the surface and halt any running fling.

use super::state::{IgnoreReason, Sample, StartOutcome};
use super::tracker::GestureTracker;
use crate::profile_scope;
use crate::surface::ScrollSurface;
use crate::types::{TouchFrame, Velocity};
use tracing::{debug, trace};

impl<S: ScrollSurface> GestureTracker<S> {
    pub fn handle_touch_start(&mut self, frame: &TouchFrame) -> StartOutcome {
        profile_scope!("touch_start");

        // Thumb drag and touch scrolling are mutually exclusive
        if self.surface.is_dragging() {
            trace!(touch = %frame.id, "touch start ignored: dragging");
            return StartOutcome::Ignored(IgnoreReason::Dragging);
        }

        self.records.update(&frame.touches);
        self.records.insert(frame.id, frame.position);

        self.state
            .start_tracking(frame.id, Some(Sample::new(frame.position, frame.timestamp_ms)));

        self.surface.stop();
        self.velocity = Velocity::ZERO;

        debug!(
            touch = %frame.id,
            x = frame.position.x,
            y = frame.position.y,
            fingers = self.records.len(),
            "Touch session started"
        );

        StartOutcome::Started { touch: frame.id }
    }
}
