//! Touch end handling - release the session and hand off the fling velocity.

use super::state::{EndOutcome, IgnoreReason};
use super::tracker::GestureTracker;
use super::velocity::release_velocity;
use crate::profile_scope;
use crate::surface::ScrollSurface;
use crate::types::{TouchFrame, Velocity};
use tracing::{debug, trace};

impl<S: ScrollSurface> GestureTracker<S> {
    pub fn handle_touch_end(&mut self, frame: &TouchFrame) -> EndOutcome {
        profile_scope!("touch_end");

        if self.surface.ignores(frame) {
            trace!(touch = %frame.id, "touch end ignored: region");
            return EndOutcome::Ignored(IgnoreReason::IgnoredRegion);
        }
        if self.surface.is_dragging() {
            trace!(touch = %frame.id, "touch end ignored: dragging");
            return EndOutcome::Ignored(IgnoreReason::Dragging);
        }

        // Any finger lifting ends the session; a finger still down is
        // adopted again on its next move
        if let Some(owner) = self.state.owner() {
            self.records.remove(owner);
        }
        self.records.remove(frame.id);
        self.state.reset();

        let velocity = release_velocity(self.velocity, self.options.speed);
        self.surface.set_movement(velocity);
        self.velocity = Velocity::ZERO;

        debug!(
            touch = %frame.id,
            vx = velocity.x,
            vy = velocity.y,
            fingers = self.records.len(),
            "Touch session released"
        );

        EndOutcome::Released { velocity }
    }
}
