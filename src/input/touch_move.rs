//! Touch move handling - ownership, velocity and direct position updates.
//!
//! ## Performance Notes
//!
//! Touch move fires for every finger on every input frame. The handler does
//! constant work per frame apart from the record refresh, which is linear in
//! the number of fingers on the surface.

use super::state::{IgnoreReason, MoveOutcome, Sample};
use super::tracker::GestureTracker;
use super::velocity::VelocitySample;
use crate::profile_scope;
use crate::surface::ScrollSurface;
use crate::types::TouchFrame;
use tracing::trace;

impl<S: ScrollSurface> GestureTracker<S> {
    pub fn handle_touch_move(&mut self, frame: &TouchFrame) -> MoveOutcome {
        profile_scope!("touch_move");

        if self.surface.is_dragging() {
            trace!(touch = %frame.id, "touch move ignored: dragging");
            return MoveOutcome::Ignored(IgnoreReason::Dragging);
        }
        if self.surface.ignores(frame) {
            trace!(touch = %frame.id, "touch move ignored: region");
            return MoveOutcome::Ignored(IgnoreReason::IgnoredRegion);
        }

        self.records.update(&frame.touches);

        let anchor = match self.state.owner() {
            None => {
                // The start was missed (or the owner lifted): adopt this
                // finger and seed the anchor from its record
                let recovered = self
                    .records
                    .get(frame.id)
                    .map(|position| Sample::new(position, frame.timestamp_ms));
                trace!(touch = %frame.id, recovered = recovered.is_some(), "adopting touch");
                self.state.start_tracking(frame.id, recovered);
                recovered
            }
            Some(owner) if owner != frame.id => {
                trace!(touch = %frame.id, owner = %owner, "touch move ignored: foreign touch");
                return MoveOutcome::Ignored(IgnoreReason::ForeignTouch);
            }
            Some(_) => self.state.anchor().or_else(|| {
                let recovered = self
                    .records
                    .get(frame.id)
                    .map(|position| Sample::new(position, frame.timestamp_ms));
                if let Some(sample) = recovered {
                    self.state.set_anchor(sample);
                }
                recovered
            }),
        };

        let Some(anchor) = anchor else {
            trace!(touch = %frame.id, "touch move ignored: no anchor");
            return MoveOutcome::Ignored(IgnoreReason::NoAnchor);
        };

        let sample = VelocitySample::between(anchor, frame.position, frame.timestamp_ms);
        self.velocity = sample.velocity();

        // Advance the anchor first so both branches below leave it current
        self.state.set_anchor(Sample::new(frame.position, frame.timestamp_ms));
        self.records.insert(frame.id, frame.position);

        let offset = self.surface.offset();

        if self.options.continuous_scrolling
            && self.surface.scroll_onto_edge(offset, sample.delta)
        {
            self.surface.request_edge_update();
            return MoveOutcome::EdgeUpdate;
        }

        let position = sample.delta + offset;
        self.surface.prevent_default();
        self.surface.set_position(position);

        MoveOutcome::Scrolled { position }
    }
}
