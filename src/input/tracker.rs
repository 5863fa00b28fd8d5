//! The gesture tracker - one per scrollable surface.

use super::records::TouchRecords;
use super::state::{EventOutcome, GestureState};
use crate::settings::ScrollOptions;
use crate::surface::ScrollSurface;
use crate::types::{TouchEvent, TouchPoint, Velocity};

/// Converts touch frames into scroll updates and a release velocity.
///
/// The tracker owns all gesture state and is driven synchronously by the
/// event source through [`handle_touch_start`](Self::handle_touch_start),
/// [`handle_touch_move`](Self::handle_touch_move) and
/// [`handle_touch_end`](Self::handle_touch_end). Results flow out through the
/// surface it was built with.
#[derive(Debug)]
pub struct GestureTracker<S: ScrollSurface> {
    pub(super) surface: S,
    pub(super) options: ScrollOptions,
    pub(super) records: TouchRecords,
    pub(super) state: GestureState,
    /// Instantaneous estimate in px/ms, overwritten on every accepted move
    pub(super) velocity: Velocity,
}

impl<S: ScrollSurface> GestureTracker<S> {
    pub fn new(surface: S, options: ScrollOptions) -> Self {
        Self {
            surface,
            options,
            records: TouchRecords::new(),
            state: GestureState::Idle,
            velocity: Velocity::ZERO,
        }
    }

    /// Dispatch a phase-tagged event to the matching handler.
    pub fn handle_event(&mut self, event: &TouchEvent) -> EventOutcome {
        match event {
            TouchEvent::Start(frame) => EventOutcome::Start(self.handle_touch_start(frame)),
            TouchEvent::Move(frame) => EventOutcome::Move(self.handle_touch_move(frame)),
            TouchEvent::End(frame) => EventOutcome::End(self.handle_touch_end(frame)),
        }
    }

    /// Refresh the position record of every touch in the list.
    pub fn update_records(&mut self, touches: &[TouchPoint]) {
        self.records.update(touches);
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn options(&self) -> &ScrollOptions {
        &self.options
    }

    /// Replace the options. Takes effect from the next frame.
    pub fn set_options(&mut self, options: ScrollOptions) {
        self.options = options;
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn records(&self) -> &TouchRecords {
        &self.records
    }

    /// Current velocity estimate in px/ms.
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }
}
