//! Last known position of every finger on the surface.
//!
//! Records are refreshed from the full touch list of each frame and act as a
//! recovery cache when a move arrives with no owned finger.

use crate::types::{Point, TouchId, TouchPoint};
use std::collections::HashMap;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchRecords {
    positions: HashMap<TouchId, Point>,
}

impl TouchRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every touch in the list. Touches missing from the list are kept;
    /// a finger only leaves the records when it lifts.
    pub fn update(&mut self, touches: &[TouchPoint]) {
        for touch in touches {
            self.positions.insert(touch.id, touch.position);
        }
    }

    pub fn insert(&mut self, id: TouchId, position: Point) {
        self.positions.insert(id, position);
    }

    pub fn get(&self, id: TouchId) -> Option<Point> {
        self.positions.get(&id).copied()
    }

    pub fn remove(&mut self, id: TouchId) -> Option<Point> {
        self.positions.remove(&id)
    }

    pub fn contains(&self, id: TouchId) -> bool {
        self.positions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }
}
