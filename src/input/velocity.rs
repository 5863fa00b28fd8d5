//! Frame-to-frame velocity and the release deadband.

use super::state::Sample;
use crate::constants::{MIN_SAMPLE_INTERVAL_MS, MS_PER_SECOND, RELEASE_DEADBAND};
use crate::types::{Point, Velocity};

/// Displacement between two consecutive samples of the owned finger.
///
/// `delta` is `previous - current`: content moves opposite to the finger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocitySample {
    pub delta: Point,
    /// Never below [`MIN_SAMPLE_INTERVAL_MS`]
    pub elapsed_ms: u64,
}

impl VelocitySample {
    pub fn between(previous: Sample, position: Point, timestamp_ms: u64) -> Self {
        // Out-of-order timestamps collapse to the floor rather than going negative
        let elapsed_ms = timestamp_ms
            .saturating_sub(previous.timestamp_ms)
            .max(MIN_SAMPLE_INTERVAL_MS);

        Self {
            delta: previous.position - position,
            elapsed_ms,
        }
    }

    /// Instantaneous velocity in px/ms.
    pub fn velocity(&self) -> Velocity {
        let dt = self.elapsed_ms as f64;
        Velocity::new(self.delta.x / dt, self.delta.y / dt)
    }
}

/// Convert the tracker's px/ms estimate to the px/s velocity handed to the
/// momentum sink. Axes at or below the deadband become zero before `speed`
/// is applied.
pub fn release_velocity(estimate: Velocity, speed: f64) -> Velocity {
    Velocity::new(release_axis(estimate.x, speed), release_axis(estimate.y, speed))
}

fn release_axis(per_ms: f64, speed: f64) -> f64 {
    let per_second = per_ms * MS_PER_SECOND;
    if per_second.abs() > RELEASE_DEADBAND {
        per_second * speed
    } else {
        0.0
    }
}
