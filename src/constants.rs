//! Gesture-wide constants.
//!
//! Centralizes the numeric policy of the tracker: time floors, unit
//! scaling and the release deadband.

// ============================================================================
// Sampling
// ============================================================================

/// Smallest interval (ms) used when dividing a delta by elapsed time.
/// Two frames with identical timestamps would otherwise divide by zero.
pub const MIN_SAMPLE_INTERVAL_MS: u64 = 1;

/// Milliseconds per second, used to rescale the per-ms estimate at release
pub const MS_PER_SECOND: f64 = 1000.0;

// ============================================================================
// Release
// ============================================================================

/// Release velocities (px/s, before the speed multiplier) at or below this
/// magnitude are treated as jitter and zeroed.
pub const RELEASE_DEADBAND: f64 = 10.0;

/// Default scroll speed multiplier
pub const DEFAULT_SPEED: f64 = 1.0;

// ============================================================================
// Momentum
// ============================================================================

/// Inertial easing duration on Android touch platforms
pub const ANDROID_EASING_DURATION_MS: u64 = 1500;

/// Inertial easing duration everywhere else
pub const DEFAULT_EASING_DURATION_MS: u64 = 750;

// ============================================================================
// Handler Budget
// ============================================================================

/// A touch handler taking longer than this is reported as slow.
/// Half a 60 Hz frame leaves room for layout and paint.
pub const HANDLER_BUDGET_MS: f64 = 8.0;
