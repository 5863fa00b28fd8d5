//! Error types for the crate's fallible edges.
//!
//! The gesture core never fails; only loading settings and replay recordings do.

use thiserror::Error;

/// Errors that can occur while loading scroll options
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Speed multiplier that would break the release velocity
    #[error("Invalid speed: {0} (must be finite and greater than 0)")]
    InvalidSpeed(f64),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Errors that can occur while loading a touch recording
#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Recording parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The recording carried invalid options
    #[error("Invalid recording options: {0}")]
    Settings(#[from] SettingsError),
}

/// Result type alias for replay operations
pub type ReplayResult<T> = Result<T, ReplayError>;
