//! Scroll options consumed by the tracker and its momentum collaborator.
//!
//! Options deserialize from camelCase JSON with every field optional:
//!
//! ```json
//! { "continuousScrolling": true, "speed": 1.5 }
//! ```

use crate::constants::{ANDROID_EASING_DURATION_MS, DEFAULT_EASING_DURATION_MS, DEFAULT_SPEED};
use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Touch platform family, as far as momentum timing is concerned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Android,
    #[default]
    Other,
}

impl Platform {
    /// Detect the platform family from a browser user-agent string.
    pub fn from_user_agent(user_agent: &str) -> Self {
        if user_agent.to_ascii_lowercase().contains("android") {
            Self::Android
        } else {
            Self::Other
        }
    }

    /// Inertial easing duration for this platform, in milliseconds.
    pub fn default_easing_duration_ms(self) -> u64 {
        match self {
            Self::Android => ANDROID_EASING_DURATION_MS,
            Self::Other => DEFAULT_EASING_DURATION_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrollOptions {
    /// Hand edge moves to the surface's overscroll handling instead of
    /// updating the position
    pub continuous_scrolling: bool,
    /// Multiplier applied to the release velocity
    pub speed: f64,
    /// Override for the platform's inertial duration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing_duration_ms: Option<u64>,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            continuous_scrolling: false,
            speed: DEFAULT_SPEED,
            easing_duration_ms: None,
        }
    }
}

impl ScrollOptions {
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_continuous_scrolling(mut self, enabled: bool) -> Self {
        self.continuous_scrolling = enabled;
        self
    }

    /// Parse and validate options from a JSON string.
    pub fn from_json_str(json: &str) -> SettingsResult<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Load and validate options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(SettingsError::InvalidSpeed(self.speed));
        }
        Ok(())
    }

    /// Easing duration for the momentum collaborator: the explicit override
    /// if set, otherwise the platform default.
    pub fn easing_duration_ms(&self, platform: Platform) -> u64 {
        self.easing_duration_ms
            .unwrap_or_else(|| platform.default_easing_duration_ms())
    }
}
