//! Overscroll configuration

use rebound_animation::Easing;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Divisor applied to raw drag distance before moving the content
pub const DEFAULT_DAMPING: i32 = 2;

/// Length of the slide back after release
pub const DEFAULT_REBOUND_DURATION_MS: u32 = 200;

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("damping must be at least 1, got {0}")]
    InvalidDamping(i32),

    #[error("rebound duration must be at least 1 ms, got {0}")]
    InvalidDuration(u32),
}

/// Configuration for drag overscroll. Fixed for the lifetime of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverscrollConfig {
    /// Drag distance is divided by this before the content moves
    pub damping: i32,
    /// Duration of the return animation in milliseconds
    pub rebound_duration_ms: u32,
    /// Curve of the return animation
    pub easing: Easing,
}

impl Default for OverscrollConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            rebound_duration_ms: DEFAULT_REBOUND_DURATION_MS,
            easing: Easing::AccelerateDecelerate,
        }
    }
}

impl OverscrollConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.damping < 1 {
            return Err(ConfigError::InvalidDamping(self.damping));
        }
        if self.rebound_duration_ms == 0 {
            return Err(ConfigError::InvalidDuration(self.rebound_duration_ms));
        }
        Ok(())
    }

    /// Damped shift for a raw drag distance, truncated toward zero
    pub fn damped(&self, distance: i32) -> i32 {
        distance / self.damping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OverscrollConfig::default();
        assert_eq!(config.damping, 2);
        assert_eq!(config.rebound_duration_ms, 200);
        assert_eq!(config.easing, Easing::AccelerateDecelerate);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_damped_truncates_toward_zero() {
        let config = OverscrollConfig::default();
        assert_eq!(config.damped(-30), -15);
        assert_eq!(config.damped(7), 3);
        assert_eq!(config.damped(-7), -3);
        assert_eq!(config.damped(1), 0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = OverscrollConfig {
            damping: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidDamping(0)));

        let config = OverscrollConfig {
            rebound_duration_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidDuration(0)));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: OverscrollConfig = toml::from_str("damping = 3").unwrap();
        assert_eq!(config.damping, 3);
        assert_eq!(config.rebound_duration_ms, 200);

        let config: OverscrollConfig = toml::from_str("easing = \"linear\"").unwrap();
        assert_eq!(config.easing, Easing::Linear);
        assert_eq!(config.damping, 2);
    }
}
