//! Gesture script files
//!
//! A script describes the scroll container, its content, and the pointer
//! events to replay:
//!
//! ```toml
//! scroll_y = 0
//! height = 800
//! frame_ms = 16
//!
//! [child]
//! frame = { left = 0, top = 0, right = 480, bottom = 1600 }
//!
//! [config]
//! damping = 2
//!
//! [[events]]
//! action = "down"
//! y = 100.0
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rebound_core::{Frame, PointerAction, PointerEvent};
use rebound_scroll::OverscrollConfig;
use serde::{Deserialize, Serialize};

/// A replayable gesture
#[derive(Debug, Deserialize, Serialize)]
pub struct Script {
    /// Initial scroll offset
    #[serde(default)]
    pub scroll_y: i32,
    /// Visible height of the container
    #[serde(default = "default_height")]
    pub height: i32,
    /// Time between events, used to advance the animation scheduler
    #[serde(default = "default_frame_ms")]
    pub frame_ms: f32,
    #[serde(default)]
    pub child: Option<ScriptChild>,
    #[serde(default)]
    pub config: Option<OverscrollConfig>,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

fn default_height() -> i32 {
    800
}

fn default_frame_ms() -> f32 {
    16.0
}

/// The container's content node
#[derive(Debug, Deserialize, Serialize)]
pub struct ScriptChild {
    pub frame: Frame,
    /// Full measured height; defaults to the frame height
    #[serde(default)]
    pub measured_height: Option<i32>,
}

impl ScriptChild {
    pub fn measured_height(&self) -> i32 {
        self.measured_height.unwrap_or_else(|| self.frame.height())
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ScriptEvent {
    pub action: PointerAction,
    pub y: f32,
    #[serde(default)]
    pub pointer: u8,
}

impl ScriptEvent {
    pub fn to_pointer_event(&self, timestamp: u64) -> PointerEvent {
        PointerEvent {
            pointer_index: self.pointer,
            ..PointerEvent::new(self.action, self.y).at(timestamp)
        }
    }
}

impl Script {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid script {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let script: Script = toml::from_str(content).context("Failed to parse script TOML")?;
        Ok(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_script() {
        let script = Script::parse(
            r#"
            [child]
            frame = { left = 0, top = 0, right = 480, bottom = 1600 }

            [[events]]
            action = "move"
            y = 100.0

            [[events]]
            action = "secondary_up"
            y = 40.0
            pointer = 1
            "#,
        )
        .unwrap();

        assert_eq!(script.scroll_y, 0);
        assert_eq!(script.height, 800);
        assert_eq!(script.frame_ms, 16.0);
        assert!(script.config.is_none());

        let child = script.child.as_ref().unwrap();
        assert_eq!(child.measured_height(), 1600);

        assert_eq!(script.events.len(), 2);
        let event = script.events[1].to_pointer_event(32);
        assert_eq!(event.action, PointerAction::SecondaryUp);
        assert_eq!(event.pointer_index, 1);
        assert_eq!(event.timestamp, 32);
    }

    #[test]
    fn test_unknown_action_is_an_error() {
        let err = Script::parse(
            r#"
            [[events]]
            action = "wiggle"
            y = 1.0
            "#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_bundled_scripts_parse() {
        for source in [
            include_str!("../scripts/pull_down.toml"),
            include_str!("../scripts/push_bottom.toml"),
        ] {
            let script = Script::parse(source).unwrap();
            assert!(script.child.is_some());
            assert!(!script.events.is_empty());
        }
    }
}
