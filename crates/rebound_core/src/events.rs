//! Pointer events
//!
//! The touch stream a scroll container receives from the host dispatcher.

/// What a pointer did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum PointerAction {
    /// Primary pointer went down (gesture start)
    Down,
    /// Any pointer moved
    Move,
    /// Primary pointer lifted (gesture end)
    Up,
    /// Gesture cancelled by the host
    Cancel,
    /// Touch outside the widget
    Outside,
    /// A secondary pointer went down
    SecondaryDown,
    /// A secondary pointer lifted; the gesture is still live
    SecondaryUp,
}

/// A single sample of the pointer stream, in widget-local coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub action: PointerAction,
    /// Index of the pointer that caused the event (0 for the primary pointer)
    pub pointer_index: u8,
    pub x: f32,
    pub y: f32,
    /// Milliseconds since the host started dispatching
    pub timestamp: u64,
}

impl PointerEvent {
    pub const fn new(action: PointerAction, y: f32) -> Self {
        Self {
            action,
            pointer_index: 0,
            x: 0.0,
            y,
            timestamp: 0,
        }
    }

    pub const fn down(y: f32) -> Self {
        Self::new(PointerAction::Down, y)
    }

    pub const fn moved(y: f32) -> Self {
        Self::new(PointerAction::Move, y)
    }

    pub const fn up(y: f32) -> Self {
        Self::new(PointerAction::Up, y)
    }

    /// A secondary pointer (finger `index`) lifting off
    pub const fn secondary_up(index: u8, y: f32) -> Self {
        Self {
            pointer_index: index,
            ..Self::new(PointerAction::SecondaryUp, y)
        }
    }

    pub const fn at(self, timestamp: u64) -> Self {
        Self { timestamp, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_target_primary_pointer() {
        for event in [
            PointerEvent::down(10.0),
            PointerEvent::moved(20.0),
            PointerEvent::up(30.0),
        ] {
            assert_eq!(event.pointer_index, 0);
            assert_eq!(event.timestamp, 0);
        }
        assert_eq!(PointerEvent::moved(20.0).action, PointerAction::Move);
    }

    #[test]
    fn test_secondary_up_carries_pointer_index() {
        let event = PointerEvent::secondary_up(1, 42.0).at(16);
        assert_eq!(event.action, PointerAction::SecondaryUp);
        assert_eq!(event.pointer_index, 1);
        assert_eq!(event.y, 42.0);
        assert_eq!(event.timestamp, 16);
    }
}
