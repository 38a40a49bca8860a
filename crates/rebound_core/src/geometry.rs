//! Layout geometry
//!
//! Frames are measured in whole pixels, matching the host layout pass.

/// Bounds of a layout node in its parent's coordinate space.
///
/// `Frame` is a value: displacing content means building a new frame and
/// handing it back to the host, never editing the host's copy in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Frame {
    pub const ZERO: Frame = Frame {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Same frame moved vertically by `dy`; left and right are untouched.
    /// Edges saturate at the `i32` range.
    pub const fn offset_y(&self, dy: i32) -> Self {
        Self {
            left: self.left,
            top: self.top.saturating_add(dy),
            right: self.right,
            bottom: self.bottom.saturating_add(dy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_keeps_size_and_horizontal_edges() {
        let frame = Frame::new(10, 20, 110, 220);
        let moved = frame.offset_y(-7);

        assert_eq!(moved, Frame::new(10, 13, 110, 213));
        assert_eq!(moved.width(), frame.width());
        assert_eq!(moved.height(), frame.height());
    }

    #[test]
    fn test_offset_saturates_at_range() {
        let frame = Frame::new(0, 0, 480, 1600);
        assert_eq!(frame.offset_y(i32::MAX), Frame::new(0, i32::MAX, 480, i32::MAX));
        assert_eq!(frame.offset_y(i32::MIN).top, i32::MIN);
        assert_eq!(frame.offset_y(i32::MIN).bottom, i32::MIN + 1600);
    }
}
