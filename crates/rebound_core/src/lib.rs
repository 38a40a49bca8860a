//! Rebound Core
//!
//! Shared primitives for the Rebound overscroll widgets:
//!
//! - **Frames**: integer layout bounds of a node inside its scroll container
//! - **Node ids**: stable handles for nodes owned by a host layout tree
//! - **Pointer events**: the touch stream a scroll container receives
//!
//! # Example
//!
//! ```rust
//! use rebound_core::Frame;
//!
//! let frame = Frame::new(0, 0, 480, 1600);
//! let shifted = frame.offset_y(15);
//!
//! assert_eq!(shifted.top, 15);
//! assert_eq!(shifted.bottom, 1615);
//! assert_eq!(shifted.height(), frame.height());
//! ```

pub mod events;
pub mod geometry;

pub use events::{PointerAction, PointerEvent};
pub use geometry::Frame;

slotmap::new_key_type! {
    /// Handle for a node in a host layout tree
    pub struct NodeId;
}
