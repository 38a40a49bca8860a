//! Rebound Scroll Widgets
//!
//! A vertical scroll container that rubber-bands its content when the user
//! keeps dragging past the top or bottom edge, then slides it back on release.
//!
//! The container does not scroll, measure, or draw by itself. Those jobs
//! belong to the host framework and reach the widget through [`ScrollHost`].
//! The return animation is handed to a [`ReboundAnimator`].
//!
//! # Example
//!
//! ```rust
//! use rebound_animation::AnimationScheduler;
//! use rebound_core::{Frame, PointerEvent};
//! use rebound_scroll::{sim::SimulatedScrollView, OverScrollView};
//!
//! let mut host = SimulatedScrollView::new(800);
//! let content = host.add_child(Frame::new(0, 0, 480, 1600), 1600);
//!
//! let mut view = OverScrollView::new(host, AnimationScheduler::new());
//! view.on_finish_inflate();
//!
//! // Pull down while already at the top
//! view.on_touch_event(&PointerEvent::down(100.0));
//! view.on_touch_event(&PointerEvent::moved(100.0));
//! view.on_touch_event(&PointerEvent::moved(130.0));
//! assert_eq!(view.host().frame(content).map(|f| f.top), Some(15));
//!
//! // Release snaps the layout back and leaves the slide to the animator
//! view.on_touch_event(&PointerEvent::up(130.0));
//! assert_eq!(view.host().frame(content), Some(Frame::new(0, 0, 480, 1600)));
//! assert!(view.animator().has_active_animations());
//! ```

pub mod config;
pub mod controller;
pub mod host;
pub mod sim;
pub mod view;

pub use config::{ConfigError, OverscrollConfig};
pub use controller::{DragOverscrollController, OverscrollPhase};
pub use host::{OverScrollMode, ReboundAnimator, ScrollHost};
pub use view::OverScrollView;
