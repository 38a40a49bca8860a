//! Overscroll view
//!
//! Composes a host scroll container, a [`DragOverscrollController`] and an
//! animator behind the two entry points a framework calls: the one-time
//! inflate hook and the touch handler.

use rebound_core::PointerEvent;

use crate::config::{ConfigError, OverscrollConfig};
use crate::controller::DragOverscrollController;
use crate::host::{ReboundAnimator, ScrollHost};

/// A scroll container with drag overscroll and rebound
pub struct OverScrollView<H, A> {
    host: H,
    animator: A,
    controller: DragOverscrollController,
}

impl<H: ScrollHost, A: ReboundAnimator> OverScrollView<H, A> {
    /// Wrap `host` with the default damping and rebound duration
    pub fn new(host: H, animator: A) -> Self {
        Self {
            host,
            animator,
            controller: DragOverscrollController::default(),
        }
    }

    pub fn with_config(host: H, animator: A, config: OverscrollConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            host,
            animator,
            controller: DragOverscrollController::new(config)?,
        })
    }

    /// Layout finalization hook. Call once the host has its child.
    pub fn on_finish_inflate(&mut self) {
        self.controller.attach(&mut self.host);
    }

    /// Touch entry point. The overscroll pre-pass runs first, then the
    /// event always continues to the host's regular scroll handling.
    pub fn on_touch_event(&mut self, event: &PointerEvent) -> bool {
        self.controller
            .handle_event(&mut self.host, &mut self.animator, event);
        self.host.dispatch_base_event(event)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    pub fn controller(&self) -> &DragOverscrollController {
        &self.controller
    }

    pub fn into_parts(self) -> (H, A) {
        (self.host, self.animator)
    }
}
