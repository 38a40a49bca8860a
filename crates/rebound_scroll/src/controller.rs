//! Drag overscroll controller
//!
//! Runs as a pre-pass over the pointer stream of a scroll container. While the
//! container sits at its top or bottom limit and the finger keeps pushing past
//! it, the content frame is shifted by a damped share of the drag. Releasing
//! the finger hands a slide-back animation to the animator and restores the
//! frame at once, so only the drawing lags behind the layout.
//!
//! # State
//!
//! ```text
//!  Idle ──move──▶ Tracking ──move past edge──▶ Displaced
//!   ▲                │                             │
//!   └──────up────────┴─────────up (rebound)────────┘
//! ```
//!
//! A secondary pointer lifting drops the last sample (back to `Idle` or
//! staying `Displaced`) so the next move does not jump.

use rebound_animation::TranslateRequest;
use rebound_core::{Frame, NodeId, PointerAction, PointerEvent};

use crate::config::{ConfigError, OverscrollConfig};
use crate::host::{OverScrollMode, ReboundAnimator, ScrollHost};

/// Pointer y meaning "no previous sample"
pub const UNSET_Y: f32 = 0.0;

/// Coarse view of the controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverscrollPhase {
    /// No content node was found; events pass straight through
    Inert,
    /// No drag sample and no displacement
    Idle,
    /// A move sample is recorded, content is at its layout position
    Tracking,
    /// Content is shifted past the scroll edge
    Displaced,
}

/// Tracks a vertical drag and rubber-bands the content at the scroll edges
#[derive(Debug, Clone)]
pub struct DragOverscrollController {
    config: OverscrollConfig,
    /// Node that gets displaced
    content: Option<NodeId>,
    /// Content frame before the current displacement began
    saved_frame: Option<Frame>,
    /// Pointer y of the previous move, `UNSET_Y` when there is none
    last_y: f32,
}

impl Default for DragOverscrollController {
    fn default() -> Self {
        Self::unchecked(OverscrollConfig::default())
    }
}

impl DragOverscrollController {
    /// Build a controller, rejecting a config that cannot be applied
    pub fn new(config: OverscrollConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::unchecked(config))
    }

    fn unchecked(config: OverscrollConfig) -> Self {
        Self {
            config,
            content: None,
            saved_frame: None,
            last_y: UNSET_Y,
        }
    }

    /// Bind to the host once its layout is inflated.
    ///
    /// Turns off the host's own edge feedback and records its first child.
    pub fn attach<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        host.set_over_scroll_mode(OverScrollMode::Never);
        self.content = host.first_child();
        self.saved_frame = None;
        self.last_y = UNSET_Y;

        match self.content {
            Some(node) => tracing::debug!(?node, "overscroll attached to content"),
            None => tracing::debug!("overscroll host has no child, displacement disabled"),
        }
    }

    /// React to one pointer event. Does not forward it to the host.
    pub fn handle_event<H, A>(&mut self, host: &mut H, animator: &mut A, event: &PointerEvent)
    where
        H: ScrollHost + ?Sized,
        A: ReboundAnimator + ?Sized,
    {
        match event.action {
            PointerAction::Up => {
                if let Some(saved) = self.saved_frame.take() {
                    self.rebound(host, animator, saved);
                }
                self.last_y = UNSET_Y;
            }
            PointerAction::Move => {
                let current_y = event.y;
                if self.last_y != UNSET_Y {
                    let distance_y = (self.last_y - current_y) as i32;
                    self.displace(host, distance_y);
                }
                self.last_y = current_y;
            }
            PointerAction::SecondaryUp => {
                self.last_y = UNSET_Y;
            }
            // TODO: decide whether a primary Down should clear a stale sample
            // left by a cancelled gesture; today it carries over.
            _ => {}
        }
    }

    fn displace<H: ScrollHost + ?Sized>(&mut self, host: &mut H, distance_y: i32) {
        let pulling_top = distance_y < 0 && self.is_to_top(host);
        let pushing_bottom = distance_y > 0 && self.is_to_bottom(host);
        if !(pulling_top || pushing_bottom) {
            return;
        }

        let Some(node) = self.content else {
            return;
        };
        let Some(frame) = host.child_frame(node) else {
            return;
        };

        if self.saved_frame.is_none() {
            self.saved_frame = Some(frame);
        }

        let shifted = frame.offset_y(self.config.damped(distance_y).saturating_neg());
        host.layout_child(node, shifted);

        tracing::trace!(
            distance_y,
            top = shifted.top,
            scroll_y = host.scroll_y(),
            "overscroll displaced content"
        );
    }

    fn rebound<H, A>(&mut self, host: &mut H, animator: &mut A, saved: Frame)
    where
        H: ScrollHost + ?Sized,
        A: ReboundAnimator + ?Sized,
    {
        let Some(node) = self.content else {
            return;
        };
        let Some(current) = host.child_frame(node) else {
            return;
        };

        let request = TranslateRequest::new(current.top, saved.top, self.config.rebound_duration_ms)
            .with_easing(self.config.easing);

        match animator.start_rebound(node, request) {
            Ok(id) => tracing::debug!(
                ?id,
                from = current.top,
                to = saved.top,
                distance = request.distance(),
                "overscroll rebound started"
            ),
            Err(err) => tracing::warn!("overscroll rebound animation not started: {err}"),
        }

        // The animation only moves the drawing; put the layout back right away.
        host.layout_child(node, saved);
    }

    /// Scrolled all the way up
    pub fn is_to_top<H: ScrollHost + ?Sized>(&self, host: &H) -> bool {
        host.scroll_y() == 0
    }

    /// Scrolled all the way down, judged by the content's full measured height
    pub fn is_to_bottom<H: ScrollHost + ?Sized>(&self, host: &H) -> bool {
        let Some(measured) = self.content.and_then(|node| host.child_measured_height(node)) else {
            return false;
        };
        host.scroll_y() == measured - host.height()
    }

    pub fn phase(&self) -> OverscrollPhase {
        if self.content.is_none() {
            OverscrollPhase::Inert
        } else if self.saved_frame.is_some() {
            OverscrollPhase::Displaced
        } else if self.last_y != UNSET_Y {
            OverscrollPhase::Tracking
        } else {
            OverscrollPhase::Idle
        }
    }

    pub fn config(&self) -> &OverscrollConfig {
        &self.config
    }

    pub fn content(&self) -> Option<NodeId> {
        self.content
    }

    pub fn saved_frame(&self) -> Option<Frame> {
        self.saved_frame
    }

    pub fn last_y(&self) -> f32 {
        self.last_y
    }
}
