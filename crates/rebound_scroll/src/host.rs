//! Host capabilities
//!
//! What the overscroll widget needs from the framework it is embedded in.

use rebound_animation::{
    AnimationError, AnimationId, AnimationScheduler, SchedulerHandle, TranslateRequest,
};
use rebound_core::{Frame, NodeId, PointerEvent};

/// Built-in edge feedback of the host scroll container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverScrollMode {
    /// Always show edge feedback
    Always,
    /// Show edge feedback only when the content can scroll
    #[default]
    IfContentScrolls,
    /// Never show edge feedback
    Never,
}

/// The base scroll container the widget is layered on.
///
/// Child accessors return `None` for nodes the host no longer knows about.
pub trait ScrollHost {
    /// Current vertical scroll offset
    fn scroll_y(&self) -> i32;

    /// Visible height of the container
    fn height(&self) -> i32;

    fn set_over_scroll_mode(&mut self, mode: OverScrollMode);

    /// The container's content node, if it has one
    fn first_child(&self) -> Option<NodeId>;

    fn child_frame(&self, node: NodeId) -> Option<Frame>;

    /// Full measured height of a child, including what is scrolled out of view
    fn child_measured_height(&self, node: NodeId) -> Option<i32>;

    /// Place a child at `frame`, outside the regular layout pass
    fn layout_child(&mut self, node: NodeId, frame: Frame);

    /// Regular scroll handling for a pointer event. Returns whether it was consumed.
    fn dispatch_base_event(&mut self, event: &PointerEvent) -> bool;
}

/// Plays the cosmetic slide back after a release
pub trait ReboundAnimator {
    fn start_rebound(
        &mut self,
        node: NodeId,
        request: TranslateRequest,
    ) -> Result<AnimationId, AnimationError>;
}

impl ReboundAnimator for AnimationScheduler {
    fn start_rebound(
        &mut self,
        node: NodeId,
        request: TranslateRequest,
    ) -> Result<AnimationId, AnimationError> {
        self.submit(node, request)
    }
}

impl ReboundAnimator for SchedulerHandle {
    fn start_rebound(
        &mut self,
        node: NodeId,
        request: TranslateRequest,
    ) -> Result<AnimationId, AnimationError> {
        self.submit(node, request)
    }
}

impl<A: ReboundAnimator + ?Sized> ReboundAnimator for &mut A {
    fn start_rebound(
        &mut self,
        node: NodeId,
        request: TranslateRequest,
    ) -> Result<AnimationId, AnimationError> {
        (**self).start_rebound(node, request)
    }
}
