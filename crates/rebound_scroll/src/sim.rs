//! In-memory scroll host
//!
//! Stands in for a real framework when replaying gesture scripts and in tests.
//! Base scrolling follows the finger one pixel per pixel and clamps to the
//! scroll range; there is no fling.

use rebound_core::{Frame, NodeId, PointerAction, PointerEvent};
use slotmap::SlotMap;

use crate::host::{OverScrollMode, ScrollHost};

#[derive(Debug, Clone, Copy)]
struct SimNode {
    frame: Frame,
    measured_height: i32,
}

/// A vertical scroll container living entirely in memory
#[derive(Debug, Clone)]
pub struct SimulatedScrollView {
    nodes: SlotMap<NodeId, SimNode>,
    children: Vec<NodeId>,
    scroll_y: i32,
    height: i32,
    over_scroll_mode: OverScrollMode,
    /// Finger position the base scroller measures drag deltas from
    drag_anchor: Option<f32>,
    base_events: Vec<PointerEvent>,
    layout_writes: usize,
}

impl SimulatedScrollView {
    pub fn new(height: i32) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: Vec::new(),
            scroll_y: 0,
            height,
            over_scroll_mode: OverScrollMode::default(),
            drag_anchor: None,
            base_events: Vec::new(),
            layout_writes: 0,
        }
    }

    pub fn add_child(&mut self, frame: Frame, measured_height: i32) -> NodeId {
        let node = self.nodes.insert(SimNode {
            frame,
            measured_height,
        });
        self.children.push(node);
        node
    }

    pub fn remove_child(&mut self, node: NodeId) -> Option<Frame> {
        self.children.retain(|&c| c != node);
        self.nodes.remove(node).map(|n| n.frame)
    }

    pub fn frame(&self, node: NodeId) -> Option<Frame> {
        self.nodes.get(node).map(|n| n.frame)
    }

    /// Largest reachable scroll offset for the current content
    pub fn max_scroll_y(&self) -> i32 {
        self.children
            .first()
            .and_then(|&node| self.nodes.get(node))
            .map(|n| (n.measured_height - self.height).max(0))
            .unwrap_or(0)
    }

    /// Jump to `scroll_y`, clamped to the scroll range
    pub fn set_scroll_y(&mut self, scroll_y: i32) {
        self.scroll_y = scroll_y.clamp(0, self.max_scroll_y());
    }

    pub fn over_scroll_mode(&self) -> OverScrollMode {
        self.over_scroll_mode
    }

    /// Every event the base scroller received, in order
    pub fn base_events(&self) -> &[PointerEvent] {
        &self.base_events
    }

    /// Number of out-of-band child layouts performed
    pub fn layout_writes(&self) -> usize {
        self.layout_writes
    }
}

impl ScrollHost for SimulatedScrollView {
    fn scroll_y(&self) -> i32 {
        self.scroll_y
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn set_over_scroll_mode(&mut self, mode: OverScrollMode) {
        self.over_scroll_mode = mode;
    }

    fn first_child(&self) -> Option<NodeId> {
        self.children.first().copied()
    }

    fn child_frame(&self, node: NodeId) -> Option<Frame> {
        self.frame(node)
    }

    fn child_measured_height(&self, node: NodeId) -> Option<i32> {
        self.nodes.get(node).map(|n| n.measured_height)
    }

    fn layout_child(&mut self, node: NodeId, frame: Frame) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.frame = frame;
            self.layout_writes += 1;
        }
    }

    fn dispatch_base_event(&mut self, event: &PointerEvent) -> bool {
        self.base_events.push(*event);

        match event.action {
            PointerAction::Down => self.drag_anchor = Some(event.y),
            PointerAction::Move => {
                if let Some(anchor) = self.drag_anchor {
                    let delta = (anchor - event.y) as i32;
                    self.set_scroll_y(self.scroll_y.saturating_add(delta));
                    self.drag_anchor = Some(event.y);
                }
            }
            PointerAction::Up | PointerAction::Cancel => self.drag_anchor = None,
            _ => {}
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_scroll_follows_finger_and_clamps() {
        let mut host = SimulatedScrollView::new(800);
        host.add_child(Frame::new(0, 0, 480, 1600), 1600);
        assert_eq!(host.max_scroll_y(), 800);

        host.dispatch_base_event(&PointerEvent::down(500.0));
        host.dispatch_base_event(&PointerEvent::moved(300.0));
        assert_eq!(host.scroll_y(), 200);

        host.dispatch_base_event(&PointerEvent::moved(900.0));
        assert_eq!(host.scroll_y(), 0);

        host.dispatch_base_event(&PointerEvent::moved(-2000.0));
        assert_eq!(host.scroll_y(), 800);

        host.dispatch_base_event(&PointerEvent::up(-2000.0));
        host.dispatch_base_event(&PointerEvent::moved(0.0));
        assert_eq!(host.scroll_y(), 800);
        assert_eq!(host.base_events().len(), 6);
    }

    #[test]
    fn test_removed_child_is_forgotten() {
        let mut host = SimulatedScrollView::new(800);
        let node = host.add_child(Frame::new(0, 0, 480, 1600), 1600);
        assert_eq!(host.remove_child(node), Some(Frame::new(0, 0, 480, 1600)));

        assert_eq!(host.first_child(), None);
        assert_eq!(host.child_frame(node), None);
        host.layout_child(node, Frame::ZERO);
        assert_eq!(host.layout_writes(), 0);
    }

    #[test]
    fn test_far_off_screen_finger_clamps() {
        let mut host = SimulatedScrollView::new(800);
        host.add_child(Frame::new(0, 0, 480, 1600), 1600);
        host.set_scroll_y(800);

        host.dispatch_base_event(&PointerEvent::down(0.0));
        host.dispatch_base_event(&PointerEvent::moved(-1.0e10));
        assert_eq!(host.scroll_y(), 800);

        host.dispatch_base_event(&PointerEvent::moved(1.0e10));
        assert_eq!(host.scroll_y(), 0);
    }
}
