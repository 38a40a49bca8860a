//! Animation scheduler
//!
//! Owns every running translate animation and advances them each frame.
//! Submission is fire-and-forget: nothing reports back when an animation ends.

use std::sync::{Arc, Mutex, Weak};
use std::time::Instant;

use rebound_core::NodeId;
use slotmap::{new_key_type, SlotMap};

use crate::error::{AnimationError, Result};
use crate::translate::{TranslateAnimation, TranslateRequest};

new_key_type! {
    pub struct AnimationId;
}

struct Running {
    node: NodeId,
    animation: TranslateAnimation,
    /// Submission order, newest wins when several animations target one node
    seq: u64,
}

/// The animation scheduler that ticks all active animations
pub struct AnimationScheduler {
    animations: SlotMap<AnimationId, Running>,
    next_seq: u64,
    last_frame: Instant,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            animations: SlotMap::with_key(),
            next_seq: 0,
            last_frame: Instant::now(),
        }
    }

    /// Start a translate animation for `node`.
    ///
    /// Earlier animations on the same node keep playing.
    pub fn submit(&mut self, node: NodeId, request: TranslateRequest) -> Result<AnimationId> {
        if request.duration_ms == 0 {
            return Err(AnimationError::InvalidDuration(request.duration_ms));
        }

        let mut animation = TranslateAnimation::from(request);
        animation.start();

        let seq = self.next_seq;
        self.next_seq += 1;

        let id = self.animations.insert(Running {
            node,
            animation,
            seq,
        });
        tracing::trace!(
            ?node,
            from = request.from_top,
            to = request.to_top,
            duration_ms = request.duration_ms,
            "translate animation started"
        );
        Ok(id)
    }

    pub fn get(&self, id: AnimationId) -> Option<&TranslateAnimation> {
        self.animations.get(id).map(|r| &r.animation)
    }

    pub fn remove(&mut self, id: AnimationId) -> Option<TranslateAnimation> {
        self.animations.remove(id).map(|r| r.animation)
    }

    /// Tick all animations using wall-clock time since the previous tick
    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt_ms = (now - self.last_frame).as_secs_f32() * 1000.0;
        self.last_frame = now;
        self.tick_by(dt_ms);
    }

    /// Advance all animations by `dt_ms` and drop the ones that finished
    pub fn tick_by(&mut self, dt_ms: f32) {
        for (_, running) in self.animations.iter_mut() {
            running.animation.tick(dt_ms);
        }
        self.animations.retain(|_, r| r.animation.is_playing());
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        !self.animations.is_empty()
    }

    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    /// Drawn top edge of `node` according to its newest running animation
    pub fn visual_top(&self, node: NodeId) -> Option<f32> {
        self.animations
            .values()
            .filter(|r| r.node == node)
            .max_by_key(|r| r.seq)
            .map(|r| r.animation.value())
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Weak handle to a scheduler shared with the frame loop
#[derive(Clone)]
pub struct SchedulerHandle {
    scheduler: Weak<Mutex<AnimationScheduler>>,
}

impl SchedulerHandle {
    pub fn new(scheduler: &Arc<Mutex<AnimationScheduler>>) -> Self {
        Self {
            scheduler: Arc::downgrade(scheduler),
        }
    }

    /// A handle that is not attached to any scheduler
    pub fn detached() -> Self {
        Self {
            scheduler: Weak::new(),
        }
    }

    pub fn submit(&self, node: NodeId, request: TranslateRequest) -> Result<AnimationId> {
        let scheduler = self
            .scheduler
            .upgrade()
            .ok_or(AnimationError::SchedulerDropped)?;
        let mut scheduler = scheduler
            .lock()
            .map_err(|_| AnimationError::SchedulerPoisoned)?;
        scheduler.submit(node, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node() -> NodeId {
        let mut nodes: SlotMap<NodeId, ()> = SlotMap::with_key();
        nodes.insert(())
    }

    #[test]
    fn test_submit_and_finish() {
        let mut scheduler = AnimationScheduler::new();
        let node = node();
        let id = scheduler
            .submit(node, TranslateRequest::new(115, 100, 200))
            .unwrap();

        assert!(scheduler.has_active_animations());
        assert_eq!(scheduler.visual_top(node), Some(115.0));

        scheduler.tick_by(100.0);
        assert!(scheduler.get(id).is_some());

        scheduler.tick_by(100.0);
        assert!(!scheduler.has_active_animations());
        assert_eq!(scheduler.visual_top(node), None);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let mut scheduler = AnimationScheduler::new();
        let err = scheduler
            .submit(node(), TranslateRequest::new(10, 0, 0))
            .unwrap_err();
        assert_eq!(err, AnimationError::InvalidDuration(0));
        assert_eq!(scheduler.animation_count(), 0);
    }

    #[test]
    fn test_newest_animation_wins_visual_top() {
        let mut scheduler = AnimationScheduler::new();
        let node = node();
        scheduler
            .submit(node, TranslateRequest::new(40, 0, 200))
            .unwrap();
        scheduler.tick_by(50.0);
        scheduler
            .submit(node, TranslateRequest::new(25, 0, 200))
            .unwrap();

        assert_eq!(scheduler.animation_count(), 2);
        assert_eq!(scheduler.visual_top(node), Some(25.0));
    }

    #[test]
    fn test_handle_reports_dropped_scheduler() {
        let scheduler = Arc::new(Mutex::new(AnimationScheduler::new()));
        let handle = SchedulerHandle::new(&scheduler);

        assert!(handle.submit(node(), TranslateRequest::new(5, 0, 200)).is_ok());
        assert_eq!(scheduler.lock().unwrap().animation_count(), 1);

        drop(scheduler);
        assert_eq!(
            handle.submit(node(), TranslateRequest::new(5, 0, 200)),
            Err(AnimationError::SchedulerDropped)
        );
        assert_eq!(
            SchedulerHandle::detached().submit(node(), TranslateRequest::new(5, 0, 200)),
            Err(AnimationError::SchedulerDropped)
        );
    }
}
