//! Replay a gesture script through a simulated overscroll view

use std::fmt;

use anyhow::{Context, Result};
use rebound_animation::AnimationScheduler;
use rebound_core::PointerAction;
use rebound_scroll::sim::SimulatedScrollView;
use rebound_scroll::{OverScrollView, OverscrollConfig, OverscrollPhase, ScrollHost};

use crate::script::Script;

/// State of the view right after one event was handled
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub index: usize,
    pub action: PointerAction,
    pub y: f32,
    pub scroll_y: i32,
    pub phase: OverscrollPhase,
    /// Layout top of the content
    pub top: Option<i32>,
    /// Drawn top of the content while a rebound animation plays
    pub visual_top: Option<f32>,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3}  {:<14} y={:<8.1} scroll={:<6} {:<10} top=",
            self.index,
            format!("{:?}", self.action),
            self.y,
            self.scroll_y,
            format!("{:?}", self.phase),
        )?;
        match self.top {
            Some(top) => write!(f, "{top}")?,
            None => write!(f, "-")?,
        }
        if let Some(visual) = self.visual_top {
            write!(f, "  drawn={visual:.1}")?;
        }
        Ok(())
    }
}

/// Run every event of `script` and collect the resulting states
pub fn replay(script: &Script, config: OverscrollConfig) -> Result<Vec<Step>> {
    let mut host = SimulatedScrollView::new(script.height);
    let content = script
        .child
        .as_ref()
        .map(|child| host.add_child(child.frame, child.measured_height()));
    host.set_scroll_y(script.scroll_y);

    let mut view = OverScrollView::with_config(host, AnimationScheduler::new(), config)
        .context("Invalid overscroll configuration")?;
    view.on_finish_inflate();

    let mut steps = Vec::with_capacity(script.events.len());
    for (index, scripted) in script.events.iter().enumerate() {
        view.animator_mut().tick_by(script.frame_ms);

        let timestamp = (index as f32 * script.frame_ms) as u64;
        let event = scripted.to_pointer_event(timestamp);
        view.on_touch_event(&event);

        steps.push(Step {
            index,
            action: event.action,
            y: event.y,
            scroll_y: view.host().scroll_y(),
            phase: view.controller().phase(),
            top: content.and_then(|node| view.host().frame(node)).map(|f| f.top),
            visual_top: content.and_then(|node| view.animator().visual_top(node)),
        });
    }

    tracing::debug!(events = steps.len(), "replay finished");
    Ok(steps)
}
