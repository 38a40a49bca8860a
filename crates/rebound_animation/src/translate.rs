//! Translate animations
//!
//! A translate animation only moves what is drawn. The node's layout frame is
//! untouched, so hit testing keeps using whatever frame the host holds.

use crate::easing::Easing;

/// Request to slide a node's drawn position from one top edge to another
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TranslateRequest {
    /// Top edge the content is drawn at when the animation starts
    pub from_top: i32,
    /// Top edge the content settles at
    pub to_top: i32,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl TranslateRequest {
    pub fn new(from_top: i32, to_top: i32, duration_ms: u32) -> Self {
        Self {
            from_top,
            to_top,
            duration_ms,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Vertical distance covered by the animation
    pub fn distance(&self) -> i32 {
        self.to_top.saturating_sub(self.from_top)
    }
}

/// A fixed-duration interpolation between two vertical positions
#[derive(Clone, Debug)]
pub struct TranslateAnimation {
    from: f32,
    to: f32,
    duration_ms: u32,
    easing: Easing,
    current_time: f32,
    playing: bool,
}

impl TranslateAnimation {
    pub fn new(from: f32, to: f32, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing: Easing::default(),
            current_time: 0.0,
            playing: false,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn start(&mut self) {
        self.current_time = 0.0;
        self.playing = self.duration_ms > 0;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.current_time / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Current interpolated position
    pub fn value(&self) -> f32 {
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    /// Advance the animation by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        self.current_time += dt_ms;

        if self.current_time >= self.duration_ms as f32 {
            self.current_time = self.duration_ms as f32;
            self.playing = false;
        }
    }
}

impl From<TranslateRequest> for TranslateAnimation {
    fn from(request: TranslateRequest) -> Self {
        TranslateAnimation::new(
            request.from_top as f32,
            request.to_top as f32,
            request.duration_ms,
        )
        .with_easing(request.easing)
    }
}
