//! Rebound Animation System
//!
//! Fixed-duration translate animations and the scheduler that plays them.
//!
//! # Features
//!
//! - **Easing**: platform-style interpolators, including accelerate/decelerate
//! - **Translate animations**: cosmetic vertical offsets over a fixed duration
//! - **Fire-and-forget scheduling**: callers submit and move on, the frame loop ticks

pub mod easing;
pub mod error;
pub mod scheduler;
pub mod translate;

pub use easing::Easing;
pub use error::{AnimationError, Result};
pub use scheduler::{AnimationId, AnimationScheduler, SchedulerHandle};
pub use translate::{TranslateAnimation, TranslateRequest};
