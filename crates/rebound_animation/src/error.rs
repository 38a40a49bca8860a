//! Animation error types

use thiserror::Error;

/// Errors raised when handing an animation to a scheduler
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    /// The scheduler behind a handle has been dropped
    #[error("animation scheduler is no longer alive")]
    SchedulerDropped,

    /// The scheduler lock was poisoned by a panicking frame loop
    #[error("animation scheduler lock poisoned")]
    SchedulerPoisoned,

    /// Animations must run for at least one millisecond
    #[error("invalid animation duration: {0} ms")]
    InvalidDuration(u32),
}

/// Result type for animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;
