//! # Posetween
//!
//! A pose-transition blending engine for real-time 3D applications.
//!
//! This library smoothly moves a 3D pose (position + orientation) toward a
//! moving target across multiple frames. When the target changes again before
//! the previous transition has finished, overlapping transition segments are
//! queued and cross-faded, producing continuous, pop-free motion even under
//! continuous retargeting (e.g., a hand-tracked object being picked up and
//! immediately re-aimed).

pub mod animation;
pub mod core;
pub mod prelude;

// Re-export public API
pub use crate::animation::{
    curve::ProgressCurve, easing::EasingFunction, engine::TweenEngine,
};

pub use crate::core::{
    clock::{Clock, ManualClock, SystemClock},
    config::TweenConfig,
    pose::Pose,
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, TweenError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum TweenError {
    #[error("Invalid pose: {0}")]
    InvalidPose(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Error type alias for convenience
pub type Error = TweenError;
