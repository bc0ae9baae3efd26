pub mod curve;
pub mod easing;
pub mod engine;

// Re-export commonly used types for convenience
pub use curve::ProgressCurve;
pub use easing::EasingFunction;
pub use engine::TweenEngine;
