//! Configuration for transition timing and blending behavior.

use crate::animation::easing::EasingFunction;
use crate::{Result, TweenError};

/// Tuning parameters for a [`TweenEngine`](crate::TweenEngine).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenConfig {
    /// Duration of one transition segment, in seconds. Longer means slower
    /// catch-up to a new target. Zero makes every transition an instant snap.
    pub transition_duration: f64,

    /// How long an old segment's influence persists in the blend after a
    /// newer segment starts, in seconds. Also bounds how far ahead the engine
    /// looks when computing a continuity-preserving start pose. Zero disables
    /// cross-fading entirely: every retarget becomes an instant cut to the
    /// new segment's pose. That is a valid configuration, not an error.
    pub max_overlap_time: f64,

    /// Remap from linear time fraction to eased progress.
    pub easing: EasingFunction,
}

impl TweenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the transition duration in seconds
    pub fn with_transition_duration(mut self, seconds: f64) -> Self {
        self.transition_duration = seconds;
        self
    }

    /// Set the overlap window in seconds
    pub fn with_max_overlap_time(mut self, seconds: f64) -> Self {
        self.max_overlap_time = seconds;
        self
    }

    /// Set the easing function
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Validates the configuration.
    ///
    /// Durations must be finite and non-negative; zero is legal for both
    /// fields and means "instantaneous".
    pub fn validate(&self) -> Result<()> {
        if !self.transition_duration.is_finite() || self.transition_duration < 0.0 {
            return Err(TweenError::InvalidConfig(format!(
                "transition_duration must be finite and >= 0, got {}",
                self.transition_duration
            )));
        }
        if !self.max_overlap_time.is_finite() || self.max_overlap_time < 0.0 {
            return Err(TweenError::InvalidConfig(format!(
                "max_overlap_time must be finite and >= 0, got {}",
                self.max_overlap_time
            )));
        }
        Ok(())
    }
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            transition_duration: 1.0,
            max_overlap_time: 0.25,
            easing: EasingFunction::Smooth,
        }
    }
}
