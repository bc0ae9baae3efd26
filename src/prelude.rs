//! Prelude module for common posetween types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use posetween::prelude::*;`

pub use crate::animation::{
    curve::ProgressCurve, easing::EasingFunction, engine::TweenEngine,
};

pub use crate::core::{
    clock::{Clock, ManualClock, SystemClock},
    config::TweenConfig,
    pose::{Pose, POSITION_EPSILON, ROTATION_EPSILON},
};

pub use crate::{Result, TweenError};
