//! Per-segment timing: elapsed wall-clock time to eased progress.

use crate::animation::easing::EasingFunction;

/// Maps elapsed time to a bounded, eased progress scalar for one transition
/// segment.
///
/// The current time is always passed in by the caller, so the curve itself
/// never touches a clock and stays trivially testable.
#[derive(Debug, Clone, Copy)]
pub struct ProgressCurve {
    animation_length: f64,
    start_time: f64,
    easing: EasingFunction,
}

impl ProgressCurve {
    /// Create a curve for a segment of the given duration in seconds.
    pub fn new(animation_length: f64, easing: EasingFunction) -> Self {
        Self {
            animation_length,
            start_time: 0.0,
            easing,
        }
    }

    /// Record `now` as the elapsed-time baseline.
    pub fn start(&mut self, now: f64) {
        self.start_time = now;
    }

    /// Eased fraction of the duration elapsed at `now`, clamped to [0, 1].
    pub fn progress(&self, now: f64) -> f64 {
        self.progress_in(now - self.start_time)
    }

    /// What [`progress`](Self::progress) would read `dt` seconds after
    /// [`start`](Self::start), without consulting any clock. Used for the
    /// look-ahead math when a new segment is spliced onto a running one.
    ///
    /// A non-positive duration reads as already complete, which also avoids
    /// the division by zero.
    pub fn progress_in(&self, dt: f64) -> f64 {
        if self.animation_length <= 0.0 {
            return 1.0;
        }
        self.easing.apply((dt / self.animation_length).clamp(0.0, 1.0))
    }

    /// Raw elapsed time in seconds since [`start`](Self::start), unclamped
    /// and un-eased. Feeds the overlap-window math.
    pub fn progress_time(&self, now: f64) -> f64 {
        now - self.start_time
    }

    /// The segment duration this curve was built with, in seconds.
    pub fn animation_length(&self) -> f64 {
        self.animation_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_progress() {
        let mut curve = ProgressCurve::new(2.0, EasingFunction::Linear);
        curve.start(10.0);
        assert_eq!(curve.progress(10.0), 0.0);
        assert_eq!(curve.progress(11.0), 0.5);
        assert_eq!(curve.progress(12.0), 1.0);
        // Clamped past the end
        assert_eq!(curve.progress(15.0), 1.0);
    }

    #[test]
    fn test_zero_length_is_complete() {
        let mut curve = ProgressCurve::new(0.0, EasingFunction::Smooth);
        curve.start(5.0);
        assert_eq!(curve.progress(5.0), 1.0);
        assert_eq!(curve.progress_in(0.0), 1.0);
    }

    #[test]
    fn test_progress_in_is_pure() {
        let mut curve = ProgressCurve::new(1.0, EasingFunction::Linear);
        curve.start(0.0);
        let before = curve.progress(0.25);
        assert_eq!(curve.progress_in(0.75), 0.75);
        // Look-ahead must not move the live reading
        assert_eq!(curve.progress(0.25), before);
    }

    #[test]
    fn test_progress_time_unclamped() {
        let mut curve = ProgressCurve::new(1.0, EasingFunction::Linear);
        curve.start(1.0);
        assert_eq!(curve.progress_time(4.0), 3.0);
    }

    #[test]
    fn test_eased_progress() {
        let mut curve = ProgressCurve::new(1.0, EasingFunction::Smooth);
        curve.start(0.0);
        // Smoothstep lags linear time in the first half
        assert!(curve.progress(0.25) < 0.25);
        assert!((curve.progress(0.5) - 0.5).abs() < 1e-12);
    }
}
