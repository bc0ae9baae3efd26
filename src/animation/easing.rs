/// Easing functions for smooth animations.
///
/// Every variant is a monotonic remap of a normalized time fraction with
/// `apply(0.0) == 0.0` and `apply(1.0) == 1.0`. Custom curves must honor the
/// same contract or the blending math loses its no-overshoot guarantee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    Linear,
    /// Cubic ease in: slow start, fast end
    EaseIn,
    /// Cubic ease out: fast start, slow end
    EaseOut,
    /// Cubic ease in/out: slow start and end, fast middle
    EaseInOut,
    /// Smooth step (3t² - 2t³), the default ease-in/ease-out
    Smooth,
    /// Ultra smooth step (6t⁵ - 15t⁴ + 10t³), flatter at both ends
    UltraSmooth,
    /// User-supplied remap; must be monotonic with f(0)=0 and f(1)=1
    Custom(fn(f64) -> f64),
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 to 1.0)
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => t * t * t,
            EasingFunction::EaseOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            EasingFunction::Smooth => t * t * (3.0 - 2.0 * t),
            EasingFunction::UltraSmooth => t * t * t * (t * (t * 6.0 - 15.0) + 10.0),
            EasingFunction::Custom(f) => f(t).clamp(0.0, 1.0),
        }
    }
}

impl Default for EasingFunction {
    fn default() -> Self {
        EasingFunction::Smooth
    }
}
