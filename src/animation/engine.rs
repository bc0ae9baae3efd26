//! The pose-transition blending engine.
//!
//! A [`TweenEngine`] owns an ordered queue of transition segments. Each tick
//! advances every segment toward its own target, then cross-fades the
//! segments into one output pose with a decaying multiplier, newest first.
//! Retargeting an in-flight transition appends a segment instead of
//! restarting, which is what keeps the motion pop-free.

use log::{debug, trace};

use crate::animation::curve::ProgressCurve;
use crate::animation::easing::EasingFunction;
use crate::core::clock::{Clock, SystemClock};
use crate::core::config::TweenConfig;
use crate::core::pose::Pose;
use crate::{Result, TweenError};

/// One queued transition: its timing curve, its own locally interpolated
/// pose, and the pose it is moving toward.
///
/// Only the newest segment in the queue may have its `target` rewritten;
/// older segments are frozen once superseded.
#[derive(Debug, Clone, Copy)]
struct Segment {
    curve: ProgressCurve,
    /// Eased progress recorded at the end of the previous tick, in [0, 1],
    /// monotonically non-decreasing.
    prev_progress: f64,
    current: Pose,
    target: Pose,
}

impl Segment {
    /// A zero-duration segment already sitting at `pose`. Seeds the queue at
    /// construction and after a snap.
    fn completed(pose: Pose, now: f64) -> Self {
        let mut curve = ProgressCurve::new(0.0, EasingFunction::Linear);
        curve.start(now);
        Self {
            curve,
            prev_progress: 1.0,
            current: pose,
            target: pose,
        }
    }
}

/// Smoothly moves a pose toward a moving target across frames.
///
/// Call [`tick`](Self::tick) once per simulation step, then read
/// [`pose`](Self::pose). Between ticks, [`move_to`](Self::move_to) requests a
/// new destination, [`update_target`](Self::update_target) tracks a
/// continuously moving one, and [`stop_and_set_pose`](Self::stop_and_set_pose)
/// jumps instantly.
///
/// ```
/// use nalgebra::Vector3;
/// use posetween::{EasingFunction, ManualClock, Pose, TweenConfig, TweenEngine};
///
/// let clock = ManualClock::new();
/// let config = TweenConfig::new()
///     .with_transition_duration(1.0)
///     .with_easing(EasingFunction::Linear);
/// let mut engine =
///     TweenEngine::with_clock(Pose::identity(), config, Box::new(clock.clone())).unwrap();
///
/// engine.move_to(Pose::from_position(Vector3::new(10.0, 0.0, 0.0))).unwrap();
/// clock.advance(0.5);
/// engine.tick();
/// assert!((engine.pose().position.x - 5.0).abs() < 1e-9);
/// ```
pub struct TweenEngine {
    /// Ordered oldest-first; never empty.
    segments: Vec<Segment>,
    pose: Pose,
    start_pose: Pose,
    config: TweenConfig,
    clock: Box<dyn Clock>,
}

impl TweenEngine {
    /// Create an engine at `initial_pose`, driven by wall-clock time.
    pub fn new(initial_pose: Pose, config: TweenConfig) -> Result<Self> {
        Self::with_clock(initial_pose, config, Box::new(SystemClock::new()))
    }

    /// Create an engine with an injected clock, for deterministic stepping.
    pub fn with_clock(
        initial_pose: Pose,
        config: TweenConfig,
        clock: Box<dyn Clock>,
    ) -> Result<Self> {
        validate_pose(&initial_pose)?;
        config.validate()?;
        let now = clock.now();
        Ok(Self {
            segments: vec![Segment::completed(initial_pose, now)],
            pose: initial_pose,
            start_pose: initial_pose,
            config,
            clock,
        })
    }

    /// Current blended output pose. Always defined.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// The pose captured at construction time.
    pub fn start_pose(&self) -> Pose {
        self.start_pose
    }

    /// The engine's configuration.
    pub fn config(&self) -> &TweenConfig {
        &self.config
    }

    /// True iff every segment has completed and the output is stable.
    pub fn stopped(&self) -> bool {
        self.segments.iter().all(|s| s.prev_progress >= 1.0)
    }

    /// Number of live segments in the queue. Diagnostic; bounded in practice
    /// by the overlap window versus the tick rate.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Request a transition to `target` over the configured duration.
    ///
    /// Retargeting mid-flight appends an overlapping segment rather than
    /// restarting. A target that already matches the current output snaps
    /// via [`stop_and_set_pose`](Self::stop_and_set_pose) instead of
    /// animating.
    pub fn move_to(&mut self, target: Pose) -> Result<()> {
        validate_pose(&target)?;
        if target.approx_eq(&self.pose) {
            return self.stop_and_set_pose(target);
        }
        debug!(
            "move_to: new segment toward {:?} over {}s",
            target.position, self.config.transition_duration
        );
        self.add_segment(target, self.config.transition_duration);
        Ok(())
    }

    /// Rewrite the destination of the segment currently in flight, without
    /// resetting its progress or spawning a new segment.
    ///
    /// Use this when the destination itself moves every frame (e.g. tracking
    /// an input device); calling [`move_to`](Self::move_to) at that rate
    /// would grow the blend stack without bound.
    pub fn update_target(&mut self, target: Pose) -> Result<()> {
        validate_pose(&target)?;
        // Queue is never empty
        if let Some(last) = self.segments.last_mut() {
            last.target = target;
        }
        Ok(())
    }

    /// Drop every in-flight transition and place the output at `pose`
    /// immediately. The queue is reseeded with a single completed segment.
    pub fn stop_and_set_pose(&mut self, pose: Pose) -> Result<()> {
        validate_pose(&pose)?;
        debug!("stop_and_set_pose: snap to {:?}", pose.position);
        let now = self.clock.now();
        self.segments.clear();
        self.segments.push(Segment::completed(pose, now));
        self.pose = pose;
        Ok(())
    }

    /// Advance the animation by one step and recompute the blended pose.
    pub fn tick(&mut self) {
        let now = self.clock.now();

        // Advance each segment toward its own target. The lerp fraction is
        // re-based each tick against the remaining distance, so repeated
        // partial advances compose without overshoot.
        for segment in &mut self.segments {
            let progress = segment.curve.progress(now);
            if progress >= 1.0 {
                segment.current = segment.target;
                segment.prev_progress = 1.0;
            } else {
                let remaining = 1.0 - segment.prev_progress;
                let frac = if remaining <= f64::EPSILON {
                    1.0
                } else {
                    ((progress - segment.prev_progress) / remaining).max(0.0)
                };
                segment.current = segment.current.lerp(&segment.target, frac);
                // prev_progress stays monotone even if an injected clock is
                // stepped backwards
                segment.prev_progress = segment.prev_progress.max(progress);
            }
        }

        self.pose = self.blend(now);
    }

    /// Cross-fade all live segments into one pose, newest to oldest, and
    /// prune segments whose contribution has fully decayed.
    ///
    /// The newest segment starts with full weight. Each older segment is
    /// mixed in with a running multiplier that shrinks by the next-newer
    /// segment's overlap fraction, giving an exponentially decaying chain.
    /// Once a segment's overlap window has fully elapsed, everything older
    /// than it can no longer matter and is discarded.
    fn blend(&mut self, now: f64) -> Pose {
        let newest = self.segments.len() - 1;
        let mut output = self.segments[newest].current;
        let mut multiplier = 1.0;
        let mut keep_from = 0;

        for i in (0..newest).rev() {
            let overlap = self.overlap_fraction(i + 1, now);
            if overlap >= 1.0 {
                keep_from = i + 1;
                break;
            }
            multiplier *= 1.0 - overlap;
            output = output.lerp(&self.segments[i].current, multiplier);
        }

        if keep_from > 0 {
            trace!("pruning {} fully decayed segment(s)", keep_from);
            self.segments.drain(..keep_from);
        }

        output
    }

    /// Fraction of `segments[index]`'s overlap window that has elapsed,
    /// clamped to [0, 1]. Zero-length segments and a zero overlap window
    /// both read as fully overlapped, which is what makes snaps instant.
    fn overlap_fraction(&self, index: usize, now: f64) -> f64 {
        let segment = &self.segments[index];
        if segment.curve.animation_length() <= 0.0 || self.config.max_overlap_time <= 0.0 {
            return 1.0;
        }
        (segment.curve.progress_time(now) / self.config.max_overlap_time).clamp(0.0, 1.0)
    }

    /// Append a segment toward `target`, choosing a start pose that stays
    /// visually consistent with where the previous segment is headed.
    ///
    /// The last blended output would lag reality, so instead the start is
    /// extrapolated: look ahead by the overlap window (bounded by the new
    /// segment's own duration) on the previous segment's curve and advance
    /// its pose by the remaining fractional distance that implies.
    fn add_segment(&mut self, target: Pose, duration: f64) {
        let now = self.clock.now();

        let start = {
            let prev = self.segments.last().expect("segment queue is never empty");
            if prev.prev_progress >= 1.0 {
                prev.target
            } else {
                let look_ahead = self.config.max_overlap_time.min(duration);
                let progress_in = prev.curve.progress_in(look_ahead);
                let remaining = 1.0 - prev.prev_progress;
                let frac = if remaining <= f64::EPSILON {
                    1.0
                } else {
                    ((progress_in - prev.prev_progress) / remaining).clamp(0.0, 1.0)
                };
                prev.current.lerp(&prev.target, frac)
            }
        };

        let mut curve = ProgressCurve::new(duration, self.config.easing);
        curve.start(now);
        self.segments.push(Segment {
            curve,
            prev_progress: 0.0,
            current: start,
            target,
        });
    }
}

fn validate_pose(pose: &Pose) -> Result<()> {
    if !pose.is_finite() {
        return Err(TweenError::InvalidPose(format!(
            "pose contains non-finite components: position {:?}, rotation {:?}",
            pose.position,
            pose.rotation.coords
        )));
    }
    Ok(())
}
