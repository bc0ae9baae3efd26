//! Behavior under rapid retargeting: frame-to-frame continuity, segment
//! pruning, and in-place target updates.

use nalgebra::Vector3;
use posetween::{EasingFunction, ManualClock, Pose, TweenConfig, TweenEngine};

const DT: f64 = 0.02;
const DURATION: f64 = 1.0;
const OVERLAP: f64 = 0.25;

fn engine_with(clock: &ManualClock, easing: EasingFunction) -> TweenEngine {
    let config = TweenConfig::new()
        .with_transition_duration(DURATION)
        .with_max_overlap_time(OVERLAP)
        .with_easing(easing);
    TweenEngine::with_clock(Pose::identity(), config, Box::new(clock.clone())).unwrap()
}

#[test]
fn test_continuity_under_rapid_retarget() {
    let clock = ManualClock::new();
    let mut engine = engine_with(&clock, EasingFunction::Linear);

    let t1 = Pose::from_position(Vector3::new(10.0, 0.0, 0.0));
    let t2 = Pose::from_position(Vector3::new(0.0, 10.0, 0.0));

    // The farthest any pose in play is from any other is ~14 units. Segment
    // motion tops out at dist/DURATION and the crossfade at dist/OVERLAP, so
    // 100 units/s is a comfortably loose velocity ceiling.
    let max_step = 100.0 * DT;

    engine.move_to(t1).unwrap();
    let mut prev = engine.pose().position;
    for step in 0..80 {
        if step == 15 {
            // Retarget mid-flight, well before the first transition ends
            engine.move_to(t2).unwrap();
        }
        clock.advance(DT);
        engine.tick();
        let pos = engine.pose().position;
        let delta = (pos - prev).norm();
        assert!(
            delta <= max_step,
            "discontinuous jump of {} at step {}",
            delta,
            step
        );
        prev = pos;
    }

    assert!(engine.pose().approx_eq(&t2));
}

#[test]
fn test_segment_count_returns_to_one() {
    let clock = ManualClock::new();
    let mut engine = engine_with(&clock, EasingFunction::Smooth);

    // Burst of rapid retargets, one per tick
    for i in 0..8 {
        let target = Pose::from_position(Vector3::new(i as f64, -(i as f64), 0.5 * i as f64));
        engine.move_to(target).unwrap();
        clock.advance(DT);
        engine.tick();
    }
    assert!(engine.segment_count() > 1);

    // Run well past the overlap window
    let steps = (OVERLAP / DT).ceil() as usize + 2;
    for _ in 0..steps {
        clock.advance(DT);
        engine.tick();
    }
    assert_eq!(engine.segment_count(), 1);
}

#[test]
fn test_update_target_does_not_reset_progress() {
    let clock = ManualClock::new();
    let mut engine_a = engine_with(&clock, EasingFunction::Linear);
    let mut engine_b = engine_with(&clock, EasingFunction::Linear);

    let target = Pose::from_position(Vector3::new(10.0, 0.0, 0.0));
    engine_a.move_to(target).unwrap();
    engine_b.move_to(target).unwrap();

    // Engine A re-announces the same target every tick; engine B never does.
    // If update_target reset progress, A would crawl while B advances.
    for _ in 0..20 {
        clock.advance(DT);
        engine_a.update_target(target).unwrap();
        engine_a.tick();
        engine_b.tick();
    }

    let a = engine_a.pose().position;
    let b = engine_b.pose().position;
    assert!((a - b).norm() < 1e-9, "update_target changed the trajectory: {:?} vs {:?}", a, b);
    assert!(a.x > 3.0, "progress stalled at {}", a.x);
}

#[test]
fn test_update_target_tracks_moving_destination() {
    let clock = ManualClock::new();
    let mut engine = engine_with(&clock, EasingFunction::Smooth);

    engine
        .move_to(Pose::from_position(Vector3::new(1.0, 0.0, 0.0)))
        .unwrap();

    // Destination drifts every tick, as if tracking an input device
    for i in 1..=50 {
        let target = Pose::from_position(Vector3::new(1.0 + 0.1 * i as f64, 0.0, 0.0));
        clock.advance(DT);
        engine.update_target(target).unwrap();
        engine.tick();
    }

    // Tracking must not have grown the blend stack
    assert_eq!(engine.segment_count(), 1);

    // Let the final destination settle
    let final_target = Pose::from_position(Vector3::new(6.0, 0.0, 0.0));
    for _ in 0..60 {
        clock.advance(DT);
        engine.tick();
    }
    assert!(engine.pose().approx_eq(&final_target));
    assert!(engine.stopped());
}

#[test]
fn test_burst_of_retargets_converges_to_last() {
    let clock = ManualClock::new();
    let mut engine = engine_with(&clock, EasingFunction::Smooth);

    let final_target = Pose::from_position(Vector3::new(-3.0, 8.0, 1.0));
    engine
        .move_to(Pose::from_position(Vector3::new(5.0, 0.0, 0.0)))
        .unwrap();
    clock.advance(DT);
    engine.tick();
    engine
        .move_to(Pose::from_position(Vector3::new(0.0, 5.0, 0.0)))
        .unwrap();
    clock.advance(DT);
    engine.tick();
    engine.move_to(final_target).unwrap();

    for _ in 0..120 {
        clock.advance(DT);
        engine.tick();
    }

    assert!(engine.pose().approx_eq(&final_target));
    assert!(engine.stopped());
    assert_eq!(engine.segment_count(), 1);
}
