use nalgebra::{UnitQuaternion, Vector3};
use posetween::{EasingFunction, ManualClock, Pose, TweenConfig, TweenEngine};

/// Example of driving the tween engine headlessly with a manual clock,
/// the way a grab-follow controller would per simulation step.
fn main() -> posetween::Result<()> {
    env_logger::init();

    println!("Posetween Headless Example");
    println!("==========================");

    let clock = ManualClock::new();
    let config = TweenConfig::new()
        .with_transition_duration(1.0)
        .with_max_overlap_time(0.25)
        .with_easing(EasingFunction::Smooth);

    let mut engine = TweenEngine::with_clock(Pose::identity(), config, Box::new(clock.clone()))?;
    println!("Engine created at {:?}", engine.pose().position);

    // A discrete destination: the object was just selected
    let shelf = Pose::new(
        Vector3::new(2.0, 1.0, 0.0),
        UnitQuaternion::from_euler_angles(0.0, 1.2, 0.0),
    );
    engine.move_to(shelf)?;
    println!("\nMoving toward {:?}", shelf.position);

    let dt = 1.0 / 60.0;
    for step in 1..=90 {
        // Retarget mid-flight: the previous transition keeps blending out
        if step == 20 {
            let hand = Pose::from_position(Vector3::new(0.5, 1.5, -0.8));
            engine.move_to(hand)?;
            println!("  retargeted to {:?} (segments: {})", hand.position, engine.segment_count());
        }

        clock.advance(dt);
        engine.tick();

        if step % 15 == 0 {
            let p = engine.pose().position;
            println!(
                "  t={:>5.2}s  pos=({:+.3}, {:+.3}, {:+.3})  segments={}  stopped={}",
                clock_time(&clock),
                p.x,
                p.y,
                p.z,
                engine.segment_count(),
                engine.stopped()
            );
        }
    }

    // Selection released: force an instantaneous repositioning
    let rest = Pose::from_position(Vector3::new(0.0, 1.0, 0.0));
    engine.stop_and_set_pose(rest)?;
    engine.tick();
    println!("\nSnapped to rest at {:?}", engine.pose().position);
    println!("Stopped: {}", engine.stopped());

    Ok(())
}

fn clock_time(clock: &ManualClock) -> f64 {
    use posetween::Clock;
    clock.now()
}
