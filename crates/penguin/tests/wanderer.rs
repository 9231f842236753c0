use glam::Vec3;
use penguin::Wanderer;
use physics::{Region, Transform};

const WANDER: Region = Region::new(100.0, 260.0, 2.0, 13.0);

fn run_and_check(speed: f32, dt: f32, seed: u64) {
    let mut wanderer = Wanderer::new(speed, fastrand::Rng::with_seed(seed));
    let mut transform = Transform::from_yaw(Vec3::new(0.0, 0.5, -5.0), 0.0);
    let mut now = 0.0_f64;
    let mut legs = 0;

    for _ in 0..20_000 {
        let retargeting = now >= wanderer.next_action_time();
        let target = wanderer.target_position();
        let before = transform.position.distance(target);

        wanderer.update(&mut transform, now, dt, Vec3::ZERO, &WANDER);

        if retargeting {
            legs += 1;
            assert!(wanderer.next_action_time() >= now);
        } else {
            assert_eq!(wanderer.target_position(), target, "target changed mid-leg");
            let after = transform.position.distance(target);
            assert!(after <= before + 1e-4, "moved away: {before} -> {after}");
        }
        now += f64::from(dt);
    }

    assert!(legs > 3, "speed {speed} dt {dt} stalled after {legs} legs");
}

#[test]
fn never_overshoots_and_never_freezes() {
    for (speed, dt, seed) in [(0.5, 0.02, 1), (2.0, 0.1, 2), (8.0, 0.25, 3), (0.5, 0.5, 4)] {
        run_and_check(speed, dt, seed);
    }
}

#[test]
fn arrival_snaps_and_replans_next_tick() {
    let mut wanderer = Wanderer::new(1.0, fastrand::Rng::with_seed(21));
    let mut transform = Transform::from_yaw(Vec3::new(0.0, 0.5, -5.0), 0.0);
    wanderer.update(&mut transform, 0.0, 0.02, Vec3::ZERO, &WANDER);
    let target = wanderer.target_position();

    // A long tick would carry the fish past its target.
    wanderer.update(&mut transform, 0.02, 100.0, Vec3::ZERO, &WANDER);
    assert_eq!(transform.position, target);
    assert_eq!(wanderer.next_action_time(), 0.02);

    wanderer.update(&mut transform, 0.04, 0.02, Vec3::ZERO, &WANDER);
    assert_eq!(transform.position, target, "retarget tick must not move");
    assert_ne!(wanderer.target_position(), target);
    assert!(wanderer.next_action_time() > 0.04);
}

#[test]
fn retarget_sets_arrival_time_from_distance() {
    let mut wanderer = Wanderer::new(1.0, fastrand::Rng::with_seed(99));
    let mut transform = Transform::from_yaw(Vec3::new(0.0, 0.0, -4.0), 90.0);
    wanderer.update(&mut transform, 3.0, 0.02, Vec3::ZERO, &WANDER);

    let distance = transform.position.distance(wanderer.target_position());
    let expected = 3.0 + f64::from(distance / wanderer.randomized_speed());
    assert!((wanderer.next_action_time() - expected).abs() < 1e-4);
    assert!(wanderer.randomized_speed() >= 0.5 && wanderer.randomized_speed() < 1.5 + 1e-6);
}

#[test]
fn targets_stay_in_the_wander_region() {
    let mut wanderer = Wanderer::new(3.0, fastrand::Rng::with_seed(5));
    let mut transform = Transform::from_yaw(Vec3::new(0.0, 0.5, -5.0), 0.0);
    let mut now = 0.0;
    for _ in 0..5_000 {
        wanderer.update(&mut transform, now, 0.1, Vec3::ZERO, &WANDER);
        let target = wanderer.target_position();
        let radius = Vec3::new(target.x, 0.0, target.z).length();
        assert!(radius >= 2.0 - 1e-4 && radius <= 13.0 + 1e-4);
        // The far wedge lies behind the center.
        assert!(target.z < 0.0, "{target:?}");
        now += 0.1;
    }
}

#[test]
fn late_in_a_long_episode_fish_still_replan_only_on_arrival() {
    let mut wanderer = Wanderer::new(0.5, fastrand::Rng::with_seed(8));
    let mut transform = Transform::from_yaw(Vec3::new(0.0, 0.5, -5.0), 0.0);
    let dt = 0.02_f32;
    let mut now = 100_000.0_f64;

    wanderer.update(&mut transform, now, dt, Vec3::ZERO, &WANDER);
    let target = wanderer.target_position();
    let leg_ends = wanderer.next_action_time();
    now += f64::from(dt);

    while now < leg_ends {
        wanderer.update(&mut transform, now, dt, Vec3::ZERO, &WANDER);
        assert_eq!(wanderer.target_position(), target, "replanned at {now}");
        now += f64::from(dt);
    }
    // The fish reaches the destination within a tick of its arrival time.
    assert!(transform.position.distance(target) <= 0.75 * dt + 1e-3);
}
