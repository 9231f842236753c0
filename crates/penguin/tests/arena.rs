use glam::Vec3;
use penguin::{Arena, FishConfig, ScenarioConfig};
use physics::Transform;

fn flat_distance(a: Vec3, b: Vec3) -> f32 {
    Vec3::new(a.x - b.x, 0.0, a.z - b.z).length()
}

/// Fish positions in handle order.
fn positions(arena: &Arena) -> Vec<Vec3> {
    arena
        .fish_ids()
        .iter()
        .map(|id| arena.get_fish(*id).unwrap().position())
        .collect()
}

#[test]
fn reset_places_everything_in_its_region() {
    let config = ScenarioConfig::default();
    let mut arena = Arena::new(&config);
    let mut agent = Transform::IDENTITY;

    for _ in 0..50 {
        arena.reset_episode(&mut agent);

        assert_eq!(arena.fish_remaining(), config.fish.count);
        assert!((agent.position.y - config.spawn_height).abs() < 1e-6);
        assert!(flat_distance(agent.position, arena.center()) <= 9.0 + 1e-4);

        let baby = arena.baby();
        let baby_radius = flat_distance(baby.position, arena.center());
        assert!((4.0 - 1e-4..=9.0 + 1e-4).contains(&baby_radius));
        // Baby sits in the front wedge and faces back toward the center.
        assert!(baby.position.z > 0.0);
        assert!((baby.forward() - Vec3::NEG_Z).length() < 1e-5);

        for fish in arena.fish() {
            let radius = flat_distance(fish.position(), arena.center());
            assert!((2.0 - 1e-4..=13.0 + 1e-4).contains(&radius));
            assert!(fish.position().z < 0.0);
            assert_eq!(fish.wanderer().speed(), config.fish.speed);
        }
    }
}

#[test]
fn reset_replaces_the_whole_school() {
    let config = ScenarioConfig::default();
    let mut arena = Arena::new(&config);
    let mut agent = Transform::IDENTITY;

    arena.reset_episode(&mut agent);
    let first = arena.fish_ids();
    arena.remove_fish(first[0]);
    arena.reset_episode(&mut agent);
    let second = arena.fish_ids();

    assert_eq!(second.len(), config.fish.count);
    assert!(first.iter().all(|id| !second.contains(id)), "handles were reused");
    let newest_before = first.last().unwrap().raw();
    assert!(second.iter().all(|id| id.raw() > newest_before));
}

#[test]
fn remove_fish_is_idempotent() {
    let config = ScenarioConfig::default();
    let mut arena = Arena::new(&config);
    let mut agent = Transform::IDENTITY;
    arena.reset_episode(&mut agent);
    let id = arena.fish_ids()[2];

    assert!(arena.remove_fish(id));
    assert_eq!(arena.fish_remaining(), 3);
    assert!(!arena.remove_fish(id));
    assert_eq!(arena.fish_remaining(), 3);
    assert!(arena.get_fish(id).is_none());
    assert!(arena.fish().all(|fish| fish.id() != id));
}

#[test]
fn tick_moves_wandering_fish_and_advances_clock() {
    let config = ScenarioConfig::default();
    let mut arena = Arena::new(&config);
    let mut agent = Transform::IDENTITY;
    arena.reset_episode(&mut agent);

    let start = positions(&arena);
    for _ in 0..50 {
        arena.tick(config.dt);
    }
    let end = positions(&arena);

    assert!((arena.elapsed() - 50.0 * f64::from(config.dt)).abs() < 1e-9);
    assert!(start.iter().zip(&end).all(|(a, b)| a != b));
}

#[test]
fn still_fish_stay_put() {
    let config = ScenarioConfig::from_path("tests/data/scenario.json").unwrap();
    let mut arena = Arena::new(&config);
    let mut agent = Transform::IDENTITY;
    arena.reset_episode(&mut agent);
    assert_eq!(arena.fish_remaining(), 6);

    let before = positions(&arena);
    for _ in 0..100 {
        arena.tick(config.dt);
    }
    let after = positions(&arena);
    assert_eq!(before, after);
}

#[test]
fn same_seed_same_layout() {
    let config = ScenarioConfig {
        seed: 31,
        ..ScenarioConfig::default()
    };
    let mut a = Arena::new(&config);
    let mut b = Arena::new(&config);
    let mut agent_a = Transform::IDENTITY;
    let mut agent_b = Transform::IDENTITY;
    a.reset_episode(&mut agent_a);
    b.reset_episode(&mut agent_b);

    assert_eq!(agent_a, agent_b);
    assert_eq!(a.baby(), b.baby());
    for id in a.fish_ids() {
        assert_eq!(a.get_fish(id).unwrap().transform(), b.get_fish(id).unwrap().transform());
    }
}

#[test]
fn clock_keeps_exact_steps_over_a_long_run() {
    let config = ScenarioConfig {
        fish: FishConfig {
            count: 0,
            ..FishConfig::default()
        },
        ..ScenarioConfig::default()
    };
    let mut arena = Arena::new(&config);
    let mut agent = Transform::IDENTITY;
    arena.reset_episode(&mut agent);
    let dt = f64::from(config.dt);

    let ticks = 5_000_000_u32;
    for _ in 0..ticks {
        arena.tick(config.dt);
    }
    let expected = f64::from(ticks) * dt;
    assert!((arena.elapsed() - expected).abs() < 1e-4, "{} vs {expected}", arena.elapsed());

    let before = arena.elapsed();
    arena.tick(config.dt);
    assert!((arena.elapsed() - before - dt).abs() < 1e-9);

    arena.reset_episode(&mut agent);
    assert_eq!(arena.elapsed(), 0.0);
}

#[test]
fn offset_center_moves_every_placement() {
    let config = ScenarioConfig::default();
    let center = Vec3::new(40.0, 0.0, -25.0);
    let mut arena = Arena::with_center(&config, center);
    let mut agent = Transform::IDENTITY;

    for _ in 0..20 {
        arena.reset_episode(&mut agent);
        assert_eq!(arena.center(), center);
        assert!(flat_distance(agent.position, center) <= 9.0 + 1e-4);

        let baby = arena.baby().position;
        let baby_radius = flat_distance(baby, center);
        assert!((4.0 - 1e-4..=9.0 + 1e-4).contains(&baby_radius));
        assert!(baby.z > center.z);

        for fish in arena.fish() {
            let radius = flat_distance(fish.position(), center);
            assert!((2.0 - 1e-4..=13.0 + 1e-4).contains(&radius));
            assert!(fish.position().z < center.z);
        }
    }

    for _ in 0..500 {
        arena.tick(config.dt);
        for fish in arena.fish() {
            let target = fish.wanderer().target_position();
            let radius = flat_distance(target, center);
            assert!((2.0 - 1e-4..=13.0 + 1e-4).contains(&radius));
            assert!(target.z < center.z);
        }
    }
}
