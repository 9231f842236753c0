//! # Fish
//!
//! Each fish carries a [`Wanderer`]: it repeatedly picks a random destination
//! in the wander region and a randomized speed, swims straight at it, and
//! re-plans the moment it arrives. A fish never overshoots its destination
//! and never idles.

use std::fmt;

use fastrand::Rng;
use glam::Vec3;
use physics::{random_range, Region, Transform};

/// Lower bound of the per-leg speed multiplier.
pub const SPEED_JITTER_MIN: f32 = 0.5;
/// Upper bound (exclusive) of the per-leg speed multiplier.
pub const SPEED_JITTER_MAX: f32 = 1.5;

/// Stable handle for a fish. Handles are never reused within an arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FishId(u32);

impl FishId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fish#{}", self.0)
    }
}

/// Periodic-retarget motion for one fish.
#[derive(Debug)]
pub struct Wanderer {
    speed: f32,
    randomized_speed: f32,
    next_action_time: f64,
    target_position: Vec3,
    rng: Rng,
}

impl Wanderer {
    /// A wanderer that will pick its first destination on the next update.
    #[must_use]
    pub fn new(speed: f32, rng: Rng) -> Self {
        Self {
            speed,
            randomized_speed: 0.0,
            next_action_time: -1.0,
            target_position: Vec3::ZERO,
            rng,
        }
    }

    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[must_use]
    pub fn randomized_speed(&self) -> f32 {
        self.randomized_speed
    }

    /// Episode time, in seconds, at which the next destination is drawn.
    #[must_use]
    pub fn next_action_time(&self) -> f64 {
        self.next_action_time
    }

    #[must_use]
    pub fn target_position(&self) -> Vec3 {
        self.target_position
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.speed > 0.0
    }

    /// Advance one tick starting at time `now`.
    ///
    /// Destinations are drawn from `region` around `center`.
    pub fn update(
        &mut self,
        transform: &mut Transform,
        now: f64,
        dt: f32,
        center: Vec3,
        region: &Region,
    ) {
        if !self.is_enabled() {
            return;
        }

        if now >= self.next_action_time {
            self.retarget(transform, now, center, region);
        } else {
            self.swim(transform, now, dt);
        }
    }

    fn retarget(&mut self, transform: &mut Transform, now: f64, center: Vec3, region: &Region) {
        self.randomized_speed =
            self.speed * random_range(&mut self.rng, SPEED_JITTER_MIN, SPEED_JITTER_MAX);
        self.target_position = region.sample(&mut self.rng, center);
        transform.look_at(self.target_position);

        let distance = transform.position.distance(self.target_position);
        self.next_action_time = now + f64::from(distance / self.randomized_speed);
    }

    fn swim(&mut self, transform: &mut Transform, now: f64, dt: f32) {
        let step = transform.forward() * self.randomized_speed * dt;
        if step.length() <= transform.position.distance(self.target_position) {
            transform.translate(step);
        } else {
            // Arrived; re-plan on the next tick.
            transform.position = self.target_position;
            self.next_action_time = now;
        }
    }
}

/// A live fish in the arena
#[derive(Debug)]
pub struct Fish {
    id: FishId,
    transform: Transform,
    wanderer: Wanderer,
}

impl Fish {
    #[must_use]
    pub fn new(id: FishId, transform: Transform, speed: f32, rng: Rng) -> Self {
        Self {
            id,
            transform,
            wanderer: Wanderer::new(speed, rng),
        }
    }

    #[must_use]
    pub fn id(&self) -> FishId {
        self.id
    }

    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    #[must_use]
    pub fn wanderer(&self) -> &Wanderer {
        &self.wanderer
    }

    pub fn update(&mut self, now: f64, dt: f32, center: Vec3, region: &Region) {
        self.wanderer.update(&mut self.transform, now, dt, center, region);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WANDER: Region = Region::new(100.0, 260.0, 2.0, 13.0);

    fn spawn(speed: f32) -> Fish {
        Fish::new(
            FishId::new(0),
            Transform::from_yaw(Vec3::new(0.0, 0.5, -6.0), 30.0),
            speed,
            Rng::with_seed(17),
        )
    }

    #[test]
    fn first_update_retargets_without_moving() {
        let mut fish = spawn(0.5);
        let start = fish.position();
        fish.update(0.0, 0.02, Vec3::ZERO, &WANDER);

        let wanderer = fish.wanderer();
        assert_eq!(fish.position(), start);
        assert!(wanderer.randomized_speed() >= 0.25 && wanderer.randomized_speed() <= 0.75);
        let expected = start.distance(wanderer.target_position()) / wanderer.randomized_speed();
        assert!((wanderer.next_action_time() - f64::from(expected)).abs() < 1e-4);

        let heading = (wanderer.target_position() - start).normalize();
        assert!(fish.transform().forward().dot(heading) > 0.9999);
    }

    #[test]
    fn disabled_fish_never_moves() {
        for speed in [0.0, -1.0] {
            let mut fish = spawn(speed);
            let start = *fish.transform();
            for i in 0..100 {
                fish.update(f64::from(i) * 0.02, 0.02, Vec3::ZERO, &WANDER);
            }
            assert_eq!(*fish.transform(), start);
            assert!(!fish.wanderer().is_enabled());
        }
    }

    #[test]
    fn moving_fish_closes_distance() {
        let mut fish = spawn(0.5);
        fish.update(0.0, 0.02, Vec3::ZERO, &WANDER);
        let target = fish.wanderer().target_position();
        let before = fish.position().distance(target);
        fish.update(0.02, 0.02, Vec3::ZERO, &WANDER);
        let after = fish.position().distance(target);
        assert!(after < before);
        assert!((before - after - fish.wanderer().randomized_speed() * 0.02).abs() < 1e-4);
    }

    #[test]
    fn fish_id_display() {
        assert_eq!(FishId::new(12).to_string(), "fish#12");
    }
}
