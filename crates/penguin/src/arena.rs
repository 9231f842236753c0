//! # Arena
//!
//! The arena owns the episode's world: the live fish, the baby, the
//! episode clock and the random source every placement draws from. The
//! agent is not owned here; resets reposition it through the transform it
//! hands in.

use std::collections::HashMap;

use fastrand::Rng;
use glam::Vec3;
use physics::{random_range, Transform, UP};
use tracing::{debug, trace};

use crate::config::ScenarioConfig;
use crate::fish::{Fish, FishId};

/// Role of a body that took part in a contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityTag {
    Agent,
    Baby,
    Fish(FishId),
    /// Walls, props and anything else the agent can bump into.
    Other,
}

pub struct Arena {
    config: ScenarioConfig,
    center: Vec3,
    fish: HashMap<FishId, Fish>,
    next_fish_id: u32,
    baby: Transform,
    elapsed: f64,
    rng: Rng,
}

impl Arena {
    /// An empty arena centered on the origin. Call
    /// [`reset_episode`](Self::reset_episode) to populate it.
    #[must_use]
    pub fn new(config: &ScenarioConfig) -> Self {
        Self::with_center(config, Vec3::ZERO)
    }

    #[must_use]
    pub fn with_center(config: &ScenarioConfig, center: Vec3) -> Self {
        Self {
            config: config.clone(),
            center,
            fish: HashMap::new(),
            next_fish_id: 0,
            baby: Transform::from_yaw(center, config.baby.heading),
            elapsed: 0.0,
            rng: Rng::with_seed(config.seed),
        }
    }

    /// Start a new episode: clear the fish, restart the clock, reposition the
    /// agent and the baby, and spawn a fresh school.
    pub fn reset_episode(&mut self, agent: &mut Transform) {
        self.remove_all_fish();
        self.elapsed = 0.0;
        self.place_agent(agent);
        self.place_baby();
        self.spawn_fish(self.config.fish.count, self.config.fish.speed);
        debug!(
            fish = self.fish.len(),
            agent = ?agent.position,
            baby = ?self.baby.position,
            "arena reset"
        );
    }

    /// Remove a fish and destroy it. Returns `false` when the handle is not
    /// tracked, which is not an error.
    pub fn remove_fish(&mut self, id: FishId) -> bool {
        let removed = self.fish.remove(&id).is_some();
        if removed {
            trace!(%id, remaining = self.fish.len(), "fish removed");
        }
        removed
    }

    #[must_use]
    pub fn fish_remaining(&self) -> usize {
        self.fish.len()
    }

    /// Live fish, in no particular order.
    pub fn fish(&self) -> impl Iterator<Item = &Fish> {
        self.fish.values()
    }

    /// Live fish handles in ascending order.
    #[must_use]
    pub fn fish_ids(&self) -> Vec<FishId> {
        let mut ids: Vec<FishId> = self.fish.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn get_fish(&self, id: FishId) -> Option<&Fish> {
        self.fish.get(&id)
    }

    #[must_use]
    pub fn contains_fish(&self, id: FishId) -> bool {
        self.fish.contains_key(&id)
    }

    #[must_use]
    pub fn baby(&self) -> &Transform {
        &self.baby
    }

    pub fn set_baby(&mut self, baby: Transform) {
        self.baby = baby;
    }

    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Simulated seconds since the episode began.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Advance every wanderer by `dt`, then the clock.
    pub fn tick(&mut self, dt: f32) {
        let region = self.config.fish.wander;
        for fish in self.fish.values_mut() {
            fish.update(self.elapsed, dt, self.center, &region);
        }
        self.elapsed += f64::from(dt);
    }

    /// Add one fish at `transform`. Each fish gets its own random stream,
    /// split off the arena's, so update order never affects the outcome.
    pub fn spawn_fish_at(&mut self, transform: Transform, speed: f32) -> FishId {
        let id = FishId::new(self.next_fish_id);
        self.next_fish_id += 1;
        let rng = Rng::with_seed(self.rng.u64(..));
        self.fish.insert(id, Fish::new(id, transform, speed, rng));
        id
    }

    fn remove_all_fish(&mut self) {
        self.fish.clear();
    }

    fn lift(&self) -> Vec3 {
        UP * self.config.spawn_height
    }

    fn place_agent(&mut self, agent: &mut Transform) {
        let position = self.config.agent.placement.sample(&mut self.rng, self.center) + self.lift();
        let heading = random_range(&mut self.rng, 0.0, 360.0);
        *agent = Transform::from_yaw(position, heading);
    }

    fn place_baby(&mut self) {
        let position = self.config.baby.placement.sample(&mut self.rng, self.center) + self.lift();
        self.baby = Transform::from_yaw(position, self.config.baby.heading);
    }

    fn spawn_fish(&mut self, count: usize, speed: f32) {
        for _ in 0..count {
            let position = self.config.fish.spawn.sample(&mut self.rng, self.center) + self.lift();
            let heading = random_range(&mut self.rng, 0.0, 360.0);
            self.spawn_fish_at(Transform::from_yaw(position, heading), speed);
        }
    }
}
