//! # Penguin Agent
//!
//! The agent turns action vectors into motion, reports what it sees as a
//! fixed 8-value observation, and reacts to contacts: touching a fish while
//! empty eats it, touching the baby while full feeds it. Rewards are emitted
//! as per-tick deltas; summing them is the caller's business.
//!
//! Observation layout:
//!
//! | index | value |
//! |-------|-------|
//! | 0     | 1 when full, else 0 |
//! | 1     | distance to the baby |
//! | 2..5  | unit direction to the baby |
//! | 5..8  | agent forward direction |

use glam::Vec3;
use physics::{Transform, UP};
use tracing::{debug, warn};

use crate::action::Action;
use crate::arena::{Arena, EntityTag};
use crate::config::ScenarioConfig;
use crate::effects::{EffectKind, Effects};
use crate::fish::FishId;

/// Length of the observation vector.
pub const OBSERVATION_SIZE: usize = 8;

/// Reward for eating a fish and for feeding the baby.
pub const FEED_REWARD: f32 = 1.0;

pub struct Agent {
    transform: Transform,
    is_full: bool,
    episode_ended: bool,
    pending_reward: f32,
    move_speed: f32,
    turn_speed: f32,
    effect_lifetime: f32,
}

impl Agent {
    #[must_use]
    pub fn new(config: &ScenarioConfig) -> Self {
        Self {
            transform: Transform::IDENTITY,
            is_full: false,
            episode_ended: false,
            pending_reward: 0.0,
            move_speed: config.agent.move_speed,
            turn_speed: config.agent.turn_speed,
            effect_lifetime: config.effect_lifetime,
        }
    }

    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Direct access for the physics layer (walls, teleports).
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.is_full
    }

    /// Whether the agent has fed the last fish of the episode.
    #[must_use]
    pub fn episode_ended(&self) -> bool {
        self.episode_ended
    }

    /// Reward accumulated since the last call.
    pub fn take_reward(&mut self) -> f32 {
        std::mem::take(&mut self.pending_reward)
    }

    #[must_use]
    pub fn pending_reward(&self) -> f32 {
        self.pending_reward
    }

    /// Begin a new episode: empty stomach, fresh arena.
    pub fn on_episode_begin(&mut self, arena: &mut Arena) {
        self.is_full = false;
        self.episode_ended = false;
        self.pending_reward = 0.0;
        arena.reset_episode(&mut self.transform);
    }

    /// Apply one raw action vector.
    ///
    /// Malformed vectors are logged and treated as idle. With a positive
    /// `max_steps` every call costs `1 / max_steps` reward, whether or not
    /// the action was usable.
    pub fn decide_action(&mut self, action: &[f32], dt: f32, max_steps: u32) {
        match Action::decode(action) {
            Ok(action) => self.apply(action, dt),
            Err(err) => warn!(%err, ?action, "ignoring malformed action"),
        }

        if max_steps > 0 {
            #[allow(clippy::cast_precision_loss)]
            let penalty = -1.0 / max_steps as f32;
            self.pending_reward += penalty;
        }
    }

    /// Move along the current forward direction, then turn.
    pub fn apply(&mut self, action: Action, dt: f32) {
        let forward = self.transform.forward();
        self.transform.translate(forward * action.throttle * self.move_speed * dt);
        self.transform.rotate_yaw(action.turn.direction() * self.turn_speed * dt);
    }

    #[must_use]
    pub fn build_observation(&self, baby: &Transform) -> [f32; OBSERVATION_SIZE] {
        let to_baby = baby.position - self.transform.position;
        let direction = to_baby.normalize_or_zero();
        let forward = self.transform.forward();
        [
            if self.is_full { 1.0 } else { 0.0 },
            to_baby.length(),
            direction.x,
            direction.y,
            direction.z,
            forward.x,
            forward.y,
            forward.z,
        ]
    }

    /// React to touching `other`.
    pub fn on_collision(&mut self, other: EntityTag, arena: &mut Arena, effects: &mut Effects) {
        match other {
            EntityTag::Fish(id) => {
                self.eat_fish(id, arena);
            }
            EntityTag::Baby => {
                self.regurgitate(arena, effects);
            }
            EntityTag::Agent | EntityTag::Other => {}
        }
    }

    /// Eat a fish unless already full. Returns whether the fish was eaten.
    pub fn eat_fish(&mut self, id: FishId, arena: &mut Arena) -> bool {
        if self.is_full {
            return false;
        }
        self.is_full = true;
        arena.remove_fish(id);
        self.pending_reward += FEED_REWARD;
        debug!(%id, remaining = arena.fish_remaining(), "fish eaten");
        true
    }

    /// Feed the baby if carrying a fish. Returns whether the baby was fed.
    ///
    /// Feeding the last fish ends the episode.
    pub fn regurgitate(&mut self, arena: &Arena, effects: &mut Effects) -> bool {
        if !self.is_full {
            return false;
        }
        self.is_full = false;

        let baby = arena.baby().position;
        effects.spawn(EffectKind::RegurgitatedFish, baby, self.effect_lifetime);
        effects.spawn(EffectKind::Heart, baby + UP, self.effect_lifetime);

        self.pending_reward += FEED_REWARD;

        let remaining = arena.fish_remaining();
        debug!(remaining, "baby fed");
        if remaining == 0 {
            self.episode_ended = true;
        }
        true
    }

    /// Horizontal offset from the agent to `target`.
    #[must_use]
    pub fn flat_offset_to(&self, target: Vec3) -> Vec3 {
        let offset = target - self.transform.position;
        Vec3::new(offset.x, 0.0, offset.z)
    }
}
