//! Scripted stand-in for a human player
//!
//! Produces the same two-branch action codes a trained policy would: head
//! for the nearest fish while empty, head for the baby while full. Unlike a
//! policy it reads the arena directly instead of the observation vector,
//! since fish positions are not part of the observation.

use glam::Vec3;

use crate::action::{Action, Turn};
use crate::env::PenguinEnv;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeuristicPolicy {
    /// Heading error, in degrees, tolerated without turning
    pub dead_zone: f32,
    /// Heading error, in degrees, beyond which the agent stops to turn
    pub throttle_cone: f32,
}

impl Default for HeuristicPolicy {
    fn default() -> Self {
        Self {
            dead_zone: 4.0,
            throttle_cone: 30.0,
        }
    }
}

impl HeuristicPolicy {
    /// Action for the current state of `env`.
    #[must_use]
    pub fn action_for(&self, env: &PenguinEnv) -> Action {
        match self.target(env) {
            Some(target) => self.steer(env, target),
            None => Action::IDLE,
        }
    }

    fn target(&self, env: &PenguinEnv) -> Option<Vec3> {
        let agent = env.agent();
        if agent.is_full() {
            return Some(env.arena().baby().position);
        }
        let position = agent.transform().position;
        env.arena()
            .fish()
            .map(|fish| fish.position())
            .min_by(|a, b| a.distance_squared(position).total_cmp(&b.distance_squared(position)))
    }

    fn steer(&self, env: &PenguinEnv, target: Vec3) -> Action {
        let agent = env.agent();
        let offset = agent.flat_offset_to(target);
        if offset.length_squared() < f32::EPSILON {
            return Action::IDLE;
        }

        let desired = offset.x.atan2(offset.z).to_degrees();
        let error = wrap_degrees(desired - agent.transform().yaw_degrees());

        let turn = if error > self.dead_zone {
            Turn::Right
        } else if error < -self.dead_zone {
            Turn::Left
        } else {
            Turn::Straight
        };
        let throttle = if error.abs() <= self.throttle_cone { 1.0 } else { 0.0 };
        Action::new(throttle, turn)
    }
}

/// Wrap an angle into `(-180, 180]`.
fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}
