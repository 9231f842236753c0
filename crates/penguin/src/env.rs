//! # Penguin Environment
//!
//! [`PenguinEnv`] owns one arena and one agent and runs the fixed tick:
//!
//! 1. the agent applies the decoded action (and pays the step penalty),
//! 2. every fish wanderer advances,
//! 3. the agent is held inside the arena wall,
//! 4. feeding effects age,
//! 5. overlapping bodies are reported to the agent as contacts,
//! 6. the step budget is checked.
//!
//! The environment implements [`rl::Env`], so any roll-out loop written
//! against that trait can drive it.

use glam::Vec3;
use physics::{detect_overlaps, Sphere};
use rl::Env;
use tracing::{debug, trace, warn};

use crate::action::ACTION_SIZE;
use crate::agent::{Agent, OBSERVATION_SIZE};
use crate::arena::{Arena, EntityTag};
use crate::config::ScenarioConfig;
use crate::effects::Effects;
use crate::error::ScenarioError;

/// Why an episode ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Termination {
    /// Every fish was eaten and fed to the baby.
    Completed,
    /// The step budget ran out first.
    StepBudget,
}

pub struct PenguinEnv {
    config: ScenarioConfig,
    arena: Arena,
    agent: Agent,
    effects: Effects,
    steps: u32,
    termination: Option<Termination>,
}

impl PenguinEnv {
    /// Validate `config` and start the first episode in an arena centered on
    /// the origin.
    pub fn new(config: ScenarioConfig) -> Result<Self, ScenarioError> {
        Self::with_center(config, Vec3::ZERO)
    }

    /// Like [`new`](Self::new), for an arena placed at `center`.
    pub fn with_center(config: ScenarioConfig, center: Vec3) -> Result<Self, ScenarioError> {
        config.validate()?;
        let arena = Arena::with_center(&config, center);
        let agent = Agent::new(&config);
        let mut env = Self {
            config,
            arena,
            agent,
            effects: Effects::new(),
            steps: 0,
            termination: None,
        };
        env.begin_episode();
        Ok(env)
    }

    #[must_use]
    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    #[must_use]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    #[must_use]
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    #[must_use]
    pub fn effects(&self) -> &Effects {
        &self.effects
    }

    /// Steps taken in the current episode.
    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    #[must_use]
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.termination.is_some()
    }

    #[must_use]
    pub fn observe(&self) -> Vec<f32> {
        self.agent.build_observation(self.arena.baby()).to_vec()
    }

    fn begin_episode(&mut self) {
        self.agent.on_episode_begin(&mut self.arena);
        self.effects.clear();
        self.steps = 0;
        self.termination = None;
    }

    /// Stand-in for the arena wall: pull the agent back inside the boundary.
    fn confine_agent(&mut self) {
        let center = self.arena.center();
        let limit = self.config.boundary_radius - self.config.agent.radius;
        let transform = self.agent.transform_mut();

        let offset = transform.position - center;
        let flat = Vec3::new(offset.x, 0.0, offset.z);
        if flat.length() > limit {
            let clamped = flat.normalize() * limit;
            transform.position = center + Vec3::new(clamped.x, offset.y, clamped.z);
        }
    }

    /// Report every body the agent overlaps: the baby first, then fish in
    /// handle order. Only the touch matters to the agent; the contact
    /// geometry is traced for debugging.
    fn dispatch_contacts(&mut self) {
        let probe = Sphere::new(self.agent.transform().position, self.config.agent.radius);

        let mut bodies = Vec::with_capacity(self.arena.fish_remaining() + 1);
        bodies.push((
            EntityTag::Baby,
            Sphere::new(self.arena.baby().position, self.config.baby.radius),
        ));
        for id in self.arena.fish_ids() {
            if let Some(fish) = self.arena.get_fish(id) {
                bodies.push((
                    EntityTag::Fish(id),
                    Sphere::new(fish.position(), self.config.fish.radius),
                ));
            }
        }

        for (tag, contact) in detect_overlaps(&probe, bodies) {
            trace!(?tag, depth = contact.depth, normal = ?contact.normal, "contact");
            self.agent.on_collision(tag, &mut self.arena, &mut self.effects);
        }
    }
}

impl Env for PenguinEnv {
    fn step(&mut self, action: &[f32]) -> (Vec<f32>, f32, bool) {
        if let Some(termination) = self.termination {
            warn!(?termination, "step after the episode ended; reset first");
            return (self.observe(), 0.0, true);
        }

        let dt = self.config.dt;
        self.agent.decide_action(action, dt, self.config.max_steps);
        self.arena.tick(dt);
        self.confine_agent();
        self.effects.tick(dt);
        self.dispatch_contacts();
        self.steps += 1;

        if self.agent.episode_ended() {
            self.termination = Some(Termination::Completed);
        } else if self.config.max_steps > 0 && self.steps >= self.config.max_steps {
            self.termination = Some(Termination::StepBudget);
        }
        if let Some(termination) = self.termination {
            debug!(?termination, steps = self.steps, "episode ended");
        }

        let reward = self.agent.take_reward();
        (self.observe(), reward, self.is_done())
    }

    fn reset(&mut self) -> Vec<f32> {
        self.begin_episode();
        self.observe()
    }

    fn obs_size(&self) -> usize {
        OBSERVATION_SIZE
    }

    fn action_size(&self) -> usize {
        ACTION_SIZE
    }
}
