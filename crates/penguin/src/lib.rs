//! # Penguin Scenario
//!
//! A small reinforcement-learning scenario: a penguin roams a round arena,
//! eats the fish that wander in the far half, and carries them one at a time
//! to its baby. Each fish eaten and each feeding pays +1, every step costs
//! `1 / max_steps`, and the episode ends once the last fish has been fed.
//!
//! ## Key Components
//!
//! -   [`Arena`]: the fish school, the baby and the episode lifecycle.
//! -   [`Wanderer`]: the retarget-and-swim motion of each fish.
//! -   [`Agent`]: action decoding, the 8-value observation, eat/feed rules.
//! -   [`PenguinEnv`]: the fixed tick tying them together behind [`rl::Env`].
//! -   [`HeuristicPolicy`]: a scripted driver for demos and smoke tests.
//!
//! ## Usage
//!
//! ```rust
//! use penguin::{PenguinEnv, ScenarioConfig};
//! use rl::Env;
//!
//! let mut env = PenguinEnv::new(ScenarioConfig::default()).unwrap();
//! let obs = env.reset();
//! assert_eq!(obs.len(), 8);
//! let (obs, reward, _done) = env.step(&[1.0, 0.0]);
//! assert_eq!(obs.len(), 8);
//! assert!(reward.is_finite());
//! ```

pub mod action;
pub mod agent;
pub mod arena;
pub mod config;
pub mod effects;
pub mod env;
pub mod error;
pub mod fish;
pub mod heuristic;

pub use action::{Action, Turn, ACTION_BRANCHES, ACTION_SIZE};
pub use agent::{Agent, FEED_REWARD, OBSERVATION_SIZE};
pub use arena::{Arena, EntityTag};
pub use config::{AgentConfig, BabyConfig, FishConfig, ScenarioConfig};
pub use effects::{Effect, EffectKind, Effects};
pub use env::{PenguinEnv, Termination};
pub use error::{ActionError, ScenarioError};
pub use fish::{Fish, FishId, Wanderer};
pub use heuristic::HeuristicPolicy;
