//! # Reinforcement Learning Interface
//!
//! The contract between a simulated environment and whatever drives it.
//! Environments implement [`Env`]; decision makers implement [`Policy`].
//! [`run_episode`] ties the two together and keeps the running reward total,
//! so environments only ever report per-step reward deltas.

pub mod env;
pub mod episode;
pub mod policy;

pub use env::Env;
pub use episode::{run_episode, EpisodeStats};
pub use policy::{Policy, RandomPolicy};
