use crate::{Env, Policy};

/// Running totals for one episode.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EpisodeStats {
    pub steps: usize,
    pub cumulative_reward: f32,
    /// Whether the environment reported termination (as opposed to the
    /// roll-out hitting its own step cap).
    pub done: bool,
}

impl EpisodeStats {
    pub fn record(&mut self, reward: f32) {
        self.steps += 1;
        self.cumulative_reward += reward;
    }
}

/// Reset `env` and drive it with `policy` until it reports `done` or
/// `max_steps` steps have been taken.
pub fn run_episode<E, P>(env: &mut E, policy: &mut P, max_steps: usize) -> EpisodeStats
where
    E: Env + ?Sized,
    P: Policy + ?Sized,
{
    let mut obs = env.reset();
    let mut stats = EpisodeStats::default();

    while stats.steps < max_steps {
        let action = policy.act(&obs);
        let (next_obs, reward, done) = env.step(&action);
        stats.record(reward);
        obs = next_obs;
        if done {
            stats.done = true;
            break;
        }
    }

    tracing::debug!(
        steps = stats.steps,
        reward = stats.cumulative_reward,
        done = stats.done,
        "episode roll-out finished"
    );
    stats
}
