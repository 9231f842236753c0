//! # Runtime Loop
//!
//! [`run`] builds a [`PenguinEnv`] from the command line and rolls out the
//! requested number of episodes. Each step's reward delta is added to the
//! episode total here, the environment only ever reports deltas.

use anyhow::{Context, Result};
use penguin::{HeuristicPolicy, PenguinEnv, ScenarioConfig, ACTION_BRANCHES};
use rl::{run_episode, EpisodeStats, Env, RandomPolicy};

use crate::cli::{Args, PolicyKind};

/// Load the scenario named by `args`, applying command-line overrides.
///
/// # Errors
///
/// Fails when the config file cannot be read, parsed or validated.
pub fn load_config(args: &Args) -> Result<ScenarioConfig> {
    let mut config = match &args.config {
        Some(path) => ScenarioConfig::from_path(path)
            .with_context(|| format!("loading scenario from {}", path.display()))?,
        None => ScenarioConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(max_steps) = args.max_steps {
        config.max_steps = max_steps;
    }
    config.validate().context("invalid scenario overrides")?;
    Ok(config)
}

/// Run every episode requested by `args` and return their statistics.
///
/// # Errors
///
/// Fails when the scenario cannot be loaded.
pub fn run(args: &Args) -> Result<Vec<EpisodeStats>> {
    let config = load_config(args)?;
    tracing::info!(
        seed = config.seed,
        max_steps = config.max_steps,
        fish = config.fish.count,
        policy = ?args.policy,
        "starting penguin scenario"
    );
    let seed = config.seed;
    let mut env = PenguinEnv::new(config)?;

    let mut results = Vec::with_capacity(args.episodes);
    match args.policy {
        PolicyKind::Random => {
            let mut policy = RandomPolicy::new(ACTION_BRANCHES.to_vec(), seed);
            for episode in 0..args.episodes {
                let stats = run_episode(&mut env, &mut policy, args.step_cap);
                report(episode, &env, stats);
                results.push(stats);
            }
        }
        PolicyKind::Heuristic => {
            let heuristic = HeuristicPolicy::default();
            for episode in 0..args.episodes {
                let stats = drive_heuristic(&mut env, &heuristic, args.step_cap);
                report(episode, &env, stats);
                results.push(stats);
            }
        }
    }

    let total: f32 = results.iter().map(|stats| stats.cumulative_reward).sum();
    tracing::info!(episodes = results.len(), "all episodes finished, total reward {total:.2}");
    Ok(results)
}

/// The heuristic reads the arena, not the observation, so it cannot go
/// through [`run_episode`].
fn drive_heuristic(
    env: &mut PenguinEnv,
    heuristic: &HeuristicPolicy,
    step_cap: usize,
) -> EpisodeStats {
    env.reset();
    let mut stats = EpisodeStats::default();
    while stats.steps < step_cap {
        let action = heuristic.action_for(env).encode();
        let (_, reward, done) = env.step(&action);
        stats.record(reward);
        if done {
            stats.done = true;
            break;
        }
    }
    stats
}

fn report(episode: usize, env: &PenguinEnv, stats: EpisodeStats) {
    tracing::info!(
        episode,
        steps = stats.steps,
        termination = ?env.termination(),
        fish_left = env.arena().fish_remaining(),
        "episode {episode} finished, cumulative reward {:.2}",
        stats.cumulative_reward
    );
}
