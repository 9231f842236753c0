use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Which decision maker drives the agent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    /// Uniformly random action codes
    Random,
    /// Scripted chase-the-nearest-fish driver
    #[default]
    Heuristic,
}

/// Roll out penguin episodes headlessly.
#[derive(Clone, Debug, Parser)]
#[command(name = "runtime_main", version, about)]
pub struct Args {
    /// JSON scenario file; built-in defaults when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the scenario seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Episodes to run
    #[arg(short, long, default_value_t = 1)]
    pub episodes: usize,

    /// Override the per-episode step budget (0 disables it)
    #[arg(short, long)]
    pub max_steps: Option<u32>,

    /// Hard cap on steps per episode, independent of the budget
    #[arg(long, default_value_t = 100_000)]
    pub step_cap: usize,

    #[arg(short, long, value_enum, default_value_t = PolicyKind::Heuristic)]
    pub policy: PolicyKind,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            config: None,
            seed: None,
            episodes: 1,
            max_steps: None,
            step_cap: 100_000,
            policy: PolicyKind::default(),
        }
    }
}
