use thiserror::Error;

/// Failures raised while building a scenario. Nothing in a running episode
/// returns these.
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("failed to read scenario config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenario config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid scenario config: `{field}` {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

/// An action vector the agent refuses to act on.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ActionError {
    #[error("expected {expected} action values, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("action value {0} is not finite")]
    NonFinite(f32),
    #[error("unknown turn code {0}")]
    UnknownTurnCode(f32),
}
