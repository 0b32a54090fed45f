use qlearn_core::AgentConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
/// Error type for training config loading and session operations.
pub enum TrainError {
    #[error("failed to read YAML file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Agent(#[from] AgentConfigError),

    #[error("invalid training config: {0}")]
    InvalidConfig(String),

    #[error("reward must be finite, got {reward}")]
    InvalidReward { reward: f64 },

    #[error("action {action} is not legal in state {state}")]
    IllegalAction { state: String, action: String },
}
