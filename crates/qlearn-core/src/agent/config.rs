use std::{fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

const DEFAULT_AGENT_CONFIG_YAML: &str = include_str!("../../config/agent.default.yaml");

/// Named hyperparameter sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentPreset {
    /// Generic reinforcement agent defaults: ε = 0.5, α = 0.5, γ = 1.0.
    #[default]
    Standard,
    /// Calibrated for arcade-style games: ε = 0.05, α = 0.2, γ = 0.8.
    Pacman,
}

/// Hyperparameters of a Q-learning agent. Fixed for the agent's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Exploration probability, in `[0, 1]`.
    pub epsilon: f64,
    /// Learning rate, in `(0, 1]`.
    pub alpha: f64,
    /// Discount factor, in `[0, 1]`.
    pub gamma: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig::preset(AgentPreset::Standard)
    }
}

impl AgentConfig {
    /// Return the hyperparameters of a named preset.
    pub fn preset(preset: AgentPreset) -> Self {
        match preset {
            AgentPreset::Standard => AgentConfig {
                epsilon: 0.5,
                alpha: 0.5,
                gamma: 1.0,
            },
            AgentPreset::Pacman => AgentConfig {
                epsilon: 0.05,
                alpha: 0.2,
                gamma: 0.8,
            },
        }
    }

    /// Build and validate a config from explicit values.
    pub fn new(epsilon: f64, alpha: f64, gamma: f64) -> Result<Self, AgentConfigError> {
        let config = AgentConfig {
            epsilon,
            alpha,
            gamma,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse an agent config from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, AgentConfigError> {
        let config: AgentConfig = serde_yaml::from_str(yaml).map_err(AgentConfigError::Yaml)?;
        config.validate()?;
        log::debug!(
            "loaded agent config: epsilon={} alpha={} gamma={}",
            config.epsilon,
            config.alpha,
            config.gamma
        );
        Ok(config)
    }

    /// Parse an agent config from a YAML file path.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, AgentConfigError> {
        let yaml = fs::read_to_string(path).map_err(AgentConfigError::Io)?;
        Self::from_yaml_str(&yaml)
    }

    /// Return the default YAML config included with this crate.
    pub fn default_yaml() -> &'static str {
        DEFAULT_AGENT_CONFIG_YAML
    }

    /// Parse the default YAML config included with this crate.
    pub fn from_default_yaml() -> Result<Self, AgentConfigError> {
        Self::from_yaml_str(Self::default_yaml())
    }

    /// Check every hyperparameter against its valid range.
    pub fn validate(&self) -> Result<(), AgentConfigError> {
        if !self.epsilon.is_finite() || !(0.0..=1.0).contains(&self.epsilon) {
            return Err(AgentConfigError::Invalid(format!(
                "epsilon must be within [0, 1], got {}",
                self.epsilon
            )));
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha > 1.0 {
            return Err(AgentConfigError::Invalid(format!(
                "alpha must be within (0, 1], got {}",
                self.alpha
            )));
        }
        if !self.gamma.is_finite() || !(0.0..=1.0).contains(&self.gamma) {
            return Err(AgentConfigError::Invalid(format!(
                "gamma must be within [0, 1], got {}",
                self.gamma
            )));
        }
        Ok(())
    }
}

/// Error type for loading and validating `AgentConfig`.
#[derive(Debug)]
pub enum AgentConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Invalid(String),
}

impl fmt::Display for AgentConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentConfigError::Io(err) => write!(f, "failed to read config file: {err}"),
            AgentConfigError::Yaml(err) => write!(f, "failed to parse config YAML: {err}"),
            AgentConfigError::Invalid(err) => write!(f, "invalid agent config: {err}"),
        }
    }
}

impl std::error::Error for AgentConfigError {}
