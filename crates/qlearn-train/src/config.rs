use std::{fs, path::Path};

use qlearn_core::{AgentConfig, AgentPreset};
use serde::{Deserialize, Serialize};

use crate::TrainError;

const DEFAULT_TRAINING_CONFIG_YAML: &str = include_str!("../config/training.default.yaml");

/// Settings for a training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Agent hyperparameters.
    pub agent: AgentConfig,
    /// Number of leading episodes that explore and learn.
    pub num_training: usize,
    /// Maximum number of decisions in one episode.
    pub max_steps: usize,
    /// Episodes between progress reports.
    pub report_every: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            agent: AgentConfig::default(),
            num_training: 100,
            max_steps: 1000,
            report_every: 100,
        }
    }
}

impl TrainingConfig {
    /// Calibrated agent with no training episodes, matching the game agent defaults.
    pub fn pacman() -> Self {
        TrainingConfig {
            agent: AgentConfig::preset(AgentPreset::Pacman),
            num_training: 0,
            ..TrainingConfig::default()
        }
    }

    /// Parse a training config from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TrainError> {
        let config: TrainingConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        log::debug!(
            "loaded training config: num_training={} max_steps={} report_every={}",
            config.num_training,
            config.max_steps,
            config.report_every
        );
        Ok(config)
    }

    /// Parse a training config from a YAML file path.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, TrainError> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Serialize and write this config to YAML.
    pub fn save_yaml(&self, path: impl AsRef<Path>) -> Result<(), TrainError> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Return the default YAML config included with this crate.
    pub fn default_yaml() -> &'static str {
        DEFAULT_TRAINING_CONFIG_YAML
    }

    /// Parse the default YAML config included with this crate.
    pub fn from_default_yaml() -> Result<Self, TrainError> {
        Self::from_yaml_str(Self::default_yaml())
    }

    /// Check session limits and the nested agent hyperparameters.
    pub fn validate(&self) -> Result<(), TrainError> {
        if self.max_steps == 0 {
            return Err(TrainError::InvalidConfig(
                "max_steps must be greater than 0".to_string(),
            ));
        }
        if self.report_every == 0 {
            return Err(TrainError::InvalidConfig(
                "report_every must be greater than 0".to_string(),
            ));
        }
        self.agent.validate()?;
        Ok(())
    }
}
