use qlearn_core::{AgentConfig, AgentPreset};
use qlearn_train::{TrainError, TrainingConfig};

#[test]
fn default_training_yaml_parses() {
    let config = TrainingConfig::from_default_yaml().expect("default yaml should parse");
    assert_eq!(config, TrainingConfig::default());
    assert_eq!(config.num_training, 100);
}

#[test]
fn pacman_config_uses_calibrated_agent_and_no_training() {
    let config = TrainingConfig::pacman();
    assert_eq!(config.agent, AgentConfig::preset(AgentPreset::Pacman));
    assert_eq!(config.num_training, 0);
    assert!(config.validate().is_ok());
}

#[test]
fn nested_agent_fields_override_defaults() {
    let yaml = r#"
num_training: 25
agent:
  epsilon: 0.05
"#;
    let config = TrainingConfig::from_yaml_str(yaml).expect("yaml should parse");

    assert_eq!(config.num_training, 25);
    assert_eq!(config.max_steps, 1000);
    assert_eq!(config.agent.epsilon, 0.05);
    assert_eq!(config.agent.alpha, 0.5);
}

#[test]
fn zero_limits_are_rejected() {
    let err = TrainingConfig::from_yaml_str("max_steps: 0\n").expect_err("should fail");
    assert!(matches!(err, TrainError::InvalidConfig(_)));

    let err = TrainingConfig::from_yaml_str("report_every: 0\n").expect_err("should fail");
    assert!(matches!(err, TrainError::InvalidConfig(_)));
}

#[test]
fn invalid_agent_section_is_rejected() {
    let yaml = r#"
agent:
  gamma: 1.5
"#;
    let err = TrainingConfig::from_yaml_str(yaml).expect_err("gamma out of range");
    assert!(matches!(err, TrainError::Agent(_)));
}

#[test]
fn config_loads_back_from_disk() {
    let path = std::env::temp_dir().join(format!(
        "qlearn-train-config-{}.yaml",
        std::process::id()
    ));
    let config = TrainingConfig {
        num_training: 12,
        ..TrainingConfig::pacman()
    };

    config.save_yaml(&path).expect("save should succeed");
    let loaded = TrainingConfig::from_yaml_path(&path).expect("load should succeed");
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, config);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = TrainingConfig::from_yaml_path("/definitely/not/here.yaml")
        .expect_err("missing file should fail");
    assert!(matches!(err, TrainError::Io(_)));
}
