mod config;
mod environment;
mod error;
mod metrics;
mod session;

pub use config::TrainingConfig;
pub use environment::Environment;
pub use error::TrainError;
pub use metrics::{EpisodeMetrics, RunMetrics};
pub use session::Session;
