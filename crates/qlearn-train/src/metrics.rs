use serde::Serialize;

/// Outcome of one finished episode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EpisodeMetrics {
    /// 1-based index of the episode within the session.
    pub episode: usize,
    pub steps: usize,
    pub total_reward: f64,
    /// Whether the episode explored and updated values.
    pub training: bool,
}

/// Aggregate metrics for a run of consecutive episodes.
#[derive(Debug, Clone, Serialize)]
pub struct RunMetrics {
    pub episodes_requested: usize,
    pub episodes_completed: usize,
    pub training_episodes: usize,
    pub testing_episodes: usize,
    pub training_reward_sum: f64,
    pub testing_reward_sum: f64,
    pub average_training_reward: f64,
    pub average_testing_reward: f64,
}

impl RunMetrics {
    pub(crate) fn new(episodes_requested: usize) -> Self {
        RunMetrics {
            episodes_requested,
            episodes_completed: 0,
            training_episodes: 0,
            testing_episodes: 0,
            training_reward_sum: 0.0,
            testing_reward_sum: 0.0,
            average_training_reward: 0.0,
            average_testing_reward: 0.0,
        }
    }

    pub(crate) fn record(&mut self, metrics: &EpisodeMetrics) {
        self.episodes_completed += 1;
        if metrics.training {
            self.training_episodes += 1;
            self.training_reward_sum += metrics.total_reward;
            self.average_training_reward =
                self.training_reward_sum / self.training_episodes as f64;
        } else {
            self.testing_episodes += 1;
            self.testing_reward_sum += metrics.total_reward;
            self.average_testing_reward = self.testing_reward_sum / self.testing_episodes as f64;
        }
    }
}
