use std::fmt::Debug;

use qlearn_core::{QAgent, QFunction, Snapshot, StoreSnapshot, Transition};
use rand::RngCore;
use rand_chacha::ChaCha8Rng;

use crate::{EpisodeMetrics, Environment, RunMetrics, TrainError, TrainingConfig};

/// Drives a Q-learning agent through consecutive episodes.
///
/// The first `num_training` episodes explore and update the value store.
/// Every later episode follows the greedy policy and leaves values untouched.
#[derive(Debug, Clone)]
pub struct Session<V, R = ChaCha8Rng> {
    agent: QAgent<V, R>,
    config: TrainingConfig,
    episodes_so_far: usize,
    accum_train_rewards: f64,
    accum_test_rewards: f64,
    episode_rewards: f64,
    episode_steps: usize,
    window_rewards: f64,
    window_episodes: usize,
}

impl<V> Session<V, ChaCha8Rng> {
    /// Create a session whose agent explores with a seeded ChaCha RNG.
    pub fn seeded(config: TrainingConfig, values: V, seed: u64) -> Result<Self, TrainError> {
        config.validate()?;
        let agent = QAgent::seeded(config.agent, values, seed)?;
        Ok(Self::from_parts(agent, config))
    }
}

impl<V, R: RngCore> Session<V, R> {
    /// Create a session around a fresh agent built from `config.agent`.
    pub fn new(config: TrainingConfig, values: V, rng: R) -> Result<Self, TrainError> {
        config.validate()?;
        let agent = QAgent::new(config.agent, values, rng)?;
        Ok(Self::from_parts(agent, config))
    }

    fn from_parts(agent: QAgent<V, R>, config: TrainingConfig) -> Self {
        Session {
            agent,
            config,
            episodes_so_far: 0,
            accum_train_rewards: 0.0,
            accum_test_rewards: 0.0,
            episode_rewards: 0.0,
            episode_steps: 0,
            window_rewards: 0.0,
            window_episodes: 0,
        }
    }

    pub fn agent(&self) -> &QAgent<V, R> {
        &self.agent
    }

    pub fn into_agent(self) -> QAgent<V, R> {
        self.agent
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Number of episodes finished so far.
    pub fn episodes_so_far(&self) -> usize {
        self.episodes_so_far
    }

    /// Sum of rewards over all finished training episodes.
    pub fn accumulated_training_reward(&self) -> f64 {
        self.accum_train_rewards
    }

    /// Sum of rewards over all finished testing episodes.
    pub fn accumulated_testing_reward(&self) -> f64 {
        self.accum_test_rewards
    }

    /// Reward collected so far in the current episode.
    pub fn episode_reward(&self) -> f64 {
        self.episode_rewards
    }

    pub fn is_in_training(&self) -> bool {
        self.episodes_so_far < self.config.num_training
    }

    pub fn is_in_testing(&self) -> bool {
        !self.is_in_training()
    }

    /// Reset per-episode counters.
    pub fn start_episode(&mut self) {
        self.episode_rewards = 0.0;
        self.episode_steps = 0;
    }

    /// Pick an action: epsilon-greedy while training, greedy afterwards.
    pub fn choose_action<S, A>(&mut self, state: &S, legal_actions: &[A]) -> Option<A>
    where
        V: QFunction<S, A>,
        A: Clone,
    {
        if self.is_in_training() {
            self.agent.choose_action(state, legal_actions)
        } else {
            self.agent.policy(state, legal_actions)
        }
    }

    /// Record one transition and, while training, update the agent with it.
    ///
    /// Rejects a non-finite reward or an action outside `legal_actions`
    /// without touching the value store.
    pub fn observe<S, A>(
        &mut self,
        transition: &Transition<S, A>,
        legal_actions: &[A],
        next_legal_actions: &[A],
    ) -> Result<(), TrainError>
    where
        V: QFunction<S, A>,
        S: Debug,
        A: PartialEq + Debug,
    {
        if !transition.reward.is_finite() {
            log::warn!(
                "rejecting transition from {:?} with non-finite reward {}",
                transition.state,
                transition.reward
            );
            return Err(TrainError::InvalidReward {
                reward: transition.reward,
            });
        }
        if !legal_actions.contains(&transition.action) {
            log::warn!(
                "rejecting illegal action {:?} in state {:?}",
                transition.action,
                transition.state
            );
            return Err(TrainError::IllegalAction {
                state: format!("{:?}", transition.state),
                action: format!("{:?}", transition.action),
            });
        }

        self.episode_rewards += transition.reward;
        self.episode_steps += 1;

        if self.is_in_training() {
            self.agent.observe(transition, next_legal_actions);
        }
        Ok(())
    }

    /// Close the current episode, fold its reward into the running totals,
    /// and emit a progress report every `report_every` episodes.
    pub fn stop_episode(&mut self) -> EpisodeMetrics
    where
        V: Snapshot,
    {
        let training = self.is_in_training();
        if training {
            self.accum_train_rewards += self.episode_rewards;
        } else {
            self.accum_test_rewards += self.episode_rewards;
        }
        self.episodes_so_far += 1;
        self.window_rewards += self.episode_rewards;
        self.window_episodes += 1;

        let metrics = EpisodeMetrics {
            episode: self.episodes_so_far,
            steps: self.episode_steps,
            total_reward: self.episode_rewards,
            training,
        };

        if self.episodes_so_far % self.config.report_every == 0 {
            self.report(training);
        }

        if training && self.episodes_so_far == self.config.num_training {
            self.report(true);
            log::info!(
                "training done after {} episodes, acting greedily without updates",
                self.episodes_so_far
            );
            if log::log_enabled!(log::Level::Debug) {
                match self.agent.snapshot().to_json() {
                    Ok(json) => log::debug!("learned values:\n{json}"),
                    Err(err) => log::warn!("failed to render learned values: {err}"),
                }
            }
        }

        self.start_episode();
        metrics
    }

    /// Play one episode in `env` from reset until a terminal state or `max_steps`.
    pub fn run_episode<E>(&mut self, env: &mut E) -> Result<EpisodeMetrics, TrainError>
    where
        E: Environment,
        E::State: Debug,
        E::Action: PartialEq + Debug,
        V: QFunction<E::State, E::Action> + Snapshot,
    {
        self.start_episode();
        let mut state = env.reset();
        let mut legal_actions = env.legal_actions(&state);

        for _ in 0..self.config.max_steps {
            let Some(action) = self.choose_action(&state, &legal_actions) else {
                break;
            };
            let (next_state, reward) = env.step(&state, &action);
            let next_legal_actions = env.legal_actions(&next_state);

            let transition = Transition {
                state,
                action,
                next_state,
                reward,
            };
            self.observe(&transition, &legal_actions, &next_legal_actions)?;

            state = transition.next_state;
            legal_actions = next_legal_actions;
        }

        Ok(self.stop_episode())
    }

    /// Play `episodes` consecutive episodes.
    pub fn run<E>(&mut self, env: &mut E, episodes: usize) -> Result<RunMetrics, TrainError>
    where
        E: Environment,
        E::State: Debug,
        E::Action: PartialEq + Debug,
        V: QFunction<E::State, E::Action> + Snapshot,
    {
        self.run_with_hook(env, episodes, |_| {})
    }

    /// Play `episodes` consecutive episodes and invoke a callback after each one.
    pub fn run_with_hook<E, FHook>(
        &mut self,
        env: &mut E,
        episodes: usize,
        mut on_episode: FHook,
    ) -> Result<RunMetrics, TrainError>
    where
        E: Environment,
        E::State: Debug,
        E::Action: PartialEq + Debug,
        V: QFunction<E::State, E::Action> + Snapshot,
        FHook: FnMut(&EpisodeMetrics),
    {
        let mut metrics = RunMetrics::new(episodes);

        for _ in 0..episodes {
            let episode_metrics = self.run_episode(env)?;

            on_episode(&episode_metrics);
            metrics.record(&episode_metrics);
        }

        Ok(metrics)
    }

    /// Export the learned values for inspection.
    pub fn snapshot(&self) -> StoreSnapshot
    where
        V: Snapshot,
    {
        self.agent.snapshot()
    }

    fn report(&mut self, training: bool) {
        if self.window_episodes == 0 {
            return;
        }
        let window_average = self.window_rewards / self.window_episodes as f64;

        if training {
            log::info!(
                "completed {} of {} training episodes: average reward {:.2} overall, {:.2} over the last {}",
                self.episodes_so_far,
                self.config.num_training,
                self.accum_train_rewards / self.episodes_so_far as f64,
                window_average,
                self.window_episodes
            );
        } else {
            let testing_episodes = self.episodes_so_far - self.config.num_training;
            log::info!(
                "completed {} testing episodes: average reward {:.2} overall, {:.2} over the last {}",
                testing_episodes,
                self.accum_test_rewards / testing_episodes as f64,
                window_average,
                self.window_episodes
            );
        }

        self.window_rewards = 0.0;
        self.window_episodes = 0;
    }
}
