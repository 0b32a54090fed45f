use std::{cmp::Ordering, hash::Hash};

use rand::{RngCore, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

use crate::{
    agent::config::{AgentConfig, AgentConfigError},
    store::{
        linear::LinearQ,
        snapshot::StoreSnapshot,
        table::QTable,
        value::{QFunction, Snapshot},
    },
};

/// One observed step `(state, action) -> (next_state, reward)`.
/// Consumed by a single update and then dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S, A> {
    pub state: S,
    pub action: A,
    pub next_state: S,
    pub reward: f64,
}

/// Epsilon-greedy Q-learning agent over a pluggable value lookup `V`.
///
/// `V` decides how Q-values are stored (a table, or a linear function
/// over features); `R` is the random source used for exploration.
/// The agent itself holds no other learned state.
#[derive(Debug, Clone)]
pub struct QAgent<V, R = ChaCha8Rng> {
    config: AgentConfig,
    values: V,
    rng: R,
}

/// Q-learning agent with a `(state, action)` table.
pub type TabularAgent<S, A, R = ChaCha8Rng> = QAgent<QTable<S, A>, R>;

/// Q-learning agent with linear function approximation.
pub type ApproximateAgent<X, K, R = ChaCha8Rng> = QAgent<LinearQ<X, K>, R>;

impl<V> QAgent<V, ChaCha8Rng> {
    /// Create an agent whose exploration is driven by a seeded ChaCha RNG.
    pub fn seeded(config: AgentConfig, values: V, seed: u64) -> Result<Self, AgentConfigError> {
        Self::new(config, values, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<S, A> QAgent<QTable<S, A>, ChaCha8Rng>
where
    S: Eq + Hash,
    A: Eq + Hash,
{
    /// Create a tabular agent with an empty table.
    pub fn tabular(config: AgentConfig, seed: u64) -> Result<Self, AgentConfigError> {
        Self::seeded(config, QTable::new(), seed)
    }
}

impl<X, K: Ord> QAgent<LinearQ<X, K>, ChaCha8Rng> {
    /// Create an approximate agent with all weights at zero.
    pub fn approximate(
        config: AgentConfig,
        extractor: X,
        seed: u64,
    ) -> Result<Self, AgentConfigError> {
        Self::seeded(config, LinearQ::new(extractor), seed)
    }
}

impl<V, R: RngCore> QAgent<V, R> {
    /// Create an agent, rejecting hyperparameters outside their valid ranges.
    pub fn new(config: AgentConfig, values: V, rng: R) -> Result<Self, AgentConfigError> {
        config.validate()?;
        log::debug!(
            "created q-learning agent: epsilon={} alpha={} gamma={}",
            config.epsilon,
            config.alpha,
            config.gamma
        );
        Ok(QAgent {
            config,
            values,
            rng,
        })
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Borrow the value store.
    pub fn values(&self) -> &V {
        &self.values
    }

    /// Consume the agent and return the learned value store.
    pub fn into_values(self) -> V {
        self.values
    }

    /// Current Q-value estimate for `(state, action)`.
    pub fn q_value<S, A>(&self, state: &S, action: &A) -> f64
    where
        V: QFunction<S, A>,
    {
        self.values.q_value(state, action)
    }

    /// Maximum Q-value over `legal_actions`, or `0.0` for a terminal state.
    pub fn value<S, A>(&self, state: &S, legal_actions: &[A]) -> f64
    where
        V: QFunction<S, A>,
    {
        self.greedy(state, legal_actions)
            .map(|(_, q)| q)
            .unwrap_or(0.0)
    }

    /// Greedy action for `state`, or `None` for a terminal state.
    /// Ties go to the earliest action in `legal_actions`.
    pub fn policy<S, A>(&self, state: &S, legal_actions: &[A]) -> Option<A>
    where
        V: QFunction<S, A>,
        A: Clone,
    {
        self.greedy(state, legal_actions)
            .map(|(action, _)| action.clone())
    }

    /// Epsilon-greedy action for `state`, or `None` for a terminal state.
    pub fn choose_action<S, A>(&mut self, state: &S, legal_actions: &[A]) -> Option<A>
    where
        V: QFunction<S, A>,
        A: Clone,
    {
        if legal_actions.is_empty() {
            return None;
        }

        if self.explore() {
            legal_actions.choose(&mut self.rng).cloned()
        } else {
            self.policy(state, legal_actions)
        }
    }

    /// Apply the Q-learning update for one observed transition.
    ///
    /// The target is `reward + gamma * value(next_state, next_legal_actions)`;
    /// the value store moves its estimate for `(state, action)` toward it
    /// with step size `alpha`. `action` is trusted to be legal in `state`.
    pub fn update<S, A>(
        &mut self,
        state: &S,
        action: &A,
        next_state: &S,
        next_legal_actions: &[A],
        reward: f64,
    ) where
        V: QFunction<S, A>,
    {
        let target = reward + self.config.gamma * self.value(next_state, next_legal_actions);
        self.values.learn(state, action, target, self.config.alpha);
        log::trace!(
            "q update: reward={reward} target={target} new_q={}",
            self.values.q_value(state, action)
        );
    }

    /// Apply the update for a recorded transition.
    pub fn observe<S, A>(&mut self, transition: &Transition<S, A>, next_legal_actions: &[A])
    where
        V: QFunction<S, A>,
    {
        self.update(
            &transition.state,
            &transition.action,
            &transition.next_state,
            next_legal_actions,
            transition.reward,
        );
    }

    /// Export the learned values for inspection.
    pub fn snapshot(&self) -> StoreSnapshot
    where
        V: Snapshot,
    {
        self.values.snapshot()
    }

    /// Draw a uniform fraction in `[0, 1)` and compare it against epsilon.
    fn explore(&mut self) -> bool {
        let sample = (self.rng.next_u64() as f64) / ((u64::MAX as f64) + 1.0);
        sample < self.config.epsilon
    }

    fn greedy<'a, S, A>(&self, state: &S, legal_actions: &'a [A]) -> Option<(&'a A, f64)>
    where
        V: QFunction<S, A>,
    {
        let mut best: Option<(&'a A, f64)> = None;

        for action in legal_actions {
            let q = self.values.q_value(state, action);
            // Only a strictly larger value displaces the current best.
            let replace = match best {
                Some((_, best_q)) => q.partial_cmp(&best_q) == Some(Ordering::Greater),
                None => true,
            };
            if replace {
                best = Some((action, q));
            }
        }

        best
    }
}

impl<X, K, R> QAgent<LinearQ<X, K>, R>
where
    K: Ord,
    R: RngCore,
{
    /// Read one learned weight, `0.0` if the feature was never seen.
    pub fn weight(&self, feature: &K) -> f64 {
        self.values.weight(feature)
    }
}
