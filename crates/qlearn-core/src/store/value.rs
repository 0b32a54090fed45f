use crate::store::snapshot::StoreSnapshot;

/// Pluggable value lookup used by the agent.
///
/// The agent never touches the underlying storage directly: it reads
/// Q-values through `q_value` and hands the Bellman target to `learn`.
/// Implementations decide how a target moves the stored estimate.
pub trait QFunction<S, A> {
    /// Current estimate for `(state, action)`. Unseen pairs read as `0.0`.
    fn q_value(&self, state: &S, action: &A) -> f64;

    /// Move the estimate for `(state, action)` toward `target` with step size `alpha`.
    fn learn(&mut self, state: &S, action: &A, target: f64, alpha: f64);
}

/// Read-only export of learned values for inspection.
pub trait Snapshot {
    fn snapshot(&self) -> StoreSnapshot;
}
