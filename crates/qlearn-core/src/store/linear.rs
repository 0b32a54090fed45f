use std::fmt::Debug;

use crate::store::{
    features::FeatureExtractor,
    snapshot::{SnapshotEntry, StoreKind, StoreSnapshot},
    sparse::{SparseVector, dot, scale_and_add},
    value::{QFunction, Snapshot},
};

/// Linear value function `Q(s, a) = w · f(s, a)` over an injected feature extractor.
#[derive(Debug, Clone)]
pub struct LinearQ<X, K> {
    extractor: X,
    weights: SparseVector<K>,
}

impl<X, K: Ord> LinearQ<X, K> {
    /// Create a linear store with all weights at zero.
    pub fn new(extractor: X) -> Self {
        LinearQ {
            extractor,
            weights: SparseVector::new(),
        }
    }

    /// Borrow the weight vector.
    pub fn weights(&self) -> &SparseVector<K> {
        &self.weights
    }

    /// Read one weight, `0.0` if the feature was never seen.
    pub fn weight(&self, feature: &K) -> f64 {
        self.weights.get(feature)
    }

    /// Overwrite one weight.
    pub fn set_weight(&mut self, feature: K, value: f64) {
        self.weights.set(feature, value);
    }

    /// Evaluate the linear function on an arbitrary feature vector.
    pub fn dot(&self, features: &SparseVector<K>) -> f64 {
        dot(&self.weights, features)
    }

    pub fn extractor(&self) -> &X {
        &self.extractor
    }
}

impl<S, A, X, K> QFunction<S, A> for LinearQ<X, K>
where
    X: FeatureExtractor<S, A, K>,
    K: Ord + Clone,
{
    fn q_value(&self, state: &S, action: &A) -> f64 {
        let features = self.extractor.extract(state, action);
        dot(&self.weights, &features)
    }

    fn learn(&mut self, state: &S, action: &A, target: f64, alpha: f64) {
        let features = self.extractor.extract(state, action);
        let difference = target - dot(&self.weights, &features);
        scale_and_add(&mut self.weights, &features, alpha * difference);
    }
}

impl<X, K> Snapshot for LinearQ<X, K>
where
    K: Ord + Debug,
{
    fn snapshot(&self) -> StoreSnapshot {
        let entries = self
            .weights
            .iter()
            .map(|(feature, value)| SnapshotEntry {
                key: format!("{feature:?}"),
                value,
            })
            .collect();
        StoreSnapshot::new(StoreKind::Linear, entries)
    }
}
