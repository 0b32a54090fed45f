use std::marker::PhantomData;

use crate::store::sparse::SparseVector;

/// Name of the single feature emitted by [`BiasExtractor`].
pub const BIAS_FEATURE: &str = "bias";

/// Maps a `(state, action)` pair to a sparse feature vector.
///
/// Extraction must be a pure function of its inputs: the linear store
/// re-extracts features on every read and expects identical vectors.
pub trait FeatureExtractor<S, A, K: Ord> {
    fn extract(&self, state: &S, action: &A) -> SparseVector<K>;
}

impl<S, A, K, F> FeatureExtractor<S, A, K> for F
where
    F: Fn(&S, &A) -> SparseVector<K>,
    K: Ord,
{
    fn extract(&self, state: &S, action: &A) -> SparseVector<K> {
        self(state, action)
    }
}

/// One indicator feature per `(state, action)` pair.
/// A linear store over this extractor is equivalent to a table.
#[derive(Debug, Clone)]
pub struct IdentityExtractor<S, A> {
    _marker: PhantomData<fn(&S, &A)>,
}

impl<S, A> IdentityExtractor<S, A> {
    pub fn new() -> Self {
        IdentityExtractor {
            _marker: PhantomData,
        }
    }
}

impl<S, A> Default for IdentityExtractor<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> FeatureExtractor<S, A, (S, A)> for IdentityExtractor<S, A>
where
    S: Ord + Clone,
    A: Ord + Clone,
{
    fn extract(&self, state: &S, action: &A) -> SparseVector<(S, A)> {
        std::iter::once(((state.clone(), action.clone()), 1.0)).collect()
    }
}

/// A constant `"bias" = 1.0` feature for every pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct BiasExtractor;

impl<S, A> FeatureExtractor<S, A, &'static str> for BiasExtractor {
    fn extract(&self, _state: &S, _action: &A) -> SparseVector<&'static str> {
        std::iter::once((BIAS_FEATURE, 1.0)).collect()
    }
}
