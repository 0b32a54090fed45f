use std::collections::BTreeMap;

/// Sparse real-valued mapping where every absent key reads as `0.0`.
///
/// Used both as a feature vector produced by an extractor and as the
/// weight vector of a linear value function. Keys are ordered so that
/// dot products always sum in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector<K> {
    entries: BTreeMap<K, f64>,
}

impl<K: Ord> Default for SparseVector<K> {
    fn default() -> Self {
        SparseVector {
            entries: BTreeMap::new(),
        }
    }
}

impl<K: Ord> SparseVector<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the value stored for `key`, or `0.0` if it was never written.
    pub fn get(&self, key: &K) -> f64 {
        self.entries.get(key).copied().unwrap_or(0.0)
    }

    /// Overwrite the value stored for `key`.
    pub fn set(&mut self, key: K, value: f64) {
        self.entries.insert(key, value);
    }

    /// Compute the linear combination of `self` and `features`.
    pub fn dot(&self, features: &SparseVector<K>) -> f64 {
        dot(self, features)
    }

    /// Number of explicitly stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate stored entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> {
        self.entries.iter().map(|(key, value)| (key, *value))
    }
}

impl<K: Ord> FromIterator<(K, f64)> for SparseVector<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        SparseVector {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Sum of `a[k] * b[k]` over all keys. Keys missing on either side contribute nothing.
pub fn dot<K: Ord>(a: &SparseVector<K>, b: &SparseVector<K>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .entries
        .iter()
        .map(|(key, value)| value * large.get(key))
        .sum()
}

/// Add `factor * other[k]` onto `target[k]` for every key stored in `other`.
/// Keys not yet present in `target` start from `0.0`.
pub fn scale_and_add<K: Ord + Clone>(
    target: &mut SparseVector<K>,
    other: &SparseVector<K>,
    factor: f64,
) {
    for (key, value) in &other.entries {
        *target.entries.entry(key.clone()).or_insert(0.0) += factor * value;
    }
}
