use std::{collections::HashMap, fmt::Debug, hash::Hash};

use crate::store::{
    snapshot::{SnapshotEntry, StoreKind, StoreSnapshot},
    value::{QFunction, Snapshot},
};

/// Tabular value store keyed by `(state, action)`.
/// Rows are grouped per state so lookups never clone the key.
#[derive(Debug, Clone)]
pub struct QTable<S, A> {
    rows: HashMap<S, HashMap<A, f64>>,
}

impl<S, A> Default for QTable<S, A> {
    fn default() -> Self {
        QTable {
            rows: HashMap::new(),
        }
    }
}

impl<S, A> QTable<S, A>
where
    S: Eq + Hash,
    A: Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the stored value, or `0.0` for a pair that was never written.
    pub fn get(&self, state: &S, action: &A) -> f64 {
        self.rows
            .get(state)
            .and_then(|row| row.get(action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Overwrite the stored value for `(state, action)`.
    pub fn set(&mut self, state: S, action: A, value: f64) {
        self.rows.entry(state).or_default().insert(action, value);
    }

    /// Number of explicitly stored pairs.
    pub fn len(&self) -> usize {
        self.rows.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every stored `(state, action, value)` triple.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &A, f64)> {
        self.rows.iter().flat_map(|(state, row)| {
            row.iter()
                .map(move |(action, value)| (state, action, *value))
        })
    }
}

impl<S, A> QFunction<S, A> for QTable<S, A>
where
    S: Eq + Hash + Clone,
    A: Eq + Hash + Clone,
{
    fn q_value(&self, state: &S, action: &A) -> f64 {
        self.get(state, action)
    }

    fn learn(&mut self, state: &S, action: &A, target: f64, alpha: f64) {
        let current = self.get(state, action);
        let updated = current + alpha * (target - current);
        self.set(state.clone(), action.clone(), updated);
    }
}

impl<S, A> Snapshot for QTable<S, A>
where
    S: Eq + Hash + Debug,
    A: Eq + Hash + Debug,
{
    fn snapshot(&self) -> StoreSnapshot {
        let entries = self
            .iter()
            .map(|(state, action, value)| SnapshotEntry {
                key: format!("{state:?} / {action:?}"),
                value,
            })
            .collect();
        StoreSnapshot::new(StoreKind::Tabular, entries)
    }
}
