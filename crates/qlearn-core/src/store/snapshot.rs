use serde::Serialize;

/// Which value store produced a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    Tabular,
    Linear,
}

/// Serializable view of every explicitly stored value, sorted by key.
#[derive(Debug, Clone, Serialize)]
pub struct StoreSnapshot {
    pub schema_version: u32,
    pub kind: StoreKind,
    pub entry_count: usize,
    pub entries: Vec<SnapshotEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotEntry {
    pub key: String,
    pub value: f64,
}

impl StoreSnapshot {
    pub(crate) fn new(kind: StoreKind, mut entries: Vec<SnapshotEntry>) -> Self {
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        StoreSnapshot {
            schema_version: 1,
            kind,
            entry_count: entries.len(),
            entries,
        }
    }

    /// Render the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
