mod agent;
mod store;

pub use agent::config::{AgentConfig, AgentConfigError, AgentPreset};
pub use agent::q_agent::{ApproximateAgent, QAgent, TabularAgent, Transition};
pub use store::features::{BIAS_FEATURE, BiasExtractor, FeatureExtractor, IdentityExtractor};
pub use store::linear::LinearQ;
pub use store::snapshot::{SnapshotEntry, StoreKind, StoreSnapshot};
pub use store::sparse::{SparseVector, dot, scale_and_add};
pub use store::table::QTable;
pub use store::value::{QFunction, Snapshot};
