//! # lendscore-core
//! Domain types, record normalization, and per-wallet feature aggregation.

pub mod constants;
pub mod error;
pub mod features;
pub mod normalize;
pub mod traits;
pub mod types;

pub use features::aggregate;
pub use normalize::{normalize, NormalizeReport};
pub use types::{ActionKind, ActionStats, ActionTable, ActionType, ScoredUser, TransactionRecord, UserFeatureVector};
