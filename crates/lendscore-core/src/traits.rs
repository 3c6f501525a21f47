//! Trait interfaces between lendscore crates.
//!
//! - [`CreditModel`]: per-wallet raw score formula (lendscore-score implements)

use crate::types::UserFeatureVector;

/// Maps one wallet's features to an unbounded raw credit score.
///
/// Implementations must be pure: the same features always give the same
/// score, and no population-wide state may be read. Population rescaling
/// happens after every wallet has been scored.
pub trait CreditModel: Send + Sync {
    /// Raw, pre-rescaling score for a single wallet. Must be finite.
    fn raw_score(&self, features: &UserFeatureVector) -> f64;
}
