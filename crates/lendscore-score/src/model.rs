//! Heuristic model implementing the [`CreditModel`] trait.
//!
//! ```text
//! credit_score = 500
//!              - count_LiquidationCall * 250
//!              + ln(1 + wallet_age_days) * 20
//!              + repayment_ratio * 150
//!              - borrow_to_deposit_ratio * 100
//!              + unique_assets_used * 10
//! ```

use lendscore_core::constants::{
    ASSET_DIVERSITY_WEIGHT, BASE_SCORE, LEVERAGE_PENALTY, LIQUIDATION_PENALTY, REPAYMENT_WEIGHT,
    WALLET_AGE_WEIGHT,
};
use lendscore_core::traits::CreditModel;
use lendscore_core::{ActionType, UserFeatureVector};

/// The production credit model: fixed weights, no learned parameters.
#[derive(Debug, Clone, Default)]
pub struct HeuristicModel;

impl HeuristicModel {
    /// Create a new HeuristicModel.
    pub fn new() -> Self {
        Self
    }
}

/// Clamp to a finite value so one extreme wallet cannot turn the population
/// bounds into infinities.
fn saturate(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(f64::MIN, f64::MAX)
    }
}

impl CreditModel for HeuristicModel {
    fn raw_score(&self, features: &UserFeatureVector) -> f64 {
        let liquidations = features.count(ActionType::LiquidationCall) as f64;
        let age_days = features.wallet_age_days as f64;
        let assets = features.unique_assets_used as f64;

        let mut score = BASE_SCORE;
        score -= liquidations * LIQUIDATION_PENALTY;
        score += age_days.ln_1p() * WALLET_AGE_WEIGHT;
        score += features.repayment_ratio * REPAYMENT_WEIGHT;
        score -= features.borrow_to_deposit_ratio * LEVERAGE_PENALTY;
        score += assets * ASSET_DIVERSITY_WEIGHT;

        saturate(score)
    }
}
