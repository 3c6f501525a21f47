//! Scoring constants. Amounts are raw protocol units; no price conversion.

/// Starting point of every raw credit score.
pub const BASE_SCORE: f64 = 500.0;

/// Points removed per liquidation the wallet was involved in.
pub const LIQUIDATION_PENALTY: f64 = 250.0;

/// Multiplier applied to `ln(1 + wallet_age_days)`.
pub const WALLET_AGE_WEIGHT: f64 = 20.0;

/// Points awarded for a full repayment ratio of `1.0`.
pub const REPAYMENT_WEIGHT: f64 = 150.0;

/// Points removed per unit of borrow-to-deposit ratio.
///
/// The ratio is unbounded above, so this penalty is too.
pub const LEVERAGE_PENALTY: f64 = 100.0;

/// Points awarded per distinct asset the wallet has touched.
pub const ASSET_DIVERSITY_WEIGHT: f64 = 10.0;

/// Lowest final score a wallet can receive.
pub const FINAL_SCORE_MIN: u16 = 0;

/// Highest final score a wallet can receive.
pub const FINAL_SCORE_MAX: u16 = 1000;

/// Final score assigned to every wallet when the population's raw scores
/// span a zero-width range (single wallet, or all raw scores equal).
pub const DEGENERATE_FINAL_SCORE: u16 = FINAL_SCORE_MIN;

/// Upper bound of the repayment ratio.
pub const MAX_REPAYMENT_RATIO: f64 = 1.0;

/// Denominator used for a ratio when the wallet has no transactions of the
/// denominator's action type.
pub const MISSING_DENOMINATOR: f64 = 1.0;
