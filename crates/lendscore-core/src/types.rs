//! Core domain types: normalized records, per-wallet features, scores.
//!
//! Amounts are `f64` in raw protocol units. Instants are UTC.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The lending actions that carry scoring weight.
///
/// This is a closed set: every wallet's feature vector carries a count and
/// a sum for each variant, whether or not the action was ever observed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionType {
    Deposit,
    Borrow,
    Repay,
    RedeemUnderlying,
    LiquidationCall,
}

impl ActionType {
    /// Number of variants.
    pub const COUNT: usize = 5;

    /// All variants in column order.
    pub const ALL: [ActionType; Self::COUNT] = [
        ActionType::Deposit,
        ActionType::Borrow,
        ActionType::Repay,
        ActionType::RedeemUnderlying,
        ActionType::LiquidationCall,
    ];

    /// Protocol name of the action, as it appears in `actionData.type`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lendscore_core::ActionType;
    ///
    /// assert_eq!(ActionType::LiquidationCall.name(), "LiquidationCall");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Borrow => "Borrow",
            Self::Repay => "Repay",
            Self::RedeemUnderlying => "RedeemUnderlying",
            Self::LiquidationCall => "LiquidationCall",
        }
    }

    /// Look up an action by its exact protocol name. Matching is
    /// case-sensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use lendscore_core::ActionType;
    ///
    /// assert_eq!(ActionType::from_name("Repay"), Some(ActionType::Repay));
    /// assert_eq!(ActionType::from_name("repay"), None);
    /// assert_eq!(ActionType::from_name("FlashLoan"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.name() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Action of a normalized record: one of the weighted types, or any other
/// type string the input carried.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Known(ActionType),
    Other(String),
}

impl ActionKind {
    /// Classify a raw `actionData.type` string.
    pub fn from_name(name: &str) -> Self {
        match ActionType::from_name(name) {
            Some(action) => Self::Known(action),
            None => Self::Other(name.to_string()),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(action) => f.write_str(action.name()),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// One flattened lending event. Every record has a valid numeric amount.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TransactionRecord {
    /// Wallet that performed the action.
    pub user_id: String,
    /// When the event happened.
    pub timestamp: DateTime<Utc>,
    pub action: ActionKind,
    /// Non-negative, finite amount in raw protocol units.
    pub amount: f64,
    /// Reserve symbol, when the input carried one.
    pub asset_symbol: Option<String>,
}

/// Transaction count and total amount for one action type.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct ActionStats {
    pub count: u64,
    pub sum: f64,
}

impl ActionStats {
    /// Fold one transaction into the totals.
    pub fn record(&mut self, amount: f64) {
        self.count += 1;
        self.sum += amount;
    }
}

/// Count/sum totals for every [`ActionType`], zero-filled.
///
/// Indexing by any variant always succeeds, so a feature column can never be
/// missing.
///
/// # Examples
///
/// ```
/// use lendscore_core::{ActionTable, ActionType};
///
/// let mut table = ActionTable::default();
/// table.record(ActionType::Deposit, 100.0);
/// assert_eq!(table[ActionType::Deposit].count, 1);
/// assert_eq!(table[ActionType::LiquidationCall].count, 0);
/// assert_eq!(table[ActionType::LiquidationCall].sum, 0.0);
/// ```
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct ActionTable([ActionStats; ActionType::COUNT]);

impl ActionTable {
    /// Fold one transaction of `action` into the table.
    pub fn record(&mut self, action: ActionType, amount: f64) {
        self.0[action.index()].record(amount);
    }

    /// Iterate over every action type with its totals, in column order.
    pub fn iter(&self) -> impl Iterator<Item = (ActionType, &ActionStats)> {
        ActionType::ALL.into_iter().zip(self.0.iter())
    }
}

impl Index<ActionType> for ActionTable {
    type Output = ActionStats;

    fn index(&self, action: ActionType) -> &ActionStats {
        &self.0[action.index()]
    }
}

/// Behavioral features of one wallet, derived from its full history.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserFeatureVector {
    pub user_id: String,
    /// Totals for the weighted action types.
    pub activity: ActionTable,
    /// Totals for any other action types seen, keyed by type name. Kept for
    /// completeness; no score term reads them.
    pub other_activity: BTreeMap<String, ActionStats>,
    /// Whole days between the first and last transaction.
    pub wallet_age_days: u64,
    /// Distinct asset symbols the wallet touched.
    pub unique_assets_used: u64,
    /// `sum_Repay / sum_Borrow`, in `[0, 1]`.
    pub repayment_ratio: f64,
    /// `sum_Borrow / sum_Deposit`, in `[0, +inf)`.
    pub borrow_to_deposit_ratio: f64,
}

impl UserFeatureVector {
    /// Transaction count for `action` (`count_<type>`).
    pub fn count(&self, action: ActionType) -> u64 {
        self.activity[action].count
    }

    /// Total amount for `action` (`sum_<type>`).
    pub fn sum(&self, action: ActionType) -> f64 {
        self.activity[action].sum
    }
}

/// A wallet's raw and population-rescaled score.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScoredUser {
    pub user_id: String,
    /// Raw heuristic score before rescaling.
    pub credit_score: f64,
    /// Rescaled score in `[0, 1000]`.
    pub final_score: u16,
}
