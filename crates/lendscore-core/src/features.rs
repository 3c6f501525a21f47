//! Feature aggregator: one [`UserFeatureVector`] per wallet.
//!
//! Grouping reads no cross-wallet state, so wallets are independent of each
//! other here; only the later rescaling step looks at the whole population.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::constants::{MAX_REPAYMENT_RATIO, MISSING_DENOMINATOR};
use crate::types::{ActionKind, ActionStats, ActionTable, ActionType, TransactionRecord, UserFeatureVector};

/// Running totals for one wallet while records are being grouped.
#[derive(Debug)]
struct WalletAccumulator<'a> {
    activity: ActionTable,
    other_activity: BTreeMap<String, ActionStats>,
    first_seen: DateTime<Utc>,
    last_seen: DateTime<Utc>,
    assets: BTreeSet<&'a str>,
}

impl<'a> WalletAccumulator<'a> {
    fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            activity: ActionTable::default(),
            other_activity: BTreeMap::new(),
            first_seen: timestamp,
            last_seen: timestamp,
            assets: BTreeSet::new(),
        }
    }

    fn push(&mut self, record: &'a TransactionRecord) {
        match &record.action {
            ActionKind::Known(action) => self.activity.record(*action, record.amount),
            ActionKind::Other(name) => self
                .other_activity
                .entry(name.clone())
                .or_default()
                .record(record.amount),
        }
        self.first_seen = self.first_seen.min(record.timestamp);
        self.last_seen = self.last_seen.max(record.timestamp);
        if let Some(asset) = &record.asset_symbol {
            self.assets.insert(asset.as_str());
        }
    }

    fn finish(self, user_id: &str) -> UserFeatureVector {
        let wallet_age_days = (self.last_seen - self.first_seen).num_days().max(0) as u64;
        UserFeatureVector {
            user_id: user_id.to_string(),
            repayment_ratio: repayment_ratio(&self.activity),
            borrow_to_deposit_ratio: borrow_to_deposit_ratio(&self.activity),
            activity: self.activity,
            other_activity: self.other_activity,
            wallet_age_days,
            unique_assets_used: self.assets.len() as u64,
        }
    }
}

/// Replace `±inf` and `NaN` with `0`.
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Amount total used as a ratio denominator: the action's sum, or
/// [`MISSING_DENOMINATOR`] when the wallet never performed the action.
fn denominator(stats: &ActionStats) -> f64 {
    if stats.count == 0 { MISSING_DENOMINATOR } else { stats.sum }
}

/// `sum_Repay / sum_Borrow`, clamped to `[0, 1]`.
///
/// A wallet that never borrowed divides by `1`. A wallet that borrowed a
/// total of zero divides by zero, and the undefined result becomes `0`.
///
/// # Examples
///
/// ```
/// use lendscore_core::{ActionTable, ActionType};
/// use lendscore_core::features::repayment_ratio;
///
/// let mut t = ActionTable::default();
/// assert_eq!(repayment_ratio(&t), 0.0);      // 0 / 1
/// t.record(ActionType::Repay, 50.0);
/// assert_eq!(repayment_ratio(&t), 1.0);      // 50 / 1, clamped
/// t.record(ActionType::Borrow, 200.0);
/// assert_eq!(repayment_ratio(&t), 0.25);
/// ```
pub fn repayment_ratio(activity: &ActionTable) -> f64 {
    let repaid = activity[ActionType::Repay].sum;
    let borrowed = denominator(&activity[ActionType::Borrow]);
    finite_or_zero(repaid / borrowed).clamp(0.0, MAX_REPAYMENT_RATIO)
}

/// `sum_Borrow / sum_Deposit`, in `[0, +inf)`; not clamped above.
///
/// A wallet that never deposited divides by `1`.
///
/// # Examples
///
/// ```
/// use lendscore_core::{ActionTable, ActionType};
/// use lendscore_core::features::borrow_to_deposit_ratio;
///
/// let mut t = ActionTable::default();
/// t.record(ActionType::Borrow, 30.0);
/// assert_eq!(borrow_to_deposit_ratio(&t), 30.0); // 30 / 1
/// t.record(ActionType::Deposit, 10.0);
/// assert_eq!(borrow_to_deposit_ratio(&t), 3.0);
/// ```
pub fn borrow_to_deposit_ratio(activity: &ActionTable) -> f64 {
    let borrowed = activity[ActionType::Borrow].sum;
    let deposited = denominator(&activity[ActionType::Deposit]);
    finite_or_zero(borrowed / deposited).max(0.0)
}

/// Group records by wallet and derive each wallet's features.
///
/// Output is ordered by ascending `user_id`.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, Duration};
/// use lendscore_core::{aggregate, ActionKind, ActionType, TransactionRecord};
///
/// let t0 = DateTime::from_timestamp(1_600_000_000, 0).unwrap();
/// let records = vec![
///     TransactionRecord {
///         user_id: "w".into(),
///         timestamp: t0,
///         action: ActionKind::Known(ActionType::Deposit),
///         amount: 100.0,
///         asset_symbol: Some("USDC".into()),
///     },
///     TransactionRecord {
///         user_id: "w".into(),
///         timestamp: t0 + Duration::days(7),
///         action: ActionKind::Known(ActionType::Repay),
///         amount: 50.0,
///         asset_symbol: Some("USDC".into()),
///     },
/// ];
/// let features = aggregate(&records);
/// assert_eq!(features.len(), 1);
/// assert_eq!(features[0].wallet_age_days, 7);
/// assert_eq!(features[0].unique_assets_used, 1);
/// assert_eq!(features[0].repayment_ratio, 1.0);
/// ```
pub fn aggregate(records: &[TransactionRecord]) -> Vec<UserFeatureVector> {
    let mut wallets: BTreeMap<&str, WalletAccumulator<'_>> = BTreeMap::new();

    for record in records {
        wallets
            .entry(record.user_id.as_str())
            .or_insert_with(|| WalletAccumulator::new(record.timestamp))
            .push(record);
    }

    debug!(records = records.len(), wallets = wallets.len(), "aggregated wallet features");

    wallets
        .into_iter()
        .map(|(user_id, acc)| acc.finish(user_id))
        .collect()
}
