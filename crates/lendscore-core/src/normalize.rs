//! Record normalizer: flattens raw lending events into [`TransactionRecord`]s.
//!
//! Raw input elements look like
//! `{userWallet, timestamp, actionData: {type, amount, assetSymbol}}`.
//! Each element is decoded into a [`RawRecord`] whose fields are all
//! optional, then validated. Elements that fail validation are dropped and
//! counted; this stage never fails as a whole.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::RecordError;
use crate::types::{ActionKind, TransactionRecord};

/// Undecoded-but-typed view of one input element.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    pub user_wallet: Option<String>,
    /// Epoch seconds as a number or numeric string.
    pub timestamp: Option<Value>,
    pub action_data: Option<RawActionData>,
}

/// Nested action details of a [`RawRecord`].
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawActionData {
    #[serde(rename = "type")]
    pub action_type: Option<String>,
    /// Number or numeric string.
    pub amount: Option<Value>,
    /// String symbol; numeric symbols are stringified, anything else is
    /// treated as absent.
    pub asset_symbol: Option<Value>,
}

impl RawRecord {
    /// Decode a JSON element. Non-objects and elements whose fields have the
    /// wrong JSON types are rejected.
    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        if !value.is_object() {
            return Err(RecordError::NotAnObject);
        }
        serde_json::from_value(value).map_err(|_| RecordError::Undecodable)
    }

    /// Validate and flatten into a [`TransactionRecord`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lendscore_core::normalize::RawRecord;
    /// use lendscore_core::error::RecordError;
    /// use serde_json::json;
    ///
    /// let raw = RawRecord::from_value(json!({
    ///     "userWallet": "0xabc",
    ///     "timestamp": 1_629_178_166,
    ///     "actionData": { "type": "Deposit", "amount": "2000000000", "assetSymbol": "USDC" }
    /// })).unwrap();
    /// let record = raw.validate().unwrap();
    /// assert_eq!(record.user_id, "0xabc");
    /// assert_eq!(record.amount, 2_000_000_000.0);
    ///
    /// let bad = RawRecord::from_value(json!({
    ///     "userWallet": "0xabc",
    ///     "timestamp": 1_629_178_166,
    ///     "actionData": { "type": "Deposit", "amount": "lots" }
    /// })).unwrap();
    /// assert_eq!(bad.validate(), Err(RecordError::NonNumericAmount));
    /// ```
    pub fn validate(self) -> Result<TransactionRecord, RecordError> {
        let user_id = self
            .user_wallet
            .filter(|wallet| !wallet.trim().is_empty())
            .ok_or(RecordError::MissingUser)?;
        let timestamp = parse_timestamp(self.timestamp.as_ref().ok_or(RecordError::MissingTimestamp)?)?;
        let data = self.action_data.ok_or(RecordError::MissingActionData)?;
        let action_type = data.action_type.ok_or(RecordError::MissingActionType)?;
        let amount = parse_amount(data.amount.as_ref().ok_or(RecordError::MissingAmount)?)
            .ok_or(RecordError::NonNumericAmount)?;

        Ok(TransactionRecord {
            user_id,
            timestamp,
            action: ActionKind::from_name(&action_type),
            amount,
            asset_symbol: data.asset_symbol.as_ref().and_then(parse_asset_symbol),
        })
    }
}

/// Decode and validate one JSON element.
pub fn normalize_value(value: Value) -> Result<TransactionRecord, RecordError> {
    RawRecord::from_value(value)?.validate()
}

/// Coerce an amount to a non-negative finite number.
///
/// Accepts JSON numbers and numeric strings (surrounding whitespace is
/// ignored). Returns `None` for anything else.
///
/// # Examples
///
/// ```
/// use lendscore_core::normalize::parse_amount;
/// use serde_json::json;
///
/// assert_eq!(parse_amount(&json!(12.5)), Some(12.5));
/// assert_eq!(parse_amount(&json!(" 1e3 ")), Some(1000.0));
/// assert_eq!(parse_amount(&json!("n/a")), None);
/// assert_eq!(parse_amount(&json!(-4)), None);
/// assert_eq!(parse_amount(&json!(null)), None);
/// ```
pub fn parse_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (amount.is_finite() && amount >= 0.0).then_some(amount)
}

/// Read an asset symbol. Only the asset count depends on it, so a symbol of
/// an odd JSON type never drops the record.
pub fn parse_asset_symbol(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Convert an epoch-seconds value to a UTC instant.
///
/// Fractional seconds are kept to nanosecond precision.
pub fn parse_timestamp(value: &Value) -> Result<DateTime<Utc>, RecordError> {
    let seconds = match value {
        Value::Number(n) => match n.as_i64() {
            Some(whole) => return DateTime::from_timestamp(whole, 0).ok_or(RecordError::InvalidTimestamp),
            None => n.as_f64().ok_or(RecordError::InvalidTimestamp)?,
        },
        Value::String(s) => {
            let s = s.trim();
            match s.parse::<i64>() {
                Ok(whole) => return DateTime::from_timestamp(whole, 0).ok_or(RecordError::InvalidTimestamp),
                Err(_) => s.parse::<f64>().map_err(|_| RecordError::InvalidTimestamp)?,
            }
        }
        Value::Null => return Err(RecordError::MissingTimestamp),
        _ => return Err(RecordError::InvalidTimestamp),
    };

    if !seconds.is_finite() || seconds.abs() >= i64::MAX as f64 {
        return Err(RecordError::InvalidTimestamp);
    }
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1e9) as u32;
    DateTime::from_timestamp(whole as i64, nanos.min(999_999_999)).ok_or(RecordError::InvalidTimestamp)
}

/// Outcome counts of a normalization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Elements seen.
    pub total: usize,
    /// Elements turned into records.
    pub kept: usize,
    /// Dropped elements per reason.
    pub dropped: BTreeMap<RecordError, usize>,
}

impl NormalizeReport {
    /// Total number of dropped elements.
    pub fn dropped_total(&self) -> usize {
        self.dropped.values().sum()
    }
}

/// Normalize a batch of raw JSON elements, keeping input order.
///
/// # Examples
///
/// ```
/// use lendscore_core::normalize;
/// use serde_json::json;
///
/// let (records, report) = normalize(vec![
///     json!({"userWallet": "a", "timestamp": 0, "actionData": {"type": "Borrow", "amount": "5"}}),
///     json!({"userWallet": "a", "timestamp": 0, "actionData": {"type": "Borrow", "amount": "?"}}),
///     json!(42),
/// ]);
/// assert_eq!(records.len(), 1);
/// assert_eq!(report.kept, 1);
/// assert_eq!(report.dropped_total(), 2);
/// ```
pub fn normalize(values: Vec<Value>) -> (Vec<TransactionRecord>, NormalizeReport) {
    let mut report = NormalizeReport {
        total: values.len(),
        ..NormalizeReport::default()
    };
    let mut records = Vec::with_capacity(values.len());

    for value in values {
        match normalize_value(value) {
            Ok(record) => records.push(record),
            Err(reason) => *report.dropped.entry(reason).or_default() += 1,
        }
    }
    report.kept = records.len();

    for (reason, count) in &report.dropped {
        warn!(%reason, count, "dropped input records");
    }
    debug!(total = report.total, kept = report.kept, "normalized records");

    (records, report)
}
