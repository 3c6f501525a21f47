//! Shared test helpers for E2E and property tests.

use serde_json::{json, Value};

/// Seconds in a day.
pub const DAY: i64 = 86_400;

/// Epoch seconds used as "day zero" by the fixtures (2021-08-17).
pub const T0: i64 = 1_629_178_166;

/// Build a raw input element in the exported transaction shape, including
/// the extra fields real exports carry.
pub fn element(user: &str, day: i64, action: &str, amount: &str, asset: &str) -> Value {
    json!({
        "_id": { "$oid": format!("{user}-{day}-{action}") },
        "userWallet": user,
        "network": "polygon",
        "protocol": "aave_v2",
        "txHash": format!("0x{:064x}", day.unsigned_abs()),
        "logId": format!("{day}_0"),
        "timestamp": T0 + day * DAY,
        "blockNumber": 1_629_178_166 + day,
        "action": action.to_lowercase(),
        "actionData": {
            "type": action,
            "amount": amount,
            "assetSymbol": asset,
            "assetPriceUSD": "1.0",
            "poolId": "0x2791bca1f2de4661ed88a30c99a7a9449aa84174",
            "userId": user
        }
    })
}

/// Look up a wallet's entry by id.
pub fn by_user<'a, T>(items: &'a [T], user: &str, id: impl Fn(&T) -> &str) -> &'a T {
    items
        .iter()
        .find(|item| id(item) == user)
        .unwrap_or_else(|| panic!("wallet {user} not found"))
}
