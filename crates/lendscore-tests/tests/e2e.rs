//! End-to-end scenario tests for lendscore.
//!
//! Each test feeds raw input elements (in the exported transaction shape)
//! through the normalizer, aggregator and calculator, or through a full
//! file-to-file run.

use std::fs;

use lendscore_core::constants::DEGENERATE_FINAL_SCORE;
use lendscore_core::error::{LendscoreError, RecordError};
use lendscore_core::{aggregate, normalize, ActionType};
use lendscore_pipeline::{run, score_values, RunConfig};
use lendscore_tests::helpers::*;
use serde_json::json;

#[test]
fn deposit_then_repay_seven_days_later() {
    let (records, report) = normalize(vec![
        element("0xw", 0, "Deposit", "100", "USDC"),
        element("0xw", 7, "Repay", "50", "USDC"),
    ]);
    assert_eq!(report.kept, 2);

    let features = aggregate(&records);
    assert_eq!(features.len(), 1);
    let f = &features[0];
    assert_eq!(f.wallet_age_days, 7);
    assert_eq!(f.unique_assets_used, 1);
    assert_eq!(f.count(ActionType::Deposit), 1);
    assert_eq!(f.sum(ActionType::Deposit), 100.0);
    assert_eq!(f.count(ActionType::Repay), 1);
    assert_eq!(f.sum(ActionType::Repay), 50.0);
    // No Borrow history: 50 / 1, clamped to 1.0.
    assert_eq!(f.repayment_ratio, 1.0);
}

#[test]
fn liquidation_costs_exactly_250_raw_points() {
    let output = score_values(vec![
        element("0xx", 0, "Deposit", "1000", "USDC"),
        element("0xx", 30, "Borrow", "400", "USDC"),
        element("0xx", 30, "LiquidationCall", "400", "USDC"),
        element("0xy", 0, "Deposit", "1000", "USDC"),
        element("0xy", 30, "Borrow", "400", "USDC"),
    ]);
    let x = by_user(&output.scores, "0xx", |s| s.user_id.as_str());
    let y = by_user(&output.scores, "0xy", |s| s.user_id.as_str());

    let gap = y.credit_score - x.credit_score;
    assert!((gap - 250.0).abs() < 1e-9, "gap was {gap}");
    assert_eq!(x.final_score, 0);
    assert_eq!(y.final_score, 1000);
}

#[test]
fn single_wallet_batch_gets_documented_score() {
    let output = score_values(vec![
        element("0xonly", 0, "Deposit", "5", "DAI"),
        element("0xonly", 3, "Borrow", "2", "DAI"),
    ]);
    assert_eq!(output.scores.len(), 1);
    assert_eq!(output.scores[0].final_score, DEGENERATE_FINAL_SCORE);
    assert!(output.summary.is_degenerate());
}

#[test]
fn every_action_column_exists_without_any_weighted_actions() {
    let (records, _) = normalize(vec![
        element("0xa", 0, "FlashLoan", "10", "DAI"),
        element("0xb", 1, "Swap", "3", "WETH"),
    ]);
    for f in aggregate(&records) {
        for action in ActionType::ALL {
            assert_eq!(f.count(action), 0, "{} count_{action}", f.user_id);
            assert_eq!(f.sum(action), 0.0, "{} sum_{action}", f.user_id);
        }
        assert_eq!(f.repayment_ratio, 0.0);
        assert_eq!(f.borrow_to_deposit_ratio, 0.0);
        assert_eq!(f.other_activity.len(), 1);
    }
}

#[test]
fn bad_record_only_affects_nobody_else() {
    let clean = vec![
        element("0xa", 0, "Deposit", "100", "USDC"),
        element("0xb", 0, "Borrow", "20", "DAI"),
        element("0xb", 2, "Repay", "20", "DAI"),
    ];
    let mut dirty = clean.clone();
    dirty.push(element("0xb", 9, "Deposit", "twenty", "WETH"));
    dirty.push(element("0xc", 9, "Deposit", "", "WETH"));

    let (clean_records, _) = normalize(clean);
    let (dirty_records, report) = normalize(dirty);
    assert_eq!(report.dropped[&RecordError::NonNumericAmount], 2);
    assert_eq!(aggregate(&clean_records), aggregate(&dirty_records));
}

#[test]
fn numeric_amounts_and_string_amounts_agree() {
    let as_string = score_values(vec![
        element("0xa", 0, "Deposit", "250.5", "USDC"),
        element("0xb", 0, "Borrow", "10", "USDC"),
    ]);
    let mut numeric = vec![
        element("0xa", 0, "Deposit", "0", "USDC"),
        element("0xb", 0, "Borrow", "0", "USDC"),
    ];
    numeric[0]["actionData"]["amount"] = json!(250.5);
    numeric[1]["actionData"]["amount"] = json!(10);
    let as_number = score_values(numeric);

    assert_eq!(as_string.scores, as_number.scores);
}

#[test]
fn file_run_writes_one_row_per_wallet() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("user-wallet-transactions.json");
    let output = dir.path().join("wallet_scores.csv");

    let mut elements = Vec::new();
    for (i, wallet) in ["0x01", "0x02", "0x03", "0x04"].iter().enumerate() {
        let i = i as i64;
        elements.push(element(wallet, 0, "Deposit", &format!("{}", 1_000 * (i + 1)), "USDC"));
        elements.push(element(wallet, 10 * i, "Borrow", &format!("{}", 300 * i), "WETH"));
        elements.push(element(wallet, 20 * i, "Repay", &format!("{}", 100 * i), "WETH"));
    }
    elements.push(element("0x04", 50, "LiquidationCall", "1", "WETH"));
    elements.push(json!({"userWallet": "0x05", "timestamp": "garbage"}));
    fs::write(&input, serde_json::to_string_pretty(&elements).unwrap()).unwrap();

    let config = RunConfig {
        output_path: output.clone(),
        ..RunConfig::new(&input)
    };
    let result = run(&config).unwrap();
    assert_eq!(result.records.dropped_total(), 1);

    let table = fs::read_to_string(&output).unwrap();
    let mut lines = table.lines();
    assert_eq!(lines.next(), Some("user_id,final_score"));

    let rows: Vec<(String, u16)> = lines
        .map(|line| {
            let (user, score) = line.split_once(',').unwrap();
            (user.to_string(), score.parse().unwrap())
        })
        .collect();
    let users: Vec<&str> = rows.iter().map(|(u, _)| u.as_str()).collect();
    assert_eq!(users, vec!["0x01", "0x02", "0x03", "0x04"]);
    assert!(rows.iter().all(|(_, s)| *s <= 1000));
    assert!(rows.iter().any(|(_, s)| *s == 0));
    assert!(rows.iter().any(|(_, s)| *s == 1000));
    // 0x04 is the only liquidated wallet and scores lowest.
    assert_eq!(by_user(&rows, "0x04", |r| r.0.as_str()).1, 0);
}

#[test]
fn file_run_rejects_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.json");
    fs::write(&input, "[{\"userWallet\": \"0xa\",").unwrap();
    let config = RunConfig {
        output_path: dir.path().join("out.csv"),
        ..RunConfig::new(&input)
    };

    let err = run(&config).unwrap_err();
    assert!(matches!(err, LendscoreError::MalformedInput { .. }));
    assert!(err.to_string().starts_with("the JSON file '"));
    assert!(!config.output_path.exists());
}

#[test]
fn file_run_rejects_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nope.json");
    let config = RunConfig {
        output_path: dir.path().join("out.csv"),
        ..RunConfig::new(&input)
    };

    let err = run(&config).unwrap_err();
    assert_eq!(err, LendscoreError::InputNotFound(input.display().to_string()));
    assert!(!config.output_path.exists());
}
