//! Criterion benchmarks for lendscore-score.
//!
//! Covers: single raw score evaluation and whole-population scoring.

use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lendscore_core::traits::CreditModel;
use lendscore_core::{ActionTable, ActionType, UserFeatureVector};
use lendscore_score::{rescale, score_population, HeuristicModel};

fn wallet(i: u64) -> UserFeatureVector {
    let mut activity = ActionTable::default();
    activity.record(ActionType::Deposit, (i * 100) as f64);
    activity.record(ActionType::Borrow, (i * 37 % 1_000) as f64);
    if i % 17 == 0 {
        activity.record(ActionType::LiquidationCall, 1.0);
    }
    UserFeatureVector {
        user_id: format!("0x{i:040x}"),
        activity,
        other_activity: BTreeMap::new(),
        wallet_age_days: i % 900,
        unique_assets_used: i % 6,
        repayment_ratio: (i % 100) as f64 / 100.0,
        borrow_to_deposit_ratio: (i % 13) as f64 / 4.0,
    }
}

fn bench_raw_score(c: &mut Criterion) {
    let model = HeuristicModel::new();
    let features = wallet(4_242);

    c.bench_function("raw_score", |b| {
        b.iter(|| model.raw_score(black_box(&features)))
    });
}

fn bench_rescale(c: &mut Criterion) {
    let raw: Vec<f64> = (0..100_000).map(|i| (i as f64 * 7.31) % 1_250.0 - 500.0).collect();

    c.bench_function("rescale_100k", |b| {
        b.iter(|| rescale(black_box(&raw)))
    });
}

fn bench_score_population(c: &mut Criterion) {
    let model = HeuristicModel::new();
    let population: Vec<UserFeatureVector> = (1..=10_000).map(wallet).collect();

    c.bench_function("score_population_10k", |b| {
        b.iter(|| score_population(&model, black_box(&population)))
    });
}

criterion_group!(benches, bench_raw_score, bench_rescale, bench_score_population);
criterion_main!(benches);
