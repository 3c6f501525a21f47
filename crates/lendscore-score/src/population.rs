//! Whole-population scoring: raw scores first, then rescaling.

use lendscore_core::traits::CreditModel;
use lendscore_core::{ScoredUser, UserFeatureVector};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::rescale::ScoreBounds;

/// Shape of one scoring run, for logs and callers that want the raw range.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ScoreSummary {
    /// Number of wallets scored.
    pub wallets: usize,
    /// Raw score range; `None` for an empty population.
    pub bounds: Option<ScoreBounds>,
}

impl ScoreSummary {
    /// True when every wallet received the fixed degenerate score.
    pub fn is_degenerate(&self) -> bool {
        self.bounds.is_some_and(|b| b.is_degenerate())
    }
}

/// Score every wallet with `model`, then rescale against the population.
///
/// The rescaling pass cannot start until all raw scores are known, so this
/// collects them into a vector before mapping. Output order follows
/// `features`.
pub fn score_population<M: CreditModel + ?Sized>(
    model: &M,
    features: &[UserFeatureVector],
) -> (Vec<ScoredUser>, ScoreSummary) {
    // Pass 1: raw scores.
    let raw_scores: Vec<f64> = features.iter().map(|f| model.raw_score(f)).collect();
    let bounds = ScoreBounds::of(&raw_scores);
    let summary = ScoreSummary {
        wallets: features.len(),
        bounds,
    };

    // Pass 2: rescale.
    let scored = features
        .iter()
        .zip(raw_scores)
        .map(|(f, credit_score)| ScoredUser {
            user_id: f.user_id.clone(),
            credit_score,
            final_score: bounds.map_or(0, |b| b.rescale(credit_score)),
        })
        .collect::<Vec<_>>();

    match bounds {
        Some(b) if b.is_degenerate() => {
            info!(wallets = summary.wallets, raw = b.min, "zero-width raw score range, all wallets get the degenerate score")
        }
        Some(b) => info!(wallets = summary.wallets, min_raw = b.min, max_raw = b.max, "rescaled credit scores"),
        None => debug!("no wallets to score"),
    }

    (scored, summary)
}
