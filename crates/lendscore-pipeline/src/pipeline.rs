//! End-to-end scoring run: Normalizer -> Aggregator -> Calculator -> table.

use lendscore_core::error::LendscoreError;
use lendscore_core::{aggregate, normalize, NormalizeReport, ScoredUser};
use lendscore_score::{score_population, HeuristicModel, ScoreSummary};
use serde_json::Value;
use tracing::info;

use crate::config::RunConfig;
use crate::io::{load_elements, write_scores};

/// Everything a run produced besides the written file.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// One entry per wallet, ascending by `user_id`.
    pub scores: Vec<ScoredUser>,
    /// How many input elements were kept or dropped.
    pub records: NormalizeReport,
    pub summary: ScoreSummary,
}

/// Score already-loaded input elements. Never fails: bad elements are
/// dropped by the normalizer.
pub fn score_values(elements: Vec<Value>) -> RunOutput {
    let (records, report) = normalize(elements);
    info!(kept = report.kept, dropped = report.dropped_total(), "normalized transactions");

    info!("engineering features");
    let features = aggregate(&records);

    let (scores, summary) = score_population(&HeuristicModel::new(), &features);

    RunOutput {
        scores,
        records: report,
        summary,
    }
}

/// Run the full pipeline from `config.input_path` to `config.output_path`.
///
/// Fails only when the input is missing or is not a JSON array, or when the
/// output cannot be written. Nothing is written unless scoring completed.
pub fn run(config: &RunConfig) -> Result<RunOutput, LendscoreError> {
    info!(input = %config.input_path.display(), "loading transactions");
    let elements = load_elements(&config.input_path)?;

    let output = score_values(elements);

    info!(output = %config.output_path.display(), "saving scores");
    write_scores(&config.output_path, &output.scores)?;
    info!(wallets = output.scores.len(), output = %config.output_path.display(), "scores saved");

    Ok(output)
}
