//! Input loading and output writing.
//!
//! The input must be a JSON array; its elements are returned untouched for
//! the normalizer to validate. The output table is rendered in memory and
//! written with a single call, so a failed run leaves no file behind.

use std::io::ErrorKind;
use std::path::Path;

use lendscore_core::error::LendscoreError;
use lendscore_core::ScoredUser;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Output table header, in column order.
pub const OUTPUT_HEADER: [&str; 2] = ["user_id", "final_score"];

/// One row of the output table.
#[derive(Serialize, Debug)]
struct ScoreRow<'a> {
    user_id: &'a str,
    final_score: u16,
}

/// Read `path` and parse it as a JSON array of elements.
pub fn load_elements(path: &Path) -> Result<Vec<Value>, LendscoreError> {
    let shown = path.display().to_string();
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LendscoreError::InputNotFound(shown.clone()),
        _ => LendscoreError::Read {
            path: shown.clone(),
            reason: e.to_string(),
        },
    })?;

    let elements: Vec<Value> = serde_json::from_slice(&bytes).map_err(|e| LendscoreError::MalformedInput {
        path: shown.clone(),
        reason: e.to_string(),
    })?;

    debug!(path = %shown, elements = elements.len(), "loaded input");
    Ok(elements)
}

/// Render scores as CSV with a header row, even when there are no scores.
pub fn render_csv(scores: &[ScoredUser]) -> Result<Vec<u8>, csv::Error> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(vec![]);
    wtr.write_record(OUTPUT_HEADER)?;
    for score in scores {
        wtr.serialize(ScoreRow {
            user_id: &score.user_id,
            final_score: score.final_score,
        })?;
    }
    wtr.into_inner().map_err(|e| csv::Error::from(e.into_error()))
}

/// Write the score table to `path`, replacing any existing file.
pub fn write_scores(path: &Path, scores: &[ScoredUser]) -> Result<(), LendscoreError> {
    let output_error = |reason: String| LendscoreError::Output {
        path: path.display().to_string(),
        reason,
    };

    let table = render_csv(scores).map_err(|e| output_error(e.to_string()))?;
    std::fs::write(path, table).map_err(|e| output_error(e.to_string()))?;

    debug!(path = %path.display(), rows = scores.len(), "wrote score table");
    Ok(())
}
