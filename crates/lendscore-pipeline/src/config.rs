//! Run configuration for a scoring pass.
//!
//! Provides [`RunConfig`]: the input file, where the score table goes, and
//! how the binary should log. Built from command-line arguments; nothing is
//! read from the environment or persisted between runs.

use std::path::PathBuf;

/// Output table path used when none is given.
pub const DEFAULT_OUTPUT_FILE: &str = "wallet_scores.csv";

/// Configuration for one scoring run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// JSON file holding the array of transaction records.
    pub input_path: PathBuf,
    /// CSV file the scores are written to.
    pub output_path: PathBuf,
    /// Log level filter string (e.g. "info", "debug", "lendscore_core=trace").
    pub log_level: String,
    /// Log output format, "text" or "json".
    pub log_format: String,
}

impl RunConfig {
    /// Configuration for `input_path` with default output and logging.
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    /// True when logs should be emitted as JSON lines.
    pub fn json_logs(&self) -> bool {
        self.log_format == "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_file() {
        let cfg = RunConfig::new("txs.json");
        assert_eq!(cfg.output_path, PathBuf::from("wallet_scores.csv"));
    }

    #[test]
    fn keeps_input_path() {
        let cfg = RunConfig::new("/data/user-wallet-transactions.json");
        assert_eq!(cfg.input_path, PathBuf::from("/data/user-wallet-transactions.json"));
    }

    #[test]
    fn default_log_level_is_info() {
        let cfg = RunConfig::new("txs.json");
        assert_eq!(cfg.log_level, "info");
        assert!(!cfg.json_logs());
    }

    #[test]
    fn json_log_format() {
        let cfg = RunConfig {
            log_format: "json".to_string(),
            ..RunConfig::new("txs.json")
        };
        assert!(cfg.json_logs());
    }

    #[test]
    fn custom_output_path() {
        let cfg = RunConfig {
            output_path: PathBuf::from("/tmp/out.csv"),
            ..RunConfig::new("txs.json")
        };
        assert_eq!(cfg.output_path, PathBuf::from("/tmp/out.csv"));
    }
}
