//! lendscore-cli: score lending-protocol wallets from a transaction file.
//!
//! Reads a JSON array of wallet transactions, scores every wallet on a
//! 0–1000 scale, and writes a `user_id,final_score` CSV table.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use lendscore_pipeline::{run, RunConfig, DEFAULT_OUTPUT_FILE};
use tracing::{error, info};

/// Generate credit scores for lending-protocol wallets from transaction data.
#[derive(Parser, Debug)]
#[command(name = "lendscore-cli", version)]
struct Args {
    /// Path to the input JSON transaction file
    input_file: PathBuf,

    /// Path to save the output CSV file
    #[arg(short, long, visible_alias = "output_file", default_value = DEFAULT_OUTPUT_FILE)]
    output_file: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log output format ("text" or "json")
    #[arg(long, default_value = "text")]
    log_format: String,
}

impl Args {
    /// Convert CLI args into a RunConfig.
    fn into_config(self) -> RunConfig {
        RunConfig {
            output_path: self.output_file,
            log_level: self.log_level,
            log_format: self.log_format,
            ..RunConfig::new(self.input_file)
        }
    }
}

fn main() {
    let config = Args::parse().into_config();

    init_logging(&config.log_level, config.json_logs());

    info!("lendscore v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = score(&config) {
        error!("{e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn score(config: &RunConfig) -> Result<()> {
    let output = run(config).context("scoring run aborted")?;

    if let Some(bounds) = output.summary.bounds {
        info!(
            wallets = output.summary.wallets,
            min_raw = bounds.min,
            max_raw = bounds.max,
            "raw score range"
        );
    }
    info!("Success! Scores saved to '{}'", config.output_path.display());
    Ok(())
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// Logs go to stderr. `RUST_LOG` takes precedence over `level_str`.
fn init_logging(level_str: &str, json: bool) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_str));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .init();
    }
}
