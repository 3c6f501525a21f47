//! # lendscore-pipeline
//! Run composition: load a JSON transaction file, score every wallet, and
//! write the `user_id,final_score` table.

pub mod config;
pub mod io;
pub mod pipeline;

pub use config::{RunConfig, DEFAULT_OUTPUT_FILE};
pub use pipeline::{run, score_values, RunOutput};
