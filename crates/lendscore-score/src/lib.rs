//! # lendscore-score
//! Credit score calculator.
//!
//! Scoring runs in two passes:
//! - **Raw score**: a fixed additive heuristic per wallet
//!   ([`HeuristicModel`]): liquidations cost 250 points each, wallet age earns
//!   `20 * ln(1 + days)`, full repayment earns 150, leverage costs 100 per
//!   unit of borrow-to-deposit ratio, and each distinct asset earns 10.
//! - **Rescaling**: once every wallet has a raw score, the population's
//!   minimum and maximum define a linear map onto `0..=1000`
//!   ([`ScoreBounds`]). A zero-width range maps everyone to
//!   [`DEGENERATE_FINAL_SCORE`](lendscore_core::constants::DEGENERATE_FINAL_SCORE).

pub mod model;
pub mod population;
pub mod rescale;

pub use model::HeuristicModel;
pub use population::{score_population, ScoreSummary};
pub use rescale::{rescale, ScoreBounds};
