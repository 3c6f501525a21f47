//! Error types for lendscore.
use thiserror::Error;

/// Why a raw input element was left out of the normalized record set.
///
/// None of these are fatal: the normalizer counts them and moves on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordError {
    #[error("element is not an object")] NotAnObject,
    #[error("fields have unexpected types")] Undecodable,
    #[error("missing wallet identifier")] MissingUser,
    #[error("missing timestamp")] MissingTimestamp,
    #[error("timestamp is not a valid epoch-seconds value")] InvalidTimestamp,
    #[error("missing action data")] MissingActionData,
    #[error("missing action type")] MissingActionType,
    #[error("missing amount")] MissingAmount,
    #[error("amount is not a non-negative number")] NonNumericAmount,
}

/// Fatal errors that abort a scoring run before any output is written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LendscoreError {
    #[error("the file '{0}' was not found")] InputNotFound(String),
    #[error("the JSON file '{path}' is malformed: {reason}")] MalformedInput { path: String, reason: String },
    #[error("failed to read '{path}': {reason}")] Read { path: String, reason: String },
    #[error("failed to write '{path}': {reason}")] Output { path: String, reason: String },
}
