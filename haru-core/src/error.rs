//! Error types for the Haru interpreter.

use thiserror::Error;

/// Errors surfaced to the embedding application.
///
/// Interpretation itself never errors: unrecognized input and failed
/// commands come back as `CommandResult { success: false, .. }`. This enum
/// covers caller-side configuration mistakes only.
#[derive(Error, Debug)]
pub enum HaruError {
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Invalid working window: {0}")]
    InvalidWorkingWindow(String),
}

/// Result type alias for haru operations.
pub type HaruResult<T> = Result<T, HaruError>;
