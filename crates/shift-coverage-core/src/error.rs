//! Error types for shift-coverage-core.

use thiserror::Error;

/// Top-level error type for the coverage engine.
///
/// The coverage pipeline itself is total: malformed shifts and services are
/// excluded or downgraded (see the calculator and resolver), never raised.
/// These variants cover genuinely invalid API use, such as feeding an
/// unparsable time-of-day string to [`crate::types::DailyWindow::parse`].
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid time of day '{value}': {message}")]
    InvalidTimeOfDay { value: String, message: String },

    #[error("Validation error: {field} - {message}")]
    ValidationError { field: String, message: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::SerializationError(err.to_string())
    }
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
