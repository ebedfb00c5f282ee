//! Core error types.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while materializing a record from a payload.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload top level must be an object, got {actual}")]
    NotAnObject { actual: String },
}

impl CoreError {
    pub fn not_an_object(actual: impl Into<String>) -> Self {
        Self::NotAnObject {
            actual: actual.into(),
        }
    }
}
