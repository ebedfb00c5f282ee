//! Session error types.

use thiserror::Error;

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Payload could not be decoded into a record.
    #[error("decode error: {0}")]
    Decode(#[from] morph_core::CoreError),

    /// Script store failure.
    #[error("script store error: {message}")]
    Store { message: String },

    /// Sink failure.
    #[error("sink error: {message}")]
    Sink { message: String },

    /// Message source failure.
    #[error("source error: {message}")]
    Source { message: String },

    /// Invalid configuration.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    pub fn sink(message: impl Into<String>) -> Self {
        Self::Sink {
            message: message.into(),
        }
    }

    pub fn source(message: impl Into<String>) -> Self {
        Self::Source {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Returns true if this error concerns a single message rather than
    /// the session as a whole.
    pub fn is_per_message(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
