//! Skip reasons.
//!
//! The engine never fails. A command that cannot take effect is skipped and
//! the reason is recorded so callers can log it.

use morph_path::Miss;
use thiserror::Error;

/// Why a command had no effect on the record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("unknown action '{word}'")]
    UnknownAction { word: String },

    #[error("expected {expected} argument(s), got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    #[error("field '{field}' not present")]
    MissingField { field: String },

    #[error("path '{path}' not resolved: {miss}")]
    PathMiss { path: String, miss: Miss },
}

impl SkipReason {
    pub fn unknown_action(word: impl Into<String>) -> Self {
        Self::UnknownAction { word: word.into() }
    }

    pub fn arity_mismatch(expected: usize, actual: usize) -> Self {
        Self::ArityMismatch { expected, actual }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn path_miss(path: impl Into<String>, miss: Miss) -> Self {
        Self::PathMiss {
            path: path.into(),
            miss,
        }
    }

    /// True when the command itself is malformed, regardless of the record.
    pub fn is_script_defect(&self) -> bool {
        matches!(
            self,
            SkipReason::UnknownAction { .. } | SkipReason::ArityMismatch { .. }
        )
    }
}
