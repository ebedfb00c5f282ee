//! Resolution-miss reasons.
//!
//! A miss is an ordinary outcome, not a failure: callers branch on it to
//! decide between mutating and doing nothing. The reason exists for logging.

use thiserror::Error;

/// Why a path did not reach a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Miss {
    #[error("malformed segment '{segment}'")]
    MalformedSegment { segment: String },

    #[error("key '{key}' not found")]
    KeyNotFound { key: String },

    #[error("cannot look up '{segment}' in a {found} value")]
    NotAMap { segment: String, found: &'static str },

    #[error("'{key}' is a {found}, not a list")]
    NotAList { key: String, found: &'static str },

    #[error("index {index} out of bounds for '{key}' (length {len})")]
    IndexOutOfBounds { key: String, index: usize, len: usize },
}

impl Miss {
    pub fn malformed_segment(segment: impl Into<String>) -> Self {
        Self::MalformedSegment {
            segment: segment.into(),
        }
    }

    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    pub fn not_a_map(segment: impl Into<String>, found: &'static str) -> Self {
        Self::NotAMap {
            segment: segment.into(),
            found,
        }
    }

    pub fn not_a_list(key: impl Into<String>, found: &'static str) -> Self {
        Self::NotAList {
            key: key.into(),
            found,
        }
    }

    pub fn index_out_of_bounds(key: impl Into<String>, index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds {
            key: key.into(),
            index,
            len,
        }
    }
}
