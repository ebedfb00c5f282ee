//! Path segment grammar.
//!
//! A segment is either a bare key or `key[index]`, where `key` is made of
//! ASCII word characters and `index` is a non-negative decimal integer.
//! Any other segment containing a bracket is malformed.

use std::sync::OnceLock;

use regex_lite::Regex;

use crate::Miss;

/// One dot-separated unit of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Plain map lookup.
    Key(&'a str),
    /// Map lookup followed by a list index.
    Index { key: &'a str, index: usize },
}

fn indexed_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\w+)\[(\d+)\]$").expect("indexed segment pattern is valid")
    })
}

impl<'a> Segment<'a> {
    /// Parse a single segment.
    pub fn parse(raw: &'a str) -> Result<Self, Miss> {
        if let Some(caps) = indexed_pattern().captures(raw) {
            let (Some(key), Some(digits)) = (caps.get(1), caps.get(2)) else {
                return Err(Miss::malformed_segment(raw));
            };
            // Digits too large for usize cannot address any list
            let index = digits
                .as_str()
                .parse::<usize>()
                .map_err(|_| Miss::malformed_segment(raw))?;
            return Ok(Segment::Index {
                key: key.as_str(),
                index,
            });
        }

        if raw.contains(['[', ']']) {
            return Err(Miss::malformed_segment(raw));
        }

        Ok(Segment::Key(raw))
    }

    /// The map key this segment looks up.
    pub fn key(&self) -> &'a str {
        match self {
            Segment::Key(key) => key,
            Segment::Index { key, .. } => key,
        }
    }
}
