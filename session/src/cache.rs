//! Parsed-script cache.
//!
//! Scripts change rarely compared to how often messages arrive, so parsed
//! scripts are kept per source tag. An entry is reused only while the stored
//! text is unchanged.

use std::collections::HashMap;
use std::sync::Arc;

use morph_parser::{parse_script, Script};

#[derive(Debug)]
struct CacheEntry {
    text: String,
    script: Arc<Script>,
}

/// Cache of parsed scripts keyed by `(source tag, script text)`.
#[derive(Debug, Default)]
pub struct ScriptCache {
    entries: HashMap<String, CacheEntry>,
    hits: u64,
    misses: u64,
}

impl ScriptCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parsed form of `text`, reusing the entry for `source_tag` when the
    /// text matches.
    pub fn get_or_parse(&mut self, source_tag: &str, text: &str) -> Arc<Script> {
        if let Some(entry) = self.entries.get(source_tag) {
            if entry.text == text {
                self.hits += 1;
                return Arc::clone(&entry.script);
            }
        }

        self.misses += 1;
        let script = Arc::new(parse_script(text));
        self.entries.insert(
            source_tag.to_string(),
            CacheEntry {
                text: text.to_string(),
                script: Arc::clone(&script),
            },
        );
        script
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
