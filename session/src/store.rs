//! Script stores.
//!
//! A store maps a source tag to the script text that reshapes records from
//! that source.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SessionError, SessionResult};

/// Looks up scripts by source tag.
pub trait ScriptStore {
    /// Script text for `source_tag`, or `None` if none is registered.
    fn fetch(&self, source_tag: &str) -> SessionResult<Option<String>>;
}

impl<S: ScriptStore + ?Sized> ScriptStore for Box<S> {
    fn fetch(&self, source_tag: &str) -> SessionResult<Option<String>> {
        (**self).fetch(source_tag)
    }
}

/// One stored script document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptDocument {
    /// Source tag the script applies to.
    pub source: String,
    /// Script text.
    pub transformer: String,
}

/// Store backed by a JSON array of [`ScriptDocument`]s.
///
/// When several documents share a source, the first one wins.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    scripts: HashMap<String, String>,
}

impl DocumentStore {
    /// Build a store from documents.
    pub fn from_documents(documents: impl IntoIterator<Item = ScriptDocument>) -> Self {
        let mut scripts = HashMap::new();
        for doc in documents {
            scripts.entry(doc.source).or_insert(doc.transformer);
        }
        Self { scripts }
    }

    /// Parse documents from JSON text.
    pub fn from_json_str(text: &str) -> SessionResult<Self> {
        let documents: Vec<ScriptDocument> =
            serde_json::from_str(text).map_err(|e| SessionError::store(e.to_string()))?;
        Ok(Self::from_documents(documents))
    }

    /// Load documents from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SessionResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| SessionError::store(format!("cannot read {}: {}", path.display(), e)))?;
        let store = Self::from_json_str(&text)
            .map_err(|e| SessionError::store(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), scripts = store.len(), "script store loaded");
        Ok(store)
    }

    /// Number of distinct sources with a script.
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}

impl ScriptStore for DocumentStore {
    fn fetch(&self, source_tag: &str) -> SessionResult<Option<String>> {
        Ok(self.scripts.get(source_tag).cloned())
    }
}

/// Mutable in-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    scripts: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script(mut self, source_tag: impl Into<String>, script: impl Into<String>) -> Self {
        self.insert(source_tag, script);
        self
    }

    /// Register or replace the script for `source_tag`.
    pub fn insert(&mut self, source_tag: impl Into<String>, script: impl Into<String>) {
        self.scripts.insert(source_tag.into(), script.into());
    }

    pub fn remove(&mut self, source_tag: &str) -> Option<String> {
        self.scripts.remove(source_tag)
    }
}

impl ScriptStore for MemoryStore {
    fn fetch(&self, source_tag: &str) -> SessionResult<Option<String>> {
        Ok(self.scripts.get(source_tag).cloned())
    }
}
