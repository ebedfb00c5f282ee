//! Session configuration.
//!
//! Loaded from TOML. Every field has a default so a config file only needs
//! to name what differs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SessionError, SessionResult};

/// Configuration for a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Topic the session consumes; also the source tag stamped on records.
    pub topic: String,
    /// Consumer group name.
    pub group: String,
    /// Broker address.
    pub broker: String,
    /// Key the outbound envelope wraps the record under.
    pub envelope_key: String,
    /// Reuse parsed scripts across messages.
    pub cache_scripts: bool,
    /// Script store settings.
    pub store: StoreConfig,
    /// Sink settings.
    pub sink: SinkConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            topic: "myTopic".to_string(),
            group: "myGroup".to_string(),
            broker: "localhost:9092".to_string(),
            envelope_key: morph_core::messages::DEFAULT_ENVELOPE_KEY.to_string(),
            cache_scripts: true,
            store: StoreConfig::default(),
            sink: SinkConfig::default(),
        }
    }
}

/// Where scripts are looked up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// JSON file holding the script documents.
    pub path: Option<PathBuf>,
    /// Database the scripts live in; reported at session start.
    pub database: String,
    /// Collection the scripts live in; reported at session start.
    pub collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: None,
            database: "myapp_development".to_string(),
            collection: "sources".to_string(),
        }
    }
}

/// Sink transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Stdout,
    Http,
}

/// Output format for the stdout sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One compact JSON document per line.
    #[default]
    Jsonl,
    /// Pretty-printed JSON.
    Json,
}

/// Where records are forwarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    pub kind: SinkKind,
    /// Endpoint for the HTTP sink.
    pub url: String,
    /// Request timeout for the HTTP sink, in seconds.
    pub timeout_secs: u64,
    pub output_format: OutputFormat,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            kind: SinkKind::Stdout,
            url: String::new(),
            timeout_secs: 30,
            output_format: OutputFormat::Jsonl,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> SessionResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| SessionError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> SessionResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            SessionError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Check that the settings are usable together.
    pub fn validate(&self) -> SessionResult<()> {
        if self.envelope_key.is_empty() {
            return Err(SessionError::config("envelope_key must not be empty"));
        }
        if self.sink.kind == SinkKind::Http && self.sink.url.is_empty() {
            return Err(SessionError::config("http sink requires sink.url"));
        }
        if self.sink.timeout_secs == 0 {
            return Err(SessionError::config("sink.timeout_secs must be positive"));
        }
        Ok(())
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    pub fn with_envelope_key(mut self, key: impl Into<String>) -> Self {
        self.envelope_key = key.into();
        self
    }

    pub fn with_cache_scripts(mut self, enabled: bool) -> Self {
        self.cache_scripts = enabled;
        self
    }

    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store.path = Some(path.into());
        self
    }

    pub fn with_sink_kind(mut self, kind: SinkKind) -> Self {
        self.sink.kind = kind;
        self
    }

    pub fn with_sink_url(mut self, url: impl Into<String>) -> Self {
        self.sink.url = url.into();
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.sink.output_format = format;
        self
    }
}
