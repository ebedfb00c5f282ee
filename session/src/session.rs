//! Session driver.
//!
//! For every message: look up the script for its source, decode the payload,
//! apply the script, wrap the record in the envelope, forward it and commit.

use std::sync::Arc;

use morph_core::{record_from_slice, record_to_json, Record};
use morph_mutation::{apply_with_report, ApplyReport};
use morph_parser::{parse_script, Script};
use tracing::{debug, error, info, warn};

use crate::cache::ScriptCache;
use crate::config::SessionConfig;
use crate::error::SessionResult;
use crate::result::{Processed, SessionStats};
use crate::sink::Sink;
use crate::source::{Message, MessageSource};
use crate::store::ScriptStore;

/// A MORPH session.
pub struct Session<St, Sk> {
    config: SessionConfig,
    store: St,
    sink: Sk,
    cache: Option<ScriptCache>,
    stats: SessionStats,
}

impl<St: ScriptStore, Sk: Sink> Session<St, Sk> {
    /// Create a new session.
    pub fn new(config: SessionConfig, store: St, sink: Sk) -> Self {
        let cache = config.cache_scripts.then(ScriptCache::new);
        Self {
            config,
            store,
            sink,
            cache,
            stats: SessionStats::default(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn store(&self) -> &St {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut St {
        &mut self.store
    }

    pub fn sink(&self) -> &Sk {
        &self.sink
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// The parsed-script cache, if caching is enabled.
    pub fn cache(&self) -> Option<&ScriptCache> {
        self.cache.as_ref()
    }

    /// Consume messages until the source is exhausted.
    ///
    /// Undecodable payloads are committed and skipped. Any other error ends
    /// the run; the failing message is left uncommitted.
    pub fn run<S: MessageSource + ?Sized>(&mut self, source: &mut S) -> SessionResult<SessionStats> {
        info!(
            topic = %self.config.topic,
            group = %self.config.group,
            broker = %self.config.broker,
            database = %self.config.store.database,
            collection = %self.config.store.collection,
            "session started"
        );

        while let Some(message) = source.next_message()? {
            self.stats.received += 1;
            match self.process(&message) {
                Ok(_) => {
                    self.stats.forwarded += 1;
                }
                Err(e) if e.is_per_message() => {
                    warn!(
                        source = %message.source_tag,
                        offset = message.offset,
                        error = %e,
                        "skipping message"
                    );
                    self.stats.skipped += 1;
                }
                Err(e) => {
                    error!(
                        source = %message.source_tag,
                        offset = message.offset,
                        error = %e,
                        "message not forwarded"
                    );
                    return Err(e);
                }
            }
            source.commit(&message)?;
        }

        info!(stats = %self.stats, "session finished");
        Ok(self.stats)
    }

    /// Transform and forward one message. Does not commit.
    pub fn process(&mut self, message: &Message) -> SessionResult<Processed> {
        let tag = message.source_tag.as_str();

        let text = self.store.fetch(tag)?;
        let script_found = text.is_some();
        if !script_found {
            self.stats.missing_scripts += 1;
            warn!(source = %tag, offset = message.offset, "no script registered for source");
        }

        let mut record = record_from_slice(&message.payload)?;

        let script = match text {
            Some(text) => self.script_for(tag, &text),
            None => Arc::new(Script::default()),
        };
        let report = self.transform(&mut record, &script, tag);

        let envelope = self.envelope(&record);
        let receipt = self.sink.send(&envelope)?;

        Ok(Processed {
            envelope,
            script_found,
            applied: report.applied(),
            skipped: report.skipped(),
            receipt,
        })
    }

    /// Apply `script` to `record`, logging every skipped command.
    pub fn transform(&mut self, record: &mut Record, script: &Script, source_tag: &str) -> ApplyReport {
        let report = apply_with_report(record, script, source_tag);

        for (command, reason) in report.skipped_commands(script) {
            if reason.is_script_defect() {
                warn!(
                    source = %source_tag,
                    line = command.line(),
                    command = %command,
                    reason = %reason,
                    "command ignored"
                );
            } else {
                debug!(
                    source = %source_tag,
                    line = command.line(),
                    command = %command,
                    reason = %reason,
                    "command had no effect"
                );
            }
        }
        self.stats.skipped_commands += report.skipped() as u64;

        debug!(
            source = %source_tag,
            applied = report.applied(),
            skipped = report.skipped(),
            "record transformed"
        );
        report
    }

    /// Wrap `record` under the configured envelope key.
    pub fn envelope(&self, record: &Record) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert(self.config.envelope_key.clone(), record_to_json(record));
        serde_json::Value::Object(map)
    }

    fn script_for(&mut self, tag: &str, text: &str) -> Arc<Script> {
        match self.cache.as_mut() {
            Some(cache) => cache.get_or_parse(tag, text),
            None => Arc::new(parse_script(text)),
        }
    }
}

impl<St, Sk> Session<St, Sk> {
    /// Take the store and sink back.
    pub fn into_parts(self) -> (St, Sk) {
        (self.store, self.sink)
    }
}
