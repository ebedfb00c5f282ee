//! MORPH Session
//!
//! Drives records from a message source through the mutation engine and
//! into a sink.
//!
//! Responsibilities:
//! - Look up the script registered for each message's source tag
//! - Decode payloads and apply scripts
//! - Wrap results in the outbound envelope and forward them
//! - Commit messages only after they were forwarded
//!
//! # Module Structure
//!
//! - `config` - Session configuration (TOML)
//! - `source` - Message sources
//! - `store` - Script stores
//! - `sink` - Record sinks
//! - `cache` - Parsed-script cache
//! - `session` - The per-message driver

mod cache;
mod config;
mod error;
mod result;
mod session;
mod sink;
mod source;
mod store;

pub use cache::ScriptCache;
pub use config::{OutputFormat, SessionConfig, SinkConfig, SinkKind, StoreConfig};
pub use error::{SessionError, SessionResult};
pub use result::{Processed, SessionStats};
pub use session::Session;
pub use sink::{HttpSink, MemorySink, Sink, SinkReceipt, StdoutSink};
pub use source::{LineSource, MemorySource, Message, MessageSource};
pub use store::{DocumentStore, MemoryStore, ScriptDocument, ScriptStore};
