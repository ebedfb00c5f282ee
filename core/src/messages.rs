//! Well-known field names shared across MORPH components.
//!
//! These constants keep the engine, the session and the CLI agreeing on
//! the names they read and write.

/// Field unconditionally stamped with the message's source tag.
pub const EVENT_SOURCE: &str = "eventSource";

/// Default key the session wraps forwarded records under.
pub const DEFAULT_ENVELOPE_KEY: &str = "event";

/// Document field holding the source tag in a script store.
pub const STORE_SOURCE_FIELD: &str = "source";

/// Document field holding the script text in a script store.
pub const STORE_SCRIPT_FIELD: &str = "transformer";
