//! Session result types.

use std::fmt;

use crate::sink::SinkReceipt;

/// Result of processing one message.
#[derive(Debug, Clone, PartialEq)]
pub struct Processed {
    /// The envelope that was forwarded.
    pub envelope: serde_json::Value,
    /// Whether a script was registered for the message's source.
    pub script_found: bool,
    /// Commands that took effect.
    pub applied: usize,
    /// Commands that were skipped.
    pub skipped: usize,
    /// What the sink reported.
    pub receipt: SinkReceipt,
}

/// Running counters for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Messages taken from the source.
    pub received: u64,
    /// Messages forwarded to the sink.
    pub forwarded: u64,
    /// Messages dropped because their payload could not be decoded.
    pub skipped: u64,
    /// Messages whose source had no script.
    pub missing_scripts: u64,
    /// Commands skipped across all forwarded messages.
    pub skipped_commands: u64,
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "received={} forwarded={} skipped={} missing_scripts={} skipped_commands={}",
            self.received,
            self.forwarded,
            self.skipped,
            self.missing_scripts,
            self.skipped_commands
        )
    }
}
