//! Message sources.
//!
//! A source hands out messages one at a time and is told when a message has
//! been forwarded. Messages that are never committed may be delivered again.

use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader};

use tracing::{debug, trace};

use crate::error::SessionResult;

/// A single inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Position of the message in its stream.
    pub offset: u64,
    /// Topic or source identifier; stamped on the record as `eventSource`.
    pub source_tag: String,
    /// Raw payload bytes, expected to be a JSON object.
    pub payload: Vec<u8>,
}

impl Message {
    pub fn new(offset: u64, source_tag: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            offset,
            source_tag: source_tag.into(),
            payload: payload.into(),
        }
    }
}

/// Delivers messages and accepts acknowledgements.
pub trait MessageSource {
    /// Next message, or `None` at end of stream.
    fn next_message(&mut self) -> SessionResult<Option<Message>>;

    /// Acknowledge that `message` was handled.
    fn commit(&mut self, message: &Message) -> SessionResult<()>;
}

impl<S: MessageSource + ?Sized> MessageSource for Box<S> {
    fn next_message(&mut self) -> SessionResult<Option<Message>> {
        (**self).next_message()
    }

    fn commit(&mut self, message: &Message) -> SessionResult<()> {
        (**self).commit(message)
    }
}

/// Source reading one payload per line, all under a fixed source tag.
///
/// Blank lines are skipped and do not consume an offset.
pub struct LineSource {
    reader: Box<dyn BufRead + Send>,
    source_tag: String,
    next_offset: u64,
    committed: Option<u64>,
}

impl LineSource {
    /// Read from stdin.
    pub fn stdin(source_tag: impl Into<String>) -> Self {
        Self::with_reader(Box::new(BufReader::new(io::stdin())), source_tag)
    }

    /// Read from a custom reader.
    pub fn with_reader(reader: Box<dyn BufRead + Send>, source_tag: impl Into<String>) -> Self {
        Self {
            reader,
            source_tag: source_tag.into(),
            next_offset: 0,
            committed: None,
        }
    }

    /// Offset of the last committed message.
    pub fn committed(&self) -> Option<u64> {
        self.committed
    }
}

impl MessageSource for LineSource {
    fn next_message(&mut self) -> SessionResult<Option<Message>> {
        // Bytes, not a String: a payload that is not UTF-8 is a decode
        // failure for that message only.
        let mut line = Vec::new();
        loop {
            line.clear();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                trace!("end of input");
                return Ok(None);
            }
            let payload = line.trim_ascii();
            if payload.is_empty() {
                continue;
            }
            let offset = self.next_offset;
            self.next_offset += 1;
            return Ok(Some(Message::new(
                offset,
                self.source_tag.clone(),
                payload,
            )));
        }
    }

    fn commit(&mut self, message: &Message) -> SessionResult<()> {
        debug!(offset = message.offset, "committed");
        self.committed = Some(message.offset);
        Ok(())
    }
}

/// In-memory source that records which offsets were committed.
#[derive(Debug, Default)]
pub struct MemorySource {
    pending: VecDeque<Message>,
    committed: Vec<u64>,
    next_offset: u64,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a payload under `source_tag`; offsets are assigned in order.
    pub fn with_message(mut self, source_tag: &str, payload: impl Into<Vec<u8>>) -> Self {
        self.push(source_tag, payload);
        self
    }

    pub fn push(&mut self, source_tag: &str, payload: impl Into<Vec<u8>>) {
        let offset = self.next_offset;
        self.next_offset += 1;
        self.pending
            .push_back(Message::new(offset, source_tag, payload));
    }

    /// Offsets committed so far, in commit order.
    pub fn committed(&self) -> &[u64] {
        &self.committed
    }

    /// Number of messages not yet handed out.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl MessageSource for MemorySource {
    fn next_message(&mut self) -> SessionResult<Option<Message>> {
        Ok(self.pending.pop_front())
    }

    fn commit(&mut self, message: &Message) -> SessionResult<()> {
        self.committed.push(message.offset);
        Ok(())
    }
}
