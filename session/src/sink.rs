//! Record sinks.
//!
//! A sink receives the enveloped record after the script has run.

use std::io::{self, Write};
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::config::{OutputFormat, SinkConfig};
use crate::error::{SessionError, SessionResult};

/// What the sink reported back for one envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SinkReceipt {
    /// HTTP status, for sinks that have one.
    pub status: Option<u16>,
    /// Response body, for sinks that have one.
    pub body: Option<String>,
}

impl SinkReceipt {
    pub fn http(status: u16, body: String) -> Self {
        Self {
            status: Some(status),
            body: Some(body),
        }
    }
}

/// Accepts outbound envelopes.
pub trait Sink {
    /// Forward one envelope. An error means it was not delivered.
    fn send(&mut self, envelope: &serde_json::Value) -> SessionResult<SinkReceipt>;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn send(&mut self, envelope: &serde_json::Value) -> SessionResult<SinkReceipt> {
        (**self).send(envelope)
    }
}

/// Writes envelopes to stdout, or any writer.
pub struct StdoutSink<W: Write = io::Stdout> {
    writer: W,
    format: OutputFormat,
}

impl StdoutSink {
    pub fn new(format: OutputFormat) -> Self {
        Self::with_writer(io::stdout(), format)
    }

    pub fn jsonl() -> Self {
        Self::new(OutputFormat::Jsonl)
    }

    pub fn json() -> Self {
        Self::new(OutputFormat::Json)
    }
}

impl<W: Write> StdoutSink<W> {
    /// Write to a custom writer (for testing).
    pub fn with_writer(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for StdoutSink<W> {
    fn send(&mut self, envelope: &serde_json::Value) -> SessionResult<SinkReceipt> {
        let text = match self.format {
            OutputFormat::Jsonl => serde_json::to_string(envelope),
            OutputFormat::Json => serde_json::to_string_pretty(envelope),
        }
        .map_err(|e| SessionError::sink(e.to_string()))?;
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(SinkReceipt::default())
    }
}

/// POSTs each envelope as `application/json`.
///
/// Any non-2xx response is an error.
pub struct HttpSink {
    client: Client,
    url: String,
}

impl HttpSink {
    pub fn new(url: impl Into<String>, timeout: Duration) -> SessionResult<Self> {
        let url = url.into();
        if url.is_empty() {
            return Err(SessionError::config("http sink requires a url"));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SessionError::config(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client, url })
    }

    pub fn from_config(config: &SinkConfig) -> SessionResult<Self> {
        Self::new(config.url.clone(), Duration::from_secs(config.timeout_secs))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Sink for HttpSink {
    fn send(&mut self, envelope: &serde_json::Value) -> SessionResult<SinkReceipt> {
        let response = self
            .client
            .post(&self.url)
            .json(envelope)
            .send()
            .map_err(|e| {
                warn!(error = %e, url = %self.url, "failed to send record");
                SessionError::sink(format!("failed to send record: {e}"))
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| {
            warn!(error = %e, status = %status, "failed to read sink response");
            SessionError::sink(format!("failed to read response: {e}"))
        })?;
        if !status.is_success() {
            warn!(status = %status, body = %body, "sink rejected record");
            return Err(SessionError::sink(format!("sink returned status {status}")));
        }

        // Most endpoints answer with JSON; show it indented when they do.
        match serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|json| serde_json::to_string_pretty(&json).ok())
        {
            Some(pretty) => debug!(status = %status, "sink response:\n{}", pretty),
            None => debug!(status = %status, body = %body, "sink response"),
        }

        Ok(SinkReceipt::http(status.as_u16(), body))
    }
}

/// Collects envelopes in memory. Can be told to fail.
#[derive(Debug, Default)]
pub struct MemorySink {
    sent: Vec<serde_json::Value>,
    failure: Option<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every send fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            sent: Vec::new(),
            failure: Some(message.into()),
        }
    }

    /// Envelopes delivered so far.
    pub fn sent(&self) -> &[serde_json::Value] {
        &self.sent
    }

    pub fn set_failure(&mut self, failure: Option<String>) {
        self.failure = failure;
    }
}

impl Sink for MemorySink {
    fn send(&mut self, envelope: &serde_json::Value) -> SessionResult<SinkReceipt> {
        if let Some(message) = &self.failure {
            return Err(SessionError::sink(message.clone()));
        }
        self.sent.push(envelope.clone());
        Ok(SinkReceipt::default())
    }
}
