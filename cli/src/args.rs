//! CLI argument definitions for morph.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Reshape JSON event records with small line-oriented scripts.
///
/// ## Examples
///
/// Transform a stream of records from stdin:
///   cat events.jsonl | morph run --config morph.toml --topic orders
///
/// Try a script on one record:
///   morph apply --script orders.morph --input order.json --tag orders --pretty
///
/// Show how a script is understood:
///   morph check --script orders.morph
#[derive(Parser, Debug)]
#[command(name = "morph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (RUST_LOG takes precedence when set)
    #[arg(short = 'l', long, value_enum, default_value = "info", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Transform JSONL payloads from stdin and forward them to a sink
    Run(RunArgs),
    /// Apply a script to a single record and print the result
    Apply(ApplyArgs),
    /// Parse a script and report lines that will be ignored
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Session configuration file (TOML)
    #[arg(short = 'c', long, env = "MORPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Source tag stamped on every record
    #[arg(short = 't', long, env = "MORPH_TOPIC")]
    pub topic: Option<String>,

    /// Script document file (JSON array of {source, transformer})
    #[arg(short = 's', long, env = "MORPH_STORE")]
    pub store: Option<PathBuf>,

    /// Sink type
    #[arg(long, value_enum)]
    pub sink: Option<SinkType>,

    /// Endpoint for the http sink
    #[arg(long, env = "MORPH_SINK_URL")]
    pub sink_url: Option<String>,

    /// Output format for the stdout sink
    #[arg(long, value_enum)]
    pub output_format: Option<OutputFormat>,
}

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Script file
    #[arg(short = 's', long)]
    pub script: PathBuf,

    /// JSON record file ("-" for stdin)
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// Source tag stamped as eventSource
    #[arg(short = 't', long)]
    pub tag: String,

    /// Pretty-print the result
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Script file
    #[arg(short = 's', long)]
    pub script: PathBuf,
}

/// Sink type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SinkType {
    /// Write envelopes to stdout
    Stdout,
    /// POST envelopes to an HTTP endpoint
    Http,
}

impl From<SinkType> for morph_session::SinkKind {
    fn from(arg: SinkType) -> Self {
        match arg {
            SinkType::Stdout => morph_session::SinkKind::Stdout,
            SinkType::Http => morph_session::SinkKind::Http,
        }
    }
}

/// Output format for the stdout sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON Lines (one JSON object per line)
    Jsonl,
    /// Pretty-printed JSON
    Json,
}

impl From<OutputFormat> for morph_session::OutputFormat {
    fn from(arg: OutputFormat) -> Self {
        match arg {
            OutputFormat::Jsonl => morph_session::OutputFormat::Jsonl,
            OutputFormat::Json => morph_session::OutputFormat::Json,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Trace level (most verbose)
    Trace,
    /// Debug level
    Debug,
    /// Info level (default)
    Info,
    /// Warning level
    Warn,
    /// Error level (least verbose)
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
