//! Main execution logic for the morph CLI.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use morph_core::{record_from_slice, record_to_json};
use morph_mutation::apply_with_report;
use morph_parser::{lint, parse_script};
use morph_session::{
    DocumentStore, HttpSink, LineSource, ScriptStore, Session, SessionConfig, SessionStats, Sink,
    SinkKind, StdoutSink,
};
use tracing::{info, warn};

use crate::args::{ApplyArgs, CheckArgs, RunArgs};

/// Build the session configuration: file first, then flags.
pub fn session_config(args: &RunArgs) -> Result<SessionConfig> {
    let mut config = match &args.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };

    if let Some(topic) = &args.topic {
        config = config.with_topic(topic.clone());
    }
    if let Some(store) = &args.store {
        config = config.with_store_path(store.clone());
    }
    if let Some(sink) = args.sink {
        config = config.with_sink_kind(sink.into());
    }
    if let Some(url) = &args.sink_url {
        config = config.with_sink_url(url.clone());
    }
    if let Some(format) = args.output_format {
        config = config.with_output_format(format.into());
    }

    config.validate()?;
    Ok(config)
}

/// Run a session over stdin.
pub fn execute_run(args: RunArgs) -> Result<SessionStats> {
    let config = session_config(&args)?;

    let store: Box<dyn ScriptStore> = match &config.store.path {
        Some(path) => Box::new(DocumentStore::load(path)?),
        None => {
            warn!("no script store configured; records are only tagged");
            Box::new(DocumentStore::default())
        }
    };

    let sink: Box<dyn Sink> = match config.sink.kind {
        SinkKind::Stdout => Box::new(StdoutSink::new(config.sink.output_format)),
        SinkKind::Http => {
            let sink = HttpSink::new(
                config.sink.url.clone(),
                Duration::from_secs(config.sink.timeout_secs),
            )?;
            info!(url = %sink.url(), "forwarding to http sink");
            Box::new(sink)
        }
    };

    let mut source = LineSource::stdin(config.topic.clone());
    let mut session = Session::new(config, store, sink);
    Ok(session.run(&mut source)?)
}

/// Apply a script to a single record and write it to `out`.
pub fn execute_apply(args: ApplyArgs, out: &mut impl Write) -> Result<()> {
    let text = read_text(&args.script)?;
    let payload = read_bytes(&args.input)?;

    let script = parse_script(&text);
    let mut record = record_from_slice(&payload)
        .with_context(|| format!("cannot decode {}", args.input.display()))?;

    let report = apply_with_report(&mut record, &script, &args.tag);
    for (command, reason) in report.skipped_commands(&script) {
        warn!(line = command.line(), command = %command, reason = %reason, "command skipped");
    }
    info!(applied = report.applied(), skipped = report.skipped(), "script applied");

    let json = record_to_json(&record);
    let text = if args.pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    writeln!(out, "{}", text)?;
    Ok(())
}

/// Write the parsed commands of a script and its diagnostics to `out`.
///
/// Diagnostics are informational and never make the check fail.
pub fn execute_check(args: CheckArgs, out: &mut impl Write) -> Result<()> {
    let text = read_text(&args.script)?;
    let script = parse_script(&text);
    let diagnostics = lint(&script);

    for command in &script {
        writeln!(out, "{:>4}  {}", command.line(), command)?;
    }
    for diagnostic in &diagnostics {
        writeln!(out, "{}", diagnostic)?;
    }
    writeln!(
        out,
        "{} command(s), {} diagnostic(s)",
        script.len(),
        diagnostics.len()
    )?;
    Ok(())
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = read_bytes(path)?;
    String::from_utf8(bytes).with_context(|| format!("{} is not valid UTF-8", path.display()))
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }
    fs::read(path).with_context(|| format!("cannot read {}", path.display()))
}
