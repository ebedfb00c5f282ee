//! Mutation executor - applies scripts to a record.
//!
//! The executor delegates to specialized operation modules in `ops/`:
//! - `ops/rename.rs` - rename (move a field)
//! - `ops/update.rs` - update (set a literal string)
//! - `ops/dig.rs` - dig (copy a nested value up)
//! - `ops/delete.rs` - deleteKey (remove a field)

use morph_core::{messages, Record, Value};
use morph_parser::{Action, Command, Script};

use crate::error::SkipReason;
use crate::ops;
use crate::result::{ApplyReport, CommandOutcome};

/// Apply `script` to `record`, stamping it with `source_tag` first.
///
/// Never fails: commands that cannot take effect are skipped.
pub fn apply(record: &mut Record, script: &Script, source_tag: &str) {
    apply_with_report(record, script, source_tag);
}

/// Like [`apply`], additionally returning one outcome per command.
pub fn apply_with_report(record: &mut Record, script: &Script, source_tag: &str) -> ApplyReport {
    let mut executor = MutationExecutor::new(record);
    executor.stamp_source(source_tag);
    executor.execute_script(script)
}

/// Mutation executor over a single borrowed record.
pub struct MutationExecutor<'r> {
    record: &'r mut Record,
}

impl<'r> MutationExecutor<'r> {
    /// Create a new executor.
    pub fn new(record: &'r mut Record) -> Self {
        Self { record }
    }

    /// Set the `eventSource` field. Done before any command runs.
    pub fn stamp_source(&mut self, source_tag: &str) {
        self.record.insert(
            messages::EVENT_SOURCE.to_string(),
            Value::String(source_tag.to_string()),
        );
    }

    /// Execute every command in order.
    pub fn execute_script(&mut self, script: &Script) -> ApplyReport {
        let mut report = ApplyReport::default();
        for command in script {
            report.push(self.execute(command));
        }
        report
    }

    /// Execute a single command.
    pub fn execute(&mut self, command: &Command) -> CommandOutcome {
        match (&command.action, command.arguments.as_slice()) {
            (Action::Rename, [old, new]) => ops::execute_rename(self.record, old, new),
            (Action::Update, [field, value]) => ops::execute_update(self.record, field, value),
            (Action::Dig, [path, new_field]) => ops::execute_dig(self.record, path, new_field),
            (Action::DeleteKey, [field]) => ops::execute_delete(self.record, field),
            (Action::Unknown(word), _) => CommandOutcome::Skipped(SkipReason::unknown_action(word)),
            (action, args) => CommandOutcome::Skipped(SkipReason::arity_mismatch(
                action.arity().unwrap_or_default(),
                args.len(),
            )),
        }
    }

    /// Get a reference to the record.
    pub fn record(&self) -> &Record {
        &*self.record
    }
}
