//! DIG operation - copies a nested value up to a top-level field.

use morph_core::{Record, Value};

use crate::error::SkipReason;
use crate::result::CommandOutcome;

/// Resolve `path` against the record's current state and copy the value
/// into `new_field`. A miss leaves `new_field` as it was.
pub fn execute_dig(record: &mut Record, path: &str, new_field: &str) -> CommandOutcome {
    match morph_path::trace(record, path).map(Value::clone) {
        Ok(value) => {
            record.insert(new_field.to_string(), value);
            CommandOutcome::Applied
        }
        Err(miss) => CommandOutcome::Skipped(SkipReason::path_miss(path, miss)),
    }
}
