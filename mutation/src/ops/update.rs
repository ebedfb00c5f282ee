//! UPDATE operation - sets a top-level field to a literal string.

use morph_core::{Record, Value};

use crate::result::CommandOutcome;

/// Set `field` to the script token `value`, always as a string.
pub fn execute_update(record: &mut Record, field: &str, value: &str) -> CommandOutcome {
    record.insert(field.to_string(), Value::String(value.to_string()));
    CommandOutcome::Applied
}
