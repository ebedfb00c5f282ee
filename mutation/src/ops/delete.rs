//! DELETEKEY operation - removes a top-level field.

use morph_core::Record;

use crate::error::SkipReason;
use crate::result::CommandOutcome;

/// Remove `field` if present.
pub fn execute_delete(record: &mut Record, field: &str) -> CommandOutcome {
    match record.remove(field) {
        Some(_) => CommandOutcome::Applied,
        None => CommandOutcome::Skipped(SkipReason::missing_field(field)),
    }
}
