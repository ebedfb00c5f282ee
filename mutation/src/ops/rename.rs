//! RENAME operation - moves a top-level field to a new key.

use morph_core::Record;

use crate::error::SkipReason;
use crate::result::CommandOutcome;

/// Move `old` to `new`. An absent `old` leaves the record untouched.
///
/// Renaming a field onto itself removes and re-inserts the same value.
pub fn execute_rename(record: &mut Record, old: &str, new: &str) -> CommandOutcome {
    match record.remove(old) {
        Some(value) => {
            record.insert(new.to_string(), value);
            CommandOutcome::Applied
        }
        None => CommandOutcome::Skipped(SkipReason::missing_field(old)),
    }
}
