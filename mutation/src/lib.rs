//! MORPH Mutation
//!
//! Execute a parsed script against a record (rename/update/dig/deleteKey).
//!
//! Responsibilities:
//! - Stamp every record with its source tag
//! - Apply commands in order, each seeing the effect of the previous ones
//! - Turn every irregularity into a skipped command, never an error
//! - Report per-command outcomes for audit logging
//!
//! # Module Structure
//!
//! - `executor` - Main MutationExecutor that dispatches commands
//! - `ops/` - Individual operation implementations (rename, update, dig, delete)
//! - `error` - Reasons a command was skipped
//! - `result` - Per-command outcomes and the apply report

mod error;
mod executor;
mod ops;
mod result;

pub use error::SkipReason;
pub use executor::{apply, apply_with_report, MutationExecutor};
pub use result::{ApplyReport, CommandOutcome};
