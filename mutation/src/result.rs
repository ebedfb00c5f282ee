//! Mutation result types.

use morph_parser::{Command, Script};

use crate::error::SkipReason;

/// Outcome of a single command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command changed (or re-set) the record.
    Applied,
    /// The command had no effect.
    Skipped(SkipReason),
}

impl CommandOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, CommandOutcome::Applied)
    }

    /// Get the skip reason if this command was skipped.
    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            CommandOutcome::Skipped(reason) => Some(reason),
            CommandOutcome::Applied => None,
        }
    }
}

/// Outcomes of one script execution, in command order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub outcomes: Vec<CommandOutcome>,
}

impl ApplyReport {
    pub fn push(&mut self, outcome: CommandOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of commands that took effect.
    pub fn applied(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_applied()).count()
    }

    /// Number of commands that were skipped.
    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.applied()
    }

    /// Pair each skipped command of `script` with its reason.
    ///
    /// `script` must be the script this report was produced from.
    pub fn skipped_commands<'a>(
        &'a self,
        script: &'a Script,
    ) -> impl Iterator<Item = (&'a Command, &'a SkipReason)> + 'a {
        script
            .iter()
            .zip(self.outcomes.iter())
            .filter_map(|(cmd, outcome)| outcome.skip_reason().map(|reason| (cmd, reason)))
    }
}
