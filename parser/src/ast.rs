//! Abstract Syntax Tree types for MORPH scripts.

use std::fmt;

/// Source location for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

/// The action word that starts a command line.
///
/// Matching is case-sensitive. Any other word is kept verbatim as
/// `Unknown` so the engine can skip it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// `rename <old> <new>`
    Rename,
    /// `update <field> <value>`
    Update,
    /// `dig <path> <newField>`
    Dig,
    /// `deleteKey <field>`
    DeleteKey,
    /// Unrecognized action word.
    Unknown(String),
}

impl Action {
    /// Classify an action word.
    pub fn from_word(word: &str) -> Self {
        match word {
            "rename" => Action::Rename,
            "update" => Action::Update,
            "dig" => Action::Dig,
            "deleteKey" => Action::DeleteKey,
            other => Action::Unknown(other.to_string()),
        }
    }

    /// Number of arguments the action requires, `None` for unknown actions.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Action::Rename | Action::Update | Action::Dig => Some(2),
            Action::DeleteKey => Some(1),
            Action::Unknown(_) => None,
        }
    }

    /// The action word as written in scripts.
    pub fn name(&self) -> &str {
        match self {
            Action::Rename => "rename",
            Action::Update => "update",
            Action::Dig => "dig",
            Action::DeleteKey => "deleteKey",
            Action::Unknown(word) => word,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Action::Unknown(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single mutation command: one script line.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub action: Action,
    pub arguments: Vec<String>,
    /// Location of the action word.
    pub span: Span,
}

impl Command {
    pub fn new(action: Action, arguments: Vec<String>, span: Span) -> Self {
        Self {
            action,
            arguments,
            span,
        }
    }

    /// True when the argument count matches the action's arity.
    ///
    /// Unknown actions never have a valid arity.
    pub fn has_valid_arity(&self) -> bool {
        self.action.arity() == Some(self.arguments.len())
    }

    /// 1-based source line of this command.
    pub fn line(&self) -> usize {
        self.span.line
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.action)?;
        for arg in &self.arguments {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// An ordered list of commands. Later commands see the effect of earlier ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Script {
    pub commands: Vec<Command>,
}

impl Script {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }
}

impl<'a> IntoIterator for &'a Script {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cmd in &self.commands {
            writeln!(f, "{}", cmd)?;
        }
        Ok(())
    }
}
