//! Lint diagnostics for parsed scripts.
//!
//! The engine silently skips commands with an unknown action or a wrong
//! argument count. `lint` reports those commands up front so tooling can
//! surface them. It never changes how a script executes.

use std::fmt;

use crate::{Script, Span};

/// What is wrong with a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The action word is not one the engine understands.
    UnknownAction { word: String },
    /// The argument count differs from the action's arity.
    ArityMismatch {
        action: String,
        expected: usize,
        actual: usize,
    },
}

/// A lint finding attached to a script location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
}

impl Diagnostic {
    pub fn line(&self) -> usize {
        self.span.line
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::UnknownAction { word } => write!(
                f,
                "line {}: unknown action '{}' (command will be ignored)",
                self.span.line, word
            ),
            DiagnosticKind::ArityMismatch {
                action,
                expected,
                actual,
            } => write!(
                f,
                "line {}: '{}' takes {} argument(s), got {} (command will be ignored)",
                self.span.line, action, expected, actual
            ),
        }
    }
}

/// Report every command the engine would skip for structural reasons.
pub fn lint(script: &Script) -> Vec<Diagnostic> {
    script
        .iter()
        .filter_map(|cmd| {
            let kind = match cmd.action.arity() {
                None => DiagnosticKind::UnknownAction {
                    word: cmd.action.name().to_string(),
                },
                Some(expected) if expected != cmd.arguments.len() => {
                    DiagnosticKind::ArityMismatch {
                        action: cmd.action.name().to_string(),
                        expected,
                        actual: cmd.arguments.len(),
                    }
                }
                Some(_) => return None,
            };
            Some(Diagnostic {
                kind,
                span: cmd.span,
            })
        })
        .collect()
}
