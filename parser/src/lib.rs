//! MORPH Parser
//!
//! This crate turns script text into an ordered list of mutation commands:
//! - Line-oriented, whitespace-separated tokenization
//! - Command construction (action word plus arguments)
//! - Lint diagnostics for commands the engine will skip
//!
//! Parsing never fails. Lines with fewer than two words are dropped, and
//! commands with an unknown action or a wrong argument count are kept so the
//! engine can skip them at apply time.

mod ast;
mod lexer;
mod lint;
mod parser;

pub use ast::*;
pub use lint::{lint, Diagnostic, DiagnosticKind};
pub use parser::{parse_script, Parser};
