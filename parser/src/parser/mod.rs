//! Parser for MORPH scripts.
//!
//! Each line is one candidate command: the first word is the action, the rest
//! are arguments. Lines with fewer than two words are dropped.

use crate::ast::*;
use crate::lexer::{Lexer, Token, TokenKind};

/// Parse script text into a [`Script`]. Never fails.
pub fn parse_script(input: &str) -> Script {
    Parser::new(input).parse()
}

// ==================== PARSER STATE ====================

/// Parser state.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Create a new parser from source text.
    pub fn new(input: &str) -> Self {
        let tokens = Lexer::new(input).tokenize();
        Self { tokens, pos: 0 }
    }

    /// Parse every line into the resulting script.
    pub fn parse(mut self) -> Script {
        let mut commands = Vec::new();
        while !self.at_eof() {
            if let Some(cmd) = self.parse_line() {
                commands.push(cmd);
            }
        }
        Script::new(commands)
    }
}

// ==================== TOKEN HELPERS ====================

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek().cloned();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn at_eof(&self) -> bool {
        matches!(self.peek().map(|t| &t.kind), None | Some(TokenKind::Eof))
    }
}

// ==================== LINES ====================

impl Parser {
    /// Consume one line, including its terminating newline.
    fn parse_line(&mut self) -> Option<Command> {
        let mut words: Vec<(String, Span)> = Vec::new();

        while let Some(token) = self.advance() {
            match token.kind {
                TokenKind::Eof | TokenKind::Newline => break,
                TokenKind::Word(word) => words.push((word, token.span)),
            }
        }

        if words.len() < 2 {
            return None;
        }

        let mut words = words.into_iter();
        let (action_word, span) = words.next()?;
        let arguments = words.map(|(word, _)| word).collect();
        Some(Command::new(Action::from_word(&action_word), arguments, span))
    }
}
