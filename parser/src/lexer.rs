//! Lexer (tokenizer) for MORPH scripts.
//!
//! The DSL has no quoting or escapes: a token is any run of non-whitespace
//! characters, and line breaks separate commands.

use crate::Span;

/// Token types.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A run of non-whitespace characters.
    Word(String),
    /// End of a script line.
    Newline,
    /// End of file.
    Eof,
}

/// A token with location information.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn eof(pos: usize, line: usize, column: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            span: Span::new(pos, pos, line, column),
        }
    }
}

/// Lexer state.
pub struct Lexer<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize all input into a vector of tokens ending with `Eof`.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = matches!(token.kind, TokenKind::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn span_from(&self, start: usize, start_line: usize, start_col: usize) -> Span {
        Span::new(start, self.pos, start_line, start_col)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn next_char(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.pos = pos + c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(c)
        } else {
            None
        }
    }

    /// Skip whitespace other than the line break.
    fn skip_blanks(&mut self) {
        while let Some(c) = self.peek_char() {
            if c != '\n' && c.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> Token {
        self.skip_blanks();

        let start = self.pos;
        let start_line = self.line;
        let start_col = self.column;

        let Some(c) = self.next_char() else {
            return Token::eof(self.pos, self.line, self.column);
        };

        if c == '\n' {
            return Token::new(
                TokenKind::Newline,
                self.span_from(start, start_line, start_col),
            );
        }

        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                break;
            }
            self.next_char();
        }

        let word = self.input[start..self.pos].to_string();
        Token::new(
            TokenKind::Word(word),
            self.span_from(start, start_line, start_col),
        )
    }
}
