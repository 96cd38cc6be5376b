//! The scanner proper: one lexeme unit per iteration.

use nbl_diagnostic::Diagnostic;
use nbl_ir::{Literal, Token, TokenKind};

use crate::cursor::Cursor;
use crate::keywords::keyword_kind;

/// Converts source text into a flat token sequence.
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    line: u32,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            line: 1,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Scan the whole input, appending a synthetic `Eof` token at the
    /// final line.
    pub fn scan_tokens(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        while !self.cursor.is_at_end() {
            self.cursor.begin_lexeme();
            self.scan_token();
        }
        self.tokens
            .push(Token::new(TokenKind::Eof, "", None, self.line));
        (self.tokens, self.diagnostics)
    }

    fn scan_token(&mut self) {
        let byte = self.cursor.advance();
        match byte {
            b'(' => self.add_token(TokenKind::LeftParen),
            b')' => self.add_token(TokenKind::RightParen),
            b'{' => self.add_token(TokenKind::LeftBrace),
            b'}' => self.add_token(TokenKind::RightBrace),
            b',' => self.add_token(TokenKind::Comma),
            b'.' => self.add_token(TokenKind::Dot),
            b'-' => self.add_token(TokenKind::Minus),
            b'+' => self.add_token(TokenKind::Plus),
            b';' => self.add_token(TokenKind::Semicolon),
            b'*' => self.add_token(TokenKind::Star),

            b'!' => {
                let kind = if self.cursor.match_byte(b'=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            b'=' => {
                let kind = if self.cursor.match_byte(b'=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            b'<' => {
                let kind = if self.cursor.match_byte(b'=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            b'>' => {
                let kind = if self.cursor.match_byte(b'=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }

            b'/' => {
                if self.cursor.match_byte(b'/') {
                    // Line comment: discard through end of line.
                    while self.cursor.peek() != b'\n' && !self.cursor.is_at_end() {
                        self.cursor.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            b' ' | b'\r' | b'\t' => {}
            b'\n' => self.line += 1,

            b'"' => self.string(),

            _ => {
                if byte.is_ascii_digit() {
                    self.number();
                } else if byte.is_ascii_alphabetic() || byte == b'_' {
                    self.identifier();
                } else {
                    self.cursor.skip_continuation_bytes();
                    let scalar = self.cursor.scalar_at_start();
                    self.diagnostics.push(Diagnostic::lexical(
                        self.line,
                        format!("Unexpected character: '{scalar}'"),
                    ));
                }
            }
        }
    }

    /// String literal. Embedded newlines are legal and counted for
    /// line accounting. An unterminated string is a lexical error and
    /// emits no token.
    fn string(&mut self) {
        while self.cursor.peek() != b'"' && !self.cursor.is_at_end() {
            if self.cursor.peek() == b'\n' {
                self.line += 1;
            }
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            self.diagnostics
                .push(Diagnostic::lexical(self.line, "Unterminated string"));
            return;
        }

        self.cursor.advance(); // closing quote
        let value = self.cursor.lexeme_inner().to_owned();
        self.add_literal_token(TokenKind::String, Literal::Str(value));
    }

    /// Number literal: a digit run, optionally one `.` followed by at
    /// least one more digit. A trailing `.` is left for the next
    /// lexeme (it becomes a `Dot` token).
    fn number(&mut self) {
        while self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
        }

        if self.cursor.peek() == b'.' && self.cursor.peek_next().is_ascii_digit() {
            self.cursor.advance(); // the '.'
            while self.cursor.peek().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        match self.cursor.lexeme().parse::<f64>() {
            Ok(value) => self.add_literal_token(TokenKind::Number, Literal::Number(value)),
            // Digits-and-dot lexemes always parse; kept as a
            // diagnostic rather than a panic to preserve recovery.
            Err(_) => self.diagnostics.push(Diagnostic::lexical(
                self.line,
                format!("Invalid number literal: '{}'", self.cursor.lexeme()),
            )),
        }
    }

    fn identifier(&mut self) {
        while {
            let byte = self.cursor.peek();
            byte.is_ascii_alphanumeric() || byte == b'_'
        } {
            self.cursor.advance();
        }

        match keyword_kind(self.cursor.lexeme()) {
            Some(kind) => self.add_token(kind),
            None => self.add_token(TokenKind::Identifier),
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.tokens
            .push(Token::new(kind, self.cursor.lexeme(), None, self.line));
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Literal) {
        self.tokens.push(Token::new(
            kind,
            self.cursor.lexeme(),
            Some(literal),
            self.line,
        ));
    }
}
