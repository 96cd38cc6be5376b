//! Core diagnostic record.

use std::fmt;

use nbl_ir::{Token, TokenKind};

/// Severity level. The front end currently only emits errors, but the
/// rendering distinguishes levels so warnings can be added without
/// touching callers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Which pipeline phase produced the diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Phase {
    Lex,
    Parse,
}

/// A single collected error or warning.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub phase: Phase,
    pub severity: Severity,
    /// 1-based source line.
    pub line: u32,
    /// Lexeme of the offending token, when there is one. Lexical
    /// errors have no token (the bad input never became one); parse
    /// errors always do.
    pub lexeme: Option<String>,
    pub message: String,
}

impl Diagnostic {
    /// A lexical error at a bare line position.
    pub fn lexical(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            phase: Phase::Lex,
            severity: Severity::Error,
            line,
            lexeme: None,
            message: message.into(),
        }
    }

    /// A parse error at the given token.
    pub fn parse(token: &Token, message: impl Into<String>) -> Self {
        // Eof has an empty lexeme; render it as "end" instead.
        let lexeme = if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token.lexeme.clone())
        };
        Diagnostic {
            phase: Phase::Parse,
            severity: Severity::Error,
            line: token.line,
            lexeme,
            message: message.into(),
        }
    }

    /// One-line rendering: `[line N] error at 'x': message`.
    pub fn render(&self) -> String {
        match &self.lexeme {
            Some(lexeme) => format!(
                "[line {}] {} at '{}': {}",
                self.line, self.severity, lexeme, self.message
            ),
            None if self.phase == Phase::Parse => format!(
                "[line {}] {} at end: {}",
                self.line, self.severity, self.message
            ),
            None => format!("[line {}] {}: {}", self.line, self.severity, self.message),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
