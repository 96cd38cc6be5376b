//! Token types for the nbl lexer.

use std::fmt;

/// A scanned token: kind, the exact source substring it was scanned
/// from, an optional literal payload, and the 1-based source line.
///
/// Tokens are immutable once created. The lexeme and line ride along
/// into the syntax tree so runtime errors can point back at the source.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub line: u32,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<Literal>,
        line: u32,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} '{}' @ line {}", self.kind, self.lexeme, self.line)
    }
}

/// Literal payload carried by `Number` and `String` tokens, and reused
/// by the parser for `nil`/`true`/`false` literal expressions.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Nil,
    Bool(bool),
    Number(f64),
    Str(String),
}

/// Token kinds for nbl. Closed set; the literal payload lives on
/// [`Token`], not here, so the kind stays a fieldless discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Single-character punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One- or two-character operators
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords. `Class`, `Super`, `This` and `For` are reserved: the
    // lexer produces them but no grammar rule accepts them yet.
    And,
    Class,
    Else,
    False,
    For,
    Fun,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    /// Synthetic end-of-input marker, always the last token.
    Eof,
}

impl TokenKind {
    /// Whether this kind can begin a statement. Used by parser error
    /// recovery to find a safe synchronization point.
    pub fn starts_statement(self) -> bool {
        matches!(
            self,
            TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Var
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return
        )
    }
}
