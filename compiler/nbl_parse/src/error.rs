//! Parse error carrier.

use nbl_diagnostic::Diagnostic;
use nbl_ir::Token;

/// A grammar violation at a specific token.
///
/// Thrown (as `Err`) up to the statement level, where the parser
/// records it and synchronizes. Converted to a [`Diagnostic`] for the
/// caller; the token's line and lexeme provide the location.
#[derive(Clone, Debug)]
pub(crate) struct ParseError {
    pub token: Token,
    pub message: String,
}

impl ParseError {
    pub(crate) fn new(token: &Token, message: impl Into<String>) -> Self {
        ParseError {
            token: token.clone(),
            message: message.into(),
        }
    }

    pub(crate) fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::parse(&self.token, self.message)
    }
}

pub(crate) type ParseResult<T> = Result<T, ParseError>;
