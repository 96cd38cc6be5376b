//! Recursive descent parser for nbl.
//!
//! Consumes the token sequence from `nbl_lexer` and builds the syntax
//! tree defined in `nbl_ir`. Parse errors are collected: after each
//! error the parser synchronizes to the next statement boundary and
//! keeps going, so one pass surfaces every grammar violation it can.

mod cursor;
mod error;
mod grammar;
mod recovery;

use cursor::Cursor;

use nbl_diagnostic::Diagnostic;
use nbl_ir::{Stmt, Token};

use error::ParseError;

/// Parser state: a token cursor plus the diagnostics collected so far.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            diagnostics: Vec::new(),
        }
    }

    /// Parse the whole token sequence into statements.
    ///
    /// The statement list holds everything that parsed cleanly; the
    /// diagnostics are non-empty iff any statement did not.
    pub fn parse(mut self) -> (Vec<Stmt>, Vec<Diagnostic>) {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            match self.declaration() {
                Ok(stmt) => statements.push(stmt),
                Err(error) => {
                    self.diagnostics.push(error.into_diagnostic());
                    self.synchronize();
                }
            }
        }
        (statements, self.diagnostics)
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(self.cursor.current(), message)
    }
}

/// Full source-to-AST pipeline entry.
///
/// Runs the lexer and the parser over `source` in one pass each and
/// merges their diagnostics. Any diagnostic — lexical or parse — means
/// the source must not reach interpretation, so statements are only
/// returned when the set is empty.
pub fn parse_source(source: &str) -> Result<Vec<Stmt>, Vec<Diagnostic>> {
    let (tokens, mut diagnostics) = nbl_lexer::scan(source);
    let parser = Parser::new(&tokens);
    let (statements, parse_diagnostics) = parser.parse();
    diagnostics.extend(parse_diagnostics);
    if diagnostics.is_empty() {
        Ok(statements)
    } else {
        Err(diagnostics)
    }
}
