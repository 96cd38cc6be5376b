//! Scanner for nbl source text.
//!
//! Single pass, left to right, one byte of lookahead (two for the
//! decimal point check in number literals). Lexical errors are
//! collected, not fatal: an unrecognized character or unterminated
//! string is recorded and scanning continues, so one bad character
//! never hides the rest of the file's problems.

mod cursor;
mod keywords;
mod scanner;

pub use scanner::Scanner;

use nbl_diagnostic::Diagnostic;
use nbl_ir::Token;

/// Scan `source` into a token sequence terminated by `Eof`.
///
/// The token list is always usable; the diagnostics are non-empty iff
/// the source contained lexical errors.
pub fn scan(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    Scanner::new(source).scan_tokens()
}
