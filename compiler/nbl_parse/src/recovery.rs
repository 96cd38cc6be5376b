//! Error recovery: synchronize to the next statement boundary.

use nbl_ir::TokenKind;
use tracing::trace;

use crate::Parser;

impl Parser<'_> {
    /// Discard tokens until a likely statement boundary: just past a
    /// semicolon, or just before a keyword that starts a statement.
    /// Keeps one parse error from cascading into a wall of noise.
    pub(crate) fn synchronize(&mut self) {
        trace!(
            line = self.cursor.current().line,
            "synchronizing after parse error"
        );
        self.cursor.advance();

        while !self.cursor.is_at_end() {
            if self.cursor.previous().kind == TokenKind::Semicolon {
                return;
            }
            if self.cursor.current().kind.starts_statement() {
                return;
            }
            self.cursor.advance();
        }
    }
}
