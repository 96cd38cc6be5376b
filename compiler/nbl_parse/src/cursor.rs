//! Token cursor for navigating the token stream.

use nbl_ir::{Token, TokenKind};

use crate::error::{ParseError, ParseResult};

/// Cursor over a scanned token slice.
///
/// The slice always ends with an `Eof` token, so `current()` is total:
/// the cursor never advances past the final index.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(
            matches!(tokens.last(), Some(t) if t.kind == TokenKind::Eof),
            "token stream must end with Eof"
        );
        Cursor { tokens, pos: 0 }
    }

    /// The current (not yet consumed) token.
    #[inline]
    pub(crate) fn current(&self) -> &'a Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// The most recently consumed token.
    #[inline]
    pub(crate) fn previous(&self) -> &'a Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    /// Consume and return the current token. At `Eof` the position
    /// stays put and `Eof` is returned again.
    #[inline]
    pub(crate) fn advance(&mut self) -> &'a Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.previous()
    }

    /// Check the current token's kind without consuming.
    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Check the kind of the token after the current one.
    #[inline]
    pub(crate) fn check_next(&self, kind: TokenKind) -> bool {
        self.tokens
            .get(self.pos + 1)
            .is_some_and(|t| t.kind == kind)
    }

    /// Consume the current token iff it has the given kind.
    #[inline]
    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.pos += 1;
            return true;
        }
        false
    }

    /// Consume the current token iff its kind is in `kinds`.
    #[inline]
    pub(crate) fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|&k| self.check(k)) {
            self.pos += 1;
            return true;
        }
        false
    }

    /// Require a token of the given kind, consuming it, or fail with a
    /// parse error at the current token.
    pub(crate) fn consume(&mut self, kind: TokenKind, message: &str) -> ParseResult<&'a Token> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        Err(ParseError::new(self.current(), message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(kinds: &[TokenKind]) -> Vec<Token> {
        kinds
            .iter()
            .chain(std::iter::once(&TokenKind::Eof))
            .enumerate()
            .map(|(i, &k)| Token::new(k, "", None, i as u32 + 1))
            .collect()
    }

    #[test]
    fn advance_stops_at_eof() {
        let toks = tokens(&[TokenKind::Var]);
        let mut cursor = Cursor::new(&toks);
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.advance().kind, TokenKind::Eof);
        assert_eq!(cursor.advance().kind, TokenKind::Eof);
    }

    #[test]
    fn match_kind_consumes_only_on_hit() {
        let toks = tokens(&[TokenKind::Plus, TokenKind::Minus]);
        let mut cursor = Cursor::new(&toks);
        assert!(!cursor.match_kind(TokenKind::Minus));
        assert!(cursor.match_kind(TokenKind::Plus));
        assert_eq!(cursor.previous().kind, TokenKind::Plus);
    }

    #[test]
    fn consume_reports_at_current_token() {
        let toks = tokens(&[TokenKind::Print]);
        let mut cursor = Cursor::new(&toks);
        let err = match cursor.consume(TokenKind::Semicolon, "Expect ';'") {
            Err(e) => e,
            Ok(_) => panic!("expected a parse error"),
        };
        assert_eq!(err.token.kind, TokenKind::Print);
        assert_eq!(err.message, "Expect ';'");
    }

    #[test]
    fn check_next_sees_one_ahead() {
        let toks = tokens(&[TokenKind::Fun, TokenKind::Identifier]);
        let cursor = Cursor::new(&toks);
        assert!(cursor.check_next(TokenKind::Identifier));
        assert!(!cursor.check_next(TokenKind::LeftParen));
    }
}
