//! Byte cursor over source text.
//!
//! The scanner works on bytes. All syntactically significant characters
//! in nbl are ASCII, so multi-byte UTF-8 sequences can only appear
//! inside string literals (passed through verbatim) or as lexical
//! errors (consumed as one scalar so recovery resumes at a character
//! boundary).

/// Cursor state: the source, a `start` mark for the lexeme in
/// progress, and the `current` read position.
pub(crate) struct Cursor<'src> {
    source: &'src str,
    bytes: &'src [u8],
    start: usize,
    current: usize,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Cursor {
            source,
            bytes: source.as_bytes(),
            start: 0,
            current: 0,
        }
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.current >= self.bytes.len()
    }

    /// Mark the start of the next lexeme at the current position.
    #[inline]
    pub(crate) fn begin_lexeme(&mut self) {
        self.start = self.current;
    }

    /// Consume and return the current byte.
    ///
    /// # Panics
    /// Panics if called at end of input; the scanner's main loop
    /// guarantees it is not.
    #[inline]
    pub(crate) fn advance(&mut self) -> u8 {
        let byte = self.bytes[self.current];
        self.current += 1;
        byte
    }

    /// Current byte without consuming, `0` at end of input.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.bytes.get(self.current).copied().unwrap_or(0)
    }

    /// Byte after the current one without consuming, `0` past the end.
    #[inline]
    pub(crate) fn peek_next(&self) -> u8 {
        self.bytes.get(self.current + 1).copied().unwrap_or(0)
    }

    /// Consume the current byte only if it equals `expected`.
    /// This is the one-byte maximal-munch step for `!= == <= >=`.
    #[inline]
    pub(crate) fn match_byte(&mut self, expected: u8) -> bool {
        if self.peek() != expected {
            return false;
        }
        self.current += 1;
        true
    }

    /// The lexeme scanned since the last `begin_lexeme`.
    #[inline]
    pub(crate) fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.current]
    }

    /// The lexeme with its first and last byte removed (string
    /// literals without their quotes).
    #[inline]
    pub(crate) fn lexeme_inner(&self) -> &'src str {
        &self.source[self.start + 1..self.current - 1]
    }

    /// The full scalar value beginning at the lexeme start. Used for
    /// error messages about non-ASCII input.
    pub(crate) fn scalar_at_start(&self) -> char {
        self.source[self.start..].chars().next().unwrap_or('\u{FFFD}')
    }

    /// Consume UTF-8 continuation bytes so the cursor lands on the
    /// next character boundary.
    pub(crate) fn skip_continuation_bytes(&mut self) {
        while !self.is_at_end() && self.peek() & 0xC0 == 0x80 {
            self.current += 1;
        }
    }
}
