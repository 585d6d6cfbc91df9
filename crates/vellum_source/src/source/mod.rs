//! Positional reader over property-value text.
//!
//! The cursor works on bytes. Reads past the end return `0x00`, which no
//! classification predicate accepts, so scanning loops terminate at end of
//! input without explicit bounds checks at every call site.
//!
//! All token boundaries the cursor stops at are ASCII bytes, so every slice
//! it hands out falls on a UTF-8 character boundary.

use crate::CasePolicy;

/// Returns `true` for CSS whitespace: space, tab, LF, CR and form feed.
#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0C)
}

/// Returns `true` for bytes that may start an identifier name.
///
/// Any non-ASCII byte qualifies; continuation bytes are also non-ASCII, so a
/// multi-byte character is consumed whole.
#[inline]
fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

#[inline]
fn is_name(b: u8) -> bool {
    is_name_start(b) || b.is_ascii_digit() || b == b'-'
}

#[inline]
fn byte_at(bytes: &[u8], i: usize) -> u8 {
    bytes.get(i).copied().unwrap_or(0)
}

/// Length in bytes of the identifier token starting at `bytes[0]`, or 0.
///
/// Accepts `--` followed by any name characters (custom identifiers), or an
/// optional `-` followed by a name-start character and name characters.
/// Backslash escapes are not recognized.
pub fn identifier_len(bytes: &[u8]) -> usize {
    let mut i = 0;
    if byte_at(bytes, i) == b'-' {
        i += 1;
        if byte_at(bytes, i) == b'-' {
            i += 1;
            while is_name(byte_at(bytes, i)) {
                i += 1;
            }
            return i;
        }
    }
    if !is_name_start(byte_at(bytes, i)) {
        return 0;
    }
    i += 1;
    while is_name(byte_at(bytes, i)) {
        i += 1;
    }
    i
}

/// Returns `true` if `text` is exactly one identifier token.
pub fn is_identifier(text: &str) -> bool {
    !text.is_empty() && identifier_len(text.as_bytes()) == text.len()
}

/// Length in bytes of the number token starting at `bytes[0]`, or `None`.
///
/// Grammar: `[+-]? (digits ('.' digits)? | '.' digits) ([eE] [+-]? digits)?`.
/// An exponent marker not followed by digits is not part of the number, so
/// `10em` scans as `10` followed by the unit `em`.
pub fn number_len(bytes: &[u8]) -> Option<usize> {
    let mut i = 0;
    if matches!(byte_at(bytes, i), b'+' | b'-') {
        i += 1;
    }

    let int_start = i;
    while byte_at(bytes, i).is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if byte_at(bytes, i) == b'.' && byte_at(bytes, i + 1).is_ascii_digit() {
        i += 1;
        let frac_start = i;
        while byte_at(bytes, i).is_ascii_digit() {
            i += 1;
        }
        digits += i - frac_start;
    }

    if digits == 0 {
        return None;
    }

    if matches!(byte_at(bytes, i), b'e' | b'E') {
        let mut j = i + 1;
        if matches!(byte_at(bytes, j), b'+' | b'-') {
            j += 1;
        }
        if byte_at(bytes, j).is_ascii_digit() {
            while byte_at(bytes, j).is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }

    Some(i)
}

/// Cursor over property-value text.
///
/// The cursor is [`Copy`]; its position is the whole of its mutable state,
/// so a snapshot is just [`position()`](Self::position) and a rollback is
/// [`rewind()`](Self::rewind).
#[derive(Clone, Copy, Debug)]
pub struct Source<'a> {
    text: &'a str,
    /// Current read position (byte index into `text`).
    pos: usize,
}

// Combinators copy positions around constantly; keep the cursor small.
const _: () = assert!(std::mem::size_of::<Source<'static>>() <= 24);

impl<'a> Source<'a> {
    /// Create a cursor at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Source { text, pos: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move the cursor back (or forward) to a position previously returned
    /// by [`position()`](Self::position).
    #[inline]
    pub fn rewind(&mut self, pos: usize) {
        debug_assert!(pos <= self.text.len(), "rewind target {pos} past end");
        debug_assert!(
            self.text.is_char_boundary(pos),
            "rewind target {pos} splits a character"
        );
        self.pos = pos;
    }

    /// The whole text this cursor reads.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The unread remainder of the text.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Extract `start..end` of the text.
    ///
    /// # Contract
    ///
    /// Both offsets must come from [`position()`](Self::position).
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[start..end]
    }

    /// Byte at the current position, or `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        byte_at(self.text.as_bytes(), self.pos)
    }

    /// Byte one position ahead of current, or `0x00` past the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        byte_at(self.text.as_bytes(), self.pos + 1)
    }

    /// Returns `true` if every byte has been consumed.
    ///
    /// This is the raw test; callers that want "no meaningful content
    /// remains" skip insignificant content first.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Advance by `n` bytes.
    ///
    /// # Contract
    ///
    /// The new position must stay within the text and on a character
    /// boundary; token lengths returned by this crate satisfy both.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
        debug_assert!(self.pos <= self.text.len(), "advanced past end");
    }

    /// Consume `byte` if it is the current byte.
    #[inline]
    pub fn eat_byte(&mut self, byte: u8) -> bool {
        if !self.is_at_end() && self.current() == byte {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Skip whitespace and `/* ... */` comments.
    ///
    /// An unterminated comment runs to the end of input. Calling this again
    /// at a significant byte does nothing.
    pub fn skip_insignificant(&mut self) {
        let bytes = self.text.as_bytes();
        loop {
            while is_whitespace(byte_at(bytes, self.pos)) {
                self.pos += 1;
            }
            if byte_at(bytes, self.pos) == b'/' && byte_at(bytes, self.pos + 1) == b'*' {
                let body = self.pos + 2;
                self.pos = match memchr::memmem::find(&bytes[body..], b"*/") {
                    Some(offset) => body + offset + 2,
                    None => bytes.len(),
                };
            } else {
                break;
            }
        }
    }

    /// Returns `true` if an identifier token starts at the cursor.
    #[inline]
    pub fn at_identifier(&self) -> bool {
        identifier_len(&self.text.as_bytes()[self.pos..]) > 0
    }

    /// The identifier token at the cursor, without consuming it.
    pub fn peek_identifier(&self) -> Option<&'a str> {
        let len = identifier_len(&self.text.as_bytes()[self.pos..]);
        (len > 0).then(|| &self.text[self.pos..self.pos + len])
    }

    /// Consume and return the identifier token at the cursor.
    pub fn eat_identifier(&mut self) -> Option<&'a str> {
        let ident = self.peek_identifier()?;
        self.pos += ident.len();
        Some(ident)
    }

    /// Consume the identifier at the cursor if it equals `keyword`, ignoring
    /// ASCII case.
    ///
    /// The whole identifier token must match: `autos` does not match `auto`.
    #[inline]
    pub fn matches_identifier(&mut self, keyword: &str) -> bool {
        self.matches_identifier_with(keyword, CasePolicy::AsciiInsensitive)
    }

    /// Consume the identifier at the cursor if it equals `keyword` under
    /// `policy`. Leaves the cursor unchanged otherwise.
    pub fn matches_identifier_with(&mut self, keyword: &str, policy: CasePolicy) -> bool {
        match self.peek_identifier() {
            Some(ident) if policy.matches(ident, keyword) => {
                self.pos += ident.len();
                true
            }
            _ => false,
        }
    }

    /// The number token at the cursor, without consuming it.
    pub fn peek_number(&self) -> Option<&'a str> {
        let len = number_len(&self.text.as_bytes()[self.pos..])?;
        Some(&self.text[self.pos..self.pos + len])
    }

    /// Consume a number token and return its finite value.
    ///
    /// Leaves the cursor unchanged if there is no number or its value
    /// overflows to infinity.
    pub fn eat_number(&mut self) -> Option<f64> {
        let text = self.peek_number()?;
        let value: f64 = text.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        self.pos += text.len();
        Some(value)
    }
}
