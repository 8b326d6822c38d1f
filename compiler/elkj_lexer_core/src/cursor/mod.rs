//! Copyable byte cursor over a [`SourceBuffer`](crate::SourceBuffer).
//!
//! Every read is bounds-checked: positions at or past the end of the source
//! read as `0x00`, so matchers can look ahead without length bookkeeping.
//! Pattern matchers take the cursor by value, advance their private copy,
//! and report how far they got; the scanner only commits the winning length.
//!
//! A null byte inside the source reads as `0x00` too. Only
//! [`Cursor::is_eof`] tells the two apart.

/// Copyable cursor over source text.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    text: &'a str,
    /// Current read position (byte index into `text`).
    pos: u32,
    /// Length of `text` in bytes.
    source_len: u32,
}

/// `&str` = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub(crate) fn new(text: &'a str, source_len: u32) -> Self {
        Self {
            text,
            pos: 0,
            source_len,
        }
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        self.text.as_bytes().get(pos as usize).copied().unwrap_or(0)
    }

    /// Returns the byte at the current position (`0x00` at end-of-input).
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current (`0x00` past the end).
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached end-of-input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source bytes from the current position to the end of the content.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        let end = self.source_len as usize;
        let start = (self.pos as usize).min(end);
        &self.text.as_bytes()[start..end]
    }

    /// Returns `true` if the remaining source starts with `lit`.
    ///
    /// A literal longer than the remaining source never matches.
    #[inline]
    pub fn starts_with(&self, lit: &[u8]) -> bool {
        self.rest().starts_with(lit)
    }

    /// Advance while `pred` holds for the current byte; returns the count.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, otherwise the loop never reaches the
    /// end of input.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> u32 {
        let start = self.pos;
        while pred(self.current()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else: 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Advance to the next `\n` or `\r`, or to end-of-input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "rest().len() <= source_len which fits in u32"
    )]
    pub fn eat_until_line_end(&mut self) {
        match memchr::memchr2(b'\n', b'\r', self.rest()) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len,
        }
    }

    /// Advance to the next `quote` or `\`, returning the byte found.
    ///
    /// Returns `0` and parks the cursor at end-of-input if neither occurs.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "rest().len() <= source_len which fits in u32"
    )]
    pub fn skip_to_quote_or_escape(&mut self, quote: u8) -> u8 {
        match memchr::memchr2(quote, b'\\', self.rest()) {
            Some(offset) => {
                self.pos += offset as u32;
                self.current()
            }
            None => {
                self.pos = self.source_len;
                0
            }
        }
    }

    /// Advance just past the first `*/`, or to end-of-input.
    ///
    /// Returns `true` if the terminator was found.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "rest().len() <= source_len which fits in u32"
    )]
    pub fn eat_through_block_end(&mut self) -> bool {
        if let Some(offset) = memchr::memmem::find(self.rest(), b"*/") {
            self.pos += offset as u32 + 2;
            true
        } else {
            self.pos = self.source_len;
            false
        }
    }
}
