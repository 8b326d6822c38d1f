//! Pull-based scanner producing `(TokenKind, len)` pairs.
//!
//! The scanner keeps nothing but a cursor between calls. Each call asks the
//! rule table for the longest match at the current position and commits it;
//! when no rule matches, exactly one character becomes an `Unrecognized`
//! token. Every returned token is therefore at least one byte long, and the
//! tokens tile the input without gaps.

use std::iter::FusedIterator;

use crate::cursor::Cursor;
use crate::kind::TokenKind;
use crate::rules::longest_match;
use crate::source_buffer::SourceBuffer;

/// A classified run of bytes with no position attached.
///
/// Positions are implied by the sum of preceding lengths; the integration
/// layer turns them into spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub kind: TokenKind,
    pub len: u32,
}

/// Allocation-free scanner over a [`SourceBuffer`] cursor.
#[derive(Clone, Copy, Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner starting wherever `cursor` points.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Create a scanner starting at byte `offset` of `buffer`.
    ///
    /// Restarting at a token boundary of an earlier scan reproduces the
    /// rest of that scan.
    pub fn starting_at(buffer: &'a SourceBuffer, offset: u32) -> Self {
        Self::new(buffer.cursor_at(offset))
    }

    /// Byte offset of the next token.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next token, or `None` at end-of-input.
    ///
    /// Once `None` has been returned, every later call returns `None`.
    pub fn next_token(&mut self) -> Option<RawToken> {
        if self.cursor.is_eof() {
            return None;
        }
        let start = self.cursor.pos();
        match longest_match(self.cursor) {
            Some((kind, len)) => {
                self.cursor.advance_n(len);
                Some(RawToken { kind, len })
            }
            None => {
                self.cursor.advance_char();
                Some(RawToken {
                    kind: TokenKind::Unrecognized,
                    len: self.cursor.pos() - start,
                })
            }
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = RawToken;

    #[inline]
    fn next(&mut self) -> Option<RawToken> {
        self.next_token()
    }
}

impl FusedIterator for Scanner<'_> {}

/// Scan the single token starting at byte `pos` of `buffer`.
///
/// Returns `None` when `pos` is at or past end-of-input.
pub fn scan_at(buffer: &SourceBuffer, pos: u32) -> Option<RawToken> {
    Scanner::starting_at(buffer, pos).next_token()
}

/// Scan `source` completely.
///
/// Convenience for tests and benchmarks; lexing proper goes through
/// [`Scanner`] over a buffer the caller keeps.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = SourceBuffer::new(source);
    Scanner::new(buf.cursor()).collect()
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    reason = "tests use expect to panic on unexpected state"
)]
mod tests;
