//! Owned source text plus the encoding conditions found while loading it.
//!
//! Construction records two conditions the integration layer reports:
//! - a UTF-8 byte order mark at the start of the document
//! - interior null bytes (they scan as `Unrecognized` tokens)
//!
//! Offsets everywhere are `u32` byte positions, so a document is capped at
//! `u32::MAX` bytes; anything beyond that is dropped at a character boundary.

use crate::Cursor;

/// A complete document ready for scanning.
///
/// Lexemes are sliced straight out of `text`, so tokens borrow from the
/// buffer rather than copying.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    text: String,
    /// `text.len()` as a `u32`.
    source_len: u32,
    /// Encoding issues detected during construction.
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during source buffer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    /// What kind of encoding issue was detected.
    pub kind: EncodingIssueKind,
    /// Byte position in the source where the issue was found.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

/// Kind of encoding issue detected in a source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at the start of the document.
    Utf8Bom,
    /// Null byte (U+0000) inside the source content.
    InteriorNull,
}

impl SourceBuffer {
    /// Copy `source` into a new buffer and scan it for encoding issues.
    pub fn new(source: &str) -> Self {
        let mut end = source.len().min(u32::MAX as usize);
        while !source.is_char_boundary(end) {
            end -= 1;
        }
        let text = source[..end].to_owned();

        let mut encoding_issues = Vec::new();
        detect_encoding_issues(text.as_bytes(), &mut encoding_issues);

        Self {
            source_len: u32::try_from(text.len()).unwrap_or(u32::MAX),
            text,
            encoding_issues,
        }
    }

    /// The source text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The source bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.text, self.source_len)
    }

    /// Create a [`Cursor`] positioned at `offset`.
    ///
    /// Offsets past the end clamp to `len()`. An offset inside a multi-byte
    /// character moves forward to the next character boundary, so the cursor
    /// never splits a code point.
    pub fn cursor_at(&self, offset: u32) -> Cursor<'_> {
        let mut pos = offset.min(self.source_len);
        while !self.text.is_char_boundary(pos as usize) {
            pos += 1;
        }
        let mut cursor = self.cursor();
        cursor.advance_n(pos);
        cursor
    }

    /// Length of the source in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Encoding issues detected during construction.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

fn detect_encoding_issues(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    if source.starts_with(&[0xEF, 0xBB, 0xBF]) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        });
    }
    detect_interior_nulls(source, issues);
}

/// Detect null bytes (U+0000) within the source content.
fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    for absolute in memchr::memchr_iter(0, source) {
        if let Ok(pos) = u32::try_from(absolute) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos,
                len: 1,
            });
        }
    }
}
