//! Byte ranges into a lexed document.

use std::fmt;
use std::ops::Range;

/// A `usize` range that cannot become a [`Span`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    #[error("byte offset {offset} does not fit in a 32-bit span")]
    OffsetTooLarge { offset: usize },
    #[error("range {start}..{end} ends before it starts")]
    Reversed { start: usize, end: usize },
}

/// Half-open byte range `start..end`, 8 bytes.
///
/// Documents are capped at `u32::MAX` bytes by `SourceBuffer`, so every
/// token and issue position fits.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<Span>() == 8);

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Checked conversion from a `usize` range, e.g. one found by searching
    /// the source text.
    pub fn try_from_range(range: Range<usize>) -> Result<Self, SpanError> {
        let Range { start, end } = range;
        if end < start {
            return Err(SpanError::Reversed { start, end });
        }
        let narrow = |offset: usize| {
            u32::try_from(offset).map_err(|_| SpanError::OffsetTooLarge { offset })
        };
        Ok(Span::new(narrow(start)?, narrow(end)?))
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// `true` if `offset` falls inside the range; `end` is excluded.
    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        (self.start..self.end).contains(&offset)
    }

    /// Smallest span covering both, including any gap between them.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
