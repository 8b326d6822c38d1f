//! Positioned tokens and the token list produced by [`lex`](crate::lex).

use std::fmt;
use std::iter::Copied;
use std::slice;

use elkj_lexer_core::{PropertyKey, TokenKind};

use crate::trivia::Significant;
use crate::Span;

/// A classified, positioned slice of the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'src> {
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_kind"))]
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: &'src str, span: Span) -> Self {
        Token { kind, lexeme, span }
    }

    /// Whitespace or a comment.
    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    /// The reserved key this token spells, in any of its three spellings.
    #[inline]
    pub fn property_key(&self) -> Option<PropertyKey> {
        self.kind.property_key()
    }

    /// Human-readable kind, for diagnostics.
    #[inline]
    pub fn display_name(&self) -> &'static str {
        self.kind.display_name()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @ {}", self.kind, self.lexeme, self.span)
    }
}

#[cfg(feature = "serde")]
fn serialize_kind<S: serde::Serializer>(kind: &TokenKind, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(kind.display_name())
}

/// Every token of a document, in source order, trivia included.
///
/// Spans tile `[0, len)` of the source with no gaps or overlaps, so
/// [`reconstruct`](Self::reconstruct) returns the original text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList<'src> {
    tokens: Vec<Token<'src>>,
}

impl<'src> TokenList<'src> {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token<'src>) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token<'src>> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Token<'src>> {
        self.tokens.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token<'src>] {
        &self.tokens
    }

    /// Tokens the parser sees: trivia removed.
    pub fn significant(&self) -> Significant<Copied<slice::Iter<'_, Token<'src>>>> {
        Significant::new(self.tokens.iter().copied())
    }

    /// Token kinds in order, trivia included.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    /// Range from the first token's start to the last token's end.
    pub fn span(&self) -> Option<Span> {
        let (first, last) = (self.tokens.first()?, self.tokens.last()?);
        Some(first.span.merge(last.span))
    }

    /// Concatenation of every lexeme; equals the lexed source.
    pub fn reconstruct(&self) -> String {
        let len = self.span().map_or(0, |span| span.len() as usize);
        let mut out = String::with_capacity(len);
        for token in &self.tokens {
            out.push_str(token.lexeme);
        }
        out
    }

    /// The token whose span covers byte `offset`.
    ///
    /// Returns `None` when `offset` is at or past the end of the last token.
    pub fn token_at(&self, offset: u32) -> Option<&Token<'src>> {
        let idx = self.tokens.partition_point(|t| t.span.end <= offset);
        self.tokens.get(idx).filter(|t| t.span.contains(offset))
    }

    /// Index of the token starting exactly at `offset`, if any.
    pub fn index_starting_at(&self, offset: u32) -> Option<usize> {
        self.tokens
            .binary_search_by_key(&offset, |t| t.span.start)
            .ok()
    }

    pub fn into_vec(self) -> Vec<Token<'src>> {
        self.tokens
    }
}

impl<'src> FromIterator<Token<'src>> for TokenList<'src> {
    fn from_iter<I: IntoIterator<Item = Token<'src>>>(iter: I) -> Self {
        TokenList {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<'src> Extend<Token<'src>> for TokenList<'src> {
    fn extend<I: IntoIterator<Item = Token<'src>>>(&mut self, iter: I) {
        self.tokens.extend(iter);
    }
}

impl<'a, 'src> IntoIterator for &'a TokenList<'src> {
    type Item = &'a Token<'src>;
    type IntoIter = slice::Iter<'a, Token<'src>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl<'src> IntoIterator for TokenList<'src> {
    type Item = Token<'src>;
    type IntoIter = std::vec::IntoIter<Token<'src>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'src> std::ops::Index<usize> for TokenList<'src> {
    type Output = Token<'src>;

    #[inline]
    fn index(&self, index: usize) -> &Token<'src> {
        &self.tokens[index]
    }
}
