//! Pull-based lexer attaching spans and lexemes to scanner output.

use std::iter::FusedIterator;

use elkj_lexer_core::{Scanner, SourceBuffer};
use tracing::{debug, trace};

use crate::lex_error::{check_tokens, LexIssue};
use crate::trivia::Significant;
use crate::{Span, Token, TokenList};

/// Pull-based lexer over a [`SourceBuffer`].
///
/// Yields every token, trivia included, and then `None` forever.
#[derive(Clone, Debug)]
pub struct Lexer<'src> {
    source: &'src str,
    scanner: Scanner<'src>,
}

impl<'src> Lexer<'src> {
    pub fn new(buffer: &'src SourceBuffer) -> Self {
        Lexer {
            source: buffer.as_str(),
            scanner: Scanner::new(buffer.cursor()),
        }
    }

    /// Resume lexing at byte `offset`.
    ///
    /// When `offset` is a token boundary of an earlier lex of the same
    /// buffer, the result equals the tail of that lex.
    pub fn starting_at(buffer: &'src SourceBuffer, offset: u32) -> Self {
        Lexer {
            source: buffer.as_str(),
            scanner: Scanner::starting_at(buffer, offset),
        }
    }

    /// Byte offset of the next token.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.scanner.pos()
    }

    /// Produce the next token, or `None` at end-of-input.
    pub fn next_token(&mut self) -> Option<Token<'src>> {
        let start = self.scanner.pos();
        let raw = self.scanner.next_token()?;
        let span = Span::new(start, start + raw.len);
        let lexeme = &self.source[span.to_range()];
        trace!(kind = %raw.kind, start = span.start, end = span.end, "token");
        Some(Token::new(raw.kind, lexeme, span))
    }

    /// Lex the remainder with trivia removed.
    pub fn significant(self) -> Significant<Self> {
        Significant::new(self)
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    #[inline]
    fn next(&mut self) -> Option<Token<'src>> {
        self.next_token()
    }
}

impl FusedIterator for Lexer<'_> {}

/// Output of [`lex`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOutput<'src> {
    /// Every token, trivia included.
    pub tokens: TokenList<'src>,
    /// Lexical issues found in `tokens`, in source order.
    pub issues: Vec<LexIssue>,
}

impl LexOutput<'_> {
    /// Returns `true` if any issue is an error rather than a note.
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(LexIssue::is_error)
    }
}

/// Lex a whole document and classify its lexical issues.
pub fn lex(buffer: &SourceBuffer) -> LexOutput<'_> {
    // Most tokens in typical ELK JSON are a handful of bytes long.
    let mut tokens = TokenList::with_capacity(buffer.len() as usize / 4 + 1);
    tokens.extend(Lexer::new(buffer));
    let issues = check_tokens(&tokens, buffer);
    debug!(
        bytes = buffer.len(),
        tokens = tokens.len(),
        issues = issues.len(),
        "lexed document"
    );
    LexOutput { tokens, issues }
}

/// Lex from byte `offset` to the end of the document.
///
/// Used after an edit: keep the tokens before the first touched token,
/// then re-lex from that token's start.
pub fn relex_from(buffer: &SourceBuffer, offset: u32) -> TokenList<'_> {
    let tokens: TokenList<'_> = Lexer::starting_at(buffer, offset).collect();
    debug!(offset, tokens = tokens.len(), "re-lexed suffix");
    tokens
}
