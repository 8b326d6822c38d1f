//! Lexical issues found by inspecting a finished token stream.
//!
//! Scanning never fails. Malformed input still produces a complete,
//! gapless stream, and [`check_tokens`] reads that stream afterwards to
//! report what a parser would reject. The stream itself is never altered.

use std::fmt;

use elkj_lexer_core::{EncodingIssueKind, SourceBuffer, TokenKind};

use crate::{Span, Token, TokenList};

/// A lexical issue with its location.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{kind}")]
pub struct LexIssue {
    pub span: Span,
    pub kind: LexIssueKind,
}

/// What is wrong at an issue's span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LexIssueKind {
    /// A character no rule accepts, including a sign with no digits.
    #[error("unrecognized character {ch:?}")]
    UnrecognizedChar { ch: char },
    /// A string that runs to end-of-input.
    #[error("unterminated string: missing closing {quote}")]
    UnterminatedString { quote: char },
    /// A block comment that runs to end-of-input.
    #[error("unterminated block comment: missing `*/`")]
    UnterminatedComment,
    /// A UTF-8 byte order mark at the start of the document.
    #[error("document starts with a UTF-8 byte order mark")]
    Utf8Bom,
    /// A U+0000 character inside the document.
    #[error("null byte in document")]
    InteriorNull,
}

/// How serious an issue is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    Note,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Note => "note",
            Severity::Error => "error",
        })
    }
}

impl LexIssue {
    pub fn new(span: Span, kind: LexIssueKind) -> Self {
        LexIssue { span, kind }
    }

    pub fn severity(&self) -> Severity {
        match self.kind {
            LexIssueKind::Utf8Bom => Severity::Note,
            LexIssueKind::UnrecognizedChar { .. }
            | LexIssueKind::UnterminatedString { .. }
            | LexIssueKind::UnterminatedComment
            | LexIssueKind::InteriorNull => Severity::Error,
        }
    }

    /// Returns `true` for everything except the byte-order-mark note.
    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    /// A short suggestion for fixing the issue, when one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match self.kind {
            LexIssueKind::UnrecognizedChar { ch: '+' | '-' } => {
                Some("a sign must be immediately followed by a digit")
            }
            LexIssueKind::UnrecognizedChar { ch: '.' } => {
                Some("a fraction needs digits on both sides of `.`")
            }
            LexIssueKind::UnrecognizedChar { ch: '^' } => {
                Some("`^` escapes an identifier and must be followed by a letter or `_`")
            }
            LexIssueKind::UnterminatedString { .. } => Some("add the closing quote"),
            LexIssueKind::UnterminatedComment => Some("close the comment with `*/`"),
            LexIssueKind::Utf8Bom => Some("the mark is ignored by most ELK JSON readers"),
            LexIssueKind::UnrecognizedChar { .. } | LexIssueKind::InteriorNull => None,
        }
    }
}

/// Classify the lexical issues of a token stream produced from `buffer`.
///
/// Issues come back sorted by start offset. An unrecognized NUL or
/// byte-order-mark token is reported once, as the encoding issue.
pub fn check_tokens(tokens: &TokenList<'_>, buffer: &SourceBuffer) -> Vec<LexIssue> {
    let mut issues: Vec<LexIssue> = buffer
        .encoding_issues()
        .iter()
        .map(|issue| {
            let kind = match issue.kind {
                EncodingIssueKind::Utf8Bom => LexIssueKind::Utf8Bom,
                EncodingIssueKind::InteriorNull => LexIssueKind::InteriorNull,
            };
            LexIssue::new(Span::new(issue.pos, issue.pos + issue.len), kind)
        })
        .collect();
    let encoding_count = issues.len();

    for token in tokens {
        if let Some(kind) = token_issue(token) {
            issues.push(LexIssue::new(token.span, kind));
        }
    }

    if encoding_count > 0 {
        issues.sort_by_key(|issue| issue.span.start);
    }
    issues
}

fn token_issue(token: &Token<'_>) -> Option<LexIssueKind> {
    match token.kind {
        TokenKind::Unrecognized => {
            let ch = token.lexeme.chars().next()?;
            let reported_as_encoding =
                ch == '\0' || (ch == '\u{FEFF}' && token.span.start == 0);
            (!reported_as_encoding).then_some(LexIssueKind::UnrecognizedChar { ch })
        }
        TokenKind::String if !string_is_closed(token.lexeme) => {
            let quote = token.lexeme.chars().next()?;
            Some(LexIssueKind::UnterminatedString { quote })
        }
        TokenKind::MlComment if !comment_is_closed(token.lexeme) => {
            Some(LexIssueKind::UnterminatedComment)
        }
        _ => None,
    }
}

/// A string lexeme is closed if an unescaped copy of its opening quote
/// follows the opening quote.
fn string_is_closed(lexeme: &str) -> bool {
    let bytes = lexeme.as_bytes();
    let Some(&quote) = bytes.first() else {
        return false;
    };
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return true,
            _ => i += 1,
        }
    }
    false
}

/// `/*/` ends in `*/` but is still open: the `*` belongs to the opener.
fn comment_is_closed(lexeme: &str) -> bool {
    lexeme.len() >= 4 && lexeme.ends_with("*/")
}
