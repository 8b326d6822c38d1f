//! Token stream for ELK Graph JSON built on `elkj_lexer_core`.
//!
//! The core crate only reports `(kind, len)` pairs. This crate attaches
//! spans and lexemes, classifies lexical issues without altering the
//! stream, and converts lexemes into values.
//!
//! ```text
//! SourceBuffer ──► Scanner ──► Lexer ──► TokenList ──► Significant (parser view)
//!                                            │
//!                                            └──► check_tokens ──► Vec<LexIssue>
//! ```

mod cook_escape;
mod lex_error;
mod lexer;
mod line_table;
mod parse_helpers;
mod span;
mod token;
mod trivia;

pub use cook_escape::{ident_text, unescape_string, CookError};
pub use elkj_lexer_core::{KeyGroup, PropertyKey, SourceBuffer, TokenKind};
pub use lex_error::{check_tokens, LexIssue, LexIssueKind, Severity};
pub use lexer::{lex, relex_from, LexOutput, Lexer};
pub use line_table::LineOffsetTable;
pub use parse_helpers::{parse_float, parse_signed_int};
pub use span::{Span, SpanError};
pub use token::{Token, TokenList};
pub use trivia::Significant;
