//! Standalone scanner for ELK Graph JSON text.
//!
//! Turns a source buffer into a gapless stream of `(TokenKind, len)` pairs.
//! Every byte of the input is covered by exactly one token; malformed input
//! degrades to `Unrecognized` tokens or to greedy consumption of an
//! unterminated string or comment. Nothing in this crate can fail.
//!
//! # Layers
//!
//! - [`SourceBuffer`] owns the input and its encoding issues.
//! - [`Cursor`] walks that buffer byte by byte, reading `0x00` past the end.
//! - [`rules`] holds the ordered `(pattern, kind)` table and the
//!   longest-match-with-priority routine.
//! - [`Scanner`] drives the rule table and enforces forward progress.
//!
//! Keyword resolution happens inside the rule table, not afterwards:
//! reserved spellings are declared before the generic `Id` and `String`
//! patterns, so an equal-length tie resolves to the reserved kind.

mod cursor;
mod kind;
pub mod rules;
mod scanner;
mod source_buffer;

pub use cursor::Cursor;
pub use kind::{KeyGroup, PropertyKey, TokenKind};
pub use scanner::{scan_at, tokenize, RawToken, Scanner};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
