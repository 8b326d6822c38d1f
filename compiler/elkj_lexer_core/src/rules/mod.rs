//! Ordered `(pattern, kind)` rule table and the longest-match routine.
//!
//! Every rule is tried at the current position. The longest match wins;
//! among equally long matches the rule declared first wins. Reserved
//! spellings are therefore declared before the generic patterns they
//! overlap with:
//!
//! - bare keys and `true`/`false`/`null` tie with [`Pattern::Id`]
//! - quoted keys tie with [`Pattern::String`]
//!
//! An identifier that merely starts with a keyword (`childrenX`) is longer
//! than the keyword and wins on length alone.
//!
//! Nothing here consumes input: each pattern runs on its own copy of the
//! cursor and reports a length. The scanner commits the winner.

use crate::cursor::Cursor;
use crate::kind::TokenKind;

/// How a rule recognizes text at the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// An exact spelling.
    Literal(&'static str),
    /// `('+'|'-')? digit+`
    SignedInt,
    /// `('+'|'-')? digit+ '.' digit+`, or
    /// `('+'|'-')? digit+ ('.' digit+)? ('e'|'E') ('+'|'-')? digit+`
    Float,
    /// `'^'? (letter|'_') (letter|digit|'_')*`
    Id,
    /// Double- or single-quoted; `\` escapes the next character.
    /// Unterminated strings run to end-of-input.
    String,
    /// `/*` to the first `*/`, or to end-of-input.
    MlComment,
    /// `//` to the end of the line, including `\n` or `\r\n`.
    SlComment,
    /// One or more of space, tab, `\r`, `\n`.
    Whitespace,
}

/// One entry of the rule table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    pub pattern: Pattern,
    pub kind: TokenKind,
}

/// Builds the rule table in declaration order.
///
/// Each key name expands to its double-quoted, single-quoted and bare
/// spellings, all mapped to the same kind.
macro_rules! rule_table {
    (
        literals { $($lit:literal => $lit_kind:ident,)* }
        keys { $($key:literal => $key_kind:ident,)* }
        patterns { $($pat:ident => $pat_kind:ident,)* }
    ) => {
        &[
            $(Rule { pattern: Pattern::Literal($lit), kind: TokenKind::$lit_kind },)*
            $(
                Rule {
                    pattern: Pattern::Literal(concat!("\"", $key, "\"")),
                    kind: TokenKind::$key_kind,
                },
                Rule {
                    pattern: Pattern::Literal(concat!("'", $key, "'")),
                    kind: TokenKind::$key_kind,
                },
                Rule { pattern: Pattern::Literal($key), kind: TokenKind::$key_kind },
            )*
            $(Rule { pattern: Pattern::$pat, kind: TokenKind::$pat_kind },)*
        ]
    };
}

/// The rule table, highest priority first.
pub static RULES: &[Rule] = rule_table! {
    literals {
        "{" => LeftBrace,
        "," => Comma,
        "}" => RightBrace,
        ":" => Colon,
        "[" => LeftBracket,
        "]" => RightBracket,
        "true" => True,
        "false" => False,
        "null" => Null,
    }
    keys {
        "children" => KeyChildren,
        "ports" => KeyPorts,
        "labels" => KeyLabels,
        "edges" => KeyEdges,
        "layoutOptions" => KeyLayoutOptions,
        "properties" => KeyProperties,
        "id" => KeyId,
        "x" => KeyX,
        "y" => KeyY,
        "width" => KeyWidth,
        "height" => KeyHeight,
        "sources" => KeySources,
        "targets" => KeyTargets,
        "text" => KeyText,
    }
    patterns {
        String => String,
        Id => Id,
        SignedInt => SignedInt,
        Float => Float,
        MlComment => MlComment,
        SlComment => SlComment,
        Whitespace => Whitespace,
    }
};

/// Find the winning rule at the cursor.
///
/// Returns the kind and byte length of the longest match, earliest rule
/// first on ties, or `None` when no rule matches (the caller falls back to
/// a one-character `Unrecognized` token). A returned length is never zero.
pub fn longest_match(cursor: Cursor<'_>) -> Option<(TokenKind, u32)> {
    let mut best: Option<(TokenKind, u32)> = None;
    for rule in RULES {
        if let Some(len) = rule.pattern.match_len(cursor) {
            if best.is_none_or(|(_, best_len)| len > best_len) {
                best = Some((rule.kind, len));
            }
        }
    }
    best
}

impl Pattern {
    /// Length of the match at `cursor`, or `None` if the pattern does not
    /// match. Never returns `Some(0)`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "rule literals are a few bytes long"
    )]
    pub fn match_len(self, cursor: Cursor<'_>) -> Option<u32> {
        let start = cursor.pos();
        let mut c = cursor;
        let matched = match self {
            Pattern::Literal(text) => {
                let matched = c.starts_with(text.as_bytes());
                if matched {
                    c.advance_n(text.len() as u32);
                }
                matched
            }
            Pattern::SignedInt => signed_int(&mut c),
            Pattern::Float => float(&mut c),
            Pattern::Id => id(&mut c),
            Pattern::String => string(&mut c),
            Pattern::MlComment => ml_comment(&mut c),
            Pattern::SlComment => sl_comment(&mut c),
            Pattern::Whitespace => c.eat_while(is_whitespace) > 0,
        };
        let len = c.pos() - start;
        (matched && len > 0).then_some(len)
    }
}

fn eat_sign(c: &mut Cursor<'_>) {
    if matches!(c.current(), b'+' | b'-') {
        c.advance();
    }
}

fn eat_digits(c: &mut Cursor<'_>) -> bool {
    c.eat_while(|b| b.is_ascii_digit()) > 0
}

fn signed_int(c: &mut Cursor<'_>) -> bool {
    eat_sign(c);
    eat_digits(c)
}

fn float(c: &mut Cursor<'_>) -> bool {
    eat_sign(c);
    if !eat_digits(c) {
        return false;
    }
    let mut is_float = false;
    if c.current() == b'.' && c.peek().is_ascii_digit() {
        c.advance();
        eat_digits(c);
        is_float = true;
    }
    // The exponent is all-or-nothing: `1.5e` is `1.5` followed by `e`.
    if matches!(c.current(), b'e' | b'E') {
        let mut exp = *c;
        exp.advance();
        eat_sign(&mut exp);
        if eat_digits(&mut exp) {
            *c = exp;
            is_float = true;
        }
    }
    is_float
}

fn id(c: &mut Cursor<'_>) -> bool {
    if c.current() == b'^' {
        c.advance();
    }
    if !is_ident_start(c.current()) {
        return false;
    }
    c.advance();
    c.eat_while(is_ident_continue);
    true
}

fn string(c: &mut Cursor<'_>) -> bool {
    let quote = c.current();
    if quote != b'"' && quote != b'\'' {
        return false;
    }
    c.advance();
    loop {
        match c.skip_to_quote_or_escape(quote) {
            // Unterminated: the string runs to end-of-input.
            0 => return true,
            b'\\' => {
                c.advance();
                if !c.is_eof() {
                    c.advance_char();
                }
            }
            _ => {
                c.advance();
                return true;
            }
        }
    }
}

fn ml_comment(c: &mut Cursor<'_>) -> bool {
    if !c.starts_with(b"/*") {
        return false;
    }
    c.advance_n(2);
    c.eat_through_block_end();
    true
}

fn sl_comment(c: &mut Cursor<'_>) -> bool {
    if !c.starts_with(b"//") {
        return false;
    }
    c.advance_n(2);
    c.eat_until_line_end();
    match (c.current(), c.peek()) {
        (b'\r', b'\n') => c.advance_n(2),
        (b'\n', _) => c.advance(),
        // A lone `\r` ends the comment but is left for whitespace.
        _ => {}
    }
    true
}

#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
