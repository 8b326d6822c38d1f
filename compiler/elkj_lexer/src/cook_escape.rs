//! Converting STRING and ID lexemes into their values.
//!
//! Escapes recognized inside strings: `\b` `\t` `\n` `\f` `\r` `\"` `\'`
//! `\\` and `\uXXXX`, where a surrogate pair of two `\u` escapes stands
//! for one character outside the Basic Multilingual Plane. Anything else
//! after a backslash is an error; the scanner accepted it, but the value
//! cannot be produced.

use std::borrow::Cow;
use std::str::CharIndices;

/// Failure to convert a lexeme into a value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CookError {
    /// The lexeme does not start with `"` or `'`.
    #[error("string lexeme must start with a quote")]
    NotAString,
    /// The closing delimiter is missing.
    #[error("string is missing its closing {quote}")]
    MissingClosingQuote { quote: char },
    /// `\` followed by a character with no defined meaning.
    #[error("invalid escape sequence `\\{escape}` at byte {offset}")]
    InvalidEscape { escape: char, offset: usize },
    /// `\u` not followed by four hex digits, or a surrogate without its
    /// other half.
    #[error("invalid unicode escape at byte {offset}")]
    InvalidUnicodeEscape { offset: usize },
    /// The lexeme is not a number of the requested kind.
    #[error("`{lexeme}` is not a valid {expected}")]
    InvalidNumber {
        lexeme: String,
        expected: &'static str,
    },
    /// The integer does not fit in `i64`.
    #[error("integer `{lexeme}` does not fit in 64 bits")]
    IntOverflow { lexeme: String },
    /// The float is too large to be finite.
    #[error("float `{lexeme}` is out of range")]
    FloatOverflow { lexeme: String },
}

/// The value of a STRING lexeme (or a quoted key spelling).
///
/// Strips the delimiters and resolves escapes. Borrows from the lexeme when
/// it contains no backslash.
pub fn unescape_string(lexeme: &str) -> Result<Cow<'_, str>, CookError> {
    let quote = match lexeme.chars().next() {
        Some(q @ ('"' | '\'')) => q,
        _ => return Err(CookError::NotAString),
    };
    let body = &lexeme[1..];
    let Some(content) = closed_content(body, quote) else {
        return Err(CookError::MissingClosingQuote { quote });
    };

    if !content.contains('\\') {
        return Ok(Cow::Borrowed(content));
    }

    let mut out = String::with_capacity(content.len());
    let mut chars = content.char_indices();
    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        // `closed_content` guarantees a backslash is never last.
        let offset = i + 1;
        match chars.next() {
            Some((_, 'b')) => out.push('\u{0008}'),
            Some((_, 't')) => out.push('\t'),
            Some((_, 'n')) => out.push('\n'),
            Some((_, 'f')) => out.push('\u{000C}'),
            Some((_, 'r')) => out.push('\r'),
            Some((_, '"')) => out.push('"'),
            Some((_, '\'')) => out.push('\''),
            Some((_, '\\')) => out.push('\\'),
            Some((_, 'u')) => out.push(unicode_escape(&mut chars, offset)?),
            Some((_, escape)) => return Err(CookError::InvalidEscape { escape, offset }),
            None => return Err(CookError::MissingClosingQuote { quote }),
        }
    }
    Ok(Cow::Owned(out))
}

/// Text between the quotes, or `None` if the final quote is missing or
/// escaped.
fn closed_content(body: &str, quote: char) -> Option<&str> {
    let content = body.strip_suffix(quote)?;
    let trailing_backslashes = content.bytes().rev().take_while(|&b| b == b'\\').count();
    (trailing_backslashes % 2 == 0).then_some(content)
}

/// Decode the digits after `\u`. A high surrogate must be followed by a
/// `\uXXXX` low surrogate; the pair decodes to one supplementary character.
fn unicode_escape(chars: &mut CharIndices<'_>, offset: usize) -> Result<char, CookError> {
    let invalid = || CookError::InvalidUnicodeEscape { offset };
    let code = hex4(chars).ok_or_else(invalid)?;
    if !(0xD800..=0xDBFF).contains(&code) {
        return char::from_u32(code).ok_or_else(invalid);
    }

    let mut rest = chars.clone();
    let low = match (rest.next(), rest.next()) {
        (Some((_, '\\')), Some((_, 'u'))) => hex4(&mut rest),
        _ => None,
    }
    .filter(|low| (0xDC00..=0xDFFF).contains(low))
    .ok_or_else(invalid)?;
    *chars = rest;

    let combined = 0x1_0000 + ((code - 0xD800) << 10) + (low - 0xDC00);
    char::from_u32(combined).ok_or_else(invalid)
}

fn hex4(chars: &mut CharIndices<'_>) -> Option<u32> {
    let mut code = 0u32;
    for _ in 0..4 {
        code = code * 16 + chars.next()?.1.to_digit(16)?;
    }
    Some(code)
}

/// The name an ID lexeme stands for, without the `^` escape marker.
///
/// `^children` names a node property called `children` without being the
/// reserved key.
pub fn ident_text(lexeme: &str) -> &str {
    lexeme.strip_prefix('^').unwrap_or(lexeme)
}
