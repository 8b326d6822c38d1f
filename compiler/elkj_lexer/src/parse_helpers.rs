//! Numeric value parsing for SIGNED_INT and FLOAT lexemes.

use std::num::IntErrorKind;

use crate::CookError;

/// The value of a SIGNED_INT lexeme.
///
/// A leading `+` is accepted. Values outside `i64` are an error rather
/// than wrapping or saturating.
pub fn parse_signed_int(lexeme: &str) -> Result<i64, CookError> {
    lexeme.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => CookError::IntOverflow {
            lexeme: lexeme.to_owned(),
        },
        _ => CookError::InvalidNumber {
            lexeme: lexeme.to_owned(),
            expected: "integer",
        },
    })
}

/// The value of a FLOAT or SIGNED_INT lexeme.
///
/// Only the scanner's number shapes are accepted, so `inf` and `NaN`
/// spellings are rejected even though `f64` parsing would take them.
pub fn parse_float(lexeme: &str) -> Result<f64, CookError> {
    let invalid = || CookError::InvalidNumber {
        lexeme: lexeme.to_owned(),
        expected: "float",
    };
    let unsigned = lexeme.strip_prefix(['+', '-']).unwrap_or(lexeme);
    if !unsigned.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let value: f64 = lexeme.parse().map_err(|_| invalid())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CookError::FloatOverflow {
            lexeme: lexeme.to_owned(),
        })
    }
}
