// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::cursor::Cursor;
use crate::parse_error::ParseError;

/// Counts the ASCII digits at the start of `bytes`.
fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Validates a JSON number at the start of `bytes` and returns the length of its span.
///
/// Grammar: `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
///
/// The scan stops at the first byte that cannot extend the number, so `0123`
/// yields a span of 1 and leaves `123` for the caller.
pub fn scan_number(bytes: &[u8]) -> Result<usize, ParseError> {
    let mut len = 0;

    if bytes.first() == Some(&b'-') {
        len += 1;
    }

    match bytes.get(len) {
        Some(b'0') => len += 1,
        Some(b'1'..=b'9') => len += 1 + digit_run(bytes.get(len + 1..).unwrap_or(&[])),
        _ => return Err(ParseError::InvalidValue),
    }

    if bytes.get(len) == Some(&b'.') {
        len += 1;
        let digits = digit_run(bytes.get(len..).unwrap_or(&[]));
        if digits == 0 {
            return Err(ParseError::InvalidValue);
        }
        len += digits;
    }

    if let Some(b'e' | b'E') = bytes.get(len) {
        len += 1;
        if let Some(b'+' | b'-') = bytes.get(len) {
            len += 1;
        }
        let digits = digit_run(bytes.get(len..).unwrap_or(&[]));
        if digits == 0 {
            return Err(ParseError::InvalidValue);
        }
        len += digits;
    }

    Ok(len)
}

/// Converts a span already accepted by [`scan_number`] into an `f64`.
///
/// An infinite result means the magnitude overflowed. Underflow to zero is accepted.
pub fn convert_number(span: &[u8]) -> Result<f64, ParseError> {
    // A validated span is pure ASCII
    let s = core::str::from_utf8(span)?;
    match f64::from_str(s) {
        Ok(val) if val.is_infinite() => Err(ParseError::NumberTooBig),
        Ok(val) => Ok(val),
        Err(_) => Err(ParseError::InvalidValue),
    }
}

/// Parses a JSON number at the cursor, advancing past it on success.
///
/// The cursor is left untouched on error.
pub fn parse_number(cursor: &mut Cursor<'_>) -> Result<f64, ParseError> {
    let remaining = cursor.remaining();
    let len = scan_number(remaining)?;
    let span = remaining.get(..len).ok_or(ParseError::InvalidValue)?;
    let value = convert_number(span)?;
    cursor.advance(len);
    Ok(value)
}
