// SPDX-License-Identifier: Apache-2.0

//! Passthrough string scanning.
//!
//! Content between the quotes is taken verbatim: escape sequences are not
//! decoded and a backslash is an ordinary byte.

use crate::cursor::Cursor;
use crate::parse_error::ParseError;

/// Scans a string starting at the opening quote under the cursor.
///
/// Returns the raw content between the quotes and leaves the cursor just past
/// the closing quote. If input ends first the result is `MissQuotationMark`
/// and the cursor is left where it was.
///
/// # Panics
/// If the cursor is not positioned on a `"`. Callers dispatch on the quote first.
pub fn parse_string<'a>(cursor: &mut Cursor<'a>) -> Result<&'a str, ParseError> {
    assert_eq!(
        cursor.peek(),
        Ok(b'"'),
        "parse_string called without an opening quote"
    );
    let content = cursor.remaining().get(1..).unwrap_or(&[]);

    let len = content
        .iter()
        .position(|&b| b == b'"')
        .ok_or(ParseError::MissQuotationMark)?;
    let raw = content.get(..len).ok_or(ParseError::MissQuotationMark)?;

    // Quotes are ASCII, so a span cut from valid UTF-8 input stays valid
    let text = core::str::from_utf8(raw)?;
    cursor.advance(len + 2);
    Ok(text)
}
