// SPDX-License-Identifier: Apache-2.0

use crate::cursor;

/// Errors that can occur while parsing a JSON value.
///
/// These describe malformed or absent input only. Reading a [`Value`](crate::Value)
/// through the wrong accessor is a caller bug and panics instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or held only whitespace.
    ExpectValue,
    /// A literal, number or other token was malformed.
    InvalidValue,
    /// A complete value was followed by more non-whitespace input.
    RootNotSingular,
    /// A number was too large in magnitude to fit in an `f64`.
    NumberTooBig,
    /// A string was missing its closing quotation mark.
    MissQuotationMark,
    /// Reserved for escape sequence validation, currently never produced.
    InvalidStringEscape,
    /// Reserved for control character validation, currently never produced.
    InvalidStringChar,
    /// String content in byte-slice input was not valid UTF-8.
    InvalidUtf8(core::str::Utf8Error),
}

impl ParseError {
    /// Stable numeric code for this error. `0` is reserved for success.
    pub const fn code(&self) -> u8 {
        match self {
            ParseError::ExpectValue => 1,
            ParseError::InvalidValue => 2,
            ParseError::RootNotSingular => 3,
            ParseError::NumberTooBig => 4,
            ParseError::MissQuotationMark => 5,
            ParseError::InvalidStringEscape => 6,
            ParseError::InvalidStringChar => 7,
            ParseError::InvalidUtf8(_) => 8,
        }
    }
}

impl From<cursor::Error> for ParseError {
    fn from(err: cursor::Error) -> Self {
        match err {
            cursor::Error::ReachedEnd => ParseError::ExpectValue,
        }
    }
}

impl From<core::str::Utf8Error> for ParseError {
    fn from(err: core::str::Utf8Error) -> Self {
        ParseError::InvalidUtf8(err)
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::ExpectValue => f.write_str("expected a value"),
            ParseError::InvalidValue => f.write_str("invalid value"),
            ParseError::RootNotSingular => f.write_str("root value is followed by extra input"),
            ParseError::NumberTooBig => f.write_str("number too big"),
            ParseError::MissQuotationMark => f.write_str("missing closing quotation mark"),
            ParseError::InvalidUtf8(e) => write!(f, "Invalid UTF-8: {e}"),
            _ => write!(f, "{self:?}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(ParseError::ExpectValue.code(), 1);
        assert_eq!(ParseError::InvalidValue.code(), 2);
        assert_eq!(ParseError::RootNotSingular.code(), 3);
        assert_eq!(ParseError::NumberTooBig.code(), 4);
        assert_eq!(ParseError::MissQuotationMark.code(), 5);
        assert_eq!(ParseError::InvalidStringEscape.code(), 6);
        assert_eq!(ParseError::InvalidStringChar.code(), 7);
    }

    #[test]
    fn test_cursor_error_conversion() {
        let error: ParseError = cursor::Error::ReachedEnd.into();
        assert_eq!(error, ParseError::ExpectValue);
    }

    #[test]
    fn test_utf8_error_conversion() {
        // Lone continuation byte, built at runtime to avoid the invalid literal lint
        let mut invalid_utf8_array = [0u8; 1];
        invalid_utf8_array[0] = 0b10000000u8;

        match core::str::from_utf8(&invalid_utf8_array) {
            Err(utf8_error) => {
                let parse_error: ParseError = utf8_error.into();
                assert!(matches!(parse_error, ParseError::InvalidUtf8(_)));
                assert_eq!(parse_error.code(), 8);
            }
            Ok(_) => panic!("Expected UTF-8 validation to fail"),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ParseError::NumberTooBig.to_string(), "number too big");
        assert_eq!(
            ParseError::InvalidStringEscape.to_string(),
            "InvalidStringEscape"
        );
    }
}
