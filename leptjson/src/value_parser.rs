// SPDX-License-Identifier: Apache-2.0

use log::{debug, trace};

use crate::cursor::Cursor;
use crate::number_parser::parse_number;
use crate::parse_error::ParseError;
use crate::string_parser::parse_string;
use crate::value::Value;

/// A single-value JSON parser over a borrowed input buffer.
///
/// The input must hold exactly one JSON value, optionally surrounded by
/// whitespace. Parsing consumes the parser, so each instance runs once.
// Lifetime 'a is the input buffer lifetime
pub struct ValueParser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> ValueParser<'a> {
    /// Creates a new parser for the given JSON input.
    ///
    /// # Example
    /// ```
    /// use leptjson::{Value, ValueParser, ValueType};
    /// let mut value = Value::new();
    /// ValueParser::new(" true ").parse_into(&mut value).unwrap();
    /// assert_eq!(value.get_type(), ValueType::True);
    /// ```
    pub fn new(input: &'a str) -> Self {
        Self::new_from_slice(input.as_bytes())
    }

    /// Creates a new parser from a byte slice.
    ///
    /// String content must be valid UTF-8, otherwise parsing fails with
    /// [`ParseError::InvalidUtf8`].
    pub fn new_from_slice(input: &'a [u8]) -> Self {
        ValueParser {
            cursor: Cursor::new(input),
        }
    }

    /// Parses the input into `value`.
    ///
    /// On success `value` holds the parsed result. On any error it is reset to `null`.
    pub fn parse_into(mut self, value: &mut Value) -> Result<(), ParseError> {
        value.set_null();
        let result = self.parse_root(value);
        if let Err(err) = &result {
            debug!(
                "parse failed at offset {}: {:?}",
                self.cursor.position(),
                err
            );
            value.set_null();
        }
        result
    }

    fn parse_root(&mut self, value: &mut Value) -> Result<(), ParseError> {
        self.cursor.skip_whitespace();
        self.parse_value(value)?;
        self.cursor.skip_whitespace();
        if !self.cursor.is_at_end() {
            return Err(ParseError::RootNotSingular);
        }
        Ok(())
    }

    fn parse_value(&mut self, value: &mut Value) -> Result<(), ParseError> {
        let first = self.cursor.peek()?;
        trace!(
            "dispatching on {:?} at offset {}",
            first as char,
            self.cursor.position()
        );
        match first {
            b'n' => self.parse_literal(b"null", value, Value::set_null),
            b't' => self.parse_literal(b"true", value, |v| v.set_boolean(true)),
            b'f' => self.parse_literal(b"false", value, |v| v.set_boolean(false)),
            b'"' => {
                let text = parse_string(&mut self.cursor)?;
                value.set_string(text);
                Ok(())
            }
            _ => {
                let n = parse_number(&mut self.cursor)?;
                value.set_number(n);
                Ok(())
            }
        }
    }

    fn parse_literal(
        &mut self,
        literal: &[u8],
        value: &mut Value,
        set: impl FnOnce(&mut Value),
    ) -> Result<(), ParseError> {
        if !self.cursor.eat(literal) {
            return Err(ParseError::InvalidValue);
        }
        set(value);
        Ok(())
    }
}

/// Parses a JSON text into `value`.
///
/// Leaves `value` as `null` on error.
///
/// # Example
/// ```
/// use leptjson::{parse, ParseError, Value};
/// let mut value = Value::new();
/// assert_eq!(parse(&mut value, "1.5"), Ok(()));
/// assert_eq!(value.get_number(), 1.5);
/// assert_eq!(parse(&mut value, "0123"), Err(ParseError::RootNotSingular));
/// assert!(value.is_null());
/// ```
pub fn parse(value: &mut Value, input: &str) -> Result<(), ParseError> {
    ValueParser::new(input).parse_into(value)
}

/// Parses a JSON text held in a byte slice into `value`.
pub fn parse_slice(value: &mut Value, input: &[u8]) -> Result<(), ParseError> {
    ValueParser::new_from_slice(input).parse_into(value)
}
