// SPDX-License-Identifier: Apache-2.0

//! A small recursive-descent parser for single JSON values.
//!
//! The input must contain exactly one `null`, `true`, `false`, number or
//! string, optionally surrounded by whitespace. String content is taken
//! verbatim; escape sequences are not decoded.
//!
//! ```
//! use leptjson::{parse, ParseError, Value, ValueType};
//!
//! let mut value = Value::new();
//! parse(&mut value, r#" "hello" "#).unwrap();
//! assert_eq!(value.get_type(), ValueType::String);
//! assert_eq!(value.get_string(), "hello");
//!
//! assert_eq!(parse(&mut value, "1e309"), Err(ParseError::NumberTooBig));
//! assert_eq!(value.get_type(), ValueType::Null);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

mod cursor;

mod number_parser;

mod parse_error;
pub use parse_error::ParseError;

mod string_parser;

mod value;
pub use value::{Value, ValueType};

mod value_parser;
pub use value_parser::{parse, parse_slice, ValueParser};
