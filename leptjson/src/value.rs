// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;

/// The type tag of a [`Value`].
///
/// `Array` and `Object` are reserved; no parser path produces them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Null,
    False,
    True,
    Number,
    String,
    Array,
    Object,
}

impl core::fmt::Display for ValueType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ValueType::Null => "null",
            ValueType::False => "false",
            ValueType::True => "true",
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
        };
        f.write_str(name)
    }
}

/// Payload storage. Each variant carries exactly the data its tag needs.
#[derive(Debug, Clone, Default, PartialEq)]
enum Payload {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

/// A parsed JSON value.
///
/// The typed getters (`get_number`, `get_boolean`, `get_string`) require the
/// value to hold the matching type and panic otherwise; check [`get_type`]
/// first, or use the `as_*` accessors which return `Option`.
///
/// Every setter replaces the previous contents, dropping any owned string.
///
/// [`get_type`]: Value::get_type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Value {
    payload: Payload,
}

impl Value {
    /// Creates a `null` value.
    pub const fn new() -> Self {
        Self {
            payload: Payload::Null,
        }
    }

    /// Returns the type tag of this value.
    pub fn get_type(&self) -> ValueType {
        match self.payload {
            Payload::Null => ValueType::Null,
            Payload::Bool(false) => ValueType::False,
            Payload::Bool(true) => ValueType::True,
            Payload::Number(_) => ValueType::Number,
            Payload::String(_) => ValueType::String,
        }
    }

    /// Resets to `null`, releasing any held string.
    pub fn set_null(&mut self) {
        self.payload = Payload::Null;
    }

    /// Returns true if this value is `null`.
    pub fn is_null(&self) -> bool {
        matches!(self.payload, Payload::Null)
    }

    /// Stores a boolean, tagged `true` or `false`.
    pub fn set_boolean(&mut self, b: bool) {
        self.set_null();
        self.payload = Payload::Bool(b);
    }

    /// # Panics
    /// If the value is not `true` or `false`.
    pub fn get_boolean(&self) -> bool {
        match self.payload {
            Payload::Bool(b) => b,
            _ => panic!("get_boolean called on a {} value", self.get_type()),
        }
    }

    /// Stores a number.
    pub fn set_number(&mut self, n: f64) {
        self.set_null();
        self.payload = Payload::Number(n);
    }

    /// # Panics
    /// If the value is not a number.
    pub fn get_number(&self) -> f64 {
        match self.payload {
            Payload::Number(n) => n,
            _ => panic!("get_number called on a {} value", self.get_type()),
        }
    }

    /// Stores `s` as a string value. The empty string is allowed.
    pub fn set_string(&mut self, s: impl Into<String>) {
        self.set_null();
        self.payload = Payload::String(s.into());
    }

    /// # Panics
    /// If the value is not a string.
    pub fn get_string(&self) -> &str {
        match &self.payload {
            Payload::String(s) => s,
            _ => panic!("get_string called on a {} value", self.get_type()),
        }
    }

    /// Returns the boolean if this value is `true` or `false`.
    pub fn as_bool(&self) -> Option<bool> {
        match self.payload {
            Payload::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the number if this value is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self.payload {
            Payload::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the string content if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match &self.payload {
            Payload::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self {
            payload: Payload::Bool(b),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self {
            payload: Payload::Number(n),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self {
            payload: Payload::String(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::from(String::from(s))
    }
}

impl core::str::FromStr for Value {
    type Err = crate::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut value = Value::new();
        crate::parse(&mut value, s)?;
        Ok(value)
    }
}
