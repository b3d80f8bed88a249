// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw value model for source lookups.
//!
//! This module provides the `RawValue` type, the tagged union of primitive
//! forms a configuration source may emit. Absence is modelled with
//! `Option<RawValue>` throughout the crate: `None` is the "missing" state
//! and is distinct from an empty string.

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A primitive value emitted by a configuration source.
///
/// Sources return `Option<RawValue>` from lookups; parsers in
/// [`crate::domain::parsers`] convert raw values into typed values. Every
/// raw kind has a canonical string form (see the `Display` implementation)
/// which is what the string parser and the trim/skip-empty combinators
/// operate on.
///
/// # Examples
///
/// ```
/// use variants::domain::raw_value::RawValue;
///
/// let value = RawValue::from("8080");
/// assert_eq!(value.to_string(), "8080");
///
/// let value = RawValue::from(true);
/// assert_eq!(value.to_string(), "true");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RawValue {
    /// A text value.
    Text(String),
    /// A binary buffer; its string form is the lossy UTF-8 decode.
    Bytes(Vec<u8>),
    /// A boolean value.
    Boolean(bool),
    /// A double-precision number.
    Number(f64),
    /// An arbitrary-precision integer.
    BigInt(BigInt),
    /// An opaque atom; its string form is its label.
    Atom(String),
}

impl RawValue {
    /// Returns true when the value is a zero-length text or buffer.
    ///
    /// Only `Text` and `Bytes` can be empty; no other kind is converted to
    /// check for emptiness, so `Boolean(false)` and `Number(0.0)` are never
    /// empty. This is the emptiness rule used by
    /// [`crate::domain::parsers::of_trim_and_skip_empty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use variants::domain::raw_value::RawValue;
    ///
    /// assert!(RawValue::from("").is_empty());
    /// assert!(RawValue::Bytes(vec![]).is_empty());
    /// assert!(!RawValue::from(0.0).is_empty());
    /// assert!(!RawValue::from(false).is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        match self {
            RawValue::Text(text) => text.is_empty(),
            RawValue::Bytes(bytes) => bytes.is_empty(),
            _ => false,
        }
    }

    /// Consumes the value and returns its canonical string form.
    ///
    /// Text passes through unchanged; buffers are decoded as UTF-8 with
    /// invalid sequences replaced; every other kind uses its literal text
    /// (`"true"`, `"42"`, an atom's label).
    ///
    /// # Examples
    ///
    /// ```
    /// use variants::domain::raw_value::RawValue;
    ///
    /// assert_eq!(RawValue::from("text").into_text(), "text");
    /// assert_eq!(RawValue::Bytes(b"bytes".to_vec()).into_text(), "bytes");
    /// assert_eq!(RawValue::from(false).into_text(), "false");
    /// ```
    pub fn into_text(self) -> String {
        match self {
            RawValue::Text(text) => text,
            RawValue::Bytes(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            RawValue::Boolean(value) => value.to_string(),
            RawValue::Number(value) => value.to_string(),
            RawValue::BigInt(value) => value.to_string(),
            RawValue::Atom(label) => label,
        }
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<Vec<u8>> for RawValue {
    fn from(value: Vec<u8>) -> Self {
        RawValue::Bytes(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Boolean(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<BigInt> for RawValue {
    fn from(value: BigInt) -> Self {
        RawValue::BigInt(value)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Text(text) => write!(f, "{}", text),
            RawValue::Bytes(bytes) => write!(f, "{}", String::from_utf8_lossy(bytes)),
            RawValue::Boolean(value) => write!(f, "{}", value),
            RawValue::Number(value) => write!(f, "{}", value),
            RawValue::BigInt(value) => write!(f, "{}", value),
            RawValue::Atom(label) => write!(f, "{}", label),
        }
    }
}
