// SPDX-License-Identifier: MIT OR Apache-2.0

//! Single-key supplier source adapter.
//!
//! This module provides an adapter that answers exactly one key, producing
//! its value from a supplier closure on every lookup.

use crate::domain::{RawValue, Result, VariantError};
use crate::ports::Source;

/// A source that serves a single key from a supplier closure.
///
/// Lookups for any other key return `None`. The supplier runs on every
/// matching lookup, so it may produce a different value over time; it may
/// also return `None` to report the key as currently absent.
///
/// # Examples
///
/// ```rust
/// use variants::adapters::KeySource;
/// use variants::ports::Source;
/// use variants::domain::RawValue;
///
/// # fn main() -> variants::domain::Result<()> {
/// let source = KeySource::new("BUILD_ID", || Some(RawValue::from("42")))?;
/// assert_eq!(source.get_source_value("BUILD_ID"), Some(RawValue::from("42")));
/// assert_eq!(source.get_source_value("OTHER"), None);
/// # Ok(())
/// # }
/// ```
pub struct KeySource {
    key: String,
    supplier: Box<dyn Fn() -> Option<RawValue> + Send + Sync>,
}

impl KeySource {
    /// Creates a source answering `key` from `supplier`.
    ///
    /// An empty key is a usage error.
    pub fn new<F>(key: impl Into<String>, supplier: F) -> Result<Self>
    where
        F: Fn() -> Option<RawValue> + Send + Sync + 'static,
    {
        let key = key.into();
        if key.is_empty() {
            return Err(VariantError::invalid_argument("Key must not be empty."));
        }
        Ok(KeySource {
            key,
            supplier: Box::new(supplier),
        })
    }

    /// Returns the single key this source answers.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Source for KeySource {
    fn get_source_value(&self, key: &str) -> Option<RawValue> {
        if key == self.key {
            (self.supplier)()
        } else {
            None
        }
    }
}

impl std::fmt::Debug for KeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeySource")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
