// SPDX-License-Identifier: MIT OR Apache-2.0

//! Source trait definition.
//!
//! This module defines the `Source` trait, the primary port (interface) for
//! supplying raw configuration values. Any backing store — an in-memory
//! map, the process environment, a remote service — joins an environment by
//! implementing this trait.

use crate::domain::RawValue;

/// A source of raw configuration values.
///
/// A source is a single lookup capability: given a key, it either produces
/// a raw value or reports the key as absent. The environment's search
/// assumes lookups are idempotent and cheap — each key is queried at most
/// once per resolution, and querying twice with the same key must be safe.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. The environment adds no locking
/// of its own around lookups; a source that needs synchronization carries
/// it internally.
///
/// # Keys
///
/// Keys are expected to be non-empty; behavior for an empty key is the
/// implementation's concern.
///
/// # Examples
///
/// ```rust
/// use variants::ports::Source;
/// use variants::domain::RawValue;
///
/// struct Fixed;
///
/// impl Source for Fixed {
///     fn get_source_value(&self, key: &str) -> Option<RawValue> {
///         (key == "APP_NAME").then(|| RawValue::from("MyApp"))
///     }
/// }
///
/// let source = Fixed;
/// assert_eq!(source.get_source_value("APP_NAME"), Some(RawValue::from("MyApp")));
/// assert_eq!(source.get_source_value("OTHER"), None);
/// ```
pub trait Source: Send + Sync {
    /// Retrieves the raw value for the given key.
    ///
    /// Returns `Some(value)` if the key exists in this source and `None`
    /// otherwise. `None` is the only "not here" signal; an empty string is
    /// a present value.
    fn get_source_value(&self, key: &str) -> Option<RawValue>;
}
