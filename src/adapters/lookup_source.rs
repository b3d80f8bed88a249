// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lookup-closure source adapter.
//!
//! This module provides an adapter wrapping an arbitrary lookup function,
//! the escape hatch for backing stores with no dedicated adapter.

use crate::domain::RawValue;
use crate::ports::Source;

/// A source that delegates every lookup to a closure.
///
/// # Examples
///
/// ```rust
/// use variants::adapters::LookupSource;
/// use variants::ports::Source;
/// use variants::domain::RawValue;
///
/// let source = LookupSource::new(|key| {
///     (key == "APP_MODE").then(|| RawValue::from("production"))
/// });
/// assert_eq!(source.get_source_value("APP_MODE"), Some(RawValue::from("production")));
/// assert_eq!(source.get_source_value("OTHER"), None);
/// ```
pub struct LookupSource {
    lookup: Box<dyn Fn(&str) -> Option<RawValue> + Send + Sync>,
}

impl LookupSource {
    /// Creates a source from a lookup function.
    pub fn new<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<RawValue> + Send + Sync + 'static,
    {
        LookupSource {
            lookup: Box::new(lookup),
        }
    }
}

impl Source for LookupSource {
    fn get_source_value(&self, key: &str) -> Option<RawValue> {
        (self.lookup)(key)
    }
}

impl std::fmt::Debug for LookupSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupSource").finish_non_exhaustive()
    }
}
