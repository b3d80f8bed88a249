// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory map source adapter.
//!
//! This module provides an adapter backed by a `HashMap` of raw values,
//! the usual choice for fixture data and for configuration assembled in
//! code.

use crate::domain::RawValue;
use crate::ports::Source;
use std::collections::HashMap;

/// A source backed by an in-memory map.
///
/// Lookups clone the stored value; the map is fixed once the source is
/// built. Values may be any [`RawValue`] kind, not just text.
///
/// # Examples
///
/// ```rust
/// use variants::adapters::MapSource;
/// use variants::ports::Source;
/// use variants::domain::RawValue;
///
/// let source = MapSource::new()
///     .with_value("APP_NAME", "MyApp")
///     .with_value("APP_DEBUG", true);
///
/// assert_eq!(source.get_source_value("APP_NAME"), Some(RawValue::from("MyApp")));
/// assert_eq!(source.get_source_value("MISSING"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<String, RawValue>,
}

impl MapSource {
    /// Creates an empty map source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source from an existing map.
    pub fn from_map(values: HashMap<String, RawValue>) -> Self {
        MapSource { values }
    }

    /// Adds one entry, converting the value into a raw value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variants::adapters::MapSource;
    ///
    /// let source = MapSource::new().with_value("PORT", "8080");
    /// ```
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when the source holds no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<HashMap<String, RawValue>> for MapSource {
    fn from(values: HashMap<String, RawValue>) -> Self {
        MapSource::from_map(values)
    }
}

impl<K, V> FromIterator<(K, V)> for MapSource
where
    K: Into<String>,
    V: Into<RawValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        MapSource {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl Source for MapSource {
    fn get_source_value(&self, key: &str) -> Option<RawValue> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_source_get() {
        let source = MapSource::new().with_value("KEY", "value");
        assert_eq!(source.get_source_value("KEY"), Some(RawValue::from("value")));
    }

    #[test]
    fn test_map_source_get_missing() {
        let source = MapSource::new();
        assert_eq!(source.get_source_value("KEY"), None);
    }

    #[test]
    fn test_map_source_non_text_values() {
        let source = MapSource::new()
            .with_value("FLAG", true)
            .with_value("COUNT", 3.0);
        assert_eq!(source.get_source_value("FLAG"), Some(RawValue::from(true)));
        assert_eq!(source.get_source_value("COUNT"), Some(RawValue::from(3.0)));
    }

    #[test]
    fn test_map_source_from_iterator() {
        let source: MapSource = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(source.len(), 2);
        assert_eq!(source.get_source_value("B"), Some(RawValue::from("2")));
    }

    #[test]
    fn test_map_source_from_map() {
        let mut values = HashMap::new();
        values.insert("KEY".to_string(), RawValue::from("value"));
        let source = MapSource::from(values);
        assert!(!source.is_empty());
        assert_eq!(source.get_source_value("KEY"), Some(RawValue::from("value")));
    }

    #[test]
    fn test_map_source_empty_string_value_is_present() {
        let source = MapSource::new().with_value("EMPTY", "");
        assert_eq!(source.get_source_value("EMPTY"), Some(RawValue::from("")));
    }
}
