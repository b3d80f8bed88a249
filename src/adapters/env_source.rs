// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process environment source adapter.
//!
//! This module provides an adapter that reads raw values from the process
//! environment variables.

use crate::domain::RawValue;
use crate::ports::Source;
use std::env;

/// A source backed by the process environment.
///
/// Every lookup reads the environment live — there is no snapshot and no
/// cache, so a variable set after the source was created is still visible.
/// Values with invalid UTF-8 are decoded lossily.
///
/// # Examples
///
/// ```rust
/// use variants::adapters::EnvSource;
/// use variants::ports::Source;
///
/// let source = EnvSource::new();
/// assert!(source.get_source_value("SOME_UNSET_VARIABLE_12345").is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl EnvSource {
    /// Creates a process environment source.
    pub fn new() -> Self {
        EnvSource
    }
}

impl Source for EnvSource {
    fn get_source_value(&self, key: &str) -> Option<RawValue> {
        env::var_os(key).map(|value| RawValue::Text(value.to_string_lossy().into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper to set and clean up environment variables
    struct EnvGuard {
        keys: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { keys: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.keys.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for key in &self.keys {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_env_source_get() {
        let mut guard = EnvGuard::new();
        guard.set("VARIANTS_ENV_TEST", "value");

        let source = EnvSource::new();
        assert_eq!(
            source.get_source_value("VARIANTS_ENV_TEST"),
            Some(RawValue::from("value"))
        );
    }

    #[test]
    fn test_env_source_get_missing() {
        let source = EnvSource::new();
        assert_eq!(source.get_source_value("VARIANTS_ENV_UNSET_12345"), None);
    }

    #[test]
    fn test_env_source_reads_live() {
        let mut guard = EnvGuard::new();
        let source = EnvSource::new();

        assert_eq!(source.get_source_value("VARIANTS_ENV_LIVE"), None);
        guard.set("VARIANTS_ENV_LIVE", "set later");
        assert_eq!(
            source.get_source_value("VARIANTS_ENV_LIVE"),
            Some(RawValue::from("set later"))
        );
    }
}
