// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment resolution service.
//!
//! This module provides the `Environment`, which resolves a variant's value
//! against an ordered list of sources. The search is breadth-first in the
//! sense that one source is exhausted completely — every key of the
//! variant, then every key of its link chain — before the next source is
//! consulted. Fallback values are last resort, used only once the full
//! source list has been exhausted for the full link chain.

use crate::domain::{Result, Variant, VariantError};
use crate::ports::Source;
use std::sync::Arc;

/// An ordered collection of sources used to resolve variants.
///
/// An environment is immutable once constructed and holds nothing beyond
/// shared references to its sources; it never mutates a source or a
/// variant, and a variant may be resolved against many environments.
///
/// # Tie-breaks
///
/// - Source order strictly outranks key order: the first key of the first
///   source beats a later key of the same source and any key of a later
///   source.
/// - Within one source, the variant's own keys are tried in order before
///   the link's keys against that same source.
/// - Any value found in a source — even through a link's keys — beats
///   every fallback.
///
/// # Examples
///
/// ```rust
/// use variants::prelude::*;
/// use variants::domain::parsers;
///
/// # fn main() -> variants::domain::Result<()> {
/// let primary = MapSource::new().with_value("PRIMARY", "primary");
/// let secondary = MapSource::new();
///
/// let environment = Environment::builder()
///     .with_source(primary)
///     .with_source(secondary)
///     .build();
///
/// let variant = Variant::builder()
///     .keys(["PRIMARY", "SECONDARY"])
///     .of(parsers::of_string())
///     .build()?;
///
/// assert_eq!(environment.find_variance(&variant)?, Some("primary".to_string()));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default)]
pub struct Environment {
    sources: Vec<Arc<dyn Source>>,
}

impl Environment {
    /// Creates an environment with no sources.
    ///
    /// Resolution against an empty environment goes straight to fallbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment from an ordered list of shared sources.
    pub fn from_sources(sources: Vec<Arc<dyn Source>>) -> Self {
        Environment { sources }
    }

    /// Creates a new environment builder.
    pub fn builder() -> EnvironmentBuilder {
        EnvironmentBuilder::new()
    }

    /// Returns the number of sources.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Finds a variant's value if one can be resolved.
    ///
    /// Searches each source in order — the variant's keys in order, then the
    /// link chain against that same source — and returns the first present
    /// parsed value. Once every source is exhausted, the variant's fallback
    /// is used if present, otherwise the first fallback found walking the
    /// link chain. `Ok(None)` means nothing resolved anywhere.
    ///
    /// Errors from the variant's parser or transform propagate unmodified;
    /// "not found" is never an error here.
    pub fn find_variance<T: Clone>(&self, variant: &Variant<T>) -> Result<Option<T>> {
        for (index, source) in self.sources.iter().enumerate() {
            if let Some(variance) = self.find_in_source(variant, source.as_ref(), index)? {
                return Ok(Some(variance));
            }
        }
        Ok(self.find_first_fallback(variant))
    }

    /// Resolves a variant's value or fails.
    ///
    /// Delegates to [`find_variance`](Environment::find_variance) and turns
    /// an absent result into [`VariantError::VarianceNotFound`] carrying the
    /// variant's display name. Absence is the sole "not found" signal: any
    /// present parser output, including a `NaN` sentinel from the number
    /// parser, counts as found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variants::prelude::*;
    /// use variants::domain::parsers;
    ///
    /// # fn main() {
    /// let environment = Environment::new();
    /// let variant = Variant::<String>::builder()
    ///     .name("TestVariant")
    ///     .of(parsers::of_string())
    ///     .build()
    ///     .unwrap();
    ///
    /// let error = environment.get_variance(&variant).unwrap_err();
    /// assert!(error.to_string().contains("TestVariant"));
    /// # }
    /// ```
    pub fn get_variance<T: Clone>(&self, variant: &Variant<T>) -> Result<T> {
        match self.find_variance(variant)? {
            Some(variance) => Ok(variance),
            None => Err(VariantError::VarianceNotFound {
                name: variant.name().to_string(),
            }),
        }
    }

    /// Searches one source: the variant's keys in order, then its link
    /// chain against the same source.
    fn find_in_source<T: Clone>(
        &self,
        variant: &Variant<T>,
        source: &dyn Source,
        index: usize,
    ) -> Result<Option<T>> {
        for key in variant.keys() {
            if let Some(raw) = source.get_source_value(key) {
                if let Some(variance) = variant.of(Some(raw))? {
                    tracing::debug!("Resolved {} from source {} via key '{}'", variant, index, key);
                    return Ok(Some(variance));
                }
            }
        }
        self.find_link_in_source(variant, source, index)
    }

    fn find_link_in_source<T: Clone>(
        &self,
        variant: &Variant<T>,
        source: &dyn Source,
        index: usize,
    ) -> Result<Option<T>> {
        if let Some(link) = variant.link() {
            if let Some(variance) = self.find_in_source(link, source, index)? {
                return Ok(Some(variance));
            }
        }
        Ok(None)
    }

    /// Walks the link chain for the first present fallback.
    ///
    /// This traversal is independent of the per-source link search: it runs
    /// only once every source has been exhausted.
    fn find_first_fallback<T: Clone>(&self, variant: &Variant<T>) -> Option<T> {
        if let Some(fallback) = variant.fallback() {
            tracing::debug!("Resolved {} from its fallback", variant);
            return Some(fallback.clone());
        }
        variant.link().and_then(|link| self.find_first_fallback(link))
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("sources", &self.sources.len())
            .finish()
    }
}

/// Builder for constructing an [`Environment`].
///
/// Sources are searched in the order they are added.
///
/// # Examples
///
/// ```rust
/// use variants::adapters::{EnvSource, MapSource};
/// use variants::service::Environment;
///
/// let environment = Environment::builder()
///     .with_source(MapSource::new().with_value("KEY", "override"))
///     .with_source(EnvSource::new())
///     .build();
///
/// assert_eq!(environment.source_count(), 2);
/// ```
#[derive(Default)]
pub struct EnvironmentBuilder {
    sources: Vec<Arc<dyn Source>>,
}

impl EnvironmentBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a source.
    pub fn with_source(mut self, source: impl Source + 'static) -> Self {
        self.sources.push(Arc::new(source));
        self
    }

    /// Appends an already-shared source.
    pub fn with_shared_source(mut self, source: Arc<dyn Source>) -> Self {
        self.sources.push(source);
        self
    }

    /// Builds the environment.
    pub fn build(self) -> Environment {
        Environment {
            sources: self.sources,
        }
    }
}
