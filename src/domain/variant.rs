// SPDX-License-Identifier: MIT OR Apache-2.0

//! Variant descriptor and builder.
//!
//! A `Variant<T>` is an immutable description of how to retrieve one typed
//! configuration value: the ordered lookup keys, a cosmetic name and
//! description, an optional fallback, an optional link to another variant,
//! and the compiled transform converting raw source values into `T`.

use crate::domain::errors::{Result, VariantError};
use crate::domain::raw_value::RawValue;
use std::fmt;
use std::sync::Arc;

/// The compiled transform stored inside a variant.
type CompiledOf<T> = Arc<dyn Fn(Option<RawValue>) -> Result<Option<T>> + Send + Sync>;
type CompiledParser<T> = Arc<dyn Fn(RawValue) -> Result<T> + Send + Sync>;

/// An immutable, typed configuration descriptor.
///
/// A variant holds no environment-specific state: it may be shared across
/// many environments and many resolution calls, and is freely cloneable
/// (the compiled transform and link are shared, not copied).
///
/// The transform is compiled exactly once when the builder's
/// [`VariantBuilder::build`] runs, by the precedence `of` > `parser` >
/// identity, and is never re-evaluated afterwards — resolution calls
/// dispatch straight into the stored closure.
///
/// # Examples
///
/// ```
/// use variants::domain::parsers;
/// use variants::domain::Variant;
///
/// # fn main() -> variants::domain::Result<()> {
/// let port = Variant::builder()
///     .key("APP_PORT")
///     .key("PORT")
///     .name("Port")
///     .description("TCP port the server listens on")
///     .fallback(8080.0)
///     .of(parsers::of_number())
///     .build()?;
///
/// assert_eq!(port.keys(), ["APP_PORT", "PORT"]);
/// assert_eq!(port.fallback(), Some(&8080.0));
/// # Ok(())
/// # }
/// ```
pub struct Variant<T> {
    keys: Vec<String>,
    name: String,
    description: String,
    fallback: Option<T>,
    link: Option<Arc<Variant<T>>>,
    of: CompiledOf<T>,
}

impl<T> Variant<T> {
    /// Creates a new builder.
    ///
    /// The builder needs a transform before it can build: set [`VariantBuilder::of`]
    /// or [`VariantBuilder::parser`], or start from [`VariantBuilder::raw`]
    /// for an untyped pass-through variant.
    pub fn builder() -> VariantBuilder<T> {
        VariantBuilder::new()
    }

    /// Returns the ordered lookup keys.
    ///
    /// Insertion order is search order. Duplicate keys are legal and are
    /// simply searched again.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Returns the user-facing name.
    ///
    /// The name is cosmetic and never used for lookup.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the fallback value, if any.
    ///
    /// The fallback is used only once every source has been exhausted for
    /// the full link chain.
    pub fn fallback(&self) -> Option<&T> {
        self.fallback.as_ref()
    }

    /// Returns the linked variant, if any.
    pub fn link(&self) -> Option<&Variant<T>> {
        self.link.as_deref()
    }

    /// Applies the compiled transform to a raw value.
    ///
    /// Absent input maps to absent output for parser-built and pass-through
    /// variants; errors from user-supplied transforms propagate unmodified.
    pub fn of(&self, value: Option<RawValue>) -> Result<Option<T>> {
        (self.of)(value)
    }
}

impl<T: Clone> Clone for Variant<T> {
    fn clone(&self) -> Self {
        Variant {
            keys: self.keys.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            fallback: self.fallback.clone(),
            link: self.link.clone(),
            of: Arc::clone(&self.of),
        }
    }
}

impl<T> fmt::Display for Variant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "Variant")
        } else {
            write!(f, "Variant(name={})", self.name)
        }
    }
}

impl<T> fmt::Debug for Variant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variant")
            .field("keys", &self.keys)
            .field("name", &self.name)
            .field("description", &self.description)
            .field("has_fallback", &self.fallback.is_some())
            .field("has_link", &self.link.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`Variant`] values.
///
/// All descriptive fields default to empty (`keys = []`, `name = ""`,
/// `description = ""`, no fallback, no link). Exactly one compiled
/// transform is chosen at [`build`](VariantBuilder::build) time by the
/// precedence `of` > `parser` > identity; a builder for a non-raw `T` with
/// neither `of` nor `parser` fails to build with a usage error.
pub struct VariantBuilder<T> {
    keys: Vec<String>,
    name: String,
    description: String,
    fallback: Option<T>,
    link: Option<Arc<Variant<T>>>,
    parser: Option<CompiledParser<T>>,
    of: Option<CompiledOf<T>>,
    passthrough: Option<CompiledOf<T>>,
}

impl VariantBuilder<RawValue> {
    /// Creates a builder for a variant that yields source values unconverted.
    ///
    /// The identity transform passes raw values — including absent ones —
    /// through unchanged. It has the lowest precedence: setting `of` or
    /// `parser` on the returned builder overrides it.
    ///
    /// # Examples
    ///
    /// ```
    /// use variants::domain::{RawValue, VariantBuilder};
    ///
    /// # fn main() -> variants::domain::Result<()> {
    /// let variant = VariantBuilder::raw().key("RAW_KEY").build()?;
    /// let value = variant.of(Some(RawValue::from("untouched")))?;
    /// assert_eq!(value, Some(RawValue::from("untouched")));
    /// # Ok(())
    /// # }
    /// ```
    pub fn raw() -> Self {
        let mut builder = Self::new();
        builder.passthrough = Some(Arc::new(|value| Ok(value)));
        builder
    }
}

impl<T> VariantBuilder<T> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        VariantBuilder {
            keys: Vec::new(),
            name: String::new(),
            description: String::new(),
            fallback: None,
            link: None,
            parser: None,
            of: None,
            passthrough: None,
        }
    }

    /// Appends one lookup key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.keys.push(key.into());
        self
    }

    /// Appends lookup keys in order.
    pub fn keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Sets the user-facing name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the fallback value.
    pub fn fallback(mut self, fallback: T) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Links another variant, consulted for alternate keys during the search
    /// and for fallback chaining after it.
    ///
    /// Link chains must be acyclic; *the crate performs no cycle detection*,
    /// and a cycle recurses until the stack is exhausted. Keeping chains
    /// finite is the caller's responsibility.
    pub fn link(mut self, link: Variant<T>) -> Self {
        self.link = Some(Arc::new(link));
        self
    }

    /// Links an already-shared variant.
    ///
    /// Same semantics as [`link`](VariantBuilder::link) without re-wrapping.
    pub fn shared_link(mut self, link: Arc<Variant<T>>) -> Self {
        self.link = Some(link);
        self
    }

    /// Sets the required-input parser.
    ///
    /// The parser is wrapped so absent input passes through as absent and
    /// parser errors propagate. Overridden by [`of`](VariantBuilder::of)
    /// when both are set.
    pub fn parser<F>(mut self, parser: F) -> Self
    where
        F: Fn(RawValue) -> Result<T> + Send + Sync + 'static,
    {
        self.parser = Some(Arc::new(parser));
        self
    }

    /// Sets the optional-input transform. Highest precedence.
    pub fn of<F>(mut self, of: F) -> Self
    where
        F: Fn(Option<RawValue>) -> Result<Option<T>> + Send + Sync + 'static,
    {
        self.of = Some(Arc::new(of));
        self
    }

    /// Builds the variant, compiling its transform.
    ///
    /// The compiled transform is chosen once here — `of` wins over
    /// `parser`, which wins over the raw pass-through — and is never
    /// re-evaluated. Building with no transform at all is a usage error;
    /// this is the construction-time validity guard for variants.
    pub fn build(self) -> Result<Variant<T>>
    where
        T: 'static,
    {
        let of: CompiledOf<T> = match (self.of, self.parser, self.passthrough) {
            (Some(of), _, _) => of,
            (None, Some(parser), _) => Arc::new(move |value| match value {
                Some(value) => parser(value).map(Some),
                None => Ok(None),
            }),
            (None, None, Some(passthrough)) => passthrough,
            (None, None, None) => {
                return Err(VariantError::invalid_argument(
                    "Variant requires a parser or transform.",
                ))
            }
        };
        Ok(Variant {
            keys: self.keys,
            name: self.name,
            description: self.description,
            fallback: self.fallback,
            link: self.link,
            of,
        })
    }
}

impl<T> Default for VariantBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
