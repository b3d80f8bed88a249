// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for variant resolution and parsing.
//!
//! This module defines the error types that can occur when building
//! variants, parsing raw values, or resolving variances. All errors use
//! `thiserror` for proper error handling and conversion.

use num_bigint::ParseBigIntError;
use thiserror::Error;

/// The main error type for variant operations.
///
/// This enum represents all possible errors that can occur when building a
/// variant, converting a raw value, or resolving a variance. It is marked as
/// `#[non_exhaustive]` to allow for future additions without breaking
/// backwards compatibility.
///
/// # Examples
///
/// ```
/// use variants::domain::errors::VariantError;
///
/// fn resolve() -> Result<String, VariantError> {
///     Err(VariantError::VarianceNotFound {
///         name: "Port".to_string(),
///     })
/// }
///
/// assert_eq!(resolve().unwrap_err().to_string(), "Variance not found: Port.");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VariantError {
    /// No source, fallback, or link produced a value for the variant.
    ///
    /// This is an expected, recoverable condition synthesized only by
    /// `Environment::get_variance`; `find_variance` reports the same state
    /// as `Ok(None)`.
    #[error("Variance not found: {name}.")]
    VarianceNotFound {
        /// The display name of the variant that could not be resolved
        name: String,
    },

    /// A caller passed an invalid argument.
    ///
    /// Raised at the point of misuse (an empty list delimiter, a builder
    /// with no usable transform, an empty source key) and never retried.
    #[error("{message}")]
    InvalidArgument {
        /// Description of the misuse
        message: String,
    },

    /// A value could not be converted to a big integer.
    #[error("Failed to convert '{text}' to a big integer")]
    BigIntConversion {
        /// The text form of the rejected input
        text: String,
        /// The underlying parse error, when the input was textual
        #[source]
        source: Option<ParseBigIntError>,
    },

    /// A user-supplied parser or transform failed.
    ///
    /// The core never synthesizes this itself; it is a carrier for failures
    /// raised inside caller-provided transforms, propagated unmodified.
    #[error("Parser error: {message}")]
    ParserError {
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl VariantError {
    /// Creates an `InvalidArgument` error with the given message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        VariantError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a `BigIntConversion` error from a failed textual parse.
    pub fn from_parse_big_int_error(text: String, err: ParseBigIntError) -> Self {
        VariantError::BigIntConversion {
            text,
            source: Some(err),
        }
    }

    /// Creates a `ParserError` wrapping an arbitrary failure.
    pub fn parser_error(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        VariantError::ParserError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// A specialized Result type for variant operations.
pub type Result<T> = std::result::Result<T, VariantError>;
