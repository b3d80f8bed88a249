// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parser library supplying the built-in raw-to-typed transforms.
//!
//! Two shapes of transform exist:
//!
//! - [`Parser<T>`] is the *required-input* form: the input is guaranteed
//!   present (`RawValue`, not `Option<RawValue>`), so presence checking is
//!   carried by the type system.
//! - [`OfTransform<T>`] is the *optional-input* form used as a variant's
//!   compiled transform: absent input flows through as absent.
//!
//! [`of_trim_and_skip_empty`] is the canonical bridge between the two:
//! [`of_string`], [`of_boolean`], [`of_number`], and [`of_big_int`] are all
//! that wrapper applied to the corresponding required parser. Every
//! constructor here is stateless; call sites may freely share or rebuild
//! transforms.

use crate::domain::errors::{Result, VariantError};
use crate::domain::raw_value::RawValue;
use num_bigint::BigInt;

/// A required-input transform from a raw value to a typed value.
///
/// Conversion failures are reported as `Err`; total parsers (string,
/// boolean, number) never fail.
pub type Parser<T> = Box<dyn Fn(RawValue) -> Result<T> + Send + Sync>;

/// An optional-input transform from a raw value to a typed value.
///
/// `None` input yields `Ok(None)`; an `Ok(None)` output is the "absent"
/// signal the environment search treats as a miss.
pub type OfTransform<T> = Box<dyn Fn(Option<RawValue>) -> Result<Option<T>> + Send + Sync>;

/// Returns a parser converting any raw value to its canonical string form.
///
/// Text passes through, buffers decode as lossy UTF-8, and every other kind
/// uses its literal text. Never fails.
///
/// # Examples
///
/// ```
/// use variants::domain::parsers::string_parser;
/// use variants::domain::RawValue;
///
/// let parser = string_parser();
/// assert_eq!(parser(RawValue::from(true)).unwrap(), "true");
/// ```
pub fn string_parser() -> Parser<String> {
    Box::new(|value| Ok(value.into_text()))
}

/// Returns a total parser converting a raw value to a boolean.
///
/// Booleans pass through. Numbers and big integers are true only when
/// exactly `1`. Text, buffers, and every other kind compare their
/// lower-cased string form against `"true"` and `"1"`. There is no wider
/// truthiness: everything else, including negative numbers, is `false`.
/// Never fails.
///
/// # Examples
///
/// ```
/// use variants::domain::parsers::boolean_parser;
/// use variants::domain::RawValue;
///
/// let parser = boolean_parser();
/// assert!(parser(RawValue::from("TRUE")).unwrap());
/// assert!(parser(RawValue::from(1.0)).unwrap());
/// assert!(!parser(RawValue::from("yes")).unwrap());
/// ```
pub fn boolean_parser() -> Parser<bool> {
    Box::new(|value| match value {
        RawValue::Boolean(value) => Ok(value),
        RawValue::Number(value) => Ok(value == 1.0),
        RawValue::BigInt(value) => Ok(value == BigInt::from(1)),
        other => {
            let lower = other.into_text().to_lowercase();
            Ok(lower == "true" || lower == "1")
        }
    })
}

/// Returns a total parser converting a raw value to a number.
///
/// Numbers pass through; big integers convert with the usual precision
/// loss; everything else parses its string form, with invalid text yielding
/// the `NaN` sentinel rather than an error. Empty or all-whitespace text
/// parses to `0`.
///
/// # Examples
///
/// ```
/// use variants::domain::parsers::number_parser;
/// use variants::domain::RawValue;
///
/// let parser = number_parser();
/// assert_eq!(parser(RawValue::from("8080")).unwrap(), 8080.0);
/// assert!(parser(RawValue::from("not a number")).unwrap().is_nan());
/// ```
pub fn number_parser() -> Parser<f64> {
    Box::new(|value| match value {
        RawValue::Number(value) => Ok(value),
        RawValue::BigInt(value) => Ok(parse_number_text(&value.to_string())),
        other => Ok(parse_number_text(&other.into_text())),
    })
}

/// Returns a parser converting a raw value to an arbitrary-precision integer.
///
/// Big integers pass through. Numbers convert only when finite with a zero
/// fractional part. Everything else parses its string form as a decimal
/// integer; invalid text is a conversion error — unlike [`number_parser`]
/// there is no safe "invalid" sentinel for big integers. Empty or
/// all-whitespace text parses to `0`.
///
/// # Examples
///
/// ```
/// use variants::domain::parsers::big_int_parser;
/// use variants::domain::RawValue;
/// use num_bigint::BigInt;
///
/// let parser = big_int_parser();
/// assert_eq!(parser(RawValue::from("42")).unwrap(), BigInt::from(42));
/// assert!(parser(RawValue::from("4.2")).is_err());
/// ```
pub fn big_int_parser() -> Parser<BigInt> {
    Box::new(|value| match value {
        RawValue::BigInt(value) => Ok(value),
        RawValue::Number(value) => {
            if value.is_finite() && value.fract() == 0.0 {
                // format! with zero precision expands the exact integer the
                // f64 holds, which a decimal parse then reproduces
                format!("{:.0}", value)
                    .parse::<BigInt>()
                    .map_err(|err| VariantError::from_parse_big_int_error(value.to_string(), err))
            } else {
                Err(VariantError::BigIntConversion {
                    text: value.to_string(),
                    source: None,
                })
            }
        }
        other => {
            let text = other.into_text();
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(BigInt::from(0));
            }
            trimmed
                .parse::<BigInt>()
                .map_err(|err| VariantError::from_parse_big_int_error(text.clone(), err))
        }
    })
}

/// Returns a transform yielding the raw string form with no trimming and no
/// emptiness check.
///
/// Absent input stays absent; everything else converts through
/// [`string_parser`], so an empty string comes back as `Some("")`.
pub fn of_raw_string() -> OfTransform<String> {
    Box::new(|value| Ok(value.map(RawValue::into_text)))
}

/// Wraps a required parser into an optional transform that trims input and
/// skips empty values.
///
/// Absent input and zero-length text or buffers yield `Ok(None)`. Anything
/// else is rendered to its string form, trimmed of leading and trailing
/// whitespace, and handed to `parser` as text. Non-text, non-buffer values
/// are never treated as empty, so `Boolean(false)` and `Number(0.0)` reach
/// the parser.
///
/// # Examples
///
/// ```
/// use variants::domain::parsers::{number_parser, of_trim_and_skip_empty};
/// use variants::domain::RawValue;
///
/// let of = of_trim_and_skip_empty(number_parser());
/// assert_eq!(of(Some(RawValue::from(" 42 "))).unwrap(), Some(42.0));
/// assert_eq!(of(Some(RawValue::from(""))).unwrap(), None);
/// assert_eq!(of(None).unwrap(), None);
/// ```
pub fn of_trim_and_skip_empty<T, P>(parser: P) -> OfTransform<T>
where
    T: 'static,
    P: Fn(RawValue) -> Result<T> + Send + Sync + 'static,
{
    Box::new(move |value| match value {
        None => Ok(None),
        Some(value) if value.is_empty() => Ok(None),
        Some(value) => {
            let trimmed = value.into_text().trim().to_string();
            parser(RawValue::Text(trimmed)).map(Some)
        }
    })
}

/// Returns the trimming, empty-skipping string transform.
pub fn of_string() -> OfTransform<String> {
    of_trim_and_skip_empty(string_parser())
}

/// Returns the trimming, empty-skipping boolean transform.
pub fn of_boolean() -> OfTransform<bool> {
    of_trim_and_skip_empty(boolean_parser())
}

/// Returns the trimming, empty-skipping number transform.
pub fn of_number() -> OfTransform<f64> {
    of_trim_and_skip_empty(number_parser())
}

/// Returns the trimming, empty-skipping big-integer transform.
pub fn of_big_int() -> OfTransform<BigInt> {
    of_trim_and_skip_empty(big_int_parser())
}

/// Composes a string-to-value function into a required parser.
///
/// The raw input is first coerced to its string form through
/// [`string_parser`], then handed to `parser`. There is no trimming and no
/// emptiness check.
///
/// # Examples
///
/// ```
/// use variants::domain::parsers::string;
/// use variants::domain::{RawValue, VariantError};
///
/// let parser = string(|text| {
///     text.parse::<u16>()
///         .map_err(|err| VariantError::parser_error("invalid port", err))
/// });
/// assert_eq!(parser(RawValue::from("8080")).unwrap(), 8080u16);
/// ```
pub fn string<T, F>(parser: F) -> Parser<T>
where
    T: 'static,
    F: Fn(String) -> Result<T> + Send + Sync + 'static,
{
    Box::new(move |value| parser(value.into_text()))
}

/// Converts a raw value to its string form and trims surrounding whitespace.
///
/// # Examples
///
/// ```
/// use variants::domain::parsers::trim;
/// use variants::domain::RawValue;
///
/// assert_eq!(trim(RawValue::from("  value  ")), "value");
/// ```
pub fn trim(value: RawValue) -> String {
    value.into_text().trim().to_string()
}

/// Builds a delimited-list transform around an element transform.
///
/// The input is handled by [`of_trim_and_skip_empty`] (absent and empty
/// inputs skip), then split on the literal `delimiter` with no escaping.
/// Each part is passed to `element` as raw, un-trimmed text; parts the
/// element transform reports as absent are silently dropped, and element
/// errors propagate. An empty delimiter is a usage error.
///
/// # Examples
///
/// ```
/// use variants::domain::parsers::{of_list, of_number};
/// use variants::domain::RawValue;
///
/// # fn main() -> variants::domain::Result<()> {
/// let of = of_list(of_number(), ",")?;
/// assert_eq!(of(Some(RawValue::from("1,,3")))?, Some(vec![1.0, 3.0]));
/// # Ok(())
/// # }
/// ```
pub fn of_list<T, P>(element: P, delimiter: &str) -> Result<OfTransform<Vec<T>>>
where
    T: 'static,
    P: Fn(Option<RawValue>) -> Result<Option<T>> + Send + Sync + 'static,
{
    if delimiter.is_empty() {
        return Err(VariantError::invalid_argument("Delimiter must not be empty."));
    }
    let delimiter = delimiter.to_string();
    Ok(of_trim_and_skip_empty(move |value: RawValue| {
        let text = value.into_text();
        let mut items = Vec::new();
        for part in text.split(delimiter.as_str()) {
            if let Some(item) = element(Some(RawValue::Text(part.to_string())))? {
                items.push(item);
            }
        }
        Ok(items)
    }))
}

fn parse_number_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
