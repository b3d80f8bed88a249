// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the core domain types for the crate: the raw value
//! model flowing out of sources, the `Variant` descriptor, the parser
//! library supplying text-to-value transforms, and the error types.

pub mod errors;
pub mod parsers;
pub mod raw_value;
pub mod variant;

// Re-export commonly used types
pub use errors::{Result, VariantError};
pub use raw_value::RawValue;
pub use variant::{Variant, VariantBuilder};
