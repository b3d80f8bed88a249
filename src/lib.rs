// SPDX-License-Identifier: MIT OR Apache-2.0

//! A typed configuration lookup crate with multi-source variant resolution.
//!
//! This crate resolves *variants* — typed configuration descriptors with an
//! ordered list of lookup keys, an optional parser, a fallback value, and
//! optional link chaining — against an *environment*, an ordered list of
//! key-value sources. Sources are searched in order; the first source that
//! yields a parseable value for any of the variant's keys (or its link
//! chain) wins, and fallbacks are consulted only once every source has been
//! exhausted.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and business logic (`RawValue`, `Variant`,
//!   the parser library, errors)
//! - **Ports**: Trait definitions that define interfaces (`Source`)
//! - **Adapters**: Source implementations (maps, closures, process
//!   environment)
//! - **Service**: The `Environment` that orchestrates resolution
//!
//! # Features
//!
//! - **Ordered Sources**: Source order strictly outranks key order — a value
//!   in the first source always beats a value in a later one
//! - **Typed Parsing**: string, boolean, number, and big-integer parsers,
//!   plus trimming, empty-skipping, and delimited-list combinators
//! - **Link Chaining**: a variant may link to another variant whose keys and
//!   fallback are consulted when its own produce nothing
//! - **Extensible**: any type implementing the `Source` trait can join an
//!   environment
//!
//! # Quick Start
//!
//! ```rust
//! use variants::prelude::*;
//! use variants::domain::parsers;
//!
//! # fn main() -> variants::domain::Result<()> {
//! let source = MapSource::new().with_value("APP_PORT", "8080");
//! let environment = Environment::builder().with_source(source).build();
//!
//! let port = Variant::builder()
//!     .key("APP_PORT")
//!     .name("Port")
//!     .of(parsers::of_number())
//!     .build()?;
//!
//! assert_eq!(environment.get_variance(&port)?, 8080.0);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{EnvSource, KeySource, LookupSource, MapSource};
    pub use crate::domain::{RawValue, Result, Variant, VariantBuilder, VariantError};
    pub use crate::ports::Source;
    pub use crate::service::{Environment, EnvironmentBuilder};
}
