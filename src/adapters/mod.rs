// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing source implementations.
//!
//! This module contains concrete implementations of the `Source` trait:
//! in-memory maps, single-key suppliers, arbitrary lookup closures, and the
//! process environment.

pub mod env_source;
pub mod key_source;
pub mod lookup_source;
pub mod map_source;

// Re-export adapters
pub use env_source::EnvSource;
pub use key_source::KeySource;
pub use lookup_source::LookupSource;
pub use map_source::MapSource;
