// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the environment implementation.
//!
//! This module contains the `Environment`, the resolution service that
//! searches an ordered list of sources for a variant's value.

pub mod environment;

// Re-export commonly used types
pub use environment::{Environment, EnvironmentBuilder};
