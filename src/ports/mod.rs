// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that define the
//! interfaces for components supplied from outside the core. They are
//! implemented by the adapters layer and by caller code.

pub mod source;

// Re-export commonly used types
pub use source::Source;
