//! Public API for the dot-grid crate.
//!
//! This module provides the high-level API: [`DotRenderer`] builder and
//! [`DotError`] unified error type.

mod builder;
mod error;

pub use builder::DotRenderer;
pub use error::DotError;
