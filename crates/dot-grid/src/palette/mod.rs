//! Palette types and utilities
//!
//! This module provides the ordered user palette, nearest-color matching,
//! and error types for parsing and editing.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::Palette;
