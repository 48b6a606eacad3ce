//! Unified error type for the dot-grid public API.
//!
//! [`DotError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::grid::{RasterError, SizeError};
use crate::palette::{PaletteError, ParseColorError};
use std::fmt;

/// Unified error type for the dot-grid public API.
///
/// # Example
///
/// ```
/// use dot_grid::{DotError, Palette};
///
/// fn create_palette() -> Result<Palette, DotError> {
///     let palette = Palette::from_hex(&["#000000", "#FFFFFF"])?;
///     Ok(palette)
/// }
/// ```
#[derive(Debug)]
pub enum DotError {
    /// Palette editing error (index out of range or parse error)
    Palette(PaletteError),
    /// Color parsing error (invalid hex string)
    ParseColor(ParseColorError),
    /// Size setting outside 1..=100
    Size(SizeError),
    /// Pixel buffer does not describe a usable image
    Raster(RasterError),
}

impl fmt::Display for DotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DotError::Palette(err) => write!(f, "palette error: {}", err),
            DotError::ParseColor(err) => write!(f, "color parse error: {}", err),
            DotError::Size(err) => write!(f, "size error: {}", err),
            DotError::Raster(err) => write!(f, "raster error: {}", err),
        }
    }
}

impl std::error::Error for DotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DotError::Palette(err) => Some(err),
            DotError::ParseColor(err) => Some(err),
            DotError::Size(err) => Some(err),
            DotError::Raster(err) => Some(err),
        }
    }
}

impl From<PaletteError> for DotError {
    fn from(err: PaletteError) -> Self {
        DotError::Palette(err)
    }
}

impl From<ParseColorError> for DotError {
    fn from(err: ParseColorError) -> Self {
        DotError::ParseColor(err)
    }
}

impl From<SizeError> for DotError {
    fn from(err: SizeError) -> Self {
        DotError::Size(err)
    }
}

impl From<RasterError> for DotError {
    fn from(err: RasterError) -> Self {
        DotError::Raster(err)
    }
}
