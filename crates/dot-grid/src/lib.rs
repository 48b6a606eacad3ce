//! dot-grid: palette dot-art from raster images
//!
//! This library reduces an image to a square grid of cells, averages the
//! color of each cell, and replaces every average with the nearest color of
//! a user palette. The result is laid out as one circle per cell and can be
//! serialized to SVG.
//!
//! # Quick Start
//!
//! The [`DotRenderer`] builder is the primary entry point:
//!
//! ```
//! use dot_grid::{DotRenderer, Palette, SizeSetting};
//!
//! let palette = Palette::from_hex(&["#FF0000", "#0000FF"]).unwrap();
//! let renderer = DotRenderer::new(palette).size_setting(SizeSetting::new(10).unwrap());
//!
//! let pixels = [255u8, 0, 0, 255].repeat(100 * 100);
//! let image = renderer.render(&pixels, 100, 100).unwrap();
//!
//! assert_eq!(image.grid_size(), 5);
//! assert_eq!(image.dots().len(), 25);
//! let svg = image.to_svg();
//! assert_eq!(svg.matches("<circle").count(), 25);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RGBA8 raster
//!     |
//!     v
//! GridAverager           (G x G cells, mean R/G/B per cell, rounded)
//!     |
//!     v
//! Palette::find_nearest  (Euclidean RGB, first entry wins ties)
//!     |
//!     v
//! DotImage               (circle at cell center, r = min(cw, ch) / 2)
//!     |
//!     v
//! SVG
//! ```
//!
//! The grid size comes from the user's size setting through
//! [`grid_size()`]: `max(2, floor(size / 2))`.
//!
//! Matching deliberately stays in plain RGB. Palettes are small and chosen
//! by the user, and the output only needs to reproduce their choices.

pub mod api;
pub mod color;
pub mod grid;
pub mod output;
pub mod palette;


pub use api::{DotError, DotRenderer};
pub use color::Rgb;
pub use grid::{
    grid_size, Cell, GridAverager, GridLayout, PixelWindow, Raster, RasterError, SizeError,
    SizeSetting,
};
pub use output::{Dot, DotImage, DotStyle};
pub use palette::{Palette, PaletteError, ParseColorError};
