//! DotRenderer builder -- the primary ergonomic entry point for the crate.
//!
//! [`DotRenderer`] wires grid averaging, palette matching and dot layout
//! behind a fluent configuration API.

use crate::color::Rgb;
use crate::grid::{GridAverager, Raster, SizeSetting};
use crate::output::{Dot, DotImage, DotStyle};
use crate::palette::Palette;

use super::DotError;

/// High-level analysis builder.
///
/// - Constructor takes the [`Palette`]; an empty palette is accepted and
///   maps every cell to white
/// - Configuration methods consume and return `self`
/// - [`render()`](Self::render) takes `&self` so the builder is reusable
///
/// # Example
///
/// ```
/// use dot_grid::{DotRenderer, Palette, Rgb};
///
/// let palette = Palette::from_hex(&["#FF0000", "#0000FF"]).unwrap();
/// let renderer = DotRenderer::new(palette).grid_size(2);
///
/// let pixels = [250u8, 10, 10, 255].repeat(8 * 8);
/// let image = renderer.render(&pixels, 8, 8).unwrap();
///
/// assert_eq!(image.dots().len(), 4);
/// assert!(image.dots().iter().all(|d| d.color == Rgb::new(255, 0, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct DotRenderer {
    palette: Palette,
    grid_size: u32,
    style: DotStyle,
}

impl DotRenderer {
    /// Create a renderer with the default size setting (grid of 25).
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            grid_size: SizeSetting::DEFAULT.grid_size(),
            style: DotStyle::default(),
        }
    }

    /// Set cells per axis directly.
    ///
    /// Values below 1 are raised to 1.
    #[inline]
    pub fn grid_size(mut self, grid_size: u32) -> Self {
        self.grid_size = grid_size.max(1);
        self
    }

    /// Derive cells per axis from a size setting.
    #[inline]
    pub fn size_setting(mut self, size: SizeSetting) -> Self {
        self.grid_size = size.grid_size();
        self
    }

    /// Set outline color, opacity and width.
    #[inline]
    pub fn stroke(mut self, color: Rgb, opacity: f32, width: f32) -> Self {
        self.style.stroke = color;
        self.style.stroke_opacity = opacity.clamp(0.0, 1.0);
        self.style.stroke_width = width.max(0.0);
        self
    }

    /// Set the surface fill behind the dots.
    #[inline]
    pub fn background(mut self, color: Rgb) -> Self {
        self.style.background = color;
        self
    }

    /// Replace the whole style.
    #[inline]
    pub fn style(mut self, style: DotStyle) -> Self {
        self.style = style;
        self
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn cells_per_axis(&self) -> u32 {
        self.grid_size
    }

    /// Analyze a row-major RGBA8 buffer.
    ///
    /// # Errors
    ///
    /// Returns [`DotError::Raster`] if the buffer does not match the
    /// dimensions or the image is empty.
    pub fn render(&self, rgba: &[u8], width: u32, height: u32) -> Result<DotImage, DotError> {
        let raster = Raster::new(rgba, width, height)?;
        Ok(self.render_raster(&raster))
    }

    /// Analyze an already validated raster.
    pub fn render_raster(&self, raster: &Raster<'_>) -> DotImage {
        let dots = GridAverager::new(self.grid_size)
            .average(raster)
            .into_iter()
            .map(|(cell, average)| {
                let (palette_index, distance, color) = match self.palette.find_nearest(average) {
                    Some((idx, dist)) => (idx, dist, self.palette.colors()[idx]),
                    None => (0, average.distance(Rgb::WHITE), Rgb::WHITE),
                };
                Dot {
                    cell,
                    average,
                    palette_index,
                    color,
                    distance,
                }
            })
            .collect();

        DotImage::new(
            dots,
            raster.width(),
            raster.height(),
            self.grid_size,
            self.style,
        )
    }
}
