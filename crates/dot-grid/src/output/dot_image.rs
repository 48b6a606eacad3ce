//! DotImage: matched grid cells ready to draw.
//!
//! A [`DotImage`] is the canonical output of an analysis run: one [`Dot`] per
//! grid cell, carrying the cell average, the matched palette entry and the
//! circle geometry, together with the surface size and drawing style.

use crate::color::Rgb;
use crate::grid::Cell;

/// Stroke and background settings for drawn dots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotStyle {
    /// Surface fill behind the dots
    pub background: Rgb,
    /// Outline color
    pub stroke: Rgb,
    /// Outline opacity (0.0..=1.0)
    pub stroke_opacity: f32,
    /// Outline width in surface pixels
    pub stroke_width: f32,
}

impl Default for DotStyle {
    fn default() -> Self {
        Self {
            background: Rgb::WHITE,
            stroke: Rgb::BLACK,
            stroke_opacity: 0.1,
            stroke_width: 1.0,
        }
    }
}

/// One analyzed cell drawn as a filled circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub cell: Cell,
    /// Mean color of the cell
    pub average: Rgb,
    /// Index of the matched palette entry
    pub palette_index: usize,
    /// Matched palette color (fill)
    pub color: Rgb,
    /// Euclidean RGB distance between average and match
    pub distance: f64,
}

impl Dot {
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        self.cell.center()
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.cell.radius()
    }
}

/// The result of one analysis pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DotImage {
    dots: Vec<Dot>,
    width: u32,
    height: u32,
    grid_size: u32,
    style: DotStyle,
}

impl DotImage {
    pub fn new(dots: Vec<Dot>, width: u32, height: u32, grid_size: u32, style: DotStyle) -> Self {
        debug_assert_eq!(
            dots.len(),
            (grid_size * grid_size) as usize,
            "dot count must equal grid_size squared"
        );
        Self {
            dots,
            width,
            height,
            grid_size,
            style,
        }
    }

    /// Dots in row-major cell order.
    #[inline]
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    #[inline]
    pub fn style(&self) -> &DotStyle {
        &self.style
    }

    /// The dot for (row, col), if inside the grid.
    pub fn dot(&self, row: u32, col: u32) -> Option<&Dot> {
        if row >= self.grid_size || col >= self.grid_size {
            return None;
        }
        self.dots.get((row * self.grid_size + col) as usize)
    }

    /// Serialize as a standalone SVG document of the same size as the source.
    pub fn to_svg(&self) -> String {
        super::svg::write_svg(self)
    }
}
