//! Grid partitioning and per-cell mean color.

use super::raster::Raster;
use crate::color::Rgb;

/// Integer pixel window a cell samples, half-open on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelWindow {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl PixelWindow {
    #[inline]
    pub fn pixel_count(&self) -> u64 {
        (self.x1 - self.x0) as u64 * (self.y1 - self.y0) as u64
    }
}

/// One grid cell: its position in the grid, its fractional bounds on the
/// source surface, and the pixels it samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub window: PixelWindow,
}

impl Cell {
    /// Midpoint of the cell's fractional bounds.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Radius of the largest circle that fits the cell.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.width.min(self.height) / 2.0
    }
}

/// Splits a `width` x `height` surface into `grid_size` x `grid_size` cells.
///
/// Cell dimensions are fractional (`width / grid_size`). Cell column `c`
/// samples pixel columns `floor(c * width / g) .. floor((c + 1) * width / g)`,
/// computed in integers so windows tile the surface exactly; rows likewise.
/// A window that would be empty (surface smaller than the grid) is widened
/// to the single pixel under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    width: u32,
    height: u32,
    grid_size: u32,
}

impl GridLayout {
    /// # Panics
    ///
    /// Panics if `grid_size` is zero.
    pub fn new(width: u32, height: u32, grid_size: u32) -> Self {
        assert!(grid_size > 0, "grid size must be positive");
        Self {
            width,
            height,
            grid_size,
        }
    }

    #[inline]
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    #[inline]
    pub fn cell_width(&self) -> f64 {
        self.width as f64 / self.grid_size as f64
    }

    #[inline]
    pub fn cell_height(&self) -> f64 {
        self.height as f64 / self.grid_size as f64
    }

    /// Number of cells (`grid_size²`).
    #[inline]
    pub fn cell_count(&self) -> usize {
        (self.grid_size * self.grid_size) as usize
    }

    /// The cell at (row, col).
    pub fn cell(&self, row: u32, col: u32) -> Cell {
        let cell_width = self.cell_width();
        let cell_height = self.cell_height();
        let (x0, x1) = span(col, self.width, self.grid_size);
        let (y0, y1) = span(row, self.height, self.grid_size);
        Cell {
            row,
            col,
            x: col as f64 * cell_width,
            y: row as f64 * cell_height,
            width: cell_width,
            height: cell_height,
            window: PixelWindow { x0, y0, x1, y1 },
        }
    }

    /// All cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.grid_size)
            .flat_map(move |row| (0..self.grid_size).map(move |col| self.cell(row, col)))
    }
}

/// Pixel span `[start, end)` of grid index `i` along an axis of `extent` pixels.
fn span(i: u32, extent: u32, grid: u32) -> (u32, u32) {
    let start = (i as u64 * extent as u64 / grid as u64) as u32;
    let end = ((i as u64 + 1) * extent as u64 / grid as u64) as u32;
    if end > start {
        (start, end)
    } else {
        let start = start.min(extent.saturating_sub(1));
        (start, start + 1)
    }
}

/// Mean color over a window, each channel rounded to the nearest integer.
pub fn average_window(raster: &Raster<'_>, window: PixelWindow) -> Rgb {
    let mut sum = [0u64; 3];
    for y in window.y0..window.y1 {
        let row = raster.row(y);
        for px in row[window.x0 as usize * 4..window.x1 as usize * 4].chunks_exact(4) {
            sum[0] += px[0] as u64;
            sum[1] += px[1] as u64;
            sum[2] += px[2] as u64;
        }
    }

    let count = window.pixel_count() as f64;
    let mean = |s: u64| (s as f64 / count).round().clamp(0.0, 255.0) as u8;
    Rgb::new(mean(sum[0]), mean(sum[1]), mean(sum[2]))
}

/// Computes the mean RGB color of every cell of an N×N grid.
///
/// # Example
///
/// ```
/// use dot_grid::{GridAverager, Raster, Rgb};
///
/// let pixels = [10u8, 20, 30, 255].repeat(16);
/// let raster = Raster::new(&pixels, 4, 4).unwrap();
/// let cells = GridAverager::new(2).average(&raster);
///
/// assert_eq!(cells.len(), 4);
/// assert!(cells.iter().all(|(_, avg)| *avg == Rgb::new(10, 20, 30)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GridAverager {
    grid_size: u32,
}

impl GridAverager {
    /// # Panics
    ///
    /// Panics if `grid_size` is zero.
    pub fn new(grid_size: u32) -> Self {
        assert!(grid_size > 0, "grid size must be positive");
        Self { grid_size }
    }

    /// Layout this averager applies to a raster.
    pub fn layout(&self, raster: &Raster<'_>) -> GridLayout {
        GridLayout::new(raster.width(), raster.height(), self.grid_size)
    }

    /// Average every cell, row-major.
    pub fn average(&self, raster: &Raster<'_>) -> Vec<(Cell, Rgb)> {
        let layout = self.layout(raster);
        let mut out = Vec::with_capacity(layout.cell_count());
        for cell in layout.cells() {
            out.push((cell, average_window(raster, cell.window)));
        }
        out
    }
}
