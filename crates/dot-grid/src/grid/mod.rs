//! Grid partitioning and averaging
//!
//! The source surface is split into a square grid whose size comes from the
//! user's size setting; each cell is reduced to its mean color.

mod averager;
mod raster;
mod size;

pub use averager::{average_window, Cell, GridAverager, GridLayout, PixelWindow};
pub use raster::{Raster, RasterError};
pub use size::{grid_size, SizeError, SizeSetting, MIN_GRID_SIZE};
