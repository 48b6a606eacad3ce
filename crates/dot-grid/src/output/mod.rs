//! Output types for the analysis pipeline.
//!
//! [`DotImage`] is the canonical result: one [`Dot`] per grid cell with its
//! average, matched palette color and circle geometry. It serializes to SVG
//! via [`DotImage::to_svg`]; rasterizing that SVG is left to the caller.

mod dot_image;
mod svg;

pub use dot_image::{Dot, DotImage, DotStyle};
