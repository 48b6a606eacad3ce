//! Borrowed RGBA8 pixel buffer.

use std::fmt;

/// Error for a pixel buffer that does not describe a usable image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// Width or height is zero
    EmptyImage,
    /// Buffer length does not equal `width * height * 4`
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::EmptyImage => write!(f, "image has zero width or height"),
            RasterError::LengthMismatch { expected, actual } => write!(
                f,
                "pixel buffer has {} bytes, expected {} for RGBA8",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for RasterError {}

/// A row-major RGBA8 view of the source surface.
///
/// Alpha is carried but never read by the averager.
#[derive(Debug, Clone, Copy)]
pub struct Raster<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> Raster<'a> {
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyImage);
        }
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(RasterError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGB channels of the pixel at (x, y).
    #[inline]
    pub fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// One row of RGBA bytes.
    #[inline]
    pub fn row(&self, y: u32) -> &'a [u8] {
        let stride = self.width as usize * 4;
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }
}
