//! Test fixtures and constants.

use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Palette colors used across tests
pub mod colors {
    pub const RED: &str = "#FF0000";
    pub const GREEN: &str = "#00FF00";
    pub const BLUE: &str = "#0000FF";
}

/// Encode a solid-color image in the given format
pub fn solid_image(width: u32, height: u32, rgb: [u8; 3], format: ImageFormat) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, Rgba([rgb[0], rgb[1], rgb[2], 255]));
    let mut buf = Cursor::new(Vec::new());
    if format == ImageFormat::Jpeg {
        // JPEG has no alpha channel
        image::DynamicImage::ImageRgba8(image)
            .to_rgb8()
            .write_to(&mut buf, format)
            .expect("Failed to encode image");
    } else {
        image.write_to(&mut buf, format).expect("Failed to encode image");
    }
    buf.into_inner()
}

/// Solid-color PNG
pub fn solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    solid_image(width, height, rgb, ImageFormat::Png)
}

/// PNG split vertically: left half `left`, right half `right`
pub fn split_png(width: u32, height: u32, left: [u8; 3], right: [u8; 3]) -> Vec<u8> {
    let image = RgbaImage::from_fn(width, height, |x, _| {
        let c = if x < width / 2 { left } else { right };
        Rgba([c[0], c[1], c[2], 255])
    });
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .expect("Failed to encode image");
    buf.into_inner()
}

/// Decode PNG bytes to RGBA
pub fn decode_png(bytes: &[u8]) -> RgbaImage {
    image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .expect("Failed to decode PNG")
        .to_rgba8()
}
