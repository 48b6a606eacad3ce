use crate::error::RenderError;
use dot_grid::DotImage;
use resvg::usvg::{self, Transform};
use std::io::Cursor;
use std::sync::Arc;
use tiny_skia::Pixmap;

/// Largest surface side the rasterizer accepts.
pub const MAX_SIDE: u32 = 8192;

/// Rasterizes dot-art SVG to RGBA PNG.
///
/// The SVG is scaled to fit the target size, preserving aspect ratio, and
/// centered on a white pixmap.
pub struct SvgRenderer {
    /// Dot-art carries no text, so this stays empty
    fontdb: Arc<usvg::fontdb::Database>,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self {
            fontdb: Arc::new(usvg::fontdb::Database::new()),
        }
    }

    /// Render a [`DotImage`] at its own surface size, scaled down to
    /// [`MAX_SIDE`] when larger.
    pub fn render_dots(&self, image: &DotImage) -> Result<Vec<u8>, RenderError> {
        let svg = image.to_svg();
        let (width, height) = bounded_size(image.width(), image.height());
        if (width, height) != (image.width(), image.height()) {
            tracing::debug!(
                source_width = image.width(),
                source_height = image.height(),
                width,
                height,
                "Scaling dot-art down to fit the rasterizer"
            );
        }
        self.render_to_png(svg.as_bytes(), width, height)
    }

    /// Render SVG data to an RGBA PNG of `width` x `height`.
    pub fn render_to_png(
        &self,
        svg_data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, RenderError> {
        let pixmap = self.rasterize_svg(svg_data, width, height)?;
        let rgba: Vec<u8> = pixmap
            .pixels()
            .iter()
            .flat_map(|px| {
                let c = px.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        encode_png(width, height, &rgba)
    }

    /// Parse and rasterize SVG to an RGBA pixmap
    pub fn rasterize_svg(
        &self,
        svg_data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Pixmap, RenderError> {
        if width == 0 || height == 0 || width > MAX_SIDE || height > MAX_SIDE {
            return Err(RenderError::UnsupportedDimensions { width, height });
        }

        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg_data, &options)
            .map_err(|e| RenderError::SvgParse(e.to_string()))?;

        let svg_size = tree.size();
        let scale_x = width as f32 / svg_size.width();
        let scale_y = height as f32 / svg_size.height();
        let scale = scale_x.min(scale_y);

        let scaled_width = svg_size.width() * scale;
        let scaled_height = svg_size.height() * scale;
        let offset_x = (width as f32 - scaled_width) / 2.0;
        let offset_y = (height as f32 - scaled_height) / 2.0;

        let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::PixmapAllocation)?;
        pixmap.fill(tiny_skia::Color::WHITE);

        let transform = Transform::from_scale(scale, scale).post_translate(offset_x, offset_y);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        Ok(pixmap)
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Aspect-preserving size whose longer side is at most [`MAX_SIDE`].
pub fn bounded_size(width: u32, height: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= MAX_SIDE {
        return (width, height);
    }
    let scale = MAX_SIDE as f64 / longest as f64;
    let fit = |side: u32| ((side as f64 * scale).round() as u32).clamp(1, MAX_SIDE);
    (fit(width), fit(height))
}

/// Encode straight-alpha RGBA8 pixels as a PNG.
fn encode_png(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgba)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
