//! Image ingestion: media type gate, decoding, and canvas fitting.

use crate::models::{CanvasConfig, SourceImage};
use image::{imageops, DynamicImage, Rgba, RgbaImage};

/// Why an upload did not become the source surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Declared media type is not `image/*`
    NotAnImage(String),
    /// Bytes could not be decoded as an image
    Undecodable(String),
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IgnoreReason::NotAnImage(media_type) => write!(f, "not an image: {media_type:?}"),
            IgnoreReason::Undecodable(e) => write!(f, "undecodable image: {e}"),
        }
    }
}

/// Result of offering bytes to the ingestor
#[derive(Debug)]
pub enum IngestOutcome {
    Loaded(SourceImage),
    Ignored(IgnoreReason),
}

/// Turns uploaded bytes into a [`SourceImage`].
#[derive(Debug, Clone, Default)]
pub struct ImageIngestor {
    canvas: Option<CanvasConfig>,
}

/// Whether a declared media type names an image.
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type
        .trim_start()
        .get(..5)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image"))
}

impl ImageIngestor {
    pub fn new(canvas: Option<CanvasConfig>) -> Self {
        // A zero-sized canvas cannot hold an image.
        let canvas = canvas.filter(|c| c.width > 0 && c.height > 0);
        Self { canvas }
    }

    pub fn canvas(&self) -> Option<CanvasConfig> {
        self.canvas
    }

    /// Decode `bytes` declared as `media_type`.
    ///
    /// Non-image media types and undecodable bytes are ignored, never an
    /// error. CPU-bound; call from a blocking context in async code.
    pub fn ingest(&self, bytes: &[u8], media_type: &str) -> IngestOutcome {
        if !is_image_media_type(media_type) {
            tracing::debug!(media_type, "Ignoring non-image upload");
            return IngestOutcome::Ignored(IgnoreReason::NotAnImage(media_type.to_string()));
        }

        let decoded = match image::load_from_memory(bytes) {
            Ok(decoded) => decoded,
            Err(e) => {
                tracing::warn!(%e, media_type, bytes = bytes.len(), "Failed to decode image");
                return IngestOutcome::Ignored(IgnoreReason::Undecodable(e.to_string()));
            }
        };

        let surface = match self.canvas {
            Some(canvas) => fit_to_canvas(&decoded, canvas),
            None => decoded.to_rgba8(),
        };

        tracing::info!(
            media_type,
            source_width = decoded.width(),
            source_height = decoded.height(),
            width = surface.width(),
            height = surface.height(),
            "Image loaded"
        );

        let (width, height) = surface.dimensions();
        IngestOutcome::Loaded(SourceImage::new(
            surface.into_raw(),
            width,
            height,
            media_type,
            bytes,
        ))
    }
}

/// Scale `image` by `min(canvas_w / w, canvas_h / h)` and center it on a
/// white canvas.
pub fn fit_to_canvas(image: &DynamicImage, canvas: CanvasConfig) -> RgbaImage {
    let (width, height) = fit_dimensions(image.width(), image.height(), canvas);
    let scaled = imageops::resize(
        &image.to_rgba8(),
        width,
        height,
        imageops::FilterType::Triangle,
    );

    let mut surface = RgbaImage::from_pixel(canvas.width, canvas.height, Rgba([255, 255, 255, 255]));
    let x = (canvas.width - width) / 2;
    let y = (canvas.height - height) / 2;
    imageops::overlay(&mut surface, &scaled, x as i64, y as i64);
    surface
}

/// Aspect-preserving size of a `width` x `height` image fitted into `canvas`.
/// Never zero, never larger than the canvas.
pub fn fit_dimensions(width: u32, height: u32, canvas: CanvasConfig) -> (u32, u32) {
    let ratio = (canvas.width as f64 / width.max(1) as f64)
        .min(canvas.height as f64 / height.max(1) as f64);
    let fit = |side: u32, max: u32| ((side as f64 * ratio).round() as u32).clamp(1, max);
    (fit(width, canvas.width), fit(height, canvas.height))
}
