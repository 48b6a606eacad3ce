use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use utoipa::ToSchema;

/// The decoded bitmap analysis runs on.
///
/// Pixels are RGBA8, row-major, `width * height * 4` bytes.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub media_type: String,
    /// Hex SHA-256 of the uploaded bytes
    pub digest: String,
    pub loaded_at: DateTime<Utc>,
}

impl SourceImage {
    pub fn new(rgba: Vec<u8>, width: u32, height: u32, media_type: &str, original: &[u8]) -> Self {
        Self {
            rgba,
            width,
            height,
            media_type: media_type.to_string(),
            digest: hex::encode(Sha256::digest(original)),
            loaded_at: Utc::now(),
        }
    }

    pub fn info(&self) -> ImageInfo {
        ImageInfo {
            width: self.width,
            height: self.height,
            media_type: self.media_type.clone(),
            digest: self.digest.clone(),
            loaded_at: self.loaded_at,
        }
    }
}

/// Metadata about the loaded source image
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ImageInfo {
    /// Source surface width in pixels
    pub width: u32,
    /// Source surface height in pixels
    pub height: u32,
    /// Declared media type of the upload
    pub media_type: String,
    /// SHA-256 of the uploaded bytes (hex)
    pub digest: String,
    /// When the image was loaded
    pub loaded_at: DateTime<Utc>,
}
