pub mod config;
pub mod settings;
pub mod source_image;

pub use config::{AppConfig, CanvasConfig, StrokeConfig};
pub use settings::{decode_palette, decode_size, encode_palette, encode_size, PALETTE_KEY, SIZE_KEY};
pub use source_image::{ImageInfo, SourceImage};
