use dot_grid::{DotStyle, Rgb};
use serde::Deserialize;
use std::path::Path;

/// Application configuration loaded from an optional YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Fixed source surface; images are fitted onto it when set
    #[serde(default)]
    pub canvas: Option<CanvasConfig>,

    /// Circle outline
    #[serde(default)]
    pub stroke: StrokeConfig,

    /// Output surface fill as `#RRGGBB`
    #[serde(default = "default_background")]
    pub background: String,

    /// Largest accepted upload body
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

/// Size of the surface uploaded images are drawn onto
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

/// Outline drawn around every dot
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StrokeConfig {
    #[serde(default = "default_stroke_color")]
    pub color: String,

    #[serde(default = "default_stroke_opacity")]
    pub opacity: f32,

    #[serde(default = "default_stroke_width")]
    pub width: f32,
}

fn default_background() -> String {
    "#FFFFFF".to_string()
}

fn default_max_upload_bytes() -> usize {
    20 * 1024 * 1024
}

fn default_stroke_color() -> String {
    "#000000".to_string()
}

fn default_stroke_opacity() -> f32 {
    0.1
}

fn default_stroke_width() -> f32 {
    1.0
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            color: default_stroke_color(),
            opacity: default_stroke_opacity(),
            width: default_stroke_width(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas: None,
            stroke: StrokeConfig::default(),
            background: default_background(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file, or defaults if no path is given.
    ///
    /// Read and parse failures are logged and fall back to defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        canvas = ?config.canvas,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Drawing style for analysis output.
    ///
    /// Unparsable colors fall back to the default style's colors.
    pub fn dot_style(&self) -> DotStyle {
        let defaults = DotStyle::default();
        DotStyle {
            background: parse_color_or(&self.background, defaults.background, "background"),
            stroke: parse_color_or(&self.stroke.color, defaults.stroke, "stroke.color"),
            stroke_opacity: self.stroke.opacity.clamp(0.0, 1.0),
            stroke_width: self.stroke.width.max(0.0),
        }
    }
}

fn parse_color_or(value: &str, fallback: Rgb, field: &'static str) -> Rgb {
    value.parse().unwrap_or_else(|e| {
        tracing::warn!(%e, field, value, "Invalid color in config, using default");
        fallback
    })
}
