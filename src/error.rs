use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dot_grid::{PaletteError, SizeError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid size: {0} (expected 1..=100)")]
    InvalidSize(i64),

    #[error("Palette index {index} out of range (palette has {len} colors)")]
    PaletteIndex { index: usize, len: usize },

    #[error("Not found")]
    NotFound,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PaletteError> for ApiError {
    fn from(e: PaletteError) -> Self {
        match e {
            PaletteError::IndexOutOfRange { index, len } => ApiError::PaletteIndex { index, len },
            PaletteError::ParseColor(e) => ApiError::InvalidColor(e.to_string()),
        }
    }
}

impl From<dot_grid::ParseColorError> for ApiError {
    fn from(e: dot_grid::ParseColorError) -> Self {
        ApiError::InvalidColor(e.to_string())
    }
}

impl From<SizeError> for ApiError {
    fn from(e: SizeError) -> Self {
        ApiError::InvalidSize(e.value)
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Analysis error: {0}")]
    Analysis(#[from] dot_grid::DotError),

    #[error("Render task failed: {0}")]
    Task(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("No data directory available; set STORE_FILE")]
    NoDataDir,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidColor(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::InvalidSize(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::PaletteIndex { .. } => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::Render(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_invalid_color() {
        let error = ApiError::InvalidColor("expected 6 hex digits, got 3".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid color: expected 6 hex digits, got 3"
        );
    }

    #[test]
    fn test_api_error_invalid_size() {
        let error = ApiError::InvalidSize(101);
        assert_eq!(error.to_string(), "Invalid size: 101 (expected 1..=100)");
    }

    #[test]
    fn test_api_error_palette_index() {
        let error = ApiError::PaletteIndex { index: 4, len: 2 };
        assert_eq!(
            error.to_string(),
            "Palette index 4 out of range (palette has 2 colors)"
        );
    }

    #[test]
    fn test_api_error_from_palette_error() {
        let error: ApiError = PaletteError::IndexOutOfRange { index: 3, len: 1 }.into();
        assert!(matches!(error, ApiError::PaletteIndex { index: 3, len: 1 }));
    }

    #[test]
    fn test_api_error_from_parse_color_error() {
        let parse = "#12".parse::<dot_grid::Rgb>().unwrap_err();
        let error: ApiError = parse.into();
        assert!(matches!(error, ApiError::InvalidColor(_)));
    }

    #[test]
    fn test_api_error_from_size_error() {
        let size = dot_grid::SizeSetting::new(0).unwrap_err();
        let error: ApiError = size.into();
        assert!(matches!(error, ApiError::InvalidSize(0)));
    }

    #[test]
    fn test_render_error_unsupported_dimensions() {
        let error = RenderError::UnsupportedDimensions {
            width: 0,
            height: 480,
        };
        assert_eq!(error.to_string(), "Unsupported dimensions: 0x480");
    }

    #[test]
    fn test_render_error_pixmap_allocation() {
        let error = RenderError::PixmapAllocation;
        assert_eq!(error.to_string(), "Failed to allocate pixmap");
    }

    #[test]
    fn test_render_error_png_encode() {
        let error = RenderError::PngEncode("Encoding failed".to_string());
        assert_eq!(error.to_string(), "PNG encode error: Encoding failed");
    }

    #[test]
    fn test_store_error_no_data_dir() {
        assert_eq!(
            StoreError::NoDataDir.to_string(),
            "No data directory available; set STORE_FILE"
        );
    }

    #[test]
    fn test_api_error_from_render_error() {
        let render_error = RenderError::PixmapAllocation;
        let api_error: ApiError = render_error.into();
        match api_error {
            ApiError::Render(_) => {}
            _ => panic!("Expected Render variant"),
        }
    }

    #[test]
    fn test_api_error_into_response_status_codes() {
        // InvalidColor -> BAD_REQUEST
        let response = ApiError::InvalidColor("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // InvalidSize -> BAD_REQUEST
        let response = ApiError::InvalidSize(0).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // PaletteIndex -> NOT_FOUND
        let response = ApiError::PaletteIndex { index: 0, len: 0 }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // NotFound -> NOT_FOUND
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Store -> INTERNAL_SERVER_ERROR
        let response = ApiError::Store(StoreError::NoDataDir).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // Render -> INTERNAL_SERVER_ERROR
        let response = ApiError::Render(RenderError::PixmapAllocation).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // Internal -> INTERNAL_SERVER_ERROR
        let response = ApiError::Internal("error".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
