use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    response::Json,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::api::headers::HeaderMapExt;
use crate::error::ApiError;
use crate::models::ImageInfo;
use crate::services::{ImageIngestor, IngestOutcome, Session};

/// Outcome of an image upload
#[derive(Debug, Serialize, ToSchema)]
pub struct LoadImageResponse {
    /// Whether the upload became the source image
    pub accepted: bool,
    /// Why the upload was ignored, when it was
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// The loaded image, when accepted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageInfo>,
}

/// Load the source image
///
/// The raw request body is the image; `Content-Type` must be an `image/*`
/// media type. Non-image uploads and undecodable bytes are ignored and the
/// previous image, if any, stays loaded.
#[utoipa::path(
    post,
    path = "/api/image",
    request_body(content = Vec<u8>, content_type = "image/*", description = "Encoded image (PNG, JPEG or GIF)"),
    responses(
        (status = 200, description = "Upload processed", body = LoadImageResponse),
        (status = 413, description = "Upload too large"),
    ),
    tag = "Image"
)]
pub async fn handle_load_image(
    State(session): State<Arc<Session>>,
    State(ingestor): State<Arc<ImageIngestor>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<LoadImageResponse>, ApiError> {
    let media_type = headers.media_type().unwrap_or_default();
    tracing::debug!(
        media_type = %media_type,
        bytes = body.len(),
        "Image upload received"
    );

    let outcome = tokio::task::spawn_blocking(move || ingestor.ingest(&body, &media_type))
        .await
        .map_err(|e| ApiError::Internal(format!("Decode task failed: {e}")))?;

    match outcome {
        IngestOutcome::Loaded(image) => {
            let info = session.set_image(image).await;
            Ok(Json(LoadImageResponse {
                accepted: true,
                reason: None,
                image: Some(info),
            }))
        }
        IngestOutcome::Ignored(reason) => {
            tracing::info!(%reason, "Upload ignored");
            Ok(Json(LoadImageResponse {
                accepted: false,
                reason: Some(reason.to_string()),
                image: None,
            }))
        }
    }
}

/// Describe the loaded image
#[utoipa::path(
    get,
    path = "/api/image",
    responses(
        (status = 200, description = "Loaded image", body = ImageInfo),
        (status = 404, description = "No image loaded"),
    ),
    tag = "Image"
)]
pub async fn handle_image_info(
    State(session): State<Arc<Session>>,
) -> Result<Json<ImageInfo>, ApiError> {
    session.image_info().await.map(Json).ok_or(ApiError::NotFound)
}
