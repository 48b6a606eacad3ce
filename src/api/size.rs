use axum::{extract::State, response::Json};
use dot_grid::SizeSetting;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::services::Session;

/// New size setting
#[derive(Debug, Deserialize, ToSchema)]
pub struct SizeRequest {
    /// Slider value, 1..=100
    #[schema(example = 10)]
    pub size: i64,
}

/// Current size setting
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SizeResponse {
    /// Slider value, 1..=100
    pub size: u32,
    /// Cells per axis derived from the size: `max(2, size / 2)`
    pub grid_size: u32,
}

impl From<SizeSetting> for SizeResponse {
    fn from(size: SizeSetting) -> Self {
        Self {
            size: size.value(),
            grid_size: size.grid_size(),
        }
    }
}

/// Get the size setting
#[utoipa::path(
    get,
    path = "/api/size",
    responses(
        (status = 200, description = "Current size", body = SizeResponse),
    ),
    tag = "Settings"
)]
pub async fn handle_get_size(State(session): State<Arc<Session>>) -> Json<SizeResponse> {
    Json(SizeResponse::from(session.size().await))
}

/// Set the size setting
#[utoipa::path(
    put,
    path = "/api/size",
    request_body = SizeRequest,
    responses(
        (status = 200, description = "Size updated", body = SizeResponse),
        (status = 400, description = "Size outside 1..=100"),
    ),
    tag = "Settings"
)]
pub async fn handle_set_size(
    State(session): State<Arc<Session>>,
    Json(request): Json<SizeRequest>,
) -> Result<Json<SizeResponse>, ApiError> {
    let size = SizeSetting::new(request.size)?;
    let size = session.set_size(size).await?;
    Ok(Json(SizeResponse::from(size)))
}
