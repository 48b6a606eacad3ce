use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use dot_grid::{Palette, Rgb};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::services::Session;

/// Request body carrying one color
#[derive(Debug, Deserialize, ToSchema)]
pub struct ColorRequest {
    /// Hex color, `#RRGGBB` or `RRGGBB`
    #[schema(example = "#00FF00")]
    pub color: String,
}

/// Current palette
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaletteResponse {
    /// Colors in display order as `#RRGGBB`
    #[schema(example = json!(["#FF0000", "#0000FF"]))]
    pub colors: Vec<String>,
}

impl From<&Palette> for PaletteResponse {
    fn from(palette: &Palette) -> Self {
        Self {
            colors: palette.to_hex(),
        }
    }
}

fn parse_color(raw: &str) -> Result<Rgb, ApiError> {
    Ok(raw.trim().parse::<Rgb>()?)
}

/// List palette colors
#[utoipa::path(
    get,
    path = "/api/palette",
    responses(
        (status = 200, description = "Current palette", body = PaletteResponse),
    ),
    tag = "Palette"
)]
pub async fn handle_list_palette(State(session): State<Arc<Session>>) -> Json<PaletteResponse> {
    Json(PaletteResponse::from(&session.palette().await))
}

/// Add a color
///
/// Appends the color to the end of the palette and persists the palette.
#[utoipa::path(
    post,
    path = "/api/palette",
    request_body = ColorRequest,
    responses(
        (status = 201, description = "Color added", body = PaletteResponse),
        (status = 400, description = "Invalid color"),
    ),
    tag = "Palette"
)]
pub async fn handle_add_color(
    State(session): State<Arc<Session>>,
    Json(request): Json<ColorRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let color = parse_color(&request.color)?;
    let palette = session.add_color(color).await?;

    tracing::info!(color = %color, colors = palette.len(), "Color added");

    Ok((StatusCode::CREATED, Json(PaletteResponse::from(&palette))))
}

/// Edit a color
///
/// Replaces the color at `index`; the rest of the palette is unchanged.
#[utoipa::path(
    put,
    path = "/api/palette/{index}",
    request_body = ColorRequest,
    params(
        ("index" = usize, Path, description = "Zero-based palette index"),
    ),
    responses(
        (status = 200, description = "Color replaced", body = PaletteResponse),
        (status = 400, description = "Invalid color"),
        (status = 404, description = "No color at index"),
    ),
    tag = "Palette"
)]
pub async fn handle_edit_color(
    State(session): State<Arc<Session>>,
    Path(index): Path<usize>,
    Json(request): Json<ColorRequest>,
) -> Result<Json<PaletteResponse>, ApiError> {
    let edit = session.begin_edit(index).await?;
    let color = match parse_color(&request.color) {
        Ok(color) => color,
        Err(e) => {
            edit.cancel();
            return Err(e);
        }
    };

    let original = edit.original();
    let palette = edit.commit(color).await?;

    tracing::info!(index, from = %original, to = %color, "Color edited");

    Ok(Json(PaletteResponse::from(&palette)))
}

/// Delete a color
#[utoipa::path(
    delete,
    path = "/api/palette/{index}",
    params(
        ("index" = usize, Path, description = "Zero-based palette index"),
    ),
    responses(
        (status = 200, description = "Color removed", body = PaletteResponse),
        (status = 404, description = "No color at index"),
    ),
    tag = "Palette"
)]
pub async fn handle_delete_color(
    State(session): State<Arc<Session>>,
    Path(index): Path<usize>,
) -> Result<Json<PaletteResponse>, ApiError> {
    let palette = session.delete_color(index).await?;

    tracing::info!(index, colors = palette.len(), "Color deleted");

    Ok(Json(PaletteResponse::from(&palette)))
}
