use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use crate::error::ApiError;
use crate::services::{AnalysisOutput, Analyzer, OutputFormat, Session};

/// Query parameters for analysis
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct AnalyzeParams {
    /// Output encoding: `png` (default), `svg` or `json`
    pub format: Option<OutputFormat>,
}

/// Run the analysis
///
/// Averages the loaded image over the size-derived grid, maps every cell to
/// its nearest palette color and draws the result as circles. Does nothing
/// (204) until an image is loaded and while the palette is empty.
#[utoipa::path(
    post,
    path = "/api/analyze",
    params(AnalyzeParams),
    responses(
        (status = 200, description = "Dot-art as PNG or SVG, or a per-cell report", content(
            (Vec<u8> = "image/png"),
            (String = "image/svg+xml"),
            (crate::services::AnalysisReport = "application/json")
        )),
        (status = 204, description = "No image loaded or palette empty"),
    ),
    tag = "Analysis"
)]
pub async fn handle_analyze(
    State(session): State<Arc<Session>>,
    State(analyzer): State<Arc<Analyzer>>,
    Query(params): Query<AnalyzeParams>,
) -> Result<Response, ApiError> {
    let Some(input) = session.analysis_input().await else {
        tracing::debug!("Analysis skipped: no image or empty palette");
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let format = params.format.unwrap_or_default();
    let grid = input.size.grid_size();
    let output = analyzer.run(input, format).await?;

    tracing::info!(?format, grid, "Analysis rendered");

    Ok(match output {
        AnalysisOutput::Png(bytes) => {
            ([(header::CONTENT_TYPE, "image/png")], bytes).into_response()
        }
        AnalysisOutput::Svg(svg) => {
            ([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response()
        }
        AnalysisOutput::Json(report) => Json(report).into_response(),
    })
}
