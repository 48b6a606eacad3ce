use crate::error::RenderError;
use crate::rendering::SvgRenderer;
use crate::services::AnalysisInput;
use dot_grid::{DotImage, DotRenderer, DotStyle};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// Output encoding of an analysis run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
    Json,
}

/// One analyzed cell
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CellReport {
    pub row: u32,
    pub col: u32,
    /// Mean color of the cell as `#RRGGBB`
    pub average: String,
    /// Matched palette color as `#RRGGBB`
    pub color: String,
    /// Index of the matched palette entry
    pub palette_index: usize,
    /// Euclidean RGB distance between average and match
    pub distance: f64,
}

/// Machine-readable analysis result
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnalysisReport {
    pub width: u32,
    pub height: u32,
    /// Cells per axis
    pub grid_size: u32,
    /// Cells in row-major order
    pub cells: Vec<CellReport>,
}

impl From<&DotImage> for AnalysisReport {
    fn from(image: &DotImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            grid_size: image.grid_size(),
            cells: image
                .dots()
                .iter()
                .map(|dot| CellReport {
                    row: dot.cell.row,
                    col: dot.cell.col,
                    average: dot.average.to_hex(),
                    color: dot.color.to_hex(),
                    palette_index: dot.palette_index,
                    distance: dot.distance,
                })
                .collect(),
        }
    }
}

/// Encoded analysis result
#[derive(Debug)]
pub enum AnalysisOutput {
    Png(Vec<u8>),
    Svg(String),
    Json(AnalysisReport),
}

/// Runs the grid-average / palette-match / draw pipeline.
pub struct Analyzer {
    style: DotStyle,
    svg_renderer: Arc<SvgRenderer>,
}

impl Analyzer {
    pub fn new(style: DotStyle) -> Self {
        Self {
            style,
            svg_renderer: Arc::new(SvgRenderer::new()),
        }
    }

    pub fn style(&self) -> DotStyle {
        self.style
    }

    /// Analyze synchronously.
    pub fn analyze(&self, input: &AnalysisInput) -> Result<DotImage, RenderError> {
        let image = &input.image;
        let dots = DotRenderer::new(input.palette.clone())
            .size_setting(input.size)
            .style(self.style)
            .render(&image.rgba, image.width, image.height)?;

        tracing::debug!(
            width = dots.width(),
            height = dots.height(),
            grid = dots.grid_size(),
            colors = input.palette.len(),
            "Analysis complete"
        );
        Ok(dots)
    }

    /// Analyze and encode synchronously.
    pub fn analyze_to(
        &self,
        input: &AnalysisInput,
        format: OutputFormat,
    ) -> Result<AnalysisOutput, RenderError> {
        let dots = self.analyze(input)?;
        Ok(match format {
            OutputFormat::Png => AnalysisOutput::Png(self.svg_renderer.render_dots(&dots)?),
            OutputFormat::Svg => AnalysisOutput::Svg(dots.to_svg()),
            OutputFormat::Json => AnalysisOutput::Json(AnalysisReport::from(&dots)),
        })
    }

    /// Analyze and encode on the blocking pool.
    ///
    /// Averaging and rasterizing are CPU-bound, so they must not run on the
    /// async runtime's worker threads.
    pub async fn run(
        &self,
        input: AnalysisInput,
        format: OutputFormat,
    ) -> Result<AnalysisOutput, RenderError> {
        let analyzer = Analyzer {
            style: self.style,
            svg_renderer: self.svg_renderer.clone(),
        };
        tokio::task::spawn_blocking(move || analyzer.analyze_to(&input, format))
            .await
            .map_err(|e| RenderError::Task(e.to_string()))?
    }
}
