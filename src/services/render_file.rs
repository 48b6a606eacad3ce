//! One-shot rendering of an image file, used by `pixdot render`.

use anyhow::Context;
use dot_grid::{Palette, SizeSetting};
use std::path::Path;
use std::sync::Arc;

use crate::services::{
    AnalysisInput, AnalysisOutput, Analyzer, ImageIngestor, IngestOutcome, OutputFormat,
};

/// Render `bytes` declared as `media_type` and write the result to `output`.
///
/// Returns the number of bytes written, or `None` when there was nothing to
/// do: the palette is empty or the input is not a loadable image. In those
/// cases `output` is left untouched.
#[allow(clippy::too_many_arguments)]
pub async fn render_file(
    ingestor: &ImageIngestor,
    analyzer: &Analyzer,
    bytes: &[u8],
    media_type: &str,
    palette: Palette,
    size: SizeSetting,
    format: OutputFormat,
    output: &Path,
) -> anyhow::Result<Option<usize>> {
    if palette.is_empty() {
        tracing::warn!("Palette is empty, nothing to render");
        return Ok(None);
    }

    let image = match ingestor.ingest(bytes, media_type) {
        IngestOutcome::Loaded(image) => image,
        IngestOutcome::Ignored(reason) => {
            tracing::warn!(%reason, "Input not loaded, nothing to render");
            return Ok(None);
        }
    };

    let input = AnalysisInput {
        image: Arc::new(image),
        palette,
        size,
    };
    let encoded = match analyzer.run(input, format).await? {
        AnalysisOutput::Png(png) => png,
        AnalysisOutput::Svg(svg) => svg.into_bytes(),
        AnalysisOutput::Json(report) => serde_json::to_vec_pretty(&report)?,
    };

    tokio::fs::write(output, &encoded)
        .await
        .with_context(|| format!("writing {}", output.display()))?;
    tracing::info!(path = %output.display(), bytes = encoded.len(), "Dot-art written");

    Ok(Some(encoded.len()))
}
