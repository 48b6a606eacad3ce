pub mod analyzer;
pub mod ingest;
pub mod render_file;
pub mod session;
pub mod store;

pub use analyzer::{AnalysisOutput, AnalysisReport, Analyzer, CellReport, OutputFormat};
pub use ingest::{IgnoreReason, ImageIngestor, IngestOutcome};
pub use render_file::render_file;
pub use session::{AnalysisInput, PaletteEdit, Session};
pub use store::{FileStore, InMemoryStore, SettingsStore};
