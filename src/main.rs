use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use dot_grid::{Palette, Rgb, SizeSetting};
use pixdot::api;
use pixdot::models::AppConfig;
use pixdot::server;
use pixdot::services::{render_file, Analyzer, FileStore, ImageIngestor, OutputFormat, Session};

#[derive(Parser)]
#[command(name = "pixdot")]
#[command(about = "Palette dot-art generator - recolor images as a grid of palette circles")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Render an image file to dot-art (no server needed)
    Render {
        /// Input image (PNG, JPEG or GIF)
        input: PathBuf,

        /// Output file; `.svg` writes SVG, anything else PNG
        #[arg(short, long)]
        output: PathBuf,

        /// Size setting 1..=100 (defaults to the stored setting)
        #[arg(short, long)]
        size: Option<i64>,

        /// Palette as comma-separated hex RGB (e.g. "#000000,#FFFFFF,#FF0000");
        /// defaults to the stored palette
        #[arg(short, long)]
        colors: Option<String>,

        /// Write SVG regardless of the output extension
        #[arg(long)]
        svg: bool,
    },
    /// Show or edit the stored palette
    Palette {
        #[command(subcommand)]
        action: PaletteAction,
    },
    /// Show or set the stored size setting
    Size {
        /// New value 1..=100; omit to print the current one
        value: Option<i64>,
    },
}

#[derive(Subcommand)]
enum PaletteAction {
    /// Print the palette, one color per line
    List,
    /// Append a color
    Add {
        /// Hex color, `#RRGGBB` or `RRGGBB`
        color: String,
    },
    /// Remove the color at an index
    Delete { index: usize },
    /// Replace the color at an index
    Edit {
        index: usize,
        /// Hex color, `#RRGGBB` or `RRGGBB`
        color: String,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "pixdot API",
        description = "Palette dot-art generator: load an image, keep a palette, render dot-art",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_list_palette,
        api::handle_add_color,
        api::handle_edit_color,
        api::handle_delete_color,
        api::handle_get_size,
        api::handle_set_size,
        api::handle_load_image,
        api::handle_image_info,
        api::handle_analyze,
    ),
    components(schemas(
        api::ColorRequest,
        api::PaletteResponse,
        api::SizeRequest,
        api::SizeResponse,
        api::LoadImageResponse,
        pixdot::models::ImageInfo,
        pixdot::services::OutputFormat,
        pixdot::services::AnalysisReport,
        pixdot::services::CellReport,
    )),
    tags(
        (name = "Palette", description = "Palette colors"),
        (name = "Settings", description = "Size setting"),
        (name = "Image", description = "Source image loading"),
        (name = "Analysis", description = "Dot-art generation")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Render {
            input,
            output,
            size,
            colors,
            svg,
        }) => run_render_command(&input, &output, size, colors.as_deref(), svg).await,
        Some(Commands::Palette { action }) => run_palette_command(action).await,
        Some(Commands::Size { value }) => run_size_command(value).await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI subcommands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixdot=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn config_path() -> Option<PathBuf> {
    std::env::var("CONFIG_FILE").ok().map(PathBuf::from)
}

fn store_path() -> anyhow::Result<PathBuf> {
    match std::env::var("STORE_FILE") {
        Ok(path) => Ok(PathBuf::from(path)),
        Err(_) => Ok(FileStore::default_path()?),
    }
}

async fn open_session() -> anyhow::Result<Session> {
    let store = FileStore::open(store_path()?).await;
    Ok(Session::load(Arc::new(store)).await?)
}

/// Render an image file directly (no server needed)
async fn run_render_command(
    input: &Path,
    output: &Path,
    size: Option<i64>,
    colors: Option<&str>,
    force_svg: bool,
) -> anyhow::Result<()> {
    init_cli_tracing();

    let config = AppConfig::load(config_path().as_deref());
    let session = open_session().await?;

    let palette = match colors {
        Some(list) => parse_palette_arg(list)?,
        None => session.palette().await,
    };

    let size = match size {
        Some(value) => SizeSetting::new(value)?,
        None => session.size().await,
    };

    let bytes = std::fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let media_type = image::ImageFormat::from_path(input)
        .map(|format| format.to_mime_type())
        .unwrap_or("application/octet-stream");

    let format = if force_svg || has_svg_extension(output) {
        OutputFormat::Svg
    } else {
        OutputFormat::Png
    };

    let written = render_file(
        &ImageIngestor::new(config.canvas),
        &Analyzer::new(config.dot_style()),
        &bytes,
        media_type,
        palette,
        size,
        format,
        output,
    )
    .await?;

    if let Some(written) = written {
        println!(
            "Rendered {} ({} bytes, {}x{} grid)",
            output.display(),
            written,
            size.grid_size(),
            size.grid_size()
        );
    }

    Ok(())
}

fn has_svg_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Parse a comma-separated list of hex colors
fn parse_palette_arg(list: &str) -> anyhow::Result<Palette> {
    let colors = list
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Rgb>().with_context(|| format!("invalid color {s:?}")))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Palette::from_colors(colors))
}

/// Show or edit the stored palette
async fn run_palette_command(action: PaletteAction) -> anyhow::Result<()> {
    init_cli_tracing();
    let session = open_session().await?;

    let palette = match action {
        PaletteAction::List => session.palette().await,
        PaletteAction::Add { color } => session.add_color(color.trim().parse()?).await?,
        PaletteAction::Delete { index } => session.delete_color(index).await?,
        PaletteAction::Edit { index, color } => {
            let edit = session.begin_edit(index).await?;
            match color.trim().parse::<Rgb>() {
                Ok(color) => edit.commit(color).await?,
                Err(e) => {
                    edit.cancel();
                    return Err(e.into());
                }
            }
        }
    };

    if palette.is_empty() {
        println!("(palette is empty)");
    }
    for (index, color) in palette.colors().iter().enumerate() {
        println!("{index:>3}  {color}");
    }
    Ok(())
}

/// Show or set the stored size setting
async fn run_size_command(value: Option<i64>) -> anyhow::Result<()> {
    init_cli_tracing();
    let session = open_session().await?;

    let size = match value {
        Some(value) => session.set_size(SizeSetting::new(value)?).await?,
        None => session.size().await,
    };
    println!("size {} ({}x{} grid)", size, size.grid_size(), size.grid_size());
    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let store_file = std::env::var("STORE_FILE").ok();

    // Header
    println!("pixdot v{VERSION}");
    println!("Palette dot-art generator\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  STORE_FILE  = {}",
        store_file.as_deref().unwrap_or("(not set)")
    );

    // Sources section
    println!("\nSources:");
    let config_source = match config_file {
        Some(ref path) if Path::new(path).exists() => path.to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    println!("  Config:  {config_source}");

    match store_path() {
        Ok(path) if path.exists() => println!("  Store:   {}", path.display()),
        Ok(path) => println!("  Store:   {} (not created yet)", path.display()),
        Err(e) => println!("  Store:   unavailable ({e})"),
    }

    // Commands section
    println!("\nCommands:");
    println!("  pixdot serve     Start the HTTP server");
    println!("  pixdot render    Render an image file to dot-art");
    println!("  pixdot palette   Show or edit the stored palette");
    println!("  pixdot size      Show or set the size setting");
    println!("\nRun 'pixdot --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixdot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_file = config_path();
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let store_file = store_path()?;

    tracing::info!(
        config = ?config_file.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "defaults".to_string()),
        store = %store_file.display(),
        "Sources configured"
    );

    let config = AppConfig::load(config_file.as_deref());
    let store = Arc::new(FileStore::open(store_file).await);

    // Create application state using shared server module
    let state = server::create_app_state(config, store).await?;

    // Build router: shared API routes plus production-only documentation
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "pixdot server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
