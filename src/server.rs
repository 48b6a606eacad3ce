//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{DefaultBodyLimit, FromRef},
    http::{header::CACHE_CONTROL, HeaderValue},
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::api;
use crate::models::AppConfig;
use crate::services::{Analyzer, ImageIngestor, Session, SettingsStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub session: Arc<Session>,
    pub ingestor: Arc<ImageIngestor>,
    pub analyzer: Arc<Analyzer>,
}

impl FromRef<AppState> for Arc<Session> {
    fn from_ref(state: &AppState) -> Self {
        state.session.clone()
    }
}

impl FromRef<AppState> for Arc<ImageIngestor> {
    fn from_ref(state: &AppState) -> Self {
        state.ingestor.clone()
    }
}

impl FromRef<AppState> for Arc<Analyzer> {
    fn from_ref(state: &AppState) -> Self {
        state.analyzer.clone()
    }
}

/// Create application state from configuration and a settings store.
///
/// Restores the palette and size setting from the store.
pub async fn create_app_state(
    config: AppConfig,
    store: Arc<dyn SettingsStore>,
) -> anyhow::Result<AppState> {
    let session = Arc::new(
        Session::load(store)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to restore session: {e}"))?,
    );
    let ingestor = Arc::new(ImageIngestor::new(config.canvas));
    let analyzer = Arc::new(Analyzer::new(config.dot_style()));

    Ok(AppState {
        config: Arc::new(config),
        session,
        ingestor,
        analyzer,
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
/// Responses carry `Cache-Control: no-store` since every one reflects
/// mutable session state.
pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        // Palette
        .route(
            "/api/palette",
            get(api::handle_list_palette).post(api::handle_add_color),
        )
        .route(
            "/api/palette/:index",
            put(api::handle_edit_color).delete(api::handle_delete_color),
        )
        // Size setting
        .route(
            "/api/size",
            get(api::handle_get_size).put(api::handle_set_size),
        )
        // Source image
        .route(
            "/api/image",
            get(api::handle_image_info).post(api::handle_load_image),
        )
        // Analysis
        .route("/api/analyze", post(api::handle_analyze))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state, limits and tracing
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}
