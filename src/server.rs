//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{extract::FromRef, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::models::AppConfig;
use crate::services::{FilterService, ImageLoader, ImageSource};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub service: Arc<FilterService>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<FilterService> {
    fn from_ref(state: &AppState) -> Self {
        state.service.clone()
    }
}

/// Create application state that loads images over HTTP(S) only.
///
/// Local paths are rejected so clients cannot read the server's filesystem.
pub fn create_app_state(config: AppConfig) -> AppState {
    let config = Arc::new(config);
    let source = Arc::new(ImageLoader::remote_only(config.clone()));
    create_app_state_with_source(config, source)
}

/// Create application state around a specific image source.
pub fn create_app_state_with_source(
    config: Arc<AppConfig>,
    source: Arc<dyn ImageSource>,
) -> AppState {
    let service = Arc::new(FilterService::new(source, config.clone()));
    AppState { config, service }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/filter", get(api::handle_filter))
        .route("/api/filters", get(api::handle_filters))
        .route("/api/presets", get(api::handle_presets))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
