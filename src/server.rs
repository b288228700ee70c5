//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    routing::{get, post},
    Router,
};
use color_harmony::ColorFilter;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::assets::AssetLoader;
use crate::error::ApiError;
use crate::models::{AppConfig, SourceKind};
use crate::services::{CatalogSource, HttpProductSource, InMemorySchemeCache, ProductSource};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub scheme_cache: Arc<InMemorySchemeCache>,
    pub product_source: Arc<dyn ProductSource>,
    pub filter: ColorFilter,
}

/// Create application state from an asset loader.
///
/// The product source is chosen by `products.source` in the config.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> anyhow::Result<AppState> {
    let config = AppConfig::load_from_assets(&asset_loader);

    let product_source: Arc<dyn ProductSource> = match config.products.source {
        SourceKind::Catalog => Arc::new(
            CatalogSource::load(&asset_loader)
                .map_err(|e| anyhow::anyhow!("Failed to load product catalog: {e}"))?,
        ),
        SourceKind::Http => Arc::new(
            HttpProductSource::from_config(&config.products)
                .map_err(|e| anyhow::anyhow!("Failed to create product source: {e}"))?,
        ),
    };

    Ok(create_app_state_with_source(config, product_source))
}

/// Create application state around an explicit product source.
pub fn create_app_state_with_source(
    config: AppConfig,
    product_source: Arc<dyn ProductSource>,
) -> AppState {
    let scheme_cache = Arc::new(InMemorySchemeCache::new(config.cache.max_entries));
    let filter = ColorFilter::new(config.filter.match_mode);

    AppState {
        config: Arc::new(config),
        scheme_cache,
        product_source,
        filter,
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/color-schemes", get(handle_color_schemes))
        .route("/api/color", get(api::handle_color_info))
        .route("/api/product-search", post(handle_product_search))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_color_schemes(
    axum::extract::State(state): axum::extract::State<AppState>,
    query: axum::extract::Query<api::ColorQuery>,
) -> Result<axum::response::Response, ApiError> {
    api::handle_color_schemes(axum::extract::State(state.scheme_cache), query).await
}

async fn handle_product_search(
    axum::extract::State(state): axum::extract::State<AppState>,
    body: axum::Json<api::ProductSearchRequest>,
) -> Result<axum::Json<Vec<crate::models::Product>>, ApiError> {
    api::handle_product_search(
        axum::extract::State(state.config),
        axum::extract::State(state.product_source),
        axum::extract::State(state.filter),
        body,
    )
    .await
}
