use axum::{extract::State, response::Json, Json as JsonExtractor};
use color_harmony::ColorFilter;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::{AppConfig, Product};
use crate::services::ProductSource;

/// Request body for product search
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductSearchRequest {
    /// Free-text product query, e.g. "sneakers"
    #[serde(default)]
    pub query: String,
    /// Color tokens to prefer, e.g. `["red", "ff0000"]`
    #[serde(default)]
    pub colors: Vec<String>,
}

impl ProductSearchRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if self.query.trim().is_empty() || self.colors.is_empty() {
            return Err(ApiError::BadRequest(
                "Missing required parameters: query and colors".to_string(),
            ));
        }
        Ok(())
    }

    /// Query sent to the product source: colors joined with OR, then the text
    pub fn upstream_query(&self) -> String {
        format!("{} {}", self.colors.join(" OR "), self.query)
    }
}

/// Search products and prefer those whose image matches a selected color
///
/// Candidates without an image are dropped. When no image URL contains any
/// of the colors, every candidate with an image is returned instead.
#[utoipa::path(
    post,
    path = "/api/product-search",
    request_body = ProductSearchRequest,
    responses(
        (status = 200, description = "Matching products", body = Vec<Product>),
        (status = 400, description = "Missing query or colors"),
        (status = 502, description = "Product source failed"),
    ),
    tag = "Products"
)]
pub async fn handle_product_search(
    State(config): State<Arc<AppConfig>>,
    State(source): State<Arc<dyn ProductSource>>,
    State(filter): State<ColorFilter>,
    JsonExtractor(request): JsonExtractor<ProductSearchRequest>,
) -> Result<Json<Vec<Product>>, ApiError> {
    request.validate()?;

    let query = request.upstream_query();
    let candidates = source
        .search(&query, config.products.limit)
        .await
        .map_err(|e| {
            tracing::error!(source = source.name(), error = %e, "Product source failed");
            ApiError::from(e)
        })?;

    let with_images: Vec<Product> = candidates.into_iter().filter(Product::has_image).collect();
    let outcome = filter.apply(&with_images, &request.colors);

    tracing::info!(
        query = %query,
        source = source.name(),
        candidates = with_images.len(),
        returned = outcome.items.len(),
        fell_back = outcome.fell_back,
        match_mode = ?filter.mode(),
        "Product search"
    );

    Ok(Json(outcome.items))
}
