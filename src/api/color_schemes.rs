use axum::{
    extract::{Query, State},
    http::{header, HeaderName, HeaderValue},
    response::{IntoResponse, Response},
};
use color_harmony::{generate_schemes, HarmonySchemes};
use std::sync::Arc;

use super::query::ColorQuery;
use crate::error::ApiError;
use crate::services::{CachedSchemes, SchemeCache};

/// Response header reporting whether the body came from the scheme cache
pub const X_CACHE: HeaderName = HeaderName::from_static("x-cache");

/// Generate the seven harmony schemes for a color
///
/// Returns `original`, `complementary`, `analogous`, `splitComplementary`,
/// `triadic`, `tetradic` and `monochromatic`, each a list of `{r, g, b}`.
/// Identical inputs are served from an in-memory cache.
#[utoipa::path(
    get,
    path = "/api/color-schemes",
    params(ColorQuery),
    responses(
        (status = 200, description = "Harmony schemes for the input color", body = HarmonySchemes,
            headers(("X-Cache" = String, description = "hit or miss"))),
        (status = 400, description = "Missing or malformed color"),
    ),
    tag = "Color"
)]
pub async fn handle_color_schemes<C: SchemeCache>(
    State(cache): State<Arc<C>>,
    Query(query): Query<ColorQuery>,
) -> Result<Response, ApiError> {
    let rgb = query.resolve()?;
    let key = rgb.to_hex();

    if let Some(cached) = cache.get(&key).await {
        tracing::debug!(color = %key, generated_at = %cached.generated_at, "Scheme cache hit");
        return Ok(json_response(cached.json, "hit"));
    }

    let schemes = generate_schemes(rgb);
    let json = serde_json::to_string(&schemes)
        .map_err(|e| ApiError::Internal(format!("Failed to serialize schemes: {e}")))?;
    let entry = CachedSchemes::new(json);
    cache.store(&key, entry.clone()).await;

    tracing::info!(color = %key, "Generated color schemes");
    Ok(json_response(entry.json, "miss"))
}

fn json_response(body: Arc<str>, cache_status: &'static str) -> Response {
    (
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            ),
            (X_CACHE, HeaderValue::from_static(cache_status)),
        ],
        body.to_string(),
    )
        .into_response()
}
