use axum::{extract::Query, response::Json};
use color_harmony::{Hsl, HslPercent, Rgb};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ColorInfoQuery {
    /// `#rrggbb`, `rgb`, or `rgb(r, g, b)`
    pub color: String,
}

/// One color in every notation the UI displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ColorInfo {
    /// Lower-case `#rrggbb`
    pub hex: String,
    /// `rgb(r,g,b)`
    pub css: String,
    pub rgb: Rgb,
    /// Hue in degrees, saturation and lightness in percent
    pub hsl: HslPercent,
}

impl From<Rgb> for ColorInfo {
    fn from(rgb: Rgb) -> Self {
        Self {
            hex: rgb.to_hex(),
            css: rgb.to_css(),
            rgb,
            hsl: Hsl::from(rgb).to_percent(),
        }
    }
}

/// Describe a single color
#[utoipa::path(
    get,
    path = "/api/color",
    params(ColorInfoQuery),
    responses(
        (status = 200, description = "Color in hex, CSS, RGB and HSL notation", body = ColorInfo),
        (status = 400, description = "Malformed color"),
    ),
    tag = "Color"
)]
pub async fn handle_color_info(
    Query(query): Query<ColorInfoQuery>,
) -> Result<Json<ColorInfo>, ApiError> {
    let rgb: Rgb = query.color.parse()?;
    tracing::debug!(color = %rgb, "Color info requested");
    Ok(Json(ColorInfo::from(rgb)))
}
