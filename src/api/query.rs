use color_harmony::Rgb;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::ApiError;

/// Query parameters naming an input color
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ColorQuery {
    /// Red channel (integers outside 0-255 are clamped)
    pub r: Option<String>,
    /// Green channel
    pub g: Option<String>,
    /// Blue channel
    pub b: Option<String>,
    /// Alternative to r/g/b: `#rrggbb`, `rgb`, or `rgb(r, g, b)`
    pub color: Option<String>,
}

impl ColorQuery {
    /// Resolve the query to a clamped RGB triple
    ///
    /// `color` wins when present. Otherwise all of r, g and b are required.
    pub fn resolve(&self) -> Result<Rgb, ApiError> {
        if let Some(color) = self.color.as_deref() {
            return Ok(color.parse::<Rgb>()?);
        }

        let r = require_channel(self.r.as_deref(), "r")?;
        let g = require_channel(self.g.as_deref(), "g")?;
        let b = require_channel(self.b.as_deref(), "b")?;
        Ok(Rgb::clamped(r, g, b))
    }
}

fn require_channel(value: Option<&str>, name: &str) -> Result<i64, ApiError> {
    value
        .map(parse_leading_int)
        .ok_or_else(|| ApiError::BadRequest(format!("Missing query parameter: {name}")))
}

/// Parse the leading integer of `s`, ignoring trailing garbage
///
/// `"12px"` is 12, `" -4"` is -4, and a value with no leading digits is 0.
/// Overlong digit runs saturate.
pub fn parse_leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}
