//! 8-bit RGB color type
//!
//! [`Rgb`] is the only representation that enters or leaves the engine.
//! Every constructor keeps each channel inside 0..=255, so the type itself
//! carries the channel-range invariant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseColorError;

/// A color with three 8-bit channels.
///
/// Serializes as `{"r": .., "g": .., "b": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from in-range channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from arbitrary integers, clamping each channel.
    ///
    /// Negative values become 0 and values above 255 become 255. This never
    /// fails.
    ///
    /// # Example
    /// ```
    /// use color_harmony::Rgb;
    /// assert_eq!(Rgb::clamped(-20, 128, 999), Rgb::new(0, 128, 255));
    /// ```
    #[inline]
    pub fn clamped(r: i64, g: i64, b: i64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Create a color from fractional channels in 0.0..=1.0.
    ///
    /// Each channel is scaled by 255, rounded to the nearest integer with
    /// ties away from zero, then clamped.
    #[inline]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: unit_to_channel(r),
            g: unit_to_channel(g),
            b: unit_to_channel(b),
        }
    }

    /// Channels as fractions of 255.
    #[inline]
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    /// Lower-case `#rrggbb` form.
    ///
    /// This is the canonical token and the cache key for scheme results.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `rgb(r,g,b)` form, without spaces.
    pub fn to_css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// Whether all three channels are equal.
    #[inline]
    pub fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color token.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` / `RRGGBB`
    /// - `#RGB` / `RGB` (each digit doubled)
    /// - `rgb(r, g, b)` with integer channels, clamped to 0..=255
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_harmony::Rgb;
    ///
    /// let red: Rgb = "#FF0000".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    ///
    /// let teal: Rgb = "rgb(0, 128, 128)".parse().unwrap();
    /// assert_eq!(teal.to_hex(), "#008080");
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(args) = strip_css_function(s) {
            return parse_css_args(s, args);
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match hex.len() {
            3 => {
                // Shorthand: 0xF -> 0xFF
                let r = hex_digit(hex, 0)? * 17;
                let g = hex_digit(hex, 1)? * 17;
                let b = hex_digit(hex, 2)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = (hex_digit(hex, 0)? << 4) | hex_digit(hex, 1)?;
                let g = (hex_digit(hex, 2)? << 4) | hex_digit(hex, 3)?;
                let b = (hex_digit(hex, 4)? << 4) | hex_digit(hex, 5)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

/// One hex digit at byte `index` of an ASCII string.
///
/// Parsed alone so a sign character cannot pass as part of a pair ("+f").
#[inline]
fn hex_digit(hex: &str, index: usize) -> Result<u8, ParseColorError> {
    Ok(u8::from_str_radix(&hex[index..=index], 16)?)
}

#[inline]
fn clamp_channel(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

#[inline]
fn unit_to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Return the text between `rgb(` and `)` if `s` has that shape.
fn strip_css_function(s: &str) -> Option<&str> {
    let prefix = s.get(..4)?;
    if !prefix.eq_ignore_ascii_case("rgb(") {
        return None;
    }
    s[4..].strip_suffix(')')
}

fn parse_css_args(original: &str, args: &str) -> Result<Rgb, ParseColorError> {
    let invalid = || ParseColorError::InvalidCss(original.to_string());

    let channels = args
        .split(',')
        .map(|part| part.trim().parse::<i64>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;

    match channels.as_slice() {
        [r, g, b] => Ok(Rgb::clamped(*r, *g, *b)),
        _ => Err(invalid()),
    }
}
