//! HSL color type and the RGB <-> HSL transforms
//!
//! Saturation and lightness are fractions in 0.0..=1.0 everywhere inside the
//! engine. Hue is in degrees on the cyclic domain [0, 360). The only place
//! percentages appear is [`HslPercent`], the display form.
//!
//! Both transforms are total: out-of-range integers are clamped and hues are
//! wrapped, so neither direction can fail.

use serde::{Deserialize, Serialize};

use super::rgb::Rgb;

/// A color in HSL space with fractional saturation and lightness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, [0, 360)
    pub h: f64,
    /// Saturation, 0.0..=1.0
    pub s: f64,
    /// Lightness, 0.0..=1.0
    pub l: f64,
}

/// HSL rounded for display: whole degrees and whole percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HslPercent {
    /// Hue in whole degrees, 0..360
    pub h: u16,
    /// Saturation percent, 0..=100
    pub s: u8,
    /// Lightness percent, 0..=100
    pub l: u8,
}

impl Hsl {
    /// Create an HSL color. The hue is wrapped into [0, 360); saturation and
    /// lightness are stored as given.
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s,
            l,
        }
    }

    /// Same color with the hue shifted by `degrees` (either sign).
    #[inline]
    pub fn rotate(self, degrees: f64) -> Self {
        // negative offsets are lifted by a full turn before the reduction
        let shifted = if degrees < 0.0 {
            self.h + degrees + 360.0
        } else {
            self.h + degrees
        };
        Self {
            h: wrap_hue(shifted),
            ..self
        }
    }

    /// Same hue and saturation with the given lightness, clamped to 0.0..=1.0.
    #[inline]
    pub fn with_lightness(self, l: f64) -> Self {
        Self {
            l: l.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Saturation and lightness clamped to 0.0..=1.0.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            h: wrap_hue(self.h),
            s: self.s.clamp(0.0, 1.0),
            l: self.l.clamp(0.0, 1.0),
        }
    }

    /// Whether saturation is exactly zero (a shade of gray).
    #[inline]
    pub fn is_achromatic(self) -> bool {
        self.s == 0.0
    }

    /// Convert back to RGB. See [`hsl_to_rgb`].
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.h, self.s, self.l)
    }

    /// Rounded display form.
    pub fn to_percent(self) -> HslPercent {
        let clamped = self.clamped();
        let mut h = clamped.h.round();
        if h >= 360.0 {
            h = 0.0;
        }
        HslPercent {
            h: h as u16,
            s: (clamped.s * 100.0).round() as u8,
            l: (clamped.l * 100.0).round() as u8,
        }
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsl_unit(rgb.to_unit())
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

/// Reduce a hue in degrees into [0, 360).
///
/// Negative hues wrap to their positive equivalent (-30 -> 330).
#[inline]
pub fn wrap_hue(degrees: f64) -> f64 {
    let h = degrees.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Convert integer RGB channels to HSL.
///
/// Each channel is clamped to 0..=255 first, so any integer input is accepted.
///
/// # Example
/// ```
/// use color_harmony::rgb_to_hsl;
/// let hsl = rgb_to_hsl(255, 0, 0);
/// assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 1.0, 0.5));
/// ```
pub fn rgb_to_hsl(r: i64, g: i64, b: i64) -> Hsl {
    Hsl::from(Rgb::clamped(r, g, b))
}

fn rgb_to_hsl_unit([r, g, b]: [f64; 3]) -> Hsl {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;

    let h = if max == r {
        // lifted by a full turn before reducing; the last-bit residue decides
        // which side of .5 derived channels round to
        (60.0 * ((g - b) / d) + 360.0) % 360.0
    } else if max == g {
        60.0 * ((b - r) / d) + 120.0
    } else {
        60.0 * ((r - g) / d) + 240.0
    };

    let s = if l <= 0.5 {
        d / (max + min)
    } else {
        d / (2.0 - max - min)
    };

    Hsl {
        h: wrap_hue(h),
        s,
        l,
    }
}

/// Convert HSL (degrees, fractions) to RGB.
///
/// The hue is wrapped modulo 360. Saturation and lightness are expected in
/// 0.0..=1.0; callers deriving new points clamp them beforehand. Output
/// channels are rounded to nearest with ties away from zero (127.5 -> 128)
/// and then clamped.
///
/// # Example
/// ```
/// use color_harmony::{hsl_to_rgb, Rgb};
/// assert_eq!(hsl_to_rgb(180.0, 1.0, 0.5), Rgb::new(0, 255, 255));
/// assert_eq!(hsl_to_rgb(-180.0, 1.0, 0.5), Rgb::new(0, 255, 255));
/// ```
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = wrap_hue(h) / 360.0;

    if s == 0.0 {
        return Rgb::from_unit(l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::from_unit(
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

/// Piecewise channel interpolation for one phase of the hue circle.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
