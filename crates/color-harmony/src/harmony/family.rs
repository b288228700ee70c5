//! The seven harmony families and their derivation rules

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Hsl;

/// Lightness offsets for the monochromatic family, darkest first.
pub const MONOCHROMATIC_STEPS: [f64; 4] = [-0.2, -0.1, 0.1, 0.2];

/// A named rule for deriving related colors from a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum HarmonyFamily {
    /// The input color itself
    Original,
    /// base + 180
    Complementary,
    /// base + 30, base - 30
    Analogous,
    /// base + 150, base + 210
    SplitComplementary,
    /// base + 120, base - 120
    Triadic,
    /// complement, complement + 90, complement - 90
    Tetradic,
    /// base lightness -0.2, -0.1, +0.1, +0.2
    Monochromatic,
}

/// Returned when a family name is not one of the seven wire names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown harmony family: {0}")]
pub struct UnknownFamilyError(pub String);

impl HarmonyFamily {
    /// Every family, in the canonical output order.
    pub const ALL: [HarmonyFamily; 7] = [
        HarmonyFamily::Original,
        HarmonyFamily::Complementary,
        HarmonyFamily::Analogous,
        HarmonyFamily::SplitComplementary,
        HarmonyFamily::Triadic,
        HarmonyFamily::Tetradic,
        HarmonyFamily::Monochromatic,
    ];

    /// Wire name (camelCase), as used for JSON keys.
    pub fn name(self) -> &'static str {
        match self {
            HarmonyFamily::Original => "original",
            HarmonyFamily::Complementary => "complementary",
            HarmonyFamily::Analogous => "analogous",
            HarmonyFamily::SplitComplementary => "splitComplementary",
            HarmonyFamily::Triadic => "triadic",
            HarmonyFamily::Tetradic => "tetradic",
            HarmonyFamily::Monochromatic => "monochromatic",
        }
    }

    /// Derive this family's HSL points from `base`, in output order.
    ///
    /// Hue offsets wrap modulo 360. Monochromatic lightness values are clamped
    /// to 0.0..=1.0, so steps near black or white may coincide.
    pub fn derive(self, base: Hsl) -> Vec<Hsl> {
        match self {
            HarmonyFamily::Original => vec![base],
            HarmonyFamily::Complementary => vec![base.rotate(180.0)],
            HarmonyFamily::Analogous => vec![base.rotate(30.0), base.rotate(-30.0)],
            HarmonyFamily::SplitComplementary => vec![base.rotate(150.0), base.rotate(210.0)],
            HarmonyFamily::Triadic => vec![base.rotate(120.0), base.rotate(-120.0)],
            HarmonyFamily::Tetradic => {
                let complement = base.rotate(180.0);
                vec![complement, complement.rotate(90.0), complement.rotate(-90.0)]
            }
            HarmonyFamily::Monochromatic => MONOCHROMATIC_STEPS
                .iter()
                .map(|delta| base.with_lightness(base.l + delta))
                .collect(),
        }
    }
}

impl fmt::Display for HarmonyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyFamily {
    type Err = UnknownFamilyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HarmonyFamily::ALL
            .into_iter()
            .find(|family| family.name() == s)
            .ok_or_else(|| UnknownFamilyError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hues(points: &[Hsl]) -> Vec<f64> {
        points.iter().map(|p| p.h).collect()
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for family in HarmonyFamily::ALL {
            assert_eq!(family.name().parse::<HarmonyFamily>().unwrap(), family);
            assert_eq!(family.to_string(), family.name());
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "square".parse::<HarmonyFamily>().unwrap_err();
        assert_eq!(err.to_string(), "unknown harmony family: square");
    }

    #[test]
    fn test_serde_uses_wire_name() {
        let json = serde_json::to_string(&HarmonyFamily::SplitComplementary).unwrap();
        assert_eq!(json, "\"splitComplementary\"");
    }

    #[test]
    fn test_hue_offsets() {
        let base = Hsl::new(300.0, 0.5, 0.5);
        assert_eq!(hues(&HarmonyFamily::Original.derive(base)), vec![300.0]);
        assert_eq!(hues(&HarmonyFamily::Complementary.derive(base)), vec![120.0]);
        assert_eq!(hues(&HarmonyFamily::Analogous.derive(base)), vec![330.0, 270.0]);
        assert_eq!(
            hues(&HarmonyFamily::SplitComplementary.derive(base)),
            vec![90.0, 150.0]
        );
        assert_eq!(hues(&HarmonyFamily::Triadic.derive(base)), vec![60.0, 180.0]);
        assert_eq!(
            hues(&HarmonyFamily::Tetradic.derive(base)),
            vec![120.0, 210.0, 30.0]
        );
    }

    #[test]
    fn test_hue_families_keep_saturation_and_lightness() {
        let base = Hsl::new(10.0, 0.3, 0.7);
        for family in HarmonyFamily::ALL {
            if family == HarmonyFamily::Monochromatic {
                continue;
            }
            for point in family.derive(base) {
                assert_eq!((point.s, point.l), (0.3, 0.7), "{family}");
            }
        }
    }

    #[test]
    fn test_monochromatic_steps_clamp() {
        let base = Hsl::new(42.0, 0.6, 0.95);
        let lightness: Vec<f64> = HarmonyFamily::Monochromatic
            .derive(base)
            .iter()
            .map(|p| p.l)
            .collect();

        assert_eq!(lightness.len(), 4);
        assert!((lightness[0] - 0.75).abs() < 1e-12);
        assert!((lightness[1] - 0.85).abs() < 1e-12);
        assert_eq!(lightness[2], 1.0);
        assert_eq!(lightness[3], 1.0);
    }

    #[test]
    fn test_monochromatic_keeps_hue_and_saturation() {
        let base = Hsl::new(200.0, 0.4, 0.05);
        for point in HarmonyFamily::Monochromatic.derive(base) {
            assert_eq!((point.h, point.s), (200.0, 0.4));
            assert!((0.0..=1.0).contains(&point.l));
        }
    }
}
