//! Scheme generation: one input color to seven ordered palettes

use serde::{Deserialize, Serialize};

use super::family::HarmonyFamily;
use crate::color::{Hsl, Rgb};

/// The seven harmony palettes derived from one input color.
///
/// Serializes as a JSON object whose keys follow [`HarmonyFamily::ALL`]
/// order. Order within each palette is part of the contract: consumers index
/// by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HarmonySchemes {
    pub original: Vec<Rgb>,
    pub complementary: Vec<Rgb>,
    pub analogous: Vec<Rgb>,
    pub split_complementary: Vec<Rgb>,
    pub triadic: Vec<Rgb>,
    pub tetradic: Vec<Rgb>,
    pub monochromatic: Vec<Rgb>,
}

impl HarmonySchemes {
    /// The palette for one family.
    pub fn get(&self, family: HarmonyFamily) -> &[Rgb] {
        match family {
            HarmonyFamily::Original => &self.original,
            HarmonyFamily::Complementary => &self.complementary,
            HarmonyFamily::Analogous => &self.analogous,
            HarmonyFamily::SplitComplementary => &self.split_complementary,
            HarmonyFamily::Triadic => &self.triadic,
            HarmonyFamily::Tetradic => &self.tetradic,
            HarmonyFamily::Monochromatic => &self.monochromatic,
        }
    }

    /// All palettes in canonical family order.
    pub fn iter(&self) -> impl Iterator<Item = (HarmonyFamily, &[Rgb])> + '_ {
        HarmonyFamily::ALL
            .into_iter()
            .map(move |family| (family, self.get(family)))
    }

    /// The input color the schemes were generated from.
    pub fn base(&self) -> Option<Rgb> {
        self.original.first().copied()
    }
}

/// Generate every harmony family for `rgb`.
///
/// `original` holds `rgb` verbatim; every other palette goes through
/// [`Hsl`] and back.
///
/// # Example
/// ```
/// use color_harmony::{generate_schemes, Rgb};
///
/// let schemes = generate_schemes(Rgb::new(255, 0, 0));
/// assert_eq!(schemes.complementary, vec![Rgb::new(0, 255, 255)]);
/// assert_eq!(
///     schemes.analogous,
///     vec![Rgb::new(255, 128, 0), Rgb::new(255, 0, 128)]
/// );
/// ```
pub fn generate_schemes(rgb: Rgb) -> HarmonySchemes {
    let base = Hsl::from(rgb);
    let palette = |family: HarmonyFamily| -> Vec<Rgb> {
        family
            .derive(base)
            .into_iter()
            .map(|point| point.clamped().to_rgb())
            .collect()
    };

    HarmonySchemes {
        original: vec![rgb],
        complementary: palette(HarmonyFamily::Complementary),
        analogous: palette(HarmonyFamily::Analogous),
        split_complementary: palette(HarmonyFamily::SplitComplementary),
        triadic: palette(HarmonyFamily::Triadic),
        tetradic: palette(HarmonyFamily::Tetradic),
        monochromatic: palette(HarmonyFamily::Monochromatic),
    }
}
