//! Harmony scheme generation
//!
//! A [`HarmonyFamily`] names a fixed rule of hue and lightness offsets.
//! [`generate_schemes`] applies all seven rules to one color and returns a
//! [`HarmonySchemes`] value.

mod family;
mod schemes;

pub use family::{HarmonyFamily, UnknownFamilyError, MONOCHROMATIC_STEPS};
pub use schemes::{generate_schemes, HarmonySchemes};
