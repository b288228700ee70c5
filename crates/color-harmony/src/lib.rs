//! color-harmony: color harmony schemes and color-token matching
//!
//! This library derives harmonious palettes from a single color and narrows
//! candidate product lists by selected color tokens. Everything here is pure
//! and synchronous: no I/O, no shared state, and no function can fail on
//! numeric input.
//!
//! # Quick Start
//!
//! ```
//! use color_harmony::{generate_schemes, HarmonyFamily, Rgb};
//!
//! let schemes = generate_schemes(Rgb::new(255, 0, 0));
//! assert_eq!(schemes.get(HarmonyFamily::Complementary), &[Rgb::new(0, 255, 255)]);
//!
//! for (family, colors) in schemes.iter() {
//!     println!("{family}: {}", colors.len());
//! }
//! ```
//!
//! # Units at each boundary
//!
//! | Boundary | Type | Units |
//! |----------|------|-------|
//! | input / output | [`Rgb`] | integer channels 0..=255 |
//! | internal | [`Hsl`] | hue degrees [0, 360), saturation and lightness 0.0..=1.0 |
//! | display | [`HslPercent`] | whole degrees, whole percent 0..=100 |
//!
//! Integer input outside 0..=255 is clamped ([`Rgb::clamped`]). Hue is
//! always reduced modulo 360 and derived lightness is clamped before the
//! conversion back to RGB. Fractional channels are rounded to nearest with
//! ties away from zero.
//!
//! # Harmony families
//!
//! | Family | Points |
//! |--------|--------|
//! | `original` | the input |
//! | `complementary` | +180 |
//! | `analogous` | +30, -30 |
//! | `splitComplementary` | +150, +210 |
//! | `triadic` | +120, -120 |
//! | `tetradic` | +180, +270, +90 |
//! | `monochromatic` | lightness -0.2, -0.1, +0.1, +0.2 |
//!
//! A gray input (saturation 0) yields the same gray for every hue family.
//!
//! # Color-match filtering
//!
//! [`filter_by_color`] keeps items whose [`ColorSignal`] contains any selected
//! token and falls back to the unfiltered list when nothing matches. See
//! [`ColorFilter`] for the word-boundary mode.

pub mod color;
pub mod filter;
pub mod harmony;


pub use color::{hsl_to_rgb, rgb_to_hsl, wrap_hue, Hsl, HslPercent, ParseColorError, Rgb};
pub use filter::{filter_by_color, ColorFilter, ColorSignal, FilterOutcome, MatchMode};
pub use harmony::{generate_schemes, HarmonyFamily, HarmonySchemes, UnknownFamilyError};
