//! Color types and conversion utilities
//!
//! - [`Rgb`]: 8-bit channels, the input/output boundary of the engine
//! - [`Hsl`]: hue in degrees, fractional saturation and lightness
//! - [`HslPercent`]: rounded display form of [`Hsl`]
//!
//! # Example
//!
//! ```
//! use color_harmony::{Hsl, Rgb};
//!
//! let red = Rgb::new(255, 0, 0);
//! let cyan = Hsl::from(red).rotate(180.0).to_rgb();
//! assert_eq!(cyan, Rgb::new(0, 255, 255));
//! ```

mod error;
mod hsl;
mod rgb;

pub use error::ParseColorError;
pub use hsl::{hsl_to_rgb, rgb_to_hsl, wrap_hue, Hsl, HslPercent};
pub use rgb::Rgb;
