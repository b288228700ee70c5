//! Error type for color token parsing

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing color token strings.
///
/// Numeric conversions never fail; only turning text into an [`Rgb`](super::Rgb)
/// can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,

    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),

    /// `rgb(...)` form without exactly three integer channels
    #[error("invalid rgb() color: {0}")]
    InvalidCss(String),
}
