//! Color-match filtering of candidate items
//!
//! Tokens are compared to each item's [`ColorSignal`] by case-insensitive
//! string search. No color-distance comparison is performed. When nothing
//! matches, the filter degrades to a no-op instead of returning an empty list.

mod matcher;

pub use matcher::{filter_by_color, ColorFilter, ColorSignal, FilterOutcome, MatchMode};
