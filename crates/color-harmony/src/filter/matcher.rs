use serde::{Deserialize, Serialize};

/// Access to the text an item exposes for color matching.
///
/// Typically an image URL or a description. Items returning `None` or an
/// empty string lack the minimum signal and are dropped from every result,
/// including the fallback.
pub trait ColorSignal {
    fn color_signal(&self) -> Option<&str>;
}

impl ColorSignal for String {
    fn color_signal(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl ColorSignal for &str {
    fn color_signal(&self) -> Option<&str> {
        Some(*self)
    }
}

/// How a token is located inside a signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Token may appear anywhere, so `"red"` matches `"bored"`.
    #[default]
    Substring,
    /// Token must be bounded by non-alphanumeric characters or the ends of
    /// the signal.
    WordBoundary,
}

/// Result of a filter pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome<T> {
    /// Matching items, or every item with a signal when nothing matched
    pub items: Vec<T>,
    /// True when no item matched and `items` is the unfiltered list
    pub fell_back: bool,
}

/// Stable color-token filter with an unfiltered fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorFilter {
    mode: MatchMode,
}

impl ColorFilter {
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Keep items whose signal contains any of `tokens`, case-insensitively,
    /// in their original order.
    ///
    /// Falls back to every item that has a signal when the match set is
    /// empty, including when `tokens` has no non-blank entry.
    pub fn apply<T, S>(&self, items: &[T], tokens: &[S]) -> FilterOutcome<T>
    where
        T: ColorSignal + Clone,
        S: AsRef<str>,
    {
        let tokens: Vec<String> = tokens
            .iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        let candidates: Vec<(&T, String)> = items
            .iter()
            .filter_map(|item| {
                item.color_signal()
                    .filter(|signal| !signal.is_empty())
                    .map(|signal| (item, signal.to_lowercase()))
            })
            .collect();

        let matched: Vec<T> = candidates
            .iter()
            .filter(|(_, signal)| tokens.iter().any(|token| self.matches(signal, token)))
            .map(|(item, _)| (*item).clone())
            .collect();

        if matched.is_empty() {
            FilterOutcome {
                items: candidates.into_iter().map(|(item, _)| item.clone()).collect(),
                fell_back: true,
            }
        } else {
            FilterOutcome {
                items: matched,
                fell_back: false,
            }
        }
    }

    fn matches(&self, signal: &str, token: &str) -> bool {
        match self.mode {
            MatchMode::Substring => signal.contains(token),
            MatchMode::WordBoundary => signal.match_indices(token).any(|(start, found)| {
                let before = signal[..start].chars().next_back();
                let after = signal[start + found.len()..].chars().next();
                !before.is_some_and(char::is_alphanumeric)
                    && !after.is_some_and(char::is_alphanumeric)
            }),
        }
    }
}

/// Filter `items` by `tokens` with substring matching.
///
/// Never returns an empty list unless no item has a signal.
///
/// # Example
/// ```
/// use color_harmony::filter_by_color;
///
/// let items = vec!["blue hat".to_string(), "green shoes".to_string()];
/// assert_eq!(filter_by_color(&items, &["blue"]), vec!["blue hat".to_string()]);
/// assert_eq!(filter_by_color(&items, &["red"]), items);
/// ```
pub fn filter_by_color<T, S>(items: &[T], tokens: &[S]) -> Vec<T>
where
    T: ColorSignal + Clone,
    S: AsRef<str>,
{
    ColorFilter::default().apply(items, tokens).items
}
