use color_harmony::ColorSignal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product candidate as rendered by the search page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Listing title
    pub title: String,
    /// Thumbnail image URL; also the signal color tokens are matched against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Link to the listing
    #[serde(default)]
    pub link: String,
}

impl Product {
    pub fn new(title: impl Into<String>, image: Option<&str>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image: image.map(str::to_string),
            link: link.into(),
        }
    }

    /// Whether the product has a usable thumbnail
    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|url| !url.is_empty())
    }
}

impl ColorSignal for Product {
    fn color_signal(&self) -> Option<&str> {
        self.image.as_deref()
    }
}
