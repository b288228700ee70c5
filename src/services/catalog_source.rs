//! Product source backed by a static JSON catalog.

use async_trait::async_trait;

use super::product_source::{ProductSource, SourceError};
use crate::assets::AssetLoader;
use crate::models::Product;

/// Searches an in-memory list of products by title
pub struct CatalogSource {
    products: Vec<Product>,
}

impl CatalogSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a catalog from JSON (an array of `{title, image, link}`)
    pub fn from_json(json: &[u8]) -> Result<Self, SourceError> {
        let products: Vec<Product> =
            serde_json::from_slice(json).map_err(|e| SourceError::Decode(e.to_string()))?;
        Ok(Self::new(products))
    }

    /// Load the embedded catalog, or the file named by `CATALOG_FILE`
    pub fn load(loader: &AssetLoader) -> Result<Self, SourceError> {
        let data = loader.read_catalog()?;
        let source = Self::from_json(&data)?;
        tracing::info!(products = source.products.len(), "Loaded product catalog");
        Ok(source)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl ProductSource for CatalogSource {
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<Product>, SourceError> {
        // "OR" joins color tokens in upstream query syntax
        let terms: Vec<String> = query
            .split_whitespace()
            .filter(|term| *term != "OR")
            .map(str::to_lowercase)
            .collect();

        let found = self
            .products
            .iter()
            .filter(|product| {
                let title = product.title.to_lowercase();
                terms.iter().any(|term| title.contains(term.as_str()))
            })
            .take(limit as usize)
            .cloned()
            .collect();

        Ok(found)
    }

    fn name(&self) -> &'static str {
        "catalog"
    }
}
