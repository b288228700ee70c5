use async_trait::async_trait;
use thiserror::Error;

use crate::models::Product;

/// Errors raised while fetching product candidates
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Request failed: {0}")]
    Http(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SourceError::Decode(e.to_string())
        } else {
            SourceError::Http(e.to_string())
        }
    }
}

/// Trait for product candidate lookup
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Search for up to `limit` products matching `query`
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<Product>, SourceError>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}
