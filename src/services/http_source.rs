//! Product source backed by a remote search API (eBay Browse compatible).
//!
//! Each search first exchanges client credentials for a bearer token when
//! credentials and a token endpoint are configured, then queries the search
//! endpoint with `q` and `limit`.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::product_source::{ProductSource, SourceError};
use crate::models::{Product, ProductsConfig};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// OAuth2 client credentials
#[derive(Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl ClientCredentials {
    /// Read `PRODUCT_CLIENT_ID` and `PRODUCT_CLIENT_SECRET`
    pub fn from_env() -> Option<Self> {
        let client_id = std::env::var("PRODUCT_CLIENT_ID").ok()?;
        let client_secret = std::env::var("PRODUCT_CLIENT_SECRET").ok()?;
        Some(Self {
            client_id,
            client_secret,
        })
    }
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    #[serde(default)]
    item_summaries: Vec<ItemSummary>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemSummary {
    title: String,
    #[serde(default)]
    image: Option<ItemImage>,
    #[serde(default)]
    item_web_url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemImage {
    image_url: Option<String>,
}

impl From<ItemSummary> for Product {
    fn from(item: ItemSummary) -> Self {
        Product {
            title: item.title,
            image: item.image.and_then(|i| i.image_url),
            link: item.item_web_url,
        }
    }
}

/// Remote product search client
pub struct HttpProductSource {
    client: reqwest::Client,
    search_url: String,
    token_url: Option<String>,
    scope: Option<String>,
    credentials: Option<ClientCredentials>,
}

impl HttpProductSource {
    pub fn new(
        search_url: impl Into<String>,
        token_url: Option<String>,
        scope: Option<String>,
        credentials: Option<ClientCredentials>,
    ) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SourceError::Http(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            search_url: search_url.into(),
            token_url,
            scope,
            credentials,
        })
    }

    /// Build from the `products` config section and env credentials
    pub fn from_config(config: &ProductsConfig) -> Result<Self, SourceError> {
        let search_url = config
            .search_url
            .clone()
            .ok_or_else(|| SourceError::Http("products.search_url is not set".to_string()))?;
        let credentials = ClientCredentials::from_env();
        if credentials.is_none() {
            tracing::warn!("PRODUCT_CLIENT_ID/PRODUCT_CLIENT_SECRET not set, searching unauthenticated");
        }

        Self::new(
            search_url,
            config.token_url.clone(),
            config.scope.clone(),
            credentials,
        )
    }

    async fn access_token(&self) -> Result<Option<String>, SourceError> {
        let (Some(token_url), Some(credentials)) = (&self.token_url, &self.credentials) else {
            return Ok(None);
        };

        let mut form = vec![("grant_type", "client_credentials")];
        if let Some(scope) = &self.scope {
            form.push(("scope", scope.as_str()));
        }

        let response = self
            .client
            .post(token_url)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .form(&form)
            .send()
            .await
            .map_err(|e| SourceError::Auth(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Auth(format!("token endpoint returned {status}")));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Auth(format!("malformed token response: {e}")))?;

        tracing::debug!("Obtained product API access token");
        Ok(Some(token.access_token))
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<Product>, SourceError> {
        let token = self.access_token().await?;

        let mut request = self
            .client
            .get(&self.search_url)
            .query(&[("q", query.to_string()), ("limit", limit.to_string())]);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Http(format!("search endpoint returned {status}")));
        }

        let body: SearchResponse = response.json().await?;
        tracing::debug!(
            query = %query,
            items = body.item_summaries.len(),
            "Product search returned items"
        );

        Ok(body.item_summaries.into_iter().map(Product::from).collect())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
