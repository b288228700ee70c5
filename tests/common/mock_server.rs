//! Mock product search API for testing the HTTP product source.

use wiremock::{
    matchers::{body_string_contains, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use super::fixtures::{ACCESS_TOKEN, BASIC_AUTH};

pub const TOKEN_PATH: &str = "/identity/v1/oauth2/token";
pub const SEARCH_PATH: &str = "/buy/browse/v1/item_summary/search";

/// Wrapper around wiremock MockServer with product API endpoints
pub struct MockProductApi {
    pub server: MockServer,
}

impl MockProductApi {
    /// Start a new mock server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get URL for a specific path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.server.uri(), path)
    }

    pub fn token_url(&self) -> String {
        self.url_for(TOKEN_PATH)
    }

    pub fn search_url(&self) -> String {
        self.url_for(SEARCH_PATH)
    }

    /// Mock the token endpoint, requiring basic auth and the client credentials grant
    pub async fn mock_token(&self) {
        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .and(header("authorization", format!("Basic {BASIC_AUTH}")))
            .and(body_string_contains("grant_type=client_credentials"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": ACCESS_TOKEN,
                "expires_in": 7200,
                "token_type": "Application Access Token",
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock the token endpoint rejecting credentials
    pub async fn mock_token_rejected(&self) {
        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid_client"))
            .mount(&self.server)
            .await;
    }

    /// Mock the search endpoint for a query, requiring the bearer token
    pub async fn mock_search(&self, query: &str, items: Vec<serde_json::Value>) {
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .and(query_param("q", query))
            .and(header("authorization", format!("Bearer {ACCESS_TOKEN}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "itemSummaries": items })),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock the search endpoint without auth requirements
    pub async fn mock_search_unauthenticated(&self, items: Vec<serde_json::Value>) {
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "itemSummaries": items })),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock the search endpoint returning an error status
    pub async fn mock_search_error(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string("upstream failure"))
            .mount(&self.server)
            .await;
    }

    /// Mock the search endpoint returning a non-JSON body
    pub async fn mock_search_garbage(&self) {
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&self.server)
            .await;
    }
}
