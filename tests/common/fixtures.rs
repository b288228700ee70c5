//! Test fixtures and constants.

use color_oven::models::Product;

/// Basic auth header value for `test-id:test-secret`
pub const BASIC_AUTH: &str = "dGVzdC1pZDp0ZXN0LXNlY3JldA==";

pub const CLIENT_ID: &str = "test-id";
pub const CLIENT_SECRET: &str = "test-secret";

pub const ACCESS_TOKEN: &str = "test-access-token";

/// Links of embedded catalog items used in assertions
pub mod catalog {
    pub const RED_BEANIE: &str = "https://shop.color-oven.test/items/1001";
    pub const NAVY_BEANIE: &str = "https://shop.color-oven.test/items/1002";
    pub const SUN_HAT: &str = "https://shop.color-oven.test/items/1003";
    pub const GREEN_SNEAKERS: &str = "https://shop.color-oven.test/items/2001";
    pub const RED_SNEAKERS: &str = "https://shop.color-oven.test/items/2002";
    pub const IMAGELESS_SCARF: &str = "https://shop.color-oven.test/items/4002";
}

/// Search request body
pub fn search_body(query: &str, colors: &[&str]) -> String {
    serde_json::json!({ "query": query, "colors": colors }).to_string()
}

/// Upstream item summary in the remote search format
pub fn item_summary(title: &str, image: Option<&str>, link: &str) -> serde_json::Value {
    match image {
        Some(url) => serde_json::json!({
            "title": title,
            "image": { "imageUrl": url },
            "itemWebUrl": link,
        }),
        None => serde_json::json!({ "title": title, "itemWebUrl": link }),
    }
}

/// A small product list for in-process sources
pub fn products() -> Vec<Product> {
    vec![
        Product::new("Blue Hat", Some("https://img.test/hat-blue.jpg"), "https://shop.test/1"),
        Product::new("Green Shoes", Some("https://img.test/shoes-green.jpg"), "https://shop.test/2"),
        Product::new("Plain Hat", None, "https://shop.test/3"),
    ]
}
