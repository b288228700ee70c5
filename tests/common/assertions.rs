//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert an error response carries the JSON error envelope
pub fn assert_json_error(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected.as_u16(),
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert!(json["error"].is_string(), "Expected error message string");
}

/// Assert response is a scheme mapping with all seven families in order
pub fn assert_valid_schemes_response(response: &TestResponse) -> serde_json::Value {
    assert_ok(response);
    assert_eq!(response.header("content-type"), Some("application/json"));

    let json: serde_json::Value = response.json();
    let keys: Vec<&str> = json
        .as_object()
        .expect("Expected a JSON object")
        .keys()
        .map(String::as_str)
        .collect();
    let mut expected = vec![
        "original",
        "complementary",
        "analogous",
        "splitComplementary",
        "triadic",
        "tetradic",
        "monochromatic",
    ];
    let mut sorted = keys.clone();
    sorted.sort();
    expected.sort();
    assert_eq!(sorted, expected, "Unexpected scheme families");
    json
}

/// Extract `[r, g, b]` triples from a family array
pub fn triples(family: &serde_json::Value) -> Vec<[u64; 3]> {
    family
        .as_array()
        .expect("Expected family array")
        .iter()
        .map(|c| {
            [
                c["r"].as_u64().unwrap(),
                c["g"].as_u64().unwrap(),
                c["b"].as_u64().unwrap(),
            ]
        })
        .collect()
}

/// Extract product links from a search response
pub fn product_links(response: &TestResponse) -> Vec<String> {
    assert_ok(response);
    let json: serde_json::Value = response.json();
    json.as_array()
        .expect("Expected product array")
        .iter()
        .map(|p| p["link"].as_str().unwrap().to_string())
        .collect()
}
