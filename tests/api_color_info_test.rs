//! Integration tests for /api/color

mod common;

use axum::http::StatusCode;
use common::{assert_json_error, assert_ok, TestApp};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_color_info_hex() {
    let app = TestApp::new();

    let response = app.get("/api/color?color=%236496c8").await;
    assert_ok(&response);

    let info: serde_json::Value = response.json();
    assert_eq!(
        info,
        json!({
            "hex": "#6496c8",
            "css": "rgb(100,150,200)",
            "rgb": { "r": 100, "g": 150, "b": 200 },
            "hsl": { "h": 210, "s": 48, "l": 59 },
        })
    );
}

#[tokio::test]
async fn test_color_info_shorthand() {
    let app = TestApp::new();

    let response = app.get("/api/color?color=F00").await;
    assert_ok(&response);

    let info: serde_json::Value = response.json();
    assert_eq!(info["hex"], "#ff0000");
    assert_eq!(info["hsl"], json!({ "h": 0, "s": 100, "l": 50 }));
}

#[tokio::test]
async fn test_color_info_rejects_garbage() {
    let app = TestApp::new();

    let response = app.get("/api/color?color=not-a-color").await;
    assert_json_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_color_info_requires_color() {
    let app = TestApp::new();

    let response = app.get("/api/color").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    assert_ok(&response);
    assert_eq!(response.text(), "OK");
}
