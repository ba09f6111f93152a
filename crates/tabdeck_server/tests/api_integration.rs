//! Integration tests for the Tabdeck cache-demo HTTP API.

use axum::http::StatusCode;
use axum_test::TestServer;
use tabdeck_server::{create_app, AppState, Config};

fn test_config() -> Config {
    Config {
        port: 0, // Let OS assign port
        response_delay_ms: 0, // No artificial delay in tests
    }
}

fn setup_test_server() -> TestServer {
    let state = AppState::new(test_config());
    let app = create_app(state, false);
    TestServer::new(app).unwrap()
}

fn assert_body_shape(body: &serde_json::Value) {
    let request_id = body["requestId"].as_str().expect("requestId is a string");
    assert!(!request_id.is_empty());
    assert!(request_id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));

    let timestamp = body["timestamp"].as_str().expect("timestamp is a string");
    chrono::DateTime::parse_from_rfc3339(timestamp).expect("timestamp is RFC 3339");
}

#[tokio::test]
async fn force_cache_returns_long_lived_cache_header() {
    let server = setup_test_server();

    let response = server.get("/api/cache-demo").add_query_param("type", "force-cache").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    response.assert_header("cache-control", "public, max-age=3600");
    let body: serde_json::Value = response.json();
    assert_eq!(body["cached"], true);
    assert_eq!(body["cacheType"], "force-cache");
    assert_body_shape(&body);
}

#[tokio::test]
async fn no_cache_returns_revalidate_header() {
    let server = setup_test_server();

    let response = server.get("/api/cache-demo").add_query_param("type", "no-cache").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    response.assert_header("cache-control", "no-cache, no-store, must-revalidate");
    let body: serde_json::Value = response.json();
    assert_eq!(body["cached"], false);
    assert_eq!(body["cacheType"], "no-cache");
    assert_body_shape(&body);
}

#[tokio::test]
async fn missing_type_defaults_to_short_lived_cache_header() {
    let server = setup_test_server();

    let response = server.get("/api/cache-demo").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    response.assert_header("cache-control", "public, max-age=60");
    let body: serde_json::Value = response.json();
    assert_eq!(body["cached"], false);
    assert_eq!(body["cacheType"], "default");
    assert_body_shape(&body);
}

#[tokio::test]
async fn explicit_default_type_matches_missing_type() {
    let server = setup_test_server();

    let response = server.get("/api/cache-demo").add_query_param("type", "default").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    response.assert_header("cache-control", "public, max-age=60");
    let body: serde_json::Value = response.json();
    assert_eq!(body["cacheType"], "default");
}

#[tokio::test]
async fn unknown_type_gets_default_header_but_echoes_raw_value() {
    let server = setup_test_server();

    let response = server.get("/api/cache-demo").add_query_param("type", "weird").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    response.assert_header("cache-control", "public, max-age=60");
    let body: serde_json::Value = response.json();
    assert_eq!(body["cached"], false);
    assert_eq!(body["cacheType"], "weird");
}

#[tokio::test]
async fn request_ids_differ_between_calls() {
    let server = setup_test_server();

    let first: serde_json::Value = server.get("/api/cache-demo").await.json();
    let second: serde_json::Value = server.get("/api/cache-demo").await.json();
    assert_ne!(first["requestId"], second["requestId"]);
}

#[tokio::test]
async fn security_headers_are_present() {
    let server = setup_test_server();

    let response = server.get("/api/cache-demo").await;
    response.assert_header("x-content-type-options", "nosniff");
    response.assert_header("x-frame-options", "DENY");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let server = setup_test_server();

    let response = server.get("/api/nope").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
