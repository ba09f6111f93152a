//! Cache-header demonstration endpoint.

use crate::AppState;
use axum::{
    extract::{Query, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::time::Duration;
use tabdeck_core::cache::{CacheDemoResponse, CacheStrategy};

/// Query parameters for `GET /api/cache-demo`.
#[derive(Debug, Deserialize)]
pub struct CacheDemoQuery {
    /// Raw strategy name; absent means `default`.
    #[serde(rename = "type")]
    pub cache_type: Option<String>,
}

/// Serve a mock payload with a `Cache-Control` header chosen by the `type`
/// query parameter.
///
/// The response is delayed by the configured artificial processing time so the
/// endpoint behaves like a slow upstream. The body echoes the raw `type` value
/// while the header mapping uses the resolved strategy.
///
/// # Arguments
/// - `state`: Application state.
/// - `query`: Parsed query string.
///
/// # Returns
/// JSON body with `Cache-Control` set.
pub async fn cache_demo(
    State(state): State<AppState>,
    Query(query): Query<CacheDemoQuery>,
) -> Response {
    let raw_type = query.cache_type.as_deref();
    let strategy = CacheStrategy::from_param(raw_type);

    let delay = state.config.response_delay_ms;
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    let body = CacheDemoResponse::generate(raw_type);
    tracing::debug!(
        strategy = strategy.as_str(),
        request_id = %body.request_id,
        "cache-demo response"
    );

    let mut response = Json(body).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(strategy.cache_control()),
    );
    response
}
