//! HTTP server wiring for Tabdeck (cache-demo API, handlers, shared state).

/// Embedded server helper for GUI integration.
pub mod embedded;
/// HTTP error mapping for API handlers.
pub mod error;
/// HTTP handlers for the cache-demo endpoint.
pub mod handlers;

pub use embedded::EmbeddedServer;
pub use tabdeck_core::{config, AppError, CacheStrategy, Config, DEFAULT_PORT};

use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Router};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

/// Shared state passed to HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build the application router with its route and middleware stack.
///
/// # Arguments
/// - `state`: Shared application state.
/// - `allow_public_access`: Whether cross-origin requests from any origin are
///   accepted; otherwise CORS is restricted to localhost origins.
///
/// # Returns
/// The configured `axum::Router`.
pub fn create_app(state: AppState, allow_public_access: bool) -> Router {
    let cors_port = state.config.port;
    create_app_with_cors_port(state, allow_public_access, cors_port)
}

/// Pick the listener address, honoring a `BIND` override and the loopback
/// policy.
///
/// A non-loopback target is only accepted when `allow_public_access` is set;
/// otherwise the requested port is kept but the host is forced back to
/// `127.0.0.1`. An unparseable `BIND` falls back to the configured port on
/// loopback.
pub fn resolve_bind_address(config: &Config, allow_public_access: bool) -> SocketAddr {
    let default_bind = SocketAddr::from(([127, 0, 0, 1], config.port));
    let requested = requested_bind_address(default_bind);

    if allow_public_access || requested.ip().is_loopback() {
        return requested;
    }

    tracing::warn!(
        "Non-loopback bind {} requested without ALLOW_PUBLIC_ACCESS; forcing 127.0.0.1",
        requested
    );
    SocketAddr::from(([127, 0, 0, 1], requested.port()))
}

fn requested_bind_address(default_bind: SocketAddr) -> SocketAddr {
    let Ok(value) = std::env::var("BIND") else {
        return default_bind;
    };
    match value.trim().parse() {
        Ok(addr) => addr,
        Err(err) => {
            tracing::warn!(
                "Invalid BIND='{}': {}. Falling back to {}",
                value,
                err,
                default_bind
            );
            default_bind
        }
    }
}

fn cors_layer(allow_public_access: bool, cors_port: u16) -> CorsLayer {
    if allow_public_access {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET])
            .allow_headers(Any);
    }
    let localhost_origins = [
        format!("http://localhost:{}", cors_port),
        format!("http://127.0.0.1:{}", cors_port),
    ]
    .map(|origin| HeaderValue::from_str(&origin).expect("static origin is a valid header value"));
    CorsLayer::new()
        .allow_origin(localhost_origins)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

fn create_app_with_cors_port(state: AppState, allow_public_access: bool, cors_port: u16) -> Router {
    Router::new()
        .route("/api/cache-demo", get(handlers::cache_demo::cache_demo))
        .with_state(state)
        .layer(
            tower::ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors_layer(allow_public_access, cors_port))
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                )),
        )
}

fn listener_cors_port(listener: &tokio::net::TcpListener, fallback_port: u16) -> u16 {
    listener
        .local_addr()
        .map(|addr| addr.port())
        .unwrap_or(fallback_port)
}

/// Serve the router on `listener` until `shutdown_signal` resolves.
///
/// The CORS origin port follows the bound listener, so an auto-assigned port
/// still gets matching localhost origins.
///
/// # Errors
/// Returns any I/O error produced by `axum::serve`.
pub async fn serve_router(
    listener: tokio::net::TcpListener,
    state: AppState,
    allow_public_access: bool,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let cors_port = listener_cors_port(&listener, state.config.port);
    let app = create_app_with_cors_port(state, allow_public_access, cors_port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Mutex, MutexGuard, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    /// Serializes tests that read or mutate the `BIND` environment variable.
    pub(crate) fn bind_env_guard() -> MutexGuard<'static, ()> {
        ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::listener_cors_port;
    use super::resolve_bind_address;
    use std::net::SocketAddr;
    use tabdeck_core::Config;
    use tabdeck_core::DEFAULT_PORT;

    #[tokio::test]
    async fn listener_cors_port_uses_bound_listener_port() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener");
        let expected = listener.local_addr().expect("listener addr").port();
        let resolved = listener_cors_port(&listener, DEFAULT_PORT);
        assert_eq!(resolved, expected);
    }

    // One test owns the BIND variable; parallel tests mutating the same env
    // var would race.
    #[test]
    fn resolve_bind_address_applies_loopback_policy() {
        let _guard = crate::test_support::bind_env_guard();
        let config = Config {
            port: 4041,
            response_delay_ms: 0,
        };
        let loopback = resolve_bind_address(&config, false);
        assert_eq!(loopback, SocketAddr::from(([127, 0, 0, 1], 4041)));

        std::env::set_var("BIND", "0.0.0.0:4040");
        let resolved = resolve_bind_address(&config, false);
        assert_eq!(resolved.ip().to_string(), "127.0.0.1");
        assert_eq!(resolved.port(), 4040);

        std::env::set_var("BIND", "bad:host");
        let fallback = resolve_bind_address(&config, false);
        assert_eq!(fallback, SocketAddr::from(([127, 0, 0, 1], 4041)));
        std::env::remove_var("BIND");
    }
}
