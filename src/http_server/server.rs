//! # HTTP Server
//!
//! Main HTTP server: mounts the book routes under `/v1/api`, adds the
//! service routes, the catch-all 404, CORS and request tracing.

use std::sync::Arc;

use axum::extract::Request;
use axum::http::{header, Method};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::observability::{log_event, log_event_with_fields, Event};
use crate::rest_api::{route_not_found, RestServer, API_PREFIX};
use crate::store::{BookStore, MemoryBookStore, SearchMode};

use super::config::HttpServerConfig;
use super::observability_routes::service_routes;

/// HTTP server errors
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// HTTP Server for the library API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server backed by an empty in-memory store
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_store(config, Arc::new(MemoryBookStore::new()), SearchMode::default())
    }

    /// Create a new HTTP server over the given store
    pub fn with_store(
        config: HttpServerConfig,
        store: Arc<dyn BookStore>,
        search_mode: SearchMode,
    ) -> Self {
        let router = Self::build_router(&config, store, search_mode);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(
        config: &HttpServerConfig,
        store: Arc<dyn BookStore>,
        search_mode: SearchMode,
    ) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(service_routes())
            .nest(API_PREFIX, RestServer::new(store, search_mode).router())
            .fallback(route_not_found)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .layer(middleware::from_fn(reject_plain_options))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until ctrl-c or SIGTERM
    pub async fn start(self) -> Result<(), ServerError> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local_addr = listener.local_addr()?.to_string();
        log_event_with_fields(
            Event::ServerListening,
            &[("addr", local_addr.as_str()), ("docs", "/v1/api/docs")],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// The CORS layer answers every `OPTIONS` request on its own. Only real
/// preflights may reach it; any other `OPTIONS` is an unsupported method.
async fn reject_plain_options(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS && !is_preflight(&request) {
        return route_not_found().await.into_response();
    }
    next.run(request).await
}

fn is_preflight(request: &Request) -> bool {
    let headers = request.headers();
    headers.contains_key(header::ORIGIN)
        && headers.contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to register SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log_event(Event::ShutdownRequested);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(8080);
        let server = HttpServer::with_config(config);
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds_with_cors_origins() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::with_config(config).router();
    }

    #[test]
    fn test_preflight_needs_origin_and_requested_method() {
        use axum::body::Body;

        let plain = axum::http::Request::builder()
            .method(Method::OPTIONS)
            .uri("/v1/api/getBooks")
            .body(Body::empty())
            .unwrap();
        assert!(!is_preflight(&plain));

        let preflight = axum::http::Request::builder()
            .method(Method::OPTIONS)
            .uri("/v1/api/getBooks")
            .header(header::ORIGIN, "http://localhost:5173")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();
        assert!(is_preflight(&preflight));
    }

    #[tokio::test]
    async fn test_start_rejects_bad_address() {
        let config = HttpServerConfig {
            host: "not a host".to_string(),
            ..Default::default()
        };
        let result = HttpServer::with_config(config).start().await;
        assert!(matches!(result, Err(ServerError::Bind { .. })));
    }
}
