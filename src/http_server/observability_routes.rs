//! Service HTTP Routes
//!
//! Health check and the plain-text welcome message served at the root.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::rest_api::route_not_found;

/// Plain-text body of `GET /`
pub const WELCOME_MESSAGE: &str = "Welcome to the Library REST API. This API provides info about \
books stored in our \"library\". To see the Swagger Documentation, go to \"/v1/api/docs\".";

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Root-level service routes
pub fn service_routes() -> Router {
    Router::new()
        .route("/", get(welcome_handler).fallback(route_not_found))
        .route("/health", get(health_handler).fallback(route_not_found))
}

async fn welcome_handler() -> &'static str {
    WELCOME_MESSAGE
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("ok"));
    }

    #[test]
    fn test_welcome_points_at_docs() {
        assert!(WELCOME_MESSAGE.contains("/v1/api/docs"));
    }
}
