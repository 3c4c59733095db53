//! # Library HTTP Server Module
//!
//! Combines the book routes and the service routes into one Axum server.
//!
//! # Endpoints
//!
//! - `/` - Welcome message
//! - `/health` - Health check
//! - `/v1/api/*` - Book routes
//! - `/v1/api/docs` - Swagger UI and document

pub mod config;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::{HttpServer, ServerError};
