//! # Library REST API Module
//!
//! Route map for the book collection: one handler per route, each issuing
//! a single store call, plus the generated API documentation.

pub mod docs;
pub mod errors;
pub mod handler;
pub mod server;

pub use docs::{swagger_document, RouteDoc, API_PREFIX, ROUTES};
pub use errors::{route_not_found, RestError, RestResult, NOT_FOUND_MESSAGE};
pub use handler::{ApiState, SharedState};
pub use server::RestServer;
