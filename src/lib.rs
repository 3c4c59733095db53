//! library-api - A REST API for a library of books
//!
//! CRUD and text search over a single `Book` record type, with generated
//! Swagger documentation.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod rest_api;
pub mod schema;
pub mod store;
