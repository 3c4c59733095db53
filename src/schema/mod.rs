//! Record schema for the library
//!
//! The `Book` constraint set is the only validation layer in the service.
//! Every write (create and update) passes through `SchemaValidator` before
//! it reaches the store.
//!
//! # Design Principles
//!
//! - Mandatory on all writes
//! - Violations abort the write and are reported together
//! - Undeclared fields are dropped, never stored
//! - Deterministic validation

mod book;
mod errors;
mod types;
mod validator;

pub use book::{Book, BookId, BookPatch, NewBook};
pub use errors::{SchemaResult, ValidationError, Violation};
pub use types::{book_schema, FieldDef, FieldType, Schema, BOOK_SCHEMA};
pub use validator::SchemaValidator;
