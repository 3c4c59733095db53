//! # Document Store
//!
//! The `BookStore` capability the route layer is built against, its filter
//! predicates, and the in-process backend.

mod backend;
mod errors;
mod filter;
mod memory;

pub use backend::{parse_id, BookStore};
pub use errors::{StoreError, StoreResult};
pub use filter::{BookFilter, SearchMode, TextField};
pub use memory::MemoryBookStore;
