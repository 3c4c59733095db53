//! # Store Capability
//!
//! The set of document-store primitives the route layer depends on. Each
//! route issues exactly one of these calls; each call is atomic with
//! respect to the others.

use crate::schema::{Book, BookId, BookPatch, NewBook};

use super::errors::{StoreError, StoreResult};
use super::filter::BookFilter;

/// Document store for books
pub trait BookStore: Send + Sync {
    /// Persist a new book, assigning its id
    fn create(&self, book: NewBook) -> StoreResult<Book>;

    /// All books matching `filter`, in insertion order
    fn find(&self, filter: &BookFilter) -> StoreResult<Vec<Book>>;

    /// A single book by id, `None` if no such book
    fn find_by_id(&self, id: &str) -> StoreResult<Option<Book>>;

    /// Apply `patch` to the book with `id` and return the updated book
    fn find_by_id_and_update(&self, id: &str, patch: &BookPatch) -> StoreResult<Option<Book>>;

    /// Remove the book with `id` and return it
    fn find_by_id_and_delete(&self, id: &str) -> StoreResult<Option<Book>>;

    /// All books, in insertion order
    fn find_all(&self) -> StoreResult<Vec<Book>> {
        self.find(&BookFilter::All)
    }
}

/// Parse a caller-supplied id the way every backend must.
pub fn parse_id(id: &str) -> StoreResult<BookId> {
    id.parse()
        .map_err(|_| StoreError::InvalidId(id.to_string()))
}
