//! # In-Memory Document Store
//!
//! Books are kept in insertion order behind a `RwLock`. Reads take the
//! read lock, writes the write lock, so every operation is atomic.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::schema::{Book, BookId, BookPatch, NewBook};

use super::backend::{parse_id, BookStore};
use super::errors::{StoreError, StoreResult};
use super::filter::BookFilter;

/// In-process document store
#[derive(Debug, Default)]
pub struct MemoryBookStore {
    books: RwLock<Vec<Book>>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored books
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<Book>>> {
        self.books
            .read()
            .map_err(|_| StoreError::Unavailable("Lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<Book>>> {
        self.books
            .write()
            .map_err(|_| StoreError::Unavailable("Lock poisoned".to_string()))
    }
}

impl BookStore for MemoryBookStore {
    fn create(&self, book: NewBook) -> StoreResult<Book> {
        let book = book.into_book(BookId::new());

        let mut books = self.write()?;
        books.push(book.clone());

        tracing::debug!(id = %book.id, title = %book.title, "book created");
        Ok(book)
    }

    fn find(&self, filter: &BookFilter) -> StoreResult<Vec<Book>> {
        let books = self.read()?;
        let found: Vec<Book> = books.iter().filter(|b| filter.matches(b)).cloned().collect();

        tracing::debug!(matched = found.len(), total = books.len(), "books queried");
        Ok(found)
    }

    fn find_by_id(&self, id: &str) -> StoreResult<Option<Book>> {
        let id = parse_id(id)?;
        let books = self.read()?;

        Ok(books.iter().find(|b| b.id == id).cloned())
    }

    fn find_by_id_and_update(&self, id: &str, patch: &BookPatch) -> StoreResult<Option<Book>> {
        let id = parse_id(id)?;
        let mut books = self.write()?;

        let Some(book) = books.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        patch.apply(book);

        tracing::debug!(%id, "book updated");
        Ok(Some(book.clone()))
    }

    fn find_by_id_and_delete(&self, id: &str) -> StoreResult<Option<Book>> {
        let id = parse_id(id)?;
        let mut books = self.write()?;

        let Some(idx) = books.iter().position(|b| b.id == id) else {
            return Ok(None);
        };
        let removed = books.remove(idx);

        tracing::debug!(%id, title = %removed.title, "book deleted");
        Ok(Some(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TextField;
    use crate::store::SearchMode;

    fn new_book(title: &str, pages: f64) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: "Ursula K. Le Guin".to_string(),
            genre: "Fantasy".to_string(),
            description: "An archipelago of islands".to_string(),
            number_of_pages: pages,
        }
    }

    #[test]
    fn test_create_assigns_distinct_ids() {
        let store = MemoryBookStore::new();
        let a = store.create(new_book("A Wizard of Earthsea", 183.0)).unwrap();
        let b = store.create(new_book("The Tombs of Atuan", 163.0)).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_find_all_keeps_insertion_order() {
        let store = MemoryBookStore::new();
        for title in ["first", "second", "third"] {
            store.create(new_book(title, 1.0)).unwrap();
        }

        let titles: Vec<_> = store
            .find_all()
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_find_by_id() {
        let store = MemoryBookStore::new();
        let created = store.create(new_book("Tehanu", 252.0)).unwrap();

        let found = store.find_by_id(&created.id.to_string()).unwrap();
        assert_eq!(found, Some(created));

        let absent = store.find_by_id(&BookId::new().to_string()).unwrap();
        assert_eq!(absent, None);
    }

    #[test]
    fn test_malformed_id_is_an_error() {
        let store = MemoryBookStore::new();
        assert_eq!(
            store.find_by_id("12345"),
            Err(StoreError::InvalidId("12345".to_string()))
        );
        assert!(store.find_by_id_and_delete("12345").is_err());
        assert!(store
            .find_by_id_and_update("12345", &BookPatch::default())
            .is_err());
    }

    #[test]
    fn test_find_with_filter() {
        let store = MemoryBookStore::new();
        store.create(new_book("Harry Potter", 309.0)).unwrap();
        store.create(new_book("The Harry Diaries", 99.0)).unwrap();
        store.create(new_book("potter", 100.0)).unwrap();

        let filter = BookFilter::text(TextField::Title, "Harry", SearchMode::Literal).unwrap();
        assert_eq!(store.find(&filter).unwrap().len(), 2);

        let pages = store.find(&BookFilter::min_pages(100.0)).unwrap();
        let titles: Vec<_> = pages.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Harry Potter", "potter"]);
    }

    #[test]
    fn test_update_applies_patch() {
        let store = MemoryBookStore::new();
        let created = store.create(new_book("The Farthest Shore", 223.0)).unwrap();

        let patch = BookPatch {
            genre: Some("High Fantasy".to_string()),
            ..Default::default()
        };
        let updated = store
            .find_by_id_and_update(&created.id.to_string(), &patch)
            .unwrap()
            .unwrap();

        assert_eq!(updated.genre, "High Fantasy");
        assert_eq!(updated.title, created.title);
        assert_eq!(
            store.find_by_id(&created.id.to_string()).unwrap(),
            Some(updated)
        );
    }

    #[test]
    fn test_update_missing_returns_none() {
        let store = MemoryBookStore::new();
        let result = store
            .find_by_id_and_update(&BookId::new().to_string(), &BookPatch::default())
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_delete() {
        let store = MemoryBookStore::new();
        let created = store.create(new_book("Tales from Earthsea", 296.0)).unwrap();
        let id = created.id.to_string();

        let removed = store.find_by_id_and_delete(&id).unwrap();
        assert_eq!(removed.map(|b| b.title), Some("Tales from Earthsea".to_string()));
        assert!(store.is_empty().unwrap());

        assert_eq!(store.find_by_id_and_delete(&id).unwrap(), None);
    }
}
