//! # Book Filters
//!
//! Filter predicates supported by the store:
//! - unanchored, case-sensitive substring match on one text field
//! - `numberOfPages >= n`

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::schema::Book;

use super::errors::{StoreError, StoreResult};

/// How a text search fragment is interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Fragment is a literal substring; metacharacters are escaped
    #[default]
    Literal,
    /// Fragment is a raw regular expression
    Regex,
}

/// Text fields that can be searched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Title,
    Author,
    Genre,
    Description,
}

impl TextField {
    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            TextField::Title => "title",
            TextField::Author => "author",
            TextField::Genre => "genre",
            TextField::Description => "description",
        }
    }

    fn value<'a>(&self, book: &'a Book) -> &'a str {
        match self {
            TextField::Title => &book.title,
            TextField::Author => &book.author,
            TextField::Genre => &book.genre,
            TextField::Description => &book.description,
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filter over books
#[derive(Debug, Clone)]
pub enum BookFilter {
    /// Every book
    All,

    /// `field` matches `pattern` anywhere in its value
    Matches { field: TextField, pattern: Regex },

    /// `numberOfPages >= min`
    MinPages(f64),
}

impl BookFilter {
    /// Build a text filter from a caller-supplied fragment.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidPattern` if `mode` is `Regex` and the
    /// fragment does not compile.
    pub fn text(field: TextField, fragment: &str, mode: SearchMode) -> StoreResult<Self> {
        let source = match mode {
            SearchMode::Literal => regex::escape(fragment),
            SearchMode::Regex => fragment.to_string(),
        };

        let pattern = Regex::new(&source).map_err(|e| StoreError::InvalidPattern(e.to_string()))?;
        Ok(BookFilter::Matches { field, pattern })
    }

    /// Books with at least `min` pages
    pub fn min_pages(min: f64) -> Self {
        BookFilter::MinPages(min)
    }

    /// Check if a book matches this filter
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            BookFilter::All => true,
            BookFilter::Matches { field, pattern } => pattern.is_match(field.value(book)),
            BookFilter::MinPages(min) => book.number_of_pages >= *min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BookId, NewBook};

    fn book(title: &str, pages: f64) -> Book {
        NewBook {
            title: title.to_string(),
            author: "Anon".to_string(),
            genre: "Fiction".to_string(),
            description: "Some (short) text.".to_string(),
            number_of_pages: pages,
        }
        .into_book(BookId::new())
    }

    #[test]
    fn test_substring_match_unanchored() {
        let filter = BookFilter::text(TextField::Title, "Harry", SearchMode::Literal).unwrap();

        assert!(filter.matches(&book("Harry Potter", 1.0)));
        assert!(filter.matches(&book("The Harry Diaries", 1.0)));
        assert!(!filter.matches(&book("potter", 1.0)));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let filter = BookFilter::text(TextField::Title, "harry", SearchMode::Literal).unwrap();
        assert!(!filter.matches(&book("Harry Potter", 1.0)));
    }

    #[test]
    fn test_literal_mode_escapes_metacharacters() {
        let filter =
            BookFilter::text(TextField::Description, "(short)", SearchMode::Literal).unwrap();
        assert!(filter.matches(&book("x", 1.0)));

        let filter = BookFilter::text(TextField::Title, "H.rry", SearchMode::Literal).unwrap();
        assert!(!filter.matches(&book("Harry", 1.0)));
    }

    #[test]
    fn test_regex_mode_uses_raw_pattern() {
        let filter = BookFilter::text(TextField::Title, "^H.rry", SearchMode::Regex).unwrap();
        assert!(filter.matches(&book("Harry Potter", 1.0)));
        assert!(!filter.matches(&book("The Harry Diaries", 1.0)));
    }

    #[test]
    fn test_regex_mode_invalid_pattern() {
        let result = BookFilter::text(TextField::Title, "(unclosed", SearchMode::Regex);
        assert!(matches!(result, Err(StoreError::InvalidPattern(_))));
    }

    #[test]
    fn test_min_pages_is_inclusive() {
        let filter = BookFilter::min_pages(100.0);

        assert!(filter.matches(&book("a", 100.0)));
        assert!(filter.matches(&book("b", 250.5)));
        assert!(!filter.matches(&book("c", 99.0)));
    }

    #[test]
    fn test_search_mode_deserialize() {
        let mode: SearchMode = serde_json::from_str("\"regex\"").unwrap();
        assert_eq!(mode, SearchMode::Regex);
        assert_eq!(SearchMode::default(), SearchMode::Literal);
    }
}
