//! # REST API Handlers
//!
//! One handler per route. Each handler extracts its parameters, issues
//! exactly one store call, and maps the outcome to a response.
//!
//! Store failures and unreadable path parameters map to 500 on read routes
//! and 400 on write routes.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::schema::{Book, SchemaValidator};
use crate::store::{BookFilter, BookStore, SearchMode, TextField};

use super::errors::{RestError, RestResult};

/// State shared by every handler
pub struct ApiState {
    store: Arc<dyn BookStore>,
    validator: SchemaValidator<'static>,
    search_mode: SearchMode,
}

impl ApiState {
    pub fn new(store: Arc<dyn BookStore>, search_mode: SearchMode) -> Self {
        Self {
            store,
            validator: SchemaValidator::for_books(),
            search_mode,
        }
    }
}

/// Shared state type
pub type SharedState = Arc<ApiState>;

/// `POST /addBook`
pub async fn add_book(
    State(state): State<SharedState>,
    body: Result<Json<Value>, JsonRejection>,
) -> RestResult<Json<Book>> {
    let Json(body) = body?;
    let new_book = state.validator.validate_new(&body)?;

    let book = state.store.create(new_book).map_err(RestError::write)?;
    Ok(Json(book))
}

/// `GET /getBooks`
pub async fn get_books(State(state): State<SharedState>) -> RestResult<Json<Vec<Book>>> {
    let books = state.store.find_all().map_err(RestError::read)?;
    Ok(Json(books))
}

/// `GET /findById/{id}`; `null` when no such book
pub async fn find_by_id(
    State(state): State<SharedState>,
    id: Result<Path<String>, PathRejection>,
) -> RestResult<Json<Option<Book>>> {
    let Path(id) = id.map_err(RestError::read_path)?;
    let book = state.store.find_by_id(&id).map_err(RestError::read)?;
    Ok(Json(book))
}

pub async fn find_by_title(
    State(state): State<SharedState>,
    title: Result<Path<String>, PathRejection>,
) -> RestResult<Json<Vec<Book>>> {
    let Path(title) = title.map_err(RestError::read_path)?;
    find_by_text(&state, TextField::Title, &title)
}

pub async fn find_by_author(
    State(state): State<SharedState>,
    author: Result<Path<String>, PathRejection>,
) -> RestResult<Json<Vec<Book>>> {
    let Path(author) = author.map_err(RestError::read_path)?;
    find_by_text(&state, TextField::Author, &author)
}

pub async fn find_by_genre(
    State(state): State<SharedState>,
    genre: Result<Path<String>, PathRejection>,
) -> RestResult<Json<Vec<Book>>> {
    let Path(genre) = genre.map_err(RestError::read_path)?;
    find_by_text(&state, TextField::Genre, &genre)
}

pub async fn find_by_description(
    State(state): State<SharedState>,
    description: Result<Path<String>, PathRejection>,
) -> RestResult<Json<Vec<Book>>> {
    let Path(description) = description.map_err(RestError::read_path)?;
    find_by_text(&state, TextField::Description, &description)
}

fn find_by_text(state: &ApiState, field: TextField, fragment: &str) -> RestResult<Json<Vec<Book>>> {
    let filter = BookFilter::text(field, fragment, state.search_mode).map_err(RestError::read)?;
    let books = state.store.find(&filter).map_err(RestError::read)?;
    Ok(Json(books))
}

/// `GET /findByPageNumber/{pageNumbers}`: books with at least that many pages
pub async fn find_by_page_number(
    State(state): State<SharedState>,
    page_numbers: Result<Path<String>, PathRejection>,
) -> RestResult<Json<Vec<Book>>> {
    let Path(page_numbers) = page_numbers.map_err(RestError::read_path)?;
    let min = parse_page_number(&page_numbers)?;
    let books = state
        .store
        .find(&BookFilter::min_pages(min))
        .map_err(RestError::read)?;
    Ok(Json(books))
}

fn parse_page_number(raw: &str) -> RestResult<f64> {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(RestError::BadRequest(format!(
            "Cast to Number failed for value \"{}\" at path \"numberOfPages\"",
            raw
        ))),
    }
}

/// `PATCH /update/{id}`: returns the updated book
pub async fn update_book(
    State(state): State<SharedState>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> RestResult<Json<Book>> {
    let Path(id) = id.map_err(RestError::write_path)?;
    let Json(body) = body?;
    let patch = state.validator.validate_patch(&body)?;

    let book = state
        .store
        .find_by_id_and_update(&id, &patch)
        .map_err(RestError::write)?
        .ok_or(RestError::NotFound(id))?;
    Ok(Json(book))
}

/// `DELETE /delete/{id}`: plain-text confirmation naming the title
pub async fn delete_book(
    State(state): State<SharedState>,
    id: Result<Path<String>, PathRejection>,
) -> RestResult<String> {
    let Path(id) = id.map_err(RestError::write_path)?;
    let book = state
        .store
        .find_by_id_and_delete(&id)
        .map_err(RestError::write)?
        .ok_or(RestError::NotFound(id))?;

    Ok(format!("{} has been deleted from the Collection", book.title))
}
