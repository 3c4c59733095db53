//! # REST API Router
//!
//! Binds each book route to its handler. Routes are relative; the HTTP
//! server mounts them under `API_PREFIX`.
//!
//! Every method router falls back to the catch-all 404, so an unsupported
//! verb on a known path answers exactly like an unknown path.

use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::store::{BookStore, SearchMode};

use super::docs::{docs_page, swagger_json};
use super::errors::route_not_found;
use super::handler::{
    add_book, delete_book, find_by_author, find_by_description, find_by_genre, find_by_id,
    find_by_page_number, find_by_title, get_books, update_book, ApiState,
};

/// REST API server state
pub struct RestServer {
    state: Arc<ApiState>,
}

impl RestServer {
    pub fn new(store: Arc<dyn BookStore>, search_mode: SearchMode) -> Self {
        Self {
            state: Arc::new(ApiState::new(store, search_mode)),
        }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        Router::new()
            .route("/addBook", post(add_book).fallback(route_not_found))
            .route("/getBooks", get(get_books).fallback(route_not_found))
            .route("/findById/:id", get(find_by_id).fallback(route_not_found))
            .route("/findByTitle/:title", get(find_by_title).fallback(route_not_found))
            .route("/findByAuthor/:author", get(find_by_author).fallback(route_not_found))
            .route("/findByGenre/:genre", get(find_by_genre).fallback(route_not_found))
            .route(
                "/findByDescription/:description",
                get(find_by_description).fallback(route_not_found),
            )
            .route(
                "/findByPageNumber/:pageNumbers",
                get(find_by_page_number).fallback(route_not_found),
            )
            .route("/update/:id", patch(update_book).fallback(route_not_found))
            .route("/delete/:id", delete(delete_book).fallback(route_not_found))
            .route("/docs", get(docs_page).fallback(route_not_found))
            .route("/docs/swagger.json", get(swagger_json).fallback(route_not_found))
            .with_state(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBookStore;

    #[test]
    fn test_server_creation() {
        let server = RestServer::new(Arc::new(MemoryBookStore::new()), SearchMode::Literal);
        let _router = server.router();
    }
}
