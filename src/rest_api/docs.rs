//! # API Documentation
//!
//! Static description of every book route, rendered as a Swagger 2.0
//! document and served alongside a Swagger UI page.

use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::schema::book_schema;

/// Path prefix all book routes are mounted under
pub const API_PREFIX: &str = "/v1/api";

const API_TITLE: &str = "MIS 753 Library REST API";
const API_DESCRIPTION: &str = "A REST API for the books stored in our 'library'. \
Add, list, search, update and delete books.";

/// Where a parameter is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    Path,
    Body,
}

/// A documented route parameter
#[derive(Debug, Clone, Serialize)]
pub struct ParamDoc {
    pub name: &'static str,
    #[serde(rename = "in")]
    pub location: ParamLocation,
    pub param_type: &'static str,
    pub description: &'static str,
}

/// A documented route
#[derive(Debug, Clone, Serialize)]
pub struct RouteDoc {
    pub method: &'static str,
    /// Path relative to `API_PREFIX`, `{name}` for path parameters
    pub path: &'static str,
    pub summary: &'static str,
    pub params: &'static [ParamDoc],
    pub responses: &'static [(u16, &'static str)],
}

impl RouteDoc {
    /// Full path including the API prefix
    pub fn full_path(&self) -> String {
        format!("{}{}", API_PREFIX, self.path)
    }
}

const fn path_param(name: &'static str, param_type: &'static str, description: &'static str) -> ParamDoc {
    ParamDoc {
        name,
        location: ParamLocation::Path,
        param_type,
        description,
    }
}

const fn body_param(name: &'static str, description: &'static str) -> ParamDoc {
    ParamDoc {
        name,
        location: ParamLocation::Body,
        param_type: "object",
        description,
    }
}

const READ_RESPONSES: &[(u16, &str)] = &[(200, "Returns the requested books"), (500, "Error message")];

/// Every book route, in registration order
pub const ROUTES: &[RouteDoc] = &[
    RouteDoc {
        method: "POST",
        path: "/addBook",
        summary: "Add a book to the library",
        params: &[body_param("Book", "New book, all fields required")],
        responses: &[(200, "The added book, including its id"), (400, "Error message")],
    },
    RouteDoc {
        method: "GET",
        path: "/getBooks",
        summary: "All books",
        params: &[],
        responses: &[(200, "Returns all the books in the library"), (500, "Error message")],
    },
    RouteDoc {
        method: "GET",
        path: "/findById/{id}",
        summary: "Find a book by id",
        params: &[path_param("id", "string", "The book id")],
        responses: &[(200, "Returns the requested book, or null"), (500, "Error message")],
    },
    RouteDoc {
        method: "GET",
        path: "/findByTitle/{title}",
        summary: "Find books whose title contains the text",
        params: &[path_param("title", "string", "The book title or part of it")],
        responses: READ_RESPONSES,
    },
    RouteDoc {
        method: "GET",
        path: "/findByAuthor/{author}",
        summary: "Find books whose author contains the text",
        params: &[path_param("author", "string", "The book's author or part of it")],
        responses: READ_RESPONSES,
    },
    RouteDoc {
        method: "GET",
        path: "/findByGenre/{genre}",
        summary: "Find books whose genre contains the text",
        params: &[path_param("genre", "string", "The book's genre or part of it")],
        responses: READ_RESPONSES,
    },
    RouteDoc {
        method: "GET",
        path: "/findByDescription/{description}",
        summary: "Find books by partial or full description",
        params: &[path_param("description", "string", "The book's description or part of it")],
        responses: READ_RESPONSES,
    },
    RouteDoc {
        method: "GET",
        path: "/findByPageNumber/{pageNumbers}",
        summary: "Find books with an equal or greater number of pages",
        params: &[path_param("pageNumbers", "number", "Minimum number of pages")],
        responses: &[
            (200, "Returns the requested books"),
            (400, "Page number is not numeric"),
            (500, "Error message"),
        ],
    },
    RouteDoc {
        method: "PATCH",
        path: "/update/{id}",
        summary: "Update some fields of a book",
        params: &[
            path_param("id", "string", "The book id"),
            body_param("book", "Fields to change"),
        ],
        responses: &[
            (200, "Updated book with new data"),
            (400, "Error message"),
            (404, "No book with that id"),
        ],
    },
    RouteDoc {
        method: "DELETE",
        path: "/delete/{id}",
        summary: "Delete a book from the library by id",
        params: &[path_param("id", "string", "The book id")],
        responses: &[
            (200, "Confirmation naming the deleted book"),
            (400, "Error message"),
            (404, "No book with that id"),
        ],
    },
];

/// Swagger definition of `Book`, derived from the record schema
fn book_definition(all_required: bool) -> Value {
    let schema = book_schema();
    let mut properties = Map::new();
    for field in schema.fields {
        properties.insert(
            field.name.to_string(),
            json!({ "type": field.field_type.swagger_type() }),
        );
    }

    let mut definition = json!({ "type": "object", "properties": properties });
    if all_required {
        let required: Vec<&str> = schema.required_fields().collect();
        definition["required"] = json!(required);
    }
    definition
}

fn operation(route: &RouteDoc) -> Value {
    let parameters: Vec<Value> = route
        .params
        .iter()
        .map(|p| match p.location {
            ParamLocation::Path => json!({
                "in": "path",
                "name": p.name,
                "required": true,
                "type": p.param_type,
                "description": p.description,
            }),
            ParamLocation::Body => json!({
                "in": "body",
                "name": p.name,
                "description": p.description,
                "schema": book_definition(route.method == "POST"),
            }),
        })
        .collect();

    let responses: Map<String, Value> = route
        .responses
        .iter()
        .map(|(code, description)| (code.to_string(), json!({ "description": description })))
        .collect();

    json!({
        "summary": route.summary,
        "parameters": parameters,
        "responses": responses,
    })
}

/// Build the Swagger 2.0 document for every route
pub fn swagger_document() -> Value {
    let mut paths = Map::new();
    for route in ROUTES {
        let entry = paths
            .entry(route.full_path())
            .or_insert_with(|| Value::Object(Map::new()));
        entry[route.method.to_lowercase()] = operation(route);
    }

    let mut book = book_definition(true);
    book["properties"]["_id"] = json!({ "type": "string" });

    json!({
        "swagger": "2.0",
        "info": {
            "title": API_TITLE,
            "description": API_DESCRIPTION,
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": paths,
        "definitions": { "Book": book },
    })
}

const DOCS_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Library REST API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({ url: "/v1/api/docs/swagger.json", dom_id: "#swagger-ui" });
  </script>
</body>
</html>
"##;

/// `GET /docs`: Swagger UI page
pub async fn docs_page() -> Html<&'static str> {
    Html(DOCS_PAGE)
}

/// `GET /docs/swagger.json`
pub async fn swagger_json() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "public, max-age=300")],
        Json(swagger_document()),
    )
}
