//! API handlers and router for the bookstore REST endpoints

pub mod authors;
pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Authors
        .route("/authors", post(authors::create_author))
        .route("/authors", get(authors::list_authors))
        .route("/authors/:id", get(authors::get_author))
        .route("/authors/:id", put(authors::replace_author))
        .route("/authors/:id", patch(authors::patch_author))
        .route("/authors/:id", delete(authors::delete_author))
        // Books
        .route("/books", get(books::list_books))
        .route("/books/:isbn", put(books::upsert_book))
        .route("/books/:isbn", get(books::get_book))
        .route("/books/:isbn", patch(books::patch_book))
        .route("/books/:isbn", delete(books::delete_book))
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
