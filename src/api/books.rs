//! Book API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::{AppError, AppResult},
    models::book::{BookSummary, UpdateBook, UpsertBook},
};

/// Query parameters for listing books
#[derive(Debug, Deserialize, IntoParams)]
pub struct BookQuery {
    /// Restrict the listing to one author's books
    pub author: Option<i64>,
}

/// Create or fully replace a book
///
/// Returns 201 when the call created the book and 200 when it replaced an
/// existing one.
#[utoipa::path(
    put,
    path = "/books/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book ISBN")),
    request_body = UpsertBook,
    responses(
        (status = 201, description = "Book created", body = BookSummary),
        (status = 200, description = "Book replaced", body = BookSummary),
        (status = 400, description = "Referenced author does not exist", body = crate::error::ErrorResponse)
    )
)]
pub async fn upsert_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
    Json(payload): Json<UpsertBook>,
) -> AppResult<(StatusCode, Json<BookSummary>)> {
    let outcome = state.services.books.create_or_update(&isbn, payload).await?;

    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(BookSummary::from(&outcome.book))))
}

/// List books, optionally filtered by author
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Book list", body = Vec<BookSummary>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<Vec<BookSummary>>> {
    let books = state.services.books.list(query.author).await?;
    Ok(Json(books.iter().map(BookSummary::from).collect()))
}

/// Get a book by ISBN
#[utoipa::path(
    get,
    path = "/books/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 200, description = "Book details", body = BookSummary),
        (status = 404, description = "No book at this ISBN", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<BookSummary>> {
    let book = state.services.books.get(&isbn).await?;
    Ok(Json(BookSummary::from(&book)))
}

/// Patch a book (partial update of title/description/image)
#[utoipa::path(
    patch,
    path = "/books/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book ISBN")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = BookSummary),
        (status = 400, description = "No book at this ISBN", body = crate::error::ErrorResponse)
    )
)]
pub async fn patch_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
    Json(request): Json<UpdateBook>,
) -> AppResult<Json<BookSummary>> {
    let book = state
        .services
        .books
        .partial_update(&isbn, request)
        .await
        .map_err(AppError::not_found_as_bad_request)?;
    Ok(Json(BookSummary::from(&book)))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 204, description = "Book deleted (or was already absent)")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<StatusCode> {
    state.services.books.delete(&isbn).await?;
    Ok(StatusCode::NO_CONTENT)
}
