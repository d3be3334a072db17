//! API integration tests
//!
//! In-process requests against the real router, no running server needed.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use bookstore_server::{
    api, config::AppConfig, repository::Repository, services::Services, AppState,
};

fn app() -> Router {
    let state = AppState {
        config: Arc::new(AppConfig::default()),
        services: Arc::new(Services::new(Repository::new())),
    };
    api::router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_author(app: &Router, name: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/authors",
        Some(json!({ "name": name, "age": 42 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("created author has an id")
}

#[tokio::test]
async fn health_check_is_public() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn create_author_returns_201_with_assigned_id() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/authors",
        Some(json!({
            "name": "Ann",
            "age": 42,
            "description": "A writer",
            "image": "https://example.com/a.png"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["name"], "Ann");
    assert_eq!(body["age"], 42);
}

#[tokio::test]
async fn create_author_with_preassigned_id_is_400() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/authors",
        Some(json!({ "id": 7, "name": "Ann" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn list_authors_returns_all() {
    let app = app();
    create_author(&app, "Ann").await;
    create_author(&app, "Ben").await;

    let (status, body) = send(&app, "GET", "/authors", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn get_author_distinguishes_200_and_404() {
    let app = app();

    let (status, _) = send(&app, "GET", "/authors/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let id = create_author(&app, "Ann").await;
    let (status, body) = send(&app, "GET", &format!("/authors/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ann");
}

#[tokio::test]
async fn replace_author_is_full_overwrite_and_400_when_absent() {
    let app = app();

    let (status, _) = send(&app, "PUT", "/authors/42", Some(json!({ "name": "X" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let id = create_author(&app, "Ann").await;
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/authors/{}", id),
        Some(json!({ "name": "Ann Updated" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"].as_i64().unwrap(), id);
    assert_eq!(body["name"], "Ann Updated");
    // Fields missing from the replacement are gone
    assert_eq!(body["age"], Value::Null);
}

#[tokio::test]
async fn patch_author_merges_and_400_when_absent() {
    let app = app();

    let (status, _) = send(&app, "PATCH", "/authors/42", Some(json!({ "name": "X" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let id = create_author(&app, "Ann").await;
    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/authors/{}", id),
        Some(json!({ "description": "Updated bio" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ann");
    assert_eq!(body["age"], 42);
    assert_eq!(body["description"], "Updated bio");
}

#[tokio::test]
async fn delete_author_is_204_and_idempotent() {
    let app = app();
    let id = create_author(&app, "Ann").await;

    let (status, _) = send(&app, "DELETE", &format!("/authors/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // A second delete, and a delete of a never-existing id, still succeed
    let (status, _) = send(&app, "DELETE", &format!("/authors/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "DELETE", "/authors/9999", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn upsert_book_reports_201_then_200() {
    let app = app();

    // No author yet: the upsert is rejected and nothing is stored
    let (status, body) = send(
        &app,
        "PUT",
        "/books/978-0-1",
        Some(json!({ "title": "T", "author": { "id": 7 } })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadReference");

    let (_, books) = send(&app, "GET", "/books", None).await;
    assert!(books.as_array().unwrap().is_empty());

    // With the author present the same upsert creates the book
    let author_id = create_author(&app, "Ann").await;
    let (status, body) = send(
        &app,
        "PUT",
        "/books/978-0-1",
        Some(json!({ "title": "T", "author": { "id": author_id } })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["isbn"], "978-0-1");
    assert_eq!(body["title"], "T");
    assert_eq!(body["author"]["id"].as_i64().unwrap(), author_id);
    assert_eq!(body["author"]["name"], "Ann");

    // A repeat upsert replaces and reports 200
    let (status, body) = send(
        &app,
        "PUT",
        "/books/978-0-1",
        Some(json!({ "title": "T2", "author": { "id": author_id } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "T2");
}

#[tokio::test]
async fn list_books_supports_author_filter() {
    let app = app();
    let ann = create_author(&app, "Ann").await;
    let ben = create_author(&app, "Ben").await;

    for (isbn, author) in [("978-0-1", ann), ("978-0-2", ann), ("978-0-3", ben)] {
        let (status, _) = send(
            &app,
            "PUT",
            &format!("/books/{}", isbn),
            Some(json!({ "title": "T", "author": { "id": author } })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, all) = send(&app, "GET", "/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 3);

    let (status, filtered) = send(&app, "GET", &format!("/books?author={}", ann), None).await;
    assert_eq!(status, StatusCode::OK);
    let filtered = filtered.as_array().unwrap();
    assert_eq!(filtered.len(), 2);
    assert!(filtered
        .iter()
        .all(|b| b["author"]["id"].as_i64().unwrap() == ann));
}

#[tokio::test]
async fn get_book_distinguishes_200_and_404() {
    let app = app();

    let (status, _) = send(&app, "GET", "/books/978-0-1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let author_id = create_author(&app, "Ann").await;
    send(
        &app,
        "PUT",
        "/books/978-0-1",
        Some(json!({ "title": "T", "author": { "id": author_id } })),
    )
    .await;

    let (status, body) = send(&app, "GET", "/books/978-0-1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "T");
}

#[tokio::test]
async fn patch_book_merges_and_400_when_absent() {
    let app = app();

    let (status, _) = send(&app, "PATCH", "/books/missing", Some(json!({ "title": "X" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let author_id = create_author(&app, "Ann").await;
    send(
        &app,
        "PUT",
        "/books/978-0-1",
        Some(json!({ "title": "T2", "author": { "id": author_id } })),
    )
    .await;

    let (status, body) = send(
        &app,
        "PATCH",
        "/books/978-0-1",
        Some(json!({ "description": "D" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "T2");
    assert_eq!(body["description"], "D");
    assert_eq!(body["author"]["id"].as_i64().unwrap(), author_id);
}

#[tokio::test]
async fn delete_book_is_204_and_keeps_the_author() {
    let app = app();
    let author_id = create_author(&app, "Ann").await;
    send(
        &app,
        "PUT",
        "/books/978-0-1",
        Some(json!({ "title": "T", "author": { "id": author_id } })),
    )
    .await;

    let (status, _) = send(&app, "DELETE", "/books/978-0-1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "DELETE", "/books/978-0-1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &format!("/authors/{}", author_id), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn deleting_an_author_cascades_over_http() {
    let app = app();
    let ann = create_author(&app, "Ann").await;
    let ben = create_author(&app, "Ben").await;

    for (isbn, author) in [("978-0-1", ann), ("978-0-2", ben)] {
        send(
            &app,
            "PUT",
            &format!("/books/{}", isbn),
            Some(json!({ "title": "T", "author": { "id": author } })),
        )
        .await;
    }

    let (status, _) = send(&app, "DELETE", &format!("/authors/{}", ann), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", "/books/978-0-1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "GET", "/books/978-0-2", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn body_isbn_is_overridden_by_the_path() {
    let app = app();
    let author_id = create_author(&app, "Ann").await;

    let (status, body) = send(
        &app,
        "PUT",
        "/books/978-0-1",
        Some(json!({ "isbn": "mismatched", "title": "T", "author": { "id": author_id } })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["isbn"], "978-0-1");

    let (status, _) = send(&app, "GET", "/books/mismatched", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
