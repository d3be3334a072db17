//! Author lifecycle service

use crate::{
    error::{AppError, AppResult},
    models::author::{Author, CreateAuthor, UpdateAuthor},
    repository::Repository,
};

/// Owns the invariants of the author resource: server-assigned identity,
/// full-replace vs. partial-merge updates, and the cascade to owned books
/// on delete. Holds no mutable state of its own.
#[derive(Clone)]
pub struct AuthorService {
    repository: Repository,
}

impl AuthorService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a new author with a freshly assigned identity.
    /// Rejects payloads that pre-assign an id.
    pub async fn create(&self, payload: CreateAuthor) -> AppResult<Author> {
        if payload.id.is_some() {
            return Err(AppError::InvalidArgument(
                "Cannot create new author with id".to_string(),
            ));
        }

        let id = self.repository.authors.next_id();
        let author = Author::from_payload(id, payload);

        tracing::debug!(author_id = id, "creating author");
        self.repository.authors.save(author).await
    }

    /// List all authors
    pub async fn list(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.list().await
    }

    /// Get an author by id. Absence is `None`, not an error.
    pub async fn get(&self, id: i64) -> AppResult<Option<Author>> {
        self.repository.authors.get(id).await
    }

    /// Replace the whole record at `id` with the supplied fields.
    /// The identity is taken from the path, never from the payload.
    pub async fn full_update(&self, id: i64, payload: CreateAuthor) -> AppResult<Author> {
        if !self.repository.authors.exists(id).await? {
            return Err(AppError::NotFound(format!("Author {} not found", id)));
        }

        let author = Author::from_payload(id, payload);
        self.repository.authors.save(author).await
    }

    /// Merge the present fields of the request onto the record at `id`
    pub async fn partial_update(&self, id: i64, request: UpdateAuthor) -> AppResult<Author> {
        let mut author = self
            .repository
            .authors
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))?;

        request.apply_to(&mut author);
        self.repository.authors.save(author).await
    }

    /// Delete an author and cascade to every book they own.
    /// Idempotent: deleting an absent author is not an error.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let _uow = self.repository.begin().await;

        let removed = self.repository.books.delete_by_author(id).await?;
        if removed > 0 {
            tracing::debug!(author_id = id, books = removed, "cascade-deleted books");
        }
        self.repository.authors.delete(id).await
    }
}
