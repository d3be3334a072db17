//! Book lifecycle service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookUpsert, UpdateBook, UpsertBook},
    repository::Repository,
};

/// Owns the invariants of the book resource: the upsert keyed by ISBN with a
/// created/replaced report, referential validation of the author before any
/// write, and the immutability of the author reference under patch.
#[derive(Clone)]
pub struct BookService {
    repository: Repository,
}

impl BookService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create or fully replace the book at `isbn`.
    ///
    /// Runs as one unit of work: record prior existence, resolve the author,
    /// save. If the author does not resolve, no book state changes. The
    /// returned `created` flag reports whether the call created the resource
    /// or replaced an existing one.
    pub async fn create_or_update(&self, isbn: &str, payload: UpsertBook) -> AppResult<BookUpsert> {
        let _uow = self.repository.begin().await;

        let existed = self.repository.books.exists(isbn).await?;

        let author = self
            .repository
            .authors
            .get(payload.author.id)
            .await?
            .ok_or_else(|| {
                AppError::InvalidReference(format!("Author {} not found", payload.author.id))
            })?;

        // The path ISBN wins over whatever the body carries
        let book = Book::from_upsert(isbn.to_string(), payload, author);
        let saved = self.repository.books.save(book).await?;

        tracing::debug!(isbn = %saved.isbn, created = !existed, "book upserted");
        Ok(BookUpsert {
            book: saved,
            created: !existed,
        })
    }

    /// List books, optionally restricted to one author
    pub async fn list(&self, author_id: Option<i64>) -> AppResult<Vec<Book>> {
        match author_id {
            Some(id) => self.repository.books.find_by_author(id).await,
            None => self.repository.books.list().await,
        }
    }

    /// Get a book by ISBN
    pub async fn get(&self, isbn: &str) -> AppResult<Book> {
        self.repository
            .books
            .get(isbn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", isbn)))
    }

    /// Merge title/description/image from the request onto the record at
    /// `isbn`. The author reference is never touched by a patch.
    pub async fn partial_update(&self, isbn: &str, request: UpdateBook) -> AppResult<Book> {
        let mut book = self
            .repository
            .books
            .get(isbn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", isbn)))?;

        request.apply_to(&mut book);
        self.repository.books.save(book).await
    }

    /// Delete a book. Idempotent; never affects the owning author.
    pub async fn delete(&self, isbn: &str) -> AppResult<()> {
        self.repository.books.delete(isbn).await
    }
}
