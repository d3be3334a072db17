//! Book store: keyed by ISBN, with author id as secondary key

use super::{memory::MemoryStore, ResourceStore};
use crate::{error::AppResult, models::book::Book};

/// Store for books, keyed by ISBN
#[derive(Clone)]
pub struct BookStore {
    store: MemoryStore<String, Book>,
}

impl BookStore {
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(),
        }
    }

    pub async fn get(&self, isbn: &str) -> AppResult<Option<Book>> {
        self.store.get(&isbn.to_string()).await
    }

    pub async fn exists(&self, isbn: &str) -> AppResult<bool> {
        self.store.exists(&isbn.to_string()).await
    }

    pub async fn save(&self, book: Book) -> AppResult<Book> {
        self.store.save(book.isbn.clone(), book).await
    }

    pub async fn delete(&self, isbn: &str) -> AppResult<()> {
        self.store.delete(&isbn.to_string()).await
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.store.list().await
    }

    /// Secondary-key lookup: all books owned by the given author
    pub async fn find_by_author(&self, author_id: i64) -> AppResult<Vec<Book>> {
        Ok(self.store.find_where(|b| b.author.id == author_id).await)
    }

    /// Cascade primitive: delete every book owned by the given author.
    /// Returns how many books were removed.
    pub async fn delete_by_author(&self, author_id: i64) -> AppResult<usize> {
        let owned = self.find_by_author(author_id).await?;
        for book in &owned {
            self.store.delete(&book.isbn).await?;
        }
        Ok(owned.len())
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}
