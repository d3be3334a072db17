//! Author store: keyed by server-assigned identity

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use super::{memory::MemoryStore, ResourceStore};
use crate::{error::AppResult, models::author::Author};

/// Store for authors, keyed by id, plus the identity sequence
#[derive(Clone)]
pub struct AuthorStore {
    store: MemoryStore<i64, Author>,
    next_id: Arc<AtomicI64>,
}

impl AuthorStore {
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Allocate the next author identity. Each id is handed out exactly once.
    pub fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    pub async fn get(&self, id: i64) -> AppResult<Option<Author>> {
        self.store.get(&id).await
    }

    pub async fn exists(&self, id: i64) -> AppResult<bool> {
        self.store.exists(&id).await
    }

    pub async fn save(&self, author: Author) -> AppResult<Author> {
        self.store.save(author.id, author).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.store.delete(&id).await
    }

    pub async fn list(&self) -> AppResult<Vec<Author>> {
        self.store.list().await
    }
}

impl Default for AuthorStore {
    fn default() -> Self {
        Self::new()
    }
}
