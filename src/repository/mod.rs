//! Repository layer: keyed persistence abstraction and in-memory stores
//!
//! Persistence is modeled as a minimal keyed-store capability set; the
//! backing engine is replaceable. The in-memory implementation in
//! [`memory`] is the one wired up by default.

pub mod authors;
pub mod books;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, MutexGuard};

use crate::error::AppResult;

/// Keyed persistence contract
///
/// `save` is insert-or-replace; `delete` is idempotent and succeeds on an
/// absent key. `list` order is unspecified but stable within a snapshot.
#[async_trait]
pub trait ResourceStore<K, V>: Send + Sync {
    async fn get(&self, key: &K) -> AppResult<Option<V>>;
    async fn exists(&self, key: &K) -> AppResult<bool>;
    async fn save(&self, key: K, value: V) -> AppResult<V>;
    async fn delete(&self, key: &K) -> AppResult<()>;
    async fn list(&self) -> AppResult<Vec<V>>;
}

/// Main repository struct aggregating the per-resource stores
#[derive(Clone)]
pub struct Repository {
    pub authors: authors::AuthorStore,
    pub books: books::BookStore,
    write_gate: Arc<Mutex<()>>,
}

/// Guard over a multi-step write sequence
///
/// Held for the whole existence-check/resolve/save sequence of a book upsert
/// and for the delete-dependents/delete-owner sequence of an author delete,
/// released on every exit path when dropped. This serializes multi-step
/// writes within this process only; two separate server processes sharing a
/// durable store could still both observe "absent" for the same ISBN and
/// both report a creation, one overwriting the other.
pub struct UnitOfWork<'a> {
    _guard: MutexGuard<'a, ()>,
}

impl Repository {
    /// Create a new repository backed by fresh in-memory stores
    pub fn new() -> Self {
        Self {
            authors: authors::AuthorStore::new(),
            books: books::BookStore::new(),
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Open a unit of work for a multi-step write sequence
    pub async fn begin(&self) -> UnitOfWork<'_> {
        UnitOfWork {
            _guard: self.write_gate.lock().await,
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
