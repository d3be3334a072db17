//! In-memory implementation of the keyed store contract

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ResourceStore;
use crate::error::AppResult;

/// Keyed store over an ordered map
///
/// The ordered map keeps `list` output stable for a given set of keys.
/// Cloning shares the underlying map.
#[derive(Debug)]
pub struct MemoryStore<K, V> {
    entries: Arc<RwLock<BTreeMap<K, V>>>,
}

impl<K, V> MemoryStore<K, V> {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

impl<K, V> Clone for MemoryStore<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<K, V> Default for MemoryStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> MemoryStore<K, V>
where
    K: Ord + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    /// Snapshot the values matching a predicate, in key order
    pub async fn find_where<F>(&self, predicate: F) -> Vec<V>
    where
        F: Fn(&V) -> bool,
    {
        self.entries
            .read()
            .await
            .values()
            .filter(|v| predicate(v))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl<K, V> ResourceStore<K, V> for MemoryStore<K, V>
where
    K: Ord + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    async fn get(&self, key: &K) -> AppResult<Option<V>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn exists(&self, key: &K) -> AppResult<bool> {
        Ok(self.entries.read().await.contains_key(key))
    }

    async fn save(&self, key: K, value: V) -> AppResult<V> {
        self.entries.write().await.insert(key, value.clone());
        Ok(value)
    }

    async fn delete(&self, key: &K) -> AppResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<V>> {
        Ok(self.entries.read().await.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_inserts_then_replaces() {
        let store: MemoryStore<String, i32> = MemoryStore::new();

        assert!(!store.exists(&"k".to_string()).await.unwrap());
        store.save("k".to_string(), 1).await.unwrap();
        assert!(store.exists(&"k".to_string()).await.unwrap());
        assert_eq!(store.get(&"k".to_string()).await.unwrap(), Some(1));

        store.save("k".to_string(), 2).await.unwrap();
        assert_eq!(store.get(&"k".to_string()).await.unwrap(), Some(2));
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store: MemoryStore<String, i32> = MemoryStore::new();
        store.save("k".to_string(), 1).await.unwrap();

        store.delete(&"k".to_string()).await.unwrap();
        assert_eq!(store.get(&"k".to_string()).await.unwrap(), None);

        // Deleting an absent key is not an error
        store.delete(&"k".to_string()).await.unwrap();
        store.delete(&"never-existed".to_string()).await.unwrap();
    }

    #[tokio::test]
    async fn list_order_is_stable() {
        let store: MemoryStore<i64, &str> = MemoryStore::new();
        store.save(3, "c").await.unwrap();
        store.save(1, "a").await.unwrap();
        store.save(2, "b").await.unwrap();

        let first = store.list().await.unwrap();
        let second = store.list().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn find_where_filters_values() {
        let store: MemoryStore<i64, i64> = MemoryStore::new();
        for n in 1..=5 {
            store.save(n, n * 10).await.unwrap();
        }

        let even = store.find_where(|v| v % 20 == 0).await;
        assert_eq!(even, vec![20, 40]);
    }
}
