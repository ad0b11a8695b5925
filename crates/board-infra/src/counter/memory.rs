//! In-memory counter store - used as fallback when Redis is unavailable.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use board_core::error::CounterError;
use board_core::ports::CounterStore;

/// In-memory counter using a HashMap with an async RwLock.
///
/// Note: Counts are lost on process restart; the read-through in the like
/// service repopulates them from the repository.
pub struct InMemoryCounterStore {
    counts: RwLock<HashMap<String, i64>>,
}

impl InMemoryCounterStore {
    pub fn new() -> Self {
        Self {
            counts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCounterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CounterStore for InMemoryCounterStore {
    async fn get(&self, key: &str) -> Option<i64> {
        let counts = self.counts.read().await;
        counts.get(key).copied()
    }

    async fn set(&self, key: &str, value: i64) -> Result<(), CounterError> {
        let mut counts = self.counts.write().await;
        counts.insert(key.to_string(), value);
        Ok(())
    }

    async fn increment(&self, key: &str) -> Result<(), CounterError> {
        let mut counts = self.counts.write().await;
        *counts.entry(key.to_string()).or_insert(0) += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let counter = InMemoryCounterStore::new();
        counter.set("key1", 5).await.unwrap();
        assert_eq!(counter.get("key1").await, Some(5));
    }

    #[tokio::test]
    async fn test_increment_creates_missing_key() {
        let counter = InMemoryCounterStore::new();
        counter.increment("key1").await.unwrap();
        counter.increment("key1").await.unwrap();
        assert_eq!(counter.get("key1").await, Some(2));
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let counter = InMemoryCounterStore::new();
        assert_eq!(counter.get("absent").await, None);
    }
}
