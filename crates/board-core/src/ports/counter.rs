use async_trait::async_trait;

use crate::error::CounterError;

/// Counter store - abstraction over an external key/value counter
/// (Redis, in-memory).
///
/// `get` swallows backend failures into `None`: the like-count read-through
/// must degrade to a repository count, never raise.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Read a counter. `None` on missing key or backend failure.
    async fn get(&self, key: &str) -> Option<i64>;

    /// Overwrite a counter.
    async fn set(&self, key: &str, value: i64) -> Result<(), CounterError>;

    /// Increment a counter by one, creating it at one if absent.
    async fn increment(&self, key: &str) -> Result<(), CounterError>;
}
