//! # Board Infrastructure
//!
//! Concrete implementations of the ports defined in `board-core`.
//! This crate contains the in-memory, database, and Redis adapters.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL repositories via SeaORM
//! - `redis` - Redis-backed like counter

pub mod counter;
pub mod memory;

#[cfg(feature = "postgres")]
pub mod database;

// Re-exports - In-Memory
pub use counter::InMemoryCounterStore;
pub use memory::{
    InMemoryCommentRepository, InMemoryLikeRepository, InMemoryPostRepository, InMemoryStore,
    InMemoryTagRepository,
};

// Re-exports - Postgres
#[cfg(feature = "postgres")]
pub use database::{
    DatabaseConfig, PostgresCommentRepository, PostgresLikeRepository, PostgresPostRepository,
    PostgresTagRepository, connect,
};

// Re-exports - Redis
#[cfg(feature = "redis")]
pub use counter::{RedisConfig, RedisCounterStore};

#[cfg(test)]
mod tests;
