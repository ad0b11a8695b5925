//! In-memory repository adapters - used when no database is configured,
//! and as the backing for service-level tests.

mod repositories;
mod store;

pub use repositories::{
    InMemoryCommentRepository, InMemoryLikeRepository, InMemoryPostRepository,
    InMemoryTagRepository,
};
pub use store::InMemoryStore;
