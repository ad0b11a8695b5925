//! Likes and the read-through like counter.

use std::sync::Arc;

use crate::domain::Like;
use crate::error::DomainError;
use crate::ports::{CounterStore, LikeRepository, PostRepository};

/// Counter key for a post's like count.
pub fn like_count_key(post_id: i64) -> String {
    format!("like:count:{post_id}")
}

pub struct LikeService {
    likes: Arc<dyn LikeRepository>,
    posts: Arc<dyn PostRepository>,
    counter: Arc<dyn CounterStore>,
}

impl LikeService {
    pub fn new(
        likes: Arc<dyn LikeRepository>,
        posts: Arc<dyn PostRepository>,
        counter: Arc<dyn CounterStore>,
    ) -> Self {
        Self {
            likes,
            posts,
            counter,
        }
    }

    /// Record a like and bump the cached counter.
    ///
    /// The increment is best-effort: counter and repository share no
    /// atomicity, so a failed increment is logged and the relational
    /// insert still goes through.
    pub async fn create_like(&self, post_id: i64, created_by: &str) -> Result<i64, DomainError> {
        if self.posts.find_by_id(post_id).await?.is_none() {
            return Err(DomainError::PostNotFound { id: post_id });
        }

        if let Err(e) = self.counter.increment(&like_count_key(post_id)).await {
            tracing::warn!(post_id, error = %e, "like counter increment failed");
        }

        let saved = self.likes.save(Like::new(post_id, created_by)).await?;
        Ok(saved.id)
    }

    /// Read-through count: counter hit wins; a miss recomputes from the
    /// repository and populates the counter before returning.
    pub async fn count_like(&self, post_id: i64) -> Result<i64, DomainError> {
        let key = like_count_key(post_id);

        if let Some(count) = self.counter.get(&key).await {
            return Ok(count);
        }

        let count = self.likes.count_by_post_id(post_id).await?;
        if let Err(e) = self.counter.set(&key, count).await {
            tracing::warn!(post_id, error = %e, "failed to populate like counter");
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_key_is_stable_per_post() {
        assert_eq!(like_count_key(42), "like:count:42");
        assert_eq!(like_count_key(42), like_count_key(42));
    }
}
