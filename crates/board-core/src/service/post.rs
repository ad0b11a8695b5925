//! Post lifecycle and search.

use std::sync::Arc;

use crate::domain::Post;
use crate::error::DomainError;
use crate::policy::OwnershipPolicy;
use crate::ports::PostRepository;
use crate::query::{Page, PageRequest, PostSearchCriteria};

use super::dto::{CreatePost, PostDetail, PostSummary, UpdatePost};
use super::like::LikeService;

/// Orchestrates create/update/delete/get/search on the post aggregate.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    likes: Arc<LikeService>,
    policy: Arc<dyn OwnershipPolicy>,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        likes: Arc<LikeService>,
        policy: Arc<dyn OwnershipPolicy>,
    ) -> Self {
        Self {
            posts,
            likes,
            policy,
        }
    }

    /// Create a post with its initial tag set. Returns the new id.
    pub async fn create_post(&self, req: CreatePost) -> Result<i64, DomainError> {
        let post = Post::new(req.created_by, req.title, req.content, req.tags);
        let saved = self.posts.save(post).await?;
        tracing::debug!(post_id = saved.id, "post created");
        Ok(saved.id)
    }

    /// Overwrite title/content and replace the tag set if it changed.
    /// Only the original creator may update.
    pub async fn update_post(&self, id: i64, req: UpdatePost) -> Result<i64, DomainError> {
        let mut post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PostNotFound { id })?;

        if !self.policy.allows(&req.updated_by, post.created_by()) {
            return Err(DomainError::PostNotUpdatable { id });
        }

        post.apply_update(req.title, req.content, req.tags, req.updated_by);
        self.posts.save(post).await?;
        Ok(id)
    }

    /// Delete a post and cascade its comments and tags. Only the original
    /// creator may delete.
    pub async fn delete_post(&self, id: i64, deleted_by: &str) -> Result<i64, DomainError> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PostNotFound { id })?;

        if !self.policy.allows(deleted_by, post.created_by()) {
            return Err(DomainError::PostNotDeletable { id });
        }

        self.posts.delete(id).await?;
        tracing::debug!(post_id = id, "post deleted");
        Ok(id)
    }

    /// Full detail projection. The like count comes from the cached
    /// counter, not a direct repository count.
    pub async fn get_post(&self, id: i64) -> Result<PostDetail, DomainError> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PostNotFound { id })?;

        let like_count = self.likes.count_like(id).await?;
        Ok(PostDetail::from_post(post, like_count))
    }

    /// Paginated summary search, filters AND-combined.
    pub async fn find_page_by(
        &self,
        page: PageRequest,
        criteria: PostSearchCriteria,
    ) -> Result<Page<PostSummary>, DomainError> {
        let posts = self.posts.find_page_by(page, &criteria).await?;
        Ok(posts.map(PostSummary::from))
    }
}
