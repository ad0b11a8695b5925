//! Comment lifecycle under a post.

use std::sync::Arc;

use crate::domain::Comment;
use crate::error::DomainError;
use crate::policy::OwnershipPolicy;
use crate::ports::{CommentRepository, PostRepository};

use super::dto::{CreateComment, UpdateComment};

pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    posts: Arc<dyn PostRepository>,
    policy: Arc<dyn OwnershipPolicy>,
}

impl CommentService {
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        posts: Arc<dyn PostRepository>,
        policy: Arc<dyn OwnershipPolicy>,
    ) -> Self {
        Self {
            comments,
            posts,
            policy,
        }
    }

    /// Create a comment under an existing post. Returns the new id.
    pub async fn create_comment(
        &self,
        post_id: i64,
        req: CreateComment,
    ) -> Result<i64, DomainError> {
        if self.posts.find_by_id(post_id).await?.is_none() {
            return Err(DomainError::PostNotFound { id: post_id });
        }

        let comment = Comment::new(post_id, req.content, req.created_by);
        let saved = self.comments.save(comment).await?;
        Ok(saved.id)
    }

    /// Overwrite the content. Only the original commenter may update.
    pub async fn update_comment(
        &self,
        comment_id: i64,
        req: UpdateComment,
    ) -> Result<i64, DomainError> {
        let mut comment = self
            .comments
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound { id: comment_id })?;

        if !self.policy.allows(&req.updated_by, comment.created_by()) {
            return Err(DomainError::CommentNotUpdatable { id: comment_id });
        }

        comment.apply_update(req.content, req.updated_by);
        self.comments.save(comment).await?;
        Ok(comment_id)
    }

    /// Delete a comment. Only the original commenter may delete.
    pub async fn delete_comment(
        &self,
        comment_id: i64,
        deleted_by: &str,
    ) -> Result<i64, DomainError> {
        let comment = self
            .comments
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound { id: comment_id })?;

        if !self.policy.allows(deleted_by, comment.created_by()) {
            return Err(DomainError::CommentNotDeletable { id: comment_id });
        }

        self.comments.delete(comment_id).await?;
        Ok(comment_id)
    }
}
