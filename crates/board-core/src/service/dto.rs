//! Request and response value objects for the service layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Comment, Post};

/// Input for [`super::PostService::create_post`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
    pub created_by: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Input for [`super::PostService::update_post`]. `updated_by` is the
/// acting identity checked against the post's creator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePost {
    pub title: String,
    pub content: String,
    pub updated_by: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Input for [`super::CommentService::create_comment`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComment {
    pub content: String,
    pub created_by: String,
}

/// Input for [`super::CommentService::update_comment`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateComment {
    pub content: String,
    pub updated_by: String,
}

/// Full post projection returned by `get_post`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetail {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub comments: Vec<CommentView>,
    pub tags: Vec<String>,
    pub like_count: i64,
}

impl PostDetail {
    pub fn from_post(post: Post, like_count: i64) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            created_by: post.audit.created_by,
            created_at: post.audit.created_at,
            comments: post.comments.into_iter().map(CommentView::from).collect(),
            tags: post.tags.into_iter().map(|t| t.name).collect(),
            like_count,
        }
    }
}

/// Comment projection nested in [`PostDetail`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentView {
    pub id: i64,
    pub content: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentView {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            created_by: comment.audit.created_by,
            created_at: comment.audit.created_at,
        }
    }
}

/// Summary projection returned by the paged search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: i64,
    pub title: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub first_tag: Option<String>,
}

impl From<Post> for PostSummary {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            created_by: post.audit.created_by,
            created_at: post.audit.created_at,
            first_tag: post.tags.into_iter().next().map(|t| t.name),
        }
    }
}
