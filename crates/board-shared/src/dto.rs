//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub created_by: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Request to update a post. The full tag list is sent each time; the
/// server decides whether it actually changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
    pub updated_by: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Request to create a comment under a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
    pub created_by: String,
}

/// Request to update a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCommentRequest {
    pub content: String,
    pub updated_by: String,
}

/// Full post detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_by: String,
    pub created_at: String,
    pub comments: Vec<CommentResponse>,
    pub tags: Vec<String>,
    pub like_count: i64,
}

/// Comment nested in a post detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub content: String,
    pub created_by: String,
    pub created_at: String,
}

/// One row of a post search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummaryResponse {
    pub id: i64,
    pub title: String,
    pub created_by: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_tag: Option<String>,
}

/// Paged response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total: u64,
}
