use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Like on a post.
///
/// Not cascade-owned by the post, and deliberately without a uniqueness
/// rule on (post_id, created_by): the same identity may like the same post
/// more than once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    pub id: i64,
    pub post_id: i64,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl Like {
    pub fn new(post_id: i64, created_by: impl Into<String>) -> Self {
        Self {
            id: 0,
            post_id,
            created_by: created_by.into(),
            created_at: Utc::now(),
        }
    }
}
