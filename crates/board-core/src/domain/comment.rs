use serde::{Deserialize, Serialize};

use super::Audit;

/// Comment on a post. Created only against an existing post, updated and
/// deleted independently of it, removed by the post's cascade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub content: String,
    pub audit: Audit,
}

impl Comment {
    pub fn new(post_id: i64, content: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self {
            id: 0,
            post_id,
            content: content.into(),
            audit: Audit::new(created_by),
        }
    }

    pub fn created_by(&self) -> &str {
        &self.audit.created_by
    }

    /// Overwrite the content and stamp the update. Ownership must already
    /// have been checked by the caller.
    pub fn apply_update(&mut self, content: String, updated_by: String) {
        self.content = content;
        self.audit.record_update(updated_by);
    }
}
