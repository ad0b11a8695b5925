use serde::{Deserialize, Serialize};

use super::Audit;

/// Tag on a post. Wholly owned by the post: the set is replaced as a unit
/// whenever the tag list changes and destroyed with the post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub post_id: i64,
    pub name: String,
    pub audit: Audit,
}

impl Tag {
    pub fn new(name: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self {
            id: 0,
            post_id: 0,
            name: name.into(),
            audit: Audit::new(created_by),
        }
    }
}
