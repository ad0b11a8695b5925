use std::collections::BTreeMap;

use tokio::sync::RwLock;

use board_core::domain::{Comment, Like, Post, Tag};

/// Shared in-memory tables behind one lock, so a post delete and its
/// cascade are observed atomically - the same guarantee the relational
/// adapter gets from a transaction.
///
/// Note: Data is lost on process restart.
pub struct InMemoryStore {
    pub(crate) inner: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Tables::default()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// BTreeMaps keep id (insertion) order, which is the default page order.
#[derive(Default)]
pub(crate) struct Tables {
    pub posts: BTreeMap<i64, Post>,
    pub comments: BTreeMap<i64, Comment>,
    pub tags: BTreeMap<i64, Tag>,
    pub likes: BTreeMap<i64, Like>,
    post_seq: i64,
    comment_seq: i64,
    tag_seq: i64,
    like_seq: i64,
}

impl Tables {
    pub fn next_post_id(&mut self) -> i64 {
        self.post_seq += 1;
        self.post_seq
    }

    pub fn next_comment_id(&mut self) -> i64 {
        self.comment_seq += 1;
        self.comment_seq
    }

    pub fn next_tag_id(&mut self) -> i64 {
        self.tag_seq += 1;
        self.tag_seq
    }

    pub fn next_like_id(&mut self) -> i64 {
        self.like_seq += 1;
        self.like_seq
    }

    /// Load a post aggregate with its tags and comments in stored order.
    pub fn assemble_post(&self, id: i64) -> Option<Post> {
        let mut post = self.posts.get(&id)?.clone();
        post.tags = self
            .tags
            .values()
            .filter(|t| t.post_id == id)
            .cloned()
            .collect();
        post.comments = self
            .comments
            .values()
            .filter(|c| c.post_id == id)
            .cloned()
            .collect();
        Some(post)
    }
}
