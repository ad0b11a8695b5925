use std::sync::Arc;

use async_trait::async_trait;

use board_core::domain::{Comment, Like, Post, Tag};
use board_core::error::RepoError;
use board_core::ports::{
    BaseRepository, CommentRepository, LikeRepository, PostRepository, TagRepository,
};
use board_core::query::{Page, PageRequest, PostSearchCriteria};

use super::store::InMemoryStore;

pub struct InMemoryPostRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryPostRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BaseRepository<Post, i64> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let tables = self.store.inner.read().await;
        Ok(tables.assemble_post(id))
    }

    async fn save(&self, mut post: Post) -> Result<Post, RepoError> {
        let mut tables = self.store.inner.write().await;

        if post.id == 0 {
            post.id = tables.next_post_id();
        }
        let post_id = post.id;

        // A tag without an id marks a rebuilt set: replace every stored row.
        // An all-persisted set was untouched and keeps its rows as-is.
        if post.tags.iter().any(|t| t.id == 0) {
            tables.tags.retain(|_, t| t.post_id != post_id);
            for mut tag in std::mem::take(&mut post.tags) {
                if tag.id == 0 {
                    tag.id = tables.next_tag_id();
                }
                tag.post_id = post_id;
                tables.tags.insert(tag.id, tag);
            }
        }

        // Tags and comments live in their own tables; the post row holds
        // only the scalar fields.
        post.tags.clear();
        post.comments.clear();
        tables.posts.insert(post_id, post);

        tables.assemble_post(post_id).ok_or(RepoError::NotFound)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut tables = self.store.inner.write().await;

        if tables.posts.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        tables.comments.retain(|_, c| c.post_id != id);
        tables.tags.retain(|_, t| t.post_id != id);
        // Likes are not owned by the post and stay behind.
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_page_by(
        &self,
        page: PageRequest,
        criteria: &PostSearchCriteria,
    ) -> Result<Page<Post>, RepoError> {
        let tables = self.store.inner.read().await;

        let ids: Vec<i64> = tables.posts.keys().copied().collect();
        let mut matches: Vec<Post> = ids
            .into_iter()
            .filter_map(|id| tables.assemble_post(id))
            .filter(|post| {
                criteria
                    .title
                    .as_deref()
                    .is_none_or(|t| post.title.contains(t))
                    && criteria
                        .created_by
                        .as_deref()
                        .is_none_or(|c| post.created_by() == c)
                    && criteria
                        .tag
                        .as_deref()
                        .is_none_or(|tag| post.tag_names().any(|n| n == tag))
            })
            .collect();

        // Tag-filtered pages are newest-first; otherwise id order stands.
        if criteria.tag.is_some() {
            matches.sort_by(|a, b| (b.audit.created_at, b.id).cmp(&(a.audit.created_at, a.id)));
        }

        let total = matches.len() as u64;
        let items = matches
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.size as usize)
            .collect();
        Ok(Page::new(items, page, total))
    }
}

pub struct InMemoryCommentRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryCommentRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BaseRepository<Comment, i64> for InMemoryCommentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, RepoError> {
        let tables = self.store.inner.read().await;
        Ok(tables.comments.get(&id).cloned())
    }

    async fn save(&self, mut comment: Comment) -> Result<Comment, RepoError> {
        let mut tables = self.store.inner.write().await;
        if comment.id == 0 {
            comment.id = tables.next_comment_id();
        }
        tables.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut tables = self.store.inner.write().await;
        if tables.comments.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_post_id(&self, post_id: i64) -> Result<Vec<Comment>, RepoError> {
        let tables = self.store.inner.read().await;
        Ok(tables
            .comments
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }
}

pub struct InMemoryTagRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryTagRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn find_by_post_id(&self, post_id: i64) -> Result<Vec<Tag>, RepoError> {
        let tables = self.store.inner.read().await;
        Ok(tables
            .tags
            .values()
            .filter(|t| t.post_id == post_id)
            .cloned()
            .collect())
    }
}

pub struct InMemoryLikeRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryLikeRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BaseRepository<Like, i64> for InMemoryLikeRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Like>, RepoError> {
        let tables = self.store.inner.read().await;
        Ok(tables.likes.get(&id).cloned())
    }

    async fn save(&self, mut like: Like) -> Result<Like, RepoError> {
        let mut tables = self.store.inner.write().await;
        if like.id == 0 {
            like.id = tables.next_like_id();
        }
        tables.likes.insert(like.id, like.clone());
        Ok(like)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut tables = self.store.inner.write().await;
        if tables.likes.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl LikeRepository for InMemoryLikeRepository {
    async fn count_by_post_id(&self, post_id: i64) -> Result<i64, RepoError> {
        let tables = self.store.inner.read().await;
        Ok(tables.likes.values().filter(|l| l.post_id == post_id).count() as i64)
    }
}
