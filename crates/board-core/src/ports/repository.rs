use async_trait::async_trait;

use crate::domain::{Comment, Like, Post, Tag};
use crate::error::RepoError;
use crate::query::{Page, PageRequest, PostSearchCriteria};

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update). Saved entities come back with
    /// their store-assigned ids filled in.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository. Operates on the whole aggregate:
///
/// - `find_by_id` loads the post with its tags and comments in stored order
/// - `save` persists the post's fields and its tag set (a rebuilt tag set
///   is written as a full replace)
/// - `delete` removes the post together with all owned comments and tags
///   in one transaction scope
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i64> {
    /// Predicate-driven paginated search, see [`PostSearchCriteria`].
    async fn find_page_by(
        &self,
        page: PageRequest,
        criteria: &PostSearchCriteria,
    ) -> Result<Page<Post>, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, i64> {
    async fn find_by_post_id(&self, post_id: i64) -> Result<Vec<Comment>, RepoError>;
}

/// Tag projection, used to observe the owned tag set independently of the
/// aggregate (cascade checks, tests).
#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn find_by_post_id(&self, post_id: i64) -> Result<Vec<Tag>, RepoError>;
}

/// Like repository.
#[async_trait]
pub trait LikeRepository: BaseRepository<Like, i64> {
    /// Source-of-truth like count for a post.
    async fn count_by_post_id(&self, post_id: i64) -> Result<i64, RepoError>;
}
