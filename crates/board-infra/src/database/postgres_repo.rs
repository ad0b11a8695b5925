//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbConn, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, TransactionTrait, TryIntoModel,
};

use board_core::domain::{Comment, Like, Post, Tag};
use board_core::error::RepoError;
use board_core::ports::{
    BaseRepository, CommentRepository, LikeRepository, PostRepository, TagRepository,
};
use board_core::query::{Page, PageRequest, PostSearchCriteria};

use super::entity::{comment, like, post, tag};

fn query_err(e: sea_orm::DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

fn txn_err(e: sea_orm::DbErr) -> RepoError {
    RepoError::Connection(e.to_string())
}

/// PostgreSQL post repository - operates on the whole aggregate.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BaseRepository<Post, i64> for PostgresPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let Some(model) = post::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?
        else {
            return Ok(None);
        };

        let mut loaded: Post = model.into();
        loaded.tags = tag::Entity::find()
            .filter(tag::Column::PostId.eq(id))
            .order_by_asc(tag::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?
            .into_iter()
            .map(Into::into)
            .collect();
        loaded.comments = comment::Entity::find()
            .filter(comment::Column::PostId.eq(id))
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(Some(loaded))
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        // A tag without an id marks a rebuilt set; an all-persisted set was
        // untouched and keeps its rows.
        let rewrite_tags = post.id == 0 || post.tags.iter().any(|t| t.id == 0);
        let tags = post.tags.clone();

        let txn = self.db.begin().await.map_err(txn_err)?;

        let active: post::ActiveModel = post.into();
        let saved = active.save(&txn).await.map_err(query_err)?;
        let model = saved.try_into_model().map_err(query_err)?;
        let post_id = model.id;

        if rewrite_tags {
            tag::Entity::delete_many()
                .filter(tag::Column::PostId.eq(post_id))
                .exec(&txn)
                .await
                .map_err(query_err)?;

            for item in tags {
                let mut active: tag::ActiveModel = item.into();
                active.id = NotSet;
                active.post_id = Set(post_id);
                active.insert(&txn).await.map_err(query_err)?;
            }
        }

        txn.commit().await.map_err(txn_err)?;

        self.find_by_id(post_id).await?.ok_or(RepoError::NotFound)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        // Owned comments and tags go with the post in one transaction.
        let txn = self.db.begin().await.map_err(txn_err)?;

        comment::Entity::delete_many()
            .filter(comment::Column::PostId.eq(id))
            .exec(&txn)
            .await
            .map_err(query_err)?;
        tag::Entity::delete_many()
            .filter(tag::Column::PostId.eq(id))
            .exec(&txn)
            .await
            .map_err(query_err)?;

        let result = post::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(query_err)?;
        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        txn.commit().await.map_err(txn_err)?;
        Ok(())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_page_by(
        &self,
        page: PageRequest,
        criteria: &PostSearchCriteria,
    ) -> Result<Page<Post>, RepoError> {
        let mut query = post::Entity::find().filter(
            Condition::all()
                .add_option(
                    criteria
                        .title
                        .as_deref()
                        .map(|t| post::Column::Title.contains(t)),
                )
                .add_option(
                    criteria
                        .created_by
                        .as_deref()
                        .map(|c| post::Column::CreatedBy.eq(c)),
                ),
        );

        query = match criteria.tag.as_deref() {
            Some(tag_name) => query
                .join(JoinType::InnerJoin, post::Relation::Tags.def())
                .filter(tag::Column::Name.eq(tag_name))
                .order_by_desc(post::Column::CreatedAt)
                .order_by_desc(post::Column::Id),
            None => query.order_by_asc(post::Column::Id),
        };

        let paginator = query.paginate(&self.db, page.size.max(1));
        let total = paginator.num_items().await.map_err(query_err)?;
        let models = paginator.fetch_page(page.page).await.map_err(query_err)?;

        // The summary projection needs each post's ordered tag set.
        let ids: Vec<i64> = models.iter().map(|m| m.id).collect();
        let tag_models = tag::Entity::find()
            .filter(tag::Column::PostId.is_in(ids))
            .order_by_asc(tag::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        let mut items: Vec<Post> = models.into_iter().map(Into::into).collect();
        for item in &mut items {
            item.tags = tag_models
                .iter()
                .filter(|t| t.post_id == item.id)
                .cloned()
                .map(Into::into)
                .collect();
        }

        Ok(Page::new(items, page, total))
    }
}

/// PostgreSQL comment repository.
pub struct PostgresCommentRepository {
    db: DbConn,
}

impl PostgresCommentRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BaseRepository<Comment, i64> for PostgresCommentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, RepoError> {
        let result = comment::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;
        Ok(result.map(Into::into))
    }

    async fn save(&self, entity: Comment) -> Result<Comment, RepoError> {
        let active: comment::ActiveModel = entity.into();
        let saved = active.save(&self.db).await.map_err(query_err)?;
        let model = saved.try_into_model().map_err(query_err)?;
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let result = comment::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;
        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_by_post_id(&self, post_id: i64) -> Result<Vec<Comment>, RepoError> {
        let result = comment::Entity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;
        Ok(result.into_iter().map(Into::into).collect())
    }
}

/// PostgreSQL tag projection.
pub struct PostgresTagRepository {
    db: DbConn,
}

impl PostgresTagRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn find_by_post_id(&self, post_id: i64) -> Result<Vec<Tag>, RepoError> {
        let result = tag::Entity::find()
            .filter(tag::Column::PostId.eq(post_id))
            .order_by_asc(tag::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;
        Ok(result.into_iter().map(Into::into).collect())
    }
}

/// PostgreSQL like repository.
pub struct PostgresLikeRepository {
    db: DbConn,
}

impl PostgresLikeRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BaseRepository<Like, i64> for PostgresLikeRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Like>, RepoError> {
        let result = like::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;
        Ok(result.map(Into::into))
    }

    async fn save(&self, entity: Like) -> Result<Like, RepoError> {
        let active: like::ActiveModel = entity.into();
        let saved = active.save(&self.db).await.map_err(query_err)?;
        let model = saved.try_into_model().map_err(query_err)?;
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let result = like::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;
        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn count_by_post_id(&self, post_id: i64) -> Result<i64, RepoError> {
        let count = like::Entity::find()
            .filter(like::Column::PostId.eq(post_id))
            .count(&self.db)
            .await
            .map_err(query_err)?;
        Ok(count as i64)
    }
}
