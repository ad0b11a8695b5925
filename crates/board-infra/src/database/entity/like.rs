//! Like entity for SeaORM.
//!
//! Deliberately carries no relation to the posts table: likes are not
//! cascade-owned by the post, and no uniqueness constraint exists on
//! (post_id, created_by).

use sea_orm::ActiveValue::NotSet;
use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "likes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub post_id: i64,
    pub created_by: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for board_core::domain::Like {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            post_id: model.post_id,
            created_by: model.created_by,
            created_at: model.created_at.into(),
        }
    }
}

impl From<board_core::domain::Like> for ActiveModel {
    fn from(like: board_core::domain::Like) -> Self {
        Self {
            id: if like.id == 0 { NotSet } else { Set(like.id) },
            post_id: Set(like.post_id),
            created_by: Set(like.created_by),
            created_at: Set(like.created_at.into()),
        }
    }
}
