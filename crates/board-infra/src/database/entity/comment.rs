//! Comment entity for SeaORM.

use sea_orm::ActiveValue::NotSet;
use sea_orm::Set;
use sea_orm::entity::prelude::*;

use board_core::domain::Audit;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub post_id: i64,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_by: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for board_core::domain::Comment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            post_id: model.post_id,
            content: model.content,
            audit: Audit {
                created_by: model.created_by,
                created_at: model.created_at.into(),
                updated_by: model.updated_by,
                updated_at: model.updated_at.map(Into::into),
            },
        }
    }
}

impl From<board_core::domain::Comment> for ActiveModel {
    fn from(comment: board_core::domain::Comment) -> Self {
        Self {
            id: if comment.id == 0 { NotSet } else { Set(comment.id) },
            post_id: Set(comment.post_id),
            content: Set(comment.content),
            created_by: Set(comment.audit.created_by),
            created_at: Set(comment.audit.created_at.into()),
            updated_by: Set(comment.audit.updated_by),
            updated_at: Set(comment.audit.updated_at.map(Into::into)),
        }
    }
}
