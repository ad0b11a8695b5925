//! Post entity for SeaORM.

use sea_orm::ActiveValue::NotSet;
use sea_orm::Set;
use sea_orm::entity::prelude::*;

use board_core::domain::Audit;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_by: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::comment::Entity")]
    Comments,
    #[sea_orm(has_many = "super::tag::Entity")]
    Tags,
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tags.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain Post. Tags and comments are
/// loaded separately by the repository.
impl From<Model> for board_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            comments: Vec::new(),
            tags: Vec::new(),
            audit: Audit {
                created_by: model.created_by,
                created_at: model.created_at.into(),
                updated_by: model.updated_by,
                updated_at: model.updated_at.map(Into::into),
            },
        }
    }
}

/// Conversion from the domain Post to a SeaORM ActiveModel. An id of 0
/// stays unset so the store assigns the surrogate key.
impl From<board_core::domain::Post> for ActiveModel {
    fn from(post: board_core::domain::Post) -> Self {
        Self {
            id: if post.id == 0 { NotSet } else { Set(post.id) },
            title: Set(post.title),
            content: Set(post.content),
            created_by: Set(post.audit.created_by),
            created_at: Set(post.audit.created_at.into()),
            updated_by: Set(post.audit.updated_by),
            updated_at: Set(post.audit.updated_at.map(Into::into)),
        }
    }
}
