//! Tag entity for SeaORM.

use sea_orm::ActiveValue::NotSet;
use sea_orm::Set;
use sea_orm::entity::prelude::*;

use board_core::domain::Audit;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub post_id: i64,
    pub name: String,
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

impl From<Model> for board_core::domain::Tag {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            post_id: model.post_id,
            name: model.name,
            audit: Audit {
                created_by: model.created_by,
                created_at: model.created_at.into(),
                updated_by: model.updated_by,
                updated_at: model.updated_at.map(Into::into),
            },
        }
    }
}

impl From<board_core::domain::Tag> for ActiveModel {
    fn from(tag: board_core::domain::Tag) -> Self {
        Self {
            id: if tag.id == 0 { NotSet } else { Set(tag.id) },
            post_id: Set(tag.post_id),
            name: Set(tag.name),
            created_by: Set(tag.audit.created_by),
            created_at: Set(tag.audit.created_at.into()),
            updated_by: Set(tag.audit.updated_by),
            updated_at: Set(tag.audit.updated_at.map(Into::into)),
        }
    }
}
