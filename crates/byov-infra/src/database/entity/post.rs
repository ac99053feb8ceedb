//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author_id: String,
    pub author_name: String,
    pub avatar: String,
    pub likes_count: i64,
    pub created_at: Option<DateTimeWithTimeZone>,
    pub edited_at: Option<DateTimeWithTimeZone>,
    pub is_private: Option<bool>,
    pub is_draft: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::like::Entity")]
    Like,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Like.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for byov_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            author_id: model.author_id,
            author_name: model.author_name,
            avatar: model.avatar,
            likes_count: u64::try_from(model.likes_count).unwrap_or(0),
            created_at: model.created_at.map(Into::into),
            edited_at: model.edited_at.map(Into::into),
            is_private: model.is_private,
            is_draft: model.is_draft,
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<byov_core::domain::Post> for ActiveModel {
    fn from(post: byov_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            content: Set(post.content),
            author_id: Set(post.author_id),
            author_name: Set(post.author_name),
            avatar: Set(post.avatar),
            likes_count: Set(count_column(post.likes_count)),
            created_at: Set(post.created_at.map(Into::into)),
            edited_at: Set(post.edited_at.map(Into::into)),
            is_private: Set(post.is_private),
            is_draft: Set(post.is_draft),
        }
    }
}

/// `likes_count` as stored; Postgres has no unsigned integers.
pub fn count_column(likes_count: u64) -> i64 {
    i64::try_from(likes_count).unwrap_or(i64::MAX)
}
