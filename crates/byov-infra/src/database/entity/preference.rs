//! Preference entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

/// Owners include anonymous devices, so there is no foreign key to `users`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "preferences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub owner: String,
    pub theme: String,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for byov_core::domain::Preference {
    fn from(model: Model) -> Self {
        Self {
            owner: model.owner,
            theme: model.theme,
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<byov_core::domain::Preference> for ActiveModel {
    fn from(pref: byov_core::domain::Preference) -> Self {
        Self {
            owner: Set(pref.owner),
            theme: Set(pref.theme),
            updated_at: Set(pref.updated_at.into()),
        }
    }
}
