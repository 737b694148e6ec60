//! Users table entity.
//!
//! `name` is the natural key: profile submissions are matched on it exactly,
//! byte for byte. `total_xp` only ever grows, via application submissions.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub major: String,
    pub gender: String,
    pub leadership: bool,
    pub community: bool,
    pub total_xp: i64,
    /// Cosmetic snapshot written at insert time; responses always derive the
    /// level from `total_xp` instead.
    pub level: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::applications::Entity")]
    Applications,
}

impl Related<super::applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
