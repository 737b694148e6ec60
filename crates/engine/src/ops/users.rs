use chrono::Utc;
use sea_orm::{
    ActiveValue, FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
    prelude::*,
};

use crate::{EngineError, ResultEngine, applications, level_for_xp, users};

use super::{Engine, required_i32, required_text, with_tx};

/// Profile fields as submitted by the client. `None` and falsy values are
/// both treated as missing by [`Engine::upsert_user`].
#[derive(Clone, Debug, Default)]
pub struct ProfileUpsert {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub major: Option<String>,
    pub gender: Option<String>,
    pub leadership: Option<bool>,
    pub community: Option<bool>,
}

/// One leaderboard row: a user joined with the number of applications they
/// have submitted.
#[derive(Debug, FromQueryResult)]
pub struct LeaderboardRow {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub major: String,
    pub gender: String,
    pub leadership: bool,
    pub community: bool,
    pub total_xp: i64,
    pub applications_count: i64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl Engine {
    /// Create a profile for a new name, or overwrite the mutable fields of
    /// the existing one. `id` and `total_xp` survive updates.
    ///
    /// Returns the stored row plus whether it was newly created.
    pub async fn upsert_user(&self, profile: ProfileUpsert) -> ResultEngine<(users::Model, bool)> {
        let name = required_text(profile.name, "name")?;
        let age = required_i32(profile.age, "age")?;
        let major = required_text(profile.major, "major")?;
        let gender = required_text(profile.gender, "gender")?;
        let leadership = profile.leadership.unwrap_or(false);
        let community = profile.community.unwrap_or(false);

        with_tx!(self, |db_tx| {
            let existing = users::Entity::find()
                .filter(users::Column::Name.eq(name.as_str()))
                .one(&db_tx)
                .await?;

            match existing {
                Some(user) => {
                    let mut user: users::ActiveModel = user.into();
                    user.age = ActiveValue::Set(age);
                    user.major = ActiveValue::Set(major);
                    user.gender = ActiveValue::Set(gender);
                    user.leadership = ActiveValue::Set(leadership);
                    user.community = ActiveValue::Set(community);
                    user.updated_at = ActiveValue::Set(Utc::now());
                    let user = user.update(&db_tx).await?;
                    Ok((user, false))
                }
                None => {
                    let now = Utc::now();
                    let user = users::ActiveModel {
                        name: ActiveValue::Set(name),
                        age: ActiveValue::Set(age),
                        major: ActiveValue::Set(major),
                        gender: ActiveValue::Set(gender),
                        leadership: ActiveValue::Set(leadership),
                        community: ActiveValue::Set(community),
                        total_xp: ActiveValue::Set(0),
                        level: ActiveValue::Set(level_for_xp(0).to_string()),
                        created_at: ActiveValue::Set(now),
                        updated_at: ActiveValue::Set(now),
                        ..Default::default()
                    }
                    .insert(&db_tx)
                    .await?;
                    Ok((user, true))
                }
            }
        })
    }

    /// Look up a user by exact name. No side effects.
    pub async fn user_by_name(&self, name: &str) -> ResultEngine<users::Model> {
        users::Entity::find()
            .filter(users::Column::Name.eq(name))
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::NotFound("User".to_string()))
    }

    /// Every user with their application count, ordered by XP descending.
    pub async fn leaderboard(&self) -> ResultEngine<Vec<LeaderboardRow>> {
        Ok(users::Entity::find()
            .column_as(applications::Column::Id.count(), "applications_count")
            .join(JoinType::LeftJoin, users::Relation::Applications.def())
            .group_by(users::Column::Id)
            .order_by_desc(users::Column::TotalXp)
            .into_model::<LeaderboardRow>()
            .all(&self.database)
            .await?)
    }
}
