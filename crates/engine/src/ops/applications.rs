use chrono::Utc;
use sea_orm::{
    ActiveValue, QueryFilter, QueryOrder, TransactionTrait, prelude::*, sea_query::Expr,
};

use crate::{EngineError, ResultEngine, applications, users};

use super::{Engine, required_i32, required_i64, required_text, with_tx};

/// An application as submitted by the client. Ids reference the user and the
/// scholarship by number; `xp_earned` is the reward the client read off the
/// scholarship listing.
#[derive(Clone, Debug, Default)]
pub struct ApplicationNew {
    pub user_id: Option<i32>,
    pub scholarship_id: Option<i32>,
    pub scholarship_name: Option<String>,
    pub xp_earned: Option<i64>,
}

impl Engine {
    /// Record an application and credit the reward XP to the user.
    ///
    /// The duplicate check, the insert, and the XP credit run inside one
    /// database transaction, so a failed credit rolls the application back.
    /// At most one application may exist per (user, scholarship) pair.
    pub async fn apply(&self, application: ApplicationNew) -> ResultEngine<(i32, i64)> {
        let user_id = required_i32(application.user_id, "userId")?;
        let scholarship_id = required_i32(application.scholarship_id, "scholarshipId")?;
        let scholarship_name = required_text(application.scholarship_name, "scholarshipName")?;
        let xp_earned = required_i64(application.xp_earned, "xpEarned")?;

        with_tx!(self, |db_tx| {
            let existing = applications::Entity::find()
                .filter(applications::Column::UserId.eq(user_id))
                .filter(applications::Column::ScholarshipId.eq(scholarship_id))
                .one(&db_tx)
                .await?;
            if existing.is_some() {
                return Err(EngineError::AlreadyApplied);
            }

            let application = applications::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                scholarship_id: ActiveValue::Set(scholarship_id),
                scholarship_name: ActiveValue::Set(scholarship_name),
                xp_earned: ActiveValue::Set(xp_earned),
                applied_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            }
            .insert(&db_tx)
            .await?;

            users::Entity::update_many()
                .col_expr(
                    users::Column::TotalXp,
                    Expr::col(users::Column::TotalXp).add(xp_earned),
                )
                .col_expr(users::Column::UpdatedAt, Expr::value(Utc::now()))
                .filter(users::Column::Id.eq(user_id))
                .exec(&db_tx)
                .await?;

            Ok((application.id, xp_earned))
        })
    }

    /// A user's applications, newest first. An empty list is not an error.
    pub async fn applications_for_user(
        &self,
        user_id: i32,
    ) -> ResultEngine<Vec<applications::Model>> {
        Ok(applications::Entity::find()
            .filter(applications::Column::UserId.eq(user_id))
            .order_by_desc(applications::Column::AppliedAt)
            .order_by_desc(applications::Column::Id)
            .all(&self.database)
            .await?)
    }
}
