//! User profile and leaderboard endpoints.

use api_types::user::{LeaderboardEntry, ProfileSaved, ProfileUpsert, UserView};
use axum::{
    Json,
    extract::{Path, State},
};
use engine::level_for_xp;

use crate::{ServerError, server::ServerState};

/// Create a profile on first submission for a name, overwrite it afterwards.
pub async fn upsert(
    State(state): State<ServerState>,
    Json(payload): Json<ProfileUpsert>,
) -> Result<Json<ProfileSaved>, ServerError> {
    let (user, created) = state
        .engine
        .upsert_user(engine::ProfileUpsert {
            name: payload.name,
            age: payload.age,
            major: payload.major,
            gender: payload.gender,
            leadership: payload.leadership,
            community: payload.community,
        })
        .await?;

    let message = if created {
        "Profile created successfully"
    } else {
        "Profile updated successfully"
    };

    Ok(Json(ProfileSaved {
        id: user.id,
        name: user.name,
        age: user.age,
        major: user.major,
        gender: user.gender,
        leadership: user.leadership,
        community: user.community,
        total_xp: user.total_xp,
        level: level_for_xp(user.total_xp).to_string(),
        message: message.to_string(),
    }))
}

pub async fn get_by_name(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<Json<UserView>, ServerError> {
    let user = state.engine.user_by_name(&name).await?;

    Ok(Json(UserView {
        id: user.id,
        name: user.name,
        age: user.age,
        major: user.major,
        gender: user.gender,
        leadership: user.leadership,
        community: user.community,
        total_xp: user.total_xp,
        level: level_for_xp(user.total_xp).to_string(),
        created_at: user.created_at,
        updated_at: user.updated_at,
    }))
}

/// Administrative view: every user with their application count, highest XP
/// first.
pub async fn leaderboard(
    State(state): State<ServerState>,
) -> Result<Json<Vec<LeaderboardEntry>>, ServerError> {
    let rows = state.engine.leaderboard().await?;

    Ok(Json(
        rows.into_iter()
            .map(|row| LeaderboardEntry {
                id: row.id,
                name: row.name,
                age: row.age,
                major: row.major,
                gender: row.gender,
                leadership: row.leadership,
                community: row.community,
                total_xp: row.total_xp,
                level: level_for_xp(row.total_xp).to_string(),
                applications_count: row.applications_count,
                created_at: row.created_at,
                updated_at: row.updated_at,
            })
            .collect(),
    ))
}
