//! Application submission endpoints.

use api_types::application::{ApplicationCreated, ApplicationNew, ApplicationView};
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{ServerError, server::ServerState};

pub async fn apply(
    State(state): State<ServerState>,
    Json(payload): Json<ApplicationNew>,
) -> Result<Json<ApplicationCreated>, ServerError> {
    let (application_id, xp_earned) = state
        .engine
        .apply(engine::ApplicationNew {
            user_id: payload.user_id,
            scholarship_id: payload.scholarship_id,
            scholarship_name: payload.scholarship_name,
            xp_earned: payload.xp_earned,
        })
        .await?;

    Ok(Json(ApplicationCreated {
        application_id,
        message: "Application submitted successfully".to_string(),
        xp_earned,
    }))
}

pub async fn list_for_user(
    State(state): State<ServerState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<ApplicationView>>, ServerError> {
    let rows = state.engine.applications_for_user(user_id).await?;

    Ok(Json(
        rows.into_iter()
            .map(|row| ApplicationView {
                id: row.id,
                user_id: row.user_id,
                scholarship_id: row.scholarship_id,
                scholarship_name: row.scholarship_name,
                xp_earned: row.xp_earned,
                applied_at: row.applied_at,
            })
            .collect(),
    ))
}
