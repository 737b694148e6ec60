//! Scholarship listing endpoint.

use api_types::scholarship::ScholarshipView;
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<ScholarshipView>>, ServerError> {
    let scholarships = state.engine.list_scholarships().await?;

    Ok(Json(
        scholarships
            .into_iter()
            .map(|scholarship| ScholarshipView {
                id: scholarship.id,
                name: scholarship.name,
                description: scholarship.description,
                criteria: scholarship.criteria,
                reward: scholarship.reward,
            })
            .collect(),
    ))
}
